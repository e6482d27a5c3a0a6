mod inbox_service;

pub use inbox_service::InboxService;
