pub mod app_state_builder;
pub mod auth_helper;
pub mod fixtures;
pub mod memory_document_store;
pub mod services;
pub mod stubs;
