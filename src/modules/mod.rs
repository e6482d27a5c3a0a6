pub mod auth;
pub mod content;
pub mod document;
pub mod inbox;
pub mod media;
pub mod portfolio;
