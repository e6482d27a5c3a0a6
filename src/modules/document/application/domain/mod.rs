pub mod document;
pub mod patch;
pub mod record;
