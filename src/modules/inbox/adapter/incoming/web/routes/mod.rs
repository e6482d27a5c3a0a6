mod admin;
mod error;
mod public;

pub use admin::*;
pub use public::*;
