mod login_admin;
mod logout_admin;
mod session;

pub use login_admin::*;
pub use logout_admin::*;
pub use session::*;
