pub mod bootstrap_admin;
pub mod login_admin;
pub mod logout_admin;

pub use bootstrap_admin::BootstrapAdminService;
pub use login_admin::LoginAdminService;
pub use logout_admin::LogoutService;
