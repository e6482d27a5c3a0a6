pub const ADMIN_EMAIL: &str = "owner@example.com";
pub const ADMIN_PASSWORD: &str = "owner-password";
pub const USER_EMAIL: &str = "visitor@example.com";
pub const USER_PASSWORD: &str = "visitor-password";

/// `Authorization` header carrying `token`.
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
