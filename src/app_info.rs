pub const APP_NAME: &str = "ghactivity";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Value of the `User-Agent` header sent to the GitHub API.
pub fn user_agent() -> String {
    format!("{APP_NAME}/{APP_VERSION}")
}
