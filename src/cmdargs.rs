use clap::Parser;

/// Display the recent public activity of a GitHub user
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// Telemetry URL (disabled as default)
    #[clap(long)]
    pub telemetry_url: Option<String>,

    /// GitHub API URL (https://api.github.com as default)
    #[clap(long)]
    pub github_api_url: Option<String>,

    /// Request timeout in seconds (30 as default)
    #[clap(long)]
    pub timeout: Option<u64>,

    /// GitHub username
    pub username: Option<String>,

    /// Extra arguments, ignored
    #[clap(hide = true, multiple_values = true)]
    pub extra: Vec<String>,
}

pub fn usage() -> String {
    format!(
        "Usage: {name} <username>\nExample: {name} octocat",
        name = crate::app_info::APP_NAME
    )
}

/// Returns the username to look up, or the usage text when it is missing.
pub fn require_username(args: &Args) -> Result<String, String> {
    args.username.clone().ok_or_else(usage)
}
