use std::time::Duration;

use clap::Parser;

use ghactivity::activity::activity_output;
use ghactivity::cmdargs::{require_username, Args};
use ghactivity::config::{Config, ConfigError};
use ghactivity::error::ErrorCode;
use ghactivity::logging::TracingSetup;
use ghactivity::service::ServiceHandler;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> color_eyre::Result<()> {
    dotenv::dotenv().ok();
    color_eyre::install().ok();

    let args = Args::parse();
    let username = match require_username(&args) {
        Ok(username) => username,
        Err(usage) => {
            println!("{}", usage);
            std::process::exit(1);
        }
    };

    let config = build_configuration(&args)?;

    TracingSetup::with_setup(config, |config| async move {
        let output = match ServiceHandler::new_defaults(&config) {
            Ok(services) => activity_output(&services, &username).await,
            Err(e) => format!("{}\n", ErrorCode::from(e)),
        };
        print!("{}", output);

        Ok(())
    })
    .await
}

fn build_configuration(args: &Args) -> Result<Config, ConfigError> {
    let mut config = Config::from_env()?;

    if let Some(u) = &args.github_api_url {
        config.set_github_api_url(u.clone());
    }

    if let Some(t) = &args.telemetry_url {
        config.set_telemetry_url(t.clone());
    }

    if let Some(t) = args.timeout {
        config.set_request_timeout(Duration::from_secs(t));
    }

    config.validate_configuration().map(|_| config)
}
