use clap::Parser;
use std::process::ExitCode;
use vc_assign::adapters::http::{IdentityClient, ProviderClient};
use vc_assign::adapters::interactive::{FixedDelay, StdinConfirmation};
use vc_assign::utils::{logger, validation::Validate};
use vc_assign::{AssignEngine, CliConfig, Endpoints};

#[tokio::main]
async fn main() -> ExitCode {
    let config = CliConfig::parse();

    let log_path = logger::default_log_path();
    let _guard = match logger::init_logger(&log_path) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("❌ Failed to open log file {}: {}", log_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Run failed: {:#}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
    // _guard drops here, flushing the log file on every exit path
}

async fn run(config: CliConfig) -> anyhow::Result<()> {
    let target = config.target()?;
    let endpoints = Endpoints::from_env()?;

    let telephony = ProviderClient::new(endpoints.api.clone(), endpoints.auth_token.clone());
    let identity = IdentityClient::new(endpoints.identity.clone(), endpoints.auth_token.clone());

    let engine = AssignEngine::new(
        telephony,
        identity,
        StdinConfirmation,
        FixedDelay::default(),
        target,
    );
    engine.run().await?;
    Ok(())
}
