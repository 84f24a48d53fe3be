//! cfapps - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use cfapps::{run_list_command, CfClient, Cli, ListOptions, TargetResolver};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting cfapps v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: api={:?}, variant={}, columns={:?}, docker_only={}, output={}",
        cli.api, cli.variant, cli.columns, cli.docker_only, cli.output
    );

    let target = match TargetResolver::new().resolve(cli.api.as_deref(), cli.token.as_deref()) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = CfClient::new(target.endpoint, target.token);
    let options = ListOptions::from(&cli);

    let mut stdout = std::io::stdout().lock();
    match run_list_command(&client, &options, &mut stdout).await {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            ExitCode::FAILURE
        }
    }
}
