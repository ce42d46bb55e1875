use clap::Parser;
use infrastructure::config::Config;
use presentation::cli::{Cli, CliApp};
use shared::telemetry::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut app = CliApp::new(Config::load());
    if let Err(err) = app.run(cli).await {
        tracing::error!("Command failed: {err:?}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}
