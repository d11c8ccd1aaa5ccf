use anyhow::Result;
use clap::Parser;

mod cli;
mod generate_cmd;
mod output;
mod store_cmds;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (output to stderr, initialize only once)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Generate {
            request,
            constraints,
            no_store,
        } => generate_cmd::generate(&request, constraints, &cli.config, no_store, format).await,
        Commands::Regenerate {
            id,
            constraints,
            no_store,
        } => generate_cmd::regenerate(&id, constraints, &cli.config, no_store, format).await,
        Commands::Show { id } => store_cmds::show(&id, format),
        Commands::List => store_cmds::list(format),
        Commands::Delete { id } => store_cmds::delete(&id, format),
        Commands::Validate { file } => store_cmds::validate(&file, format),
        Commands::Stats => store_cmds::stats(format),
    }
}
