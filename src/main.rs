use anyhow::Result;
use clap::{Parser, Subcommand};

/// homeservice - contact form backend for the Home Service Rostov site
#[derive(Parser)]
#[command(name = "homeservice")]
#[command(about = "Serves the Home Service Rostov site and relays its contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load and validate the configuration, then print a summary
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = homeservice::config::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    match cli.command {
        Commands::Serve { host, port } => {
            homeservice::observability::init_observability(
                "homeservice",
                env!("CARGO_PKG_VERSION"),
                &config.logging,
            )?;

            homeservice::cli::serve(config, host, port).await
        }
        Commands::Check => {
            println!("{}", homeservice::cli::summary(&config));
            Ok(())
        }
    }
}
