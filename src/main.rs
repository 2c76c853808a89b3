use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli {
    pub mod recipe;
    pub mod server;
}

/// larder - recipe discovery with AI generated recipes
#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Recipe discovery service with an AI recipe generator", long_about = None)]
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
    /// Generate a single recipe and print it as JSON
    Generate(cli::recipe::GenerateArgs),
    /// Print the seed catalog through the filter engine
    Catalog(cli::recipe::CatalogArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = larder::Config::load(cli.config.clone())?;

    larder::observability::init_observability("larder", &config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => {
            config.validate().map_err(|e| anyhow::anyhow!(e))?;
            cli::server::serve(config, host, port).await
        }
        Commands::Generate(args) => {
            config.validate().map_err(|e| anyhow::anyhow!(e))?;
            cli::recipe::generate(config, args).await
        }
        Commands::Catalog(args) => cli::recipe::catalog(config, args),
    }
}
