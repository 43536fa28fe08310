use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use givefood_graphql::config::ServerConfig;
use givefood_graphql::graphql::schema_sdl;
use givefood_graphql::logging::setup_logging;
use givefood_graphql::server;
use tracing::info;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GraphQL server (default)
    Serve(ServeArgs),
    /// Print the GraphQL schema in SDL form
    Schema {
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Default)]
struct ServeArgs {
    #[clap(long)]
    host: Option<String>,
    #[clap(short, long)]
    port: Option<u16>,
    #[clap(long)]
    base_url: Option<String>,
    #[clap(long)]
    cors_origin: Option<String>,
    #[clap(long)]
    no_playground: bool,
}

impl ServeArgs {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(base_url) = self.base_url {
            config.givefood_base_url = base_url;
        }
        if let Some(origin) = self.cors_origin {
            config.cors_origin = Some(origin);
        }
        if self.no_playground {
            config.playground = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(args.log_level.as_deref());

    match args.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Serve(serve_args) => {
            let mut config = ServerConfig::load(args.config.as_deref())?;
            serve_args.apply(&mut config);
            serve(config).await?;
        }
        Commands::Schema { output } => {
            let sdl = schema_sdl();
            match output {
                Some(path) => {
                    fs::write(&path, sdl)?;
                    info!("Schema written to {}", path.display());
                }
                None => print!("{}", sdl),
            }
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> Result<()> {
    info!("Starting server on {}:{}", config.host, config.port);
    let handle = server::start_server(&config).await?;

    tokio::signal::ctrl_c().await?;
    info!("Received Ctrl-C");
    handle.shutdown().await
}
