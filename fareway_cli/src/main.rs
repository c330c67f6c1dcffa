use clap::{Parser, Subcommand};
use tracing::debug;

use crate::{
    decode::DecodeArgs, generate::GenerateSubcommands, quote::QuoteArgs, route::RouteArgs,
};

mod decode;
mod generate;
mod parsers;
mod quote;
mod ride;
mod route;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an encoded polyline into coordinates
    Decode {
        #[command(flatten)]
        args: DecodeArgs,
    },
    /// Estimate the fare for a distance
    Quote {
        #[command(flatten)]
        args: QuoteArgs,
    },
    /// Measure or fetch a route, then estimate its fare
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {:?}", path);
    }

    match cli.command {
        Commands::Decode { args } => decode::run(args)?,
        Commands::Quote { args } => quote::run(args)?,
        Commands::Route { args } => route::run(args).await?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
