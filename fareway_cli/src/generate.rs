use std::path::PathBuf;

use clap::Subcommand;
use fareway_fare::{FareQuote, RideConfiguration};
use schemars::schema_for;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        /// Output file for the schema
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "RideConfiguration": schema_for!(RideConfiguration),
        "FareQuote": schema_for!(FareQuote),
    }))
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = generate_json_schema()?;

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
    }

    Ok(())
}
