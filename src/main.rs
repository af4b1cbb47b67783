use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::Read;
use tracing::{error, info};
use wots_plus_pubkey::{ParameterSet, PublicKeyDocument, WotsPlusPublicKey};

#[derive(Parser)]
#[command(name = "wots-pk")]
#[command(about = "Validate and inspect WOTS+ public keys", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a public key document and print its flat form
    Inspect {
        /// JSON key document, or "-" to read stdin
        input: String,

        /// Validate against a named parameter set instead of the document's own
        #[arg(short, long)]
        params: Option<ParameterSet>,

        /// Also print every chain value on its own line
        #[arg(long)]
        chains: bool,
    },

    /// List the named WOTS+ parameter sets
    Params,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            input,
            params,
            chains,
        } => {
            inspect(&input, params, chains)?;
        }
        Commands::Params => {
            list_params()?;
        }
    }

    Ok(())
}

fn inspect(input: &str, params: Option<ParameterSet>, show_chains: bool) -> Result<(), Box<dyn Error>> {
    let json = read_input(input)?;
    let doc = PublicKeyDocument::from_json(&json)?;

    let result = match params {
        Some(set) => {
            info!("Validating {} against {}", input, set);
            doc.to_public_key_with(Some(&set))
        }
        None => {
            info!("Validating {} against its recorded parameters", input);
            doc.to_public_key()
        }
    };

    let key = match result {
        Ok(key) => key,
        Err(e) => {
            error!("Public key rejected: {}", e);
            return Err(e.into());
        }
    };

    print_summary(&key, params, show_chains);
    Ok(())
}

fn print_summary(key: &WotsPlusPublicKey, params: Option<ParameterSet>, show_chains: bool) {
    println!("\nWOTS+ Public Key:");
    println!("=================");
    if let Some(set) = params {
        println!("Parameter Set: {}", set);
    }
    println!("Chains: {}", key.chain_count());
    println!("Digest Size: {} bytes", key.digest_size());
    println!("Total Size: {} bytes", key.as_flat_bytes().len());
    println!("Flat: {}", hex::encode(key.as_flat_bytes()));

    if show_chains {
        for (index, chain) in key.chains().enumerate() {
            println!("  [{:>3}] {}", index, hex::encode(chain));
        }
    }
}

fn list_params() -> Result<(), Box<dyn Error>> {
    let sets: Vec<_> = ParameterSet::ALL
        .iter()
        .map(|set| {
            let params = set.parameters();
            serde_json::json!({
                "name": set.name(),
                "chain_count": params.chain_count,
                "digest_size": params.digest_size,
                "public_key_size_bytes": params.public_key_size_bytes(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&sets)?);
    Ok(())
}

fn read_input(input: &str) -> Result<String, Box<dyn Error>> {
    if input == "-" {
        let mut json = String::new();
        std::io::stdin().read_to_string(&mut json)?;
        Ok(json)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}
