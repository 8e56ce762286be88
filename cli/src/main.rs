use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;
use wordaxis_core::{DEFAULT_SET_SLUG, WORD_SETS};

mod play;
mod store;

#[derive(Parser)]
#[command(name = "wordaxis", version, about = "Daily word-arrangement puzzle for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzles
    Play {
        /// Word set to start from
        #[arg(long, default_value = DEFAULT_SET_SLUG)]
        set: String,
        /// Shuffle seed (decimal or 0x-prefixed hex); random if omitted
        #[arg(long)]
        seed: Option<String>,
        #[arg(long, env = "WORDAXIS_STORE_PATH")]
        store_path: Option<PathBuf>,
    },
    /// List the available word sets
    Sets {
        #[arg(long)]
        json: bool,
    },
    /// Show when the puzzles were last completed
    Status {
        #[arg(long, env = "WORDAXIS_STORE_PATH")]
        store_path: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            set,
            seed,
            store_path,
        } => {
            let seed = match seed.as_deref() {
                Some(raw) => parse_seed_arg(raw)?,
                None => rand::random(),
            };
            play::run(&set, seed, store::resolve_path(store_path))
        }
        Commands::Sets { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(WORD_SETS)?);
            } else {
                for set in WORD_SETS {
                    println!("  {} ({})", set.slug, set.label);
                }
            }
            Ok(())
        }
        Commands::Status { store_path } => {
            let file_store = store::FileStore::new(store::resolve_path(store_path));
            match file_store.load() {
                Some(record) => println!("last played: {}", record.last_played),
                None => println!("no completed run recorded"),
            }
            Ok(())
        }
    }
}

fn parse_seed_arg(raw: &str) -> Result<u32, Box<dyn std::error::Error>> {
    let trimmed = raw.trim();
    let value = if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)?
    } else {
        trimmed.parse::<u32>()?
    };
    Ok(value)
}
