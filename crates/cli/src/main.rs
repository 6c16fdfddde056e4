//! Curls CLI - Special-order pricing tools.
//!
//! # Usage
//!
//! ```bash
//! # Price a 16" straight wig with double drawn
//! curls-cli quote --texture straight --length 16 --double-drawn
//!
//! # Price a 22" water wave wig with highlights
//! curls-cli quote -t water_wave -l 22 --highlight
//!
//! # Print the published price list
//! curls-cli price-table
//! ```
//!
//! # Commands
//!
//! - `quote` - Price one special-order configuration
//! - `price-table` - Print the special-order price list

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use curls_core::Texture;

mod commands;

#[derive(Parser)]
#[command(name = "curls-cli")]
#[command(author, version, about = "Curls special-order pricing tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a special-order configuration
    Quote {
        /// Hair texture (`straight`, `body_wave`, `water_wave`, `kinky`)
        #[arg(short, long)]
        texture: Texture,

        /// Length in inches
        #[arg(short, long)]
        length: u32,

        /// Add the double-drawn option (priced for straight only)
        #[arg(long)]
        double_drawn: bool,

        /// Add the highlight colour option
        #[arg(long)]
        highlight: bool,
    },
    /// Print the special-order price list
    PriceTable,
}

fn main() {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "curls_cli=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Quote {
            texture,
            length,
            double_drawn,
            highlight,
        } => commands::quote::run(texture, length, double_drawn, highlight),
        Commands::PriceTable => commands::price_table::run(),
    }
}
