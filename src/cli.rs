use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::selection::SelectionState;
use crate::types::{Game, Tier, VariantKey};

/// trade-values - Variant values and trade checks for Roblox trading
#[derive(Parser)]
#[command(name = "trade-values")]
#[command(about = "Resolve variant values and value trade offers from an item catalog")]
#[command(version)]
pub struct Cli {
    /// Item catalog JSON (array from the item API, or `{ "items": [...] }`)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only consider items from this game (adopt_me, mm2, sab)
    #[arg(long, global = true)]
    pub game: Option<Game>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the displayed value of one item variant
    Resolve {
        /// Item id or name
        #[arg(short, long)]
        item: String,

        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Show all twelve variant values of an item
    Table {
        /// Item id or name
        #[arg(short, long)]
        item: String,
    },
    /// Value both sides of a trade offer
    Trade {
        /// Trade offer JSON file
        offer: PathBuf,
    },
    /// Load the catalog and report what it contains
    Validate,
}

/// Potion toggles, or a variant code that sets all of them at once
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Fly potion
    #[arg(short, long)]
    pub fly: bool,

    /// Ride potion
    #[arg(short, long)]
    pub ride: bool,

    /// Tier (none, neon, mega)
    #[arg(short, long, default_value = "none", conflicts_with = "variant")]
    pub tier: Tier,

    /// Variant code such as NFR or MF
    #[arg(long, conflicts_with_all = ["fly", "ride"])]
    pub variant: Option<VariantKey>,
}

impl SelectionArgs {
    pub fn selection(&self) -> SelectionState {
        match self.variant {
            Some(key) => SelectionState::from(key),
            None => SelectionState::new(self.fly, self.ride, self.tier),
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
