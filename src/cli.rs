//! Command-line interface for inspecting the transition contract.

use clap::{Parser, Subcommand};
use statusflow::engine::EntityKind;

/// statusflow: query the marketplace status transition tables.
#[derive(Debug, Parser)]
#[command(name = "statusflow", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Disable coloured output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Log engine decisions to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// Subcommands, one per engine query.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the entity kinds.
    Kinds,

    /// List every state of a kind, marking terminal ones.
    States {
        /// Entity kind, e.g. `order` or `wallet_transaction`.
        #[arg(value_parser = parse_kind)]
        kind: EntityKind,
    },

    /// Show the states reachable in one step.
    Next {
        /// Entity kind, e.g. `order` or `wallet_transaction`.
        #[arg(value_parser = parse_kind)]
        kind: EntityKind,
        /// Current state.
        from: String,
    },

    /// Check one transition. Exits with status 1 when it is not allowed.
    Check {
        /// Entity kind, e.g. `order` or `wallet_transaction`.
        #[arg(value_parser = parse_kind)]
        kind: EntityKind,
        /// Current state.
        from: String,
        /// Proposed state.
        to: String,
    },

    /// Show the actions a UI would offer, with labels and prompts.
    Actions {
        /// Entity kind, e.g. `order` or `wallet_transaction`.
        #[arg(value_parser = parse_kind)]
        kind: EntityKind,
        /// Current state.
        from: String,
    },

    /// Render status badges.
    Badge {
        /// State names, known or not.
        #[arg(required = true)]
        states: Vec<String>,
    },

    /// Check the tables for authoring defects. Exits with status 1 on any.
    Audit,

    /// Dump the transition tables as JSON.
    Export {
        /// Only this kind; all kinds when omitted.
        #[arg(value_parser = parse_kind)]
        kind: Option<EntityKind>,
    },
}

// Reuses the engine's tag parser so clap reports `UnknownEntityKind`.
fn parse_kind(raw: &str) -> Result<EntityKind, String> {
    raw.parse().map_err(|e| format!("{e}"))
}
