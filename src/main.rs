mod cli;
mod config;
mod telemetry;
mod ui;

use std::collections::BTreeMap;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use cli::{Cli, Command};
use config::{OutputFormat, StatusflowConfig};
use statusflow::engine::{
    self, EntityKind, StateBadge, TransitionTable, available_actions, badge, is_terminal,
    next_states, validate,
};
use ui::Palette;

#[derive(Serialize)]
struct StateRow {
    state: &'static str,
    #[serde(flatten)]
    badge: StateBadge,
    terminal: bool,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    kind: EntityKind,
    from: &'a str,
    to: &'a str,
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = StatusflowConfig::load()?;
    telemetry::init(cli.verbose, &config.log_level);
    config.apply_env();

    let json = cli.json || config.format == OutputFormat::Json;
    let palette = Palette::new(config.color && !cli.no_color);
    debug!(command = ?cli.command, json, "running command");

    run(cli.command, json, &palette)
}

fn run(command: Command, json: bool, palette: &Palette) -> Result<ExitCode> {
    match command {
        Command::Kinds => {
            if json {
                print_json(&EntityKind::ALL)?;
            } else {
                for kind in EntityKind::ALL {
                    println!("{kind}");
                }
            }
        }
        Command::States { kind } => {
            let rows: Vec<StateRow> = engine::all_states(kind)
                .into_iter()
                .map(|state| StateRow {
                    state,
                    badge: badge(state),
                    terminal: is_terminal(kind, state),
                })
                .collect();
            if json {
                print_json(&rows)?;
            } else {
                for row in &rows {
                    let marker = if row.terminal {
                        palette.muted(" (terminal)")
                    } else {
                        String::new()
                    };
                    println!("{:<20} {}{marker}", row.state, palette.badge(&row.badge));
                }
            }
        }
        Command::Next { kind, from } => {
            let next = next_states(kind, &from);
            if json {
                print_json(&next)?;
            } else if next.is_empty() {
                println!("{}", palette.muted("no transitions"));
            } else {
                for state in next {
                    println!("{:<20} {}", state, palette.badge(&badge(state)));
                }
            }
        }
        Command::Check { kind, from, to } => {
            let result = validate(kind, &from, &to);
            let report = CheckReport {
                kind,
                from: &from,
                to: &to,
                allowed: result.is_ok(),
                reason: result.as_ref().err().map(ToString::to_string),
            };
            if json {
                print_json(&report)?;
            } else {
                let detail = report
                    .reason
                    .clone()
                    .unwrap_or_else(|| format!("{kind} can move from {from:?} to {to:?}"));
                println!("{}", palette.verdict(report.allowed, &detail));
            }
            if !report.allowed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Actions { kind, from } => {
            let actions = available_actions(kind, &from);
            if json {
                print_json(&actions)?;
            } else if actions.is_empty() {
                println!("{}", palette.muted("no actions"));
            } else {
                println!("{}", palette.badge(&badge(&from)));
                for action in &actions {
                    println!("{}", palette.action(action));
                }
            }
        }
        Command::Badge { states } => {
            let badges: Vec<StateBadge> = states.iter().map(|s| badge(s)).collect();
            if json {
                print_json(&badges)?;
            } else {
                for (state, badge) in states.iter().zip(&badges) {
                    println!("{:<20} {}", state, palette.badge(badge));
                }
            }
        }
        Command::Audit => {
            let defects = engine::audit();
            if json {
                print_json(&defects)?;
            } else if defects.is_empty() {
                println!("{}", palette.verdict(true, "transition tables are consistent"));
            } else {
                for defect in &defects {
                    println!("{}", palette.defect(defect));
                }
            }
            if !defects.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Export { kind } => {
            let kinds = match kind {
                Some(kind) => vec![kind],
                None => EntityKind::ALL.to_vec(),
            };
            let contract: BTreeMap<&str, &TransitionTable> = kinds
                .into_iter()
                .map(|kind| (kind.as_str(), engine::transitions_for(kind)))
                .collect();
            print_json(&contract)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
