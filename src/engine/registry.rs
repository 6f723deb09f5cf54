//! The transition tables, one per [`EntityKind`].
//!
//! These mirror the backend's transition contract and are the only
//! in-process copy of it. Badges, boards and admin menus all read from
//! here. The tables are built once on first access and are never mutated.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;

use super::types::EntityKind;
use crate::error::EngineError;

/// A set of state names, ordered for stable output.
pub type StateSet = BTreeSet<&'static str>;
/// From-state to the states reachable in one step.
pub type TransitionTable = BTreeMap<&'static str, StateSet>;

type Rows = &'static [(&'static str, &'static [&'static str])];

const WORKER: Rows = &[
    ("applied", &["screening_unlocked", "suspended"]),
    (
        "screening_unlocked",
        &["training_viewed", "test_submitted", "ready_to_work", "suspended"],
    ),
    ("training_viewed", &["test_submitted", "ready_to_work", "suspended"]),
    (
        "test_submitted",
        &["ready_to_work", "screening_unlocked", "failed", "suspended"],
    ),
    ("failed", &["screening_unlocked", "suspended"]),
    ("ready_to_work", &["assigned", "suspended"]),
    ("assigned", &["working", "ready_to_work", "suspended"]),
    ("working", &["ready_to_work", "suspended"]),
    ("suspended", &["ready_to_work", "screening_unlocked", "applied"]),
];

const ORDER: Rows = &[
    ("pending", &["in_progress", "cancelled"]),
    ("in_progress", &["waiting_user", "completed", "cancelled"]),
    ("waiting_user", &["in_progress", "completed", "cancelled"]),
    ("completed", &[]),
    ("cancelled", &[]),
];

const RENTAL: Rows = &[
    ("pending", &["active", "cancelled"]),
    ("active", &["expired", "cancelled"]),
    ("expired", &["renewed"]),
    ("cancelled", &[]),
    ("renewed", &[]),
];

const TICKET: Rows = &[
    ("open", &["in_progress", "waiting_user", "resolved", "closed"]),
    ("in_progress", &["waiting_user", "resolved", "closed"]),
    ("waiting_user", &["in_progress", "resolved", "closed"]),
    ("resolved", &["closed"]),
    ("closed", &[]),
];

const PROJECT: Rows = &[
    ("draft", &["active"]),
    ("active", &["assigned"]),
    ("assigned", &["in_progress"]),
    ("in_progress", &["submitted"]),
    ("submitted", &["completed", "in_progress"]),
    ("completed", &[]),
];

const WALLET_TRANSACTION: Rows = &[
    ("initiated", &["pending", "paid_unverified", "failed"]),
    ("pending", &["paid_unverified", "success", "failed"]),
    ("paid_unverified", &["success", "failed"]),
    ("success", &[]),
    ("failed", &[]),
];

// Authored rows for `kind`.
fn rows(kind: EntityKind) -> Rows {
    match kind {
        EntityKind::Order => ORDER,
        EntityKind::Rental => RENTAL,
        EntityKind::Ticket => TICKET,
        EntityKind::Worker => WORKER,
        EntityKind::Project => PROJECT,
        EntityKind::WalletTransaction => WALLET_TRANSACTION,
    }
}

/// States each kind intends to end in. Workers never finish.
fn declared_terminals(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Order => &["completed", "cancelled"],
        EntityKind::Rental => &["cancelled", "renewed"],
        EntityKind::Ticket => &["closed"],
        EntityKind::Worker => &[],
        EntityKind::Project => &["completed"],
        EntityKind::WalletTransaction => &["success", "failed"],
    }
}

static TABLES: LazyLock<BTreeMap<EntityKind, TransitionTable>> = LazyLock::new(|| {
    EntityKind::ALL
        .into_iter()
        .map(|kind| {
            let table = rows(kind)
                .iter()
                .map(|&(from, targets)| (from, targets.iter().copied().collect()))
                .collect();
            (kind, table)
        })
        .collect()
});

static EMPTY: StateSet = BTreeSet::new();

/// The full transition table for `kind`.
pub fn transitions_for(kind: EntityKind) -> &'static TransitionTable {
    // Every kind is inserted when TABLES is built.
    &TABLES[&kind]
}

/// Like [`transitions_for`], for a kind tag that has not been parsed yet.
pub fn transitions_for_tag(tag: &str) -> Result<&'static TransitionTable, EngineError> {
    let kind: EntityKind = tag.parse()?;
    Ok(transitions_for(kind))
}

/// Legal next states from `from`, or an empty set if `from` is not a key.
pub(crate) fn targets(kind: EntityKind, from: &str) -> &'static StateSet {
    transitions_for(kind).get(from).unwrap_or(&EMPTY)
}

/// Every state that appears in the kind's table, as a key or as a target.
pub fn all_states(kind: EntityKind) -> StateSet {
    let table = transitions_for(kind);
    table
        .iter()
        .flat_map(|(from, targets)| std::iter::once(*from).chain(targets.iter().copied()))
        .collect()
}

/// Whether `state` belongs to the kind's vocabulary.
///
/// Use this to vet status strings coming back from the backend before
/// treating them as known.
pub fn is_known_state(kind: EntityKind, state: &str) -> bool {
    let table = transitions_for(kind);
    table.contains_key(state) || table.values().any(|targets| targets.contains(state))
}

/// The states this kind is meant to end in.
pub fn terminal_states(kind: EntityKind) -> StateSet {
    declared_terminals(kind).iter().copied().collect()
}

/// A known state with no outgoing transitions.
pub fn is_terminal(kind: EntityKind, state: &str) -> bool {
    transitions_for(kind)
        .get(state)
        .is_some_and(|targets| targets.is_empty())
}

/// A data-authoring mistake found by [`audit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "defect", rename_all = "snake_case")]
pub enum RegistryDefect {
    #[error("{kind}: {state:?} has no exits but is not declared terminal")]
    DeadEnd { kind: EntityKind, state: String },

    #[error("{kind}: {state:?} is declared terminal but has exits")]
    TerminalWithExits { kind: EntityKind, state: String },

    #[error("{kind}: {state:?} is declared terminal but never appears in the table")]
    UnknownTerminal { kind: EntityKind, state: String },
}

/// Check every table against its declared terminal states.
pub fn audit() -> Vec<RegistryDefect> {
    EntityKind::ALL
        .into_iter()
        .flat_map(|kind| audit_table(kind, transitions_for(kind), declared_terminals(kind)))
        .collect()
}

pub(crate) fn audit_table(
    kind: EntityKind,
    table: &TransitionTable,
    terminals: &[&str],
) -> Vec<RegistryDefect> {
    let mut defects = Vec::new();

    let states: BTreeSet<&str> = table
        .iter()
        .flat_map(|(from, targets)| std::iter::once(*from).chain(targets.iter().copied()))
        .collect();

    for state in &states {
        let exits = table.get(*state).map_or(0, BTreeSet::len);
        let declared = terminals.contains(state);
        if exits == 0 && !declared {
            defects.push(RegistryDefect::DeadEnd {
                kind,
                state: state.to_string(),
            });
        } else if exits > 0 && declared {
            defects.push(RegistryDefect::TerminalWithExits {
                kind,
                state: state.to_string(),
            });
        }
    }

    for terminal in terminals {
        if !states.contains(*terminal) {
            defects.push(RegistryDefect::UnknownTerminal {
                kind,
                state: terminal.to_string(),
            });
        }
    }

    defects
}
