use thiserror::Error;

use crate::engine::EntityKind;

/// Programmer errors raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Unknown entity kind: {0:?}")]
    UnknownEntityKind(String),
}

/// Why a proposed transition was refused.
///
/// None of these are fatal: they describe what the UI must not offer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{kind} has no state named {state:?}")]
    UnknownState { kind: EntityKind, state: String },

    #[error("{kind} state {state:?} is terminal")]
    Terminal { kind: EntityKind, state: String },

    #[error("{kind} cannot move from {from:?} to {to:?} (allowed: {})", allowed.join(", "))]
    NotAllowed {
        kind: EntityKind,
        from: String,
        to: String,
        allowed: Vec<String>,
    },
}
