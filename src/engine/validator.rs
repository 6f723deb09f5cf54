//! Legality checks over the registry.
//!
//! Everything here answers "may the UI offer this?". A `true` only means the
//! caller may send the request; the backend's response decides whether the
//! transition happened.

use tracing::debug;

use super::presentation::{color_category, confirm_message_for, label_for};
use super::registry::{self, StateSet};
use super::types::{EntityKind, TransitionAction};
use crate::error::TransitionError;

/// Whether `from -> to` is a legal transition for `kind`.
///
/// Unknown origins are never transitionable. Workers also accept
/// `from == to` as a no-op.
pub fn can_transition(kind: EntityKind, from: &str, to: &str) -> bool {
    validate(kind, from, to).is_ok()
}

/// Like [`can_transition`], but says why a transition is refused.
pub fn validate(kind: EntityKind, from: &str, to: &str) -> Result<(), TransitionError> {
    if from == to && kind.allows_self_transition() {
        return Ok(());
    }

    let table = registry::transitions_for(kind);
    let Some(targets) = table.get(from) else {
        debug!(%kind, from, to, "transition from unknown state refused");
        return Err(TransitionError::UnknownState {
            kind,
            state: from.to_string(),
        });
    };

    if targets.contains(to) {
        return Ok(());
    }

    debug!(%kind, from, to, "transition refused");
    if targets.is_empty() {
        Err(TransitionError::Terminal {
            kind,
            state: from.to_string(),
        })
    } else {
        Err(TransitionError::NotAllowed {
            kind,
            from: from.to_string(),
            to: to.to_string(),
            allowed: targets.iter().map(|s| s.to_string()).collect(),
        })
    }
}

/// Legal next states from `from`. Empty for terminal and unknown states.
pub fn next_states(kind: EntityKind, from: &str) -> StateSet {
    let targets = registry::targets(kind, from);
    if targets.is_empty() && !registry::is_known_state(kind, from) {
        debug!(%kind, from, "no transitions for unrecognised state");
    }
    targets.clone()
}

/// The buttons a UI surface should render for an entity in `from`.
///
/// Ordered by target state name. The worker self-transition is not offered;
/// it is a no-op, not an action.
pub fn available_actions(kind: EntityKind, from: &str) -> Vec<TransitionAction> {
    registry::targets(kind, from)
        .iter()
        .map(|&to| TransitionAction {
            from: from.to_string(),
            to: to.to_string(),
            label: label_for(kind, from, to),
            confirm_message: confirm_message_for(kind, from, to),
            severity: color_category(to),
        })
        .collect()
}
