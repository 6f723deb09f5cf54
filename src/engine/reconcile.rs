use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::types::EntityKind;
use super::validator;
use crate::error::TransitionError;

/// A transition the UI has shown optimistically while the backend request
/// is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransition {
    /// Correlates the optimistic change with the backend request.
    pub id: Uuid,
    pub kind: EntityKind,
    pub from: String,
    pub to: String,
    /// When the optimistic change was shown.
    pub requested_at: DateTime<Utc>,
}

/// What the UI should show once the backend has answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Reconciliation {
    /// The backend reports the requested target.
    Confirmed { state: String },
    /// The backend still reports the origin: roll the optimistic change back.
    RolledBack { restore: String },
    /// Another actor moved the entity somewhere else; show their state.
    Superseded { actual: String },
}

impl Reconciliation {
    /// The state to display. Always the backend's value.
    pub fn state(&self) -> &str {
        match self {
            Reconciliation::Confirmed { state } => state,
            Reconciliation::RolledBack { restore } => restore,
            Reconciliation::Superseded { actual } => actual,
        }
    }
}

impl PendingTransition {
    /// Record an optimistic transition. Refuses what the validator refuses.
    pub fn begin(kind: EntityKind, from: &str, to: &str) -> Result<Self, TransitionError> {
        validator::validate(kind, from, to)?;
        let pending = Self {
            id: Uuid::new_v4(),
            kind,
            from: from.to_string(),
            to: to.to_string(),
            requested_at: Utc::now(),
        };
        debug!(id = %pending.id, %kind, from, to, "optimistic transition started");
        Ok(pending)
    }

    /// Settle against the state the backend reported after the request.
    pub fn reconcile(&self, backend_state: &str) -> Reconciliation {
        if backend_state == self.to {
            Reconciliation::Confirmed {
                state: backend_state.to_string(),
            }
        } else if backend_state == self.from {
            warn!(
                id = %self.id,
                kind = %self.kind,
                from = %self.from,
                to = %self.to,
                "backend kept the original state, rolling back"
            );
            Reconciliation::RolledBack {
                restore: backend_state.to_string(),
            }
        } else {
            warn!(
                id = %self.id,
                kind = %self.kind,
                expected = %self.to,
                actual = backend_state,
                "entity moved by another actor"
            );
            Reconciliation::Superseded {
                actual: backend_state.to_string(),
            }
        }
    }

    /// Milliseconds the request has been outstanding.
    pub fn age_ms(&self) -> i64 {
        (Utc::now() - self.requested_at).num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_illegal_transitions() {
        let err = PendingTransition::begin(EntityKind::Order, "pending", "completed").unwrap_err();
        assert!(matches!(err, TransitionError::NotAllowed { .. }));
    }

    #[test]
    fn begin_records_the_intent() {
        let pending =
            PendingTransition::begin(EntityKind::WalletTransaction, "pending", "success").unwrap();
        assert_eq!(pending.from, "pending");
        assert_eq!(pending.to, "success");
        assert_eq!(pending.id.get_version_num(), 4);
        assert!(pending.age_ms() >= 0);
    }

    #[test]
    fn confirmed_when_backend_reports_target() {
        let pending = PendingTransition::begin(EntityKind::Ticket, "open", "resolved").unwrap();
        let outcome = pending.reconcile("resolved");
        assert_eq!(
            outcome,
            Reconciliation::Confirmed {
                state: "resolved".into()
            }
        );
        assert_eq!(outcome.state(), "resolved");
    }

    #[test]
    fn rolled_back_when_backend_rejects() {
        let pending =
            PendingTransition::begin(EntityKind::Worker, "test_submitted", "ready_to_work")
                .unwrap();
        let outcome = pending.reconcile("test_submitted");
        assert_eq!(
            outcome,
            Reconciliation::RolledBack {
                restore: "test_submitted".into()
            }
        );
    }

    #[test]
    fn superseded_by_concurrent_change() {
        let pending =
            PendingTransition::begin(EntityKind::Worker, "test_submitted", "ready_to_work")
                .unwrap();
        let outcome = pending.reconcile("suspended");
        assert_eq!(outcome.state(), "suspended");
        assert!(matches!(outcome, Reconciliation::Superseded { .. }));
    }

    #[test]
    fn worker_no_op_confirms_immediately() {
        let pending = PendingTransition::begin(EntityKind::Worker, "working", "working").unwrap();
        assert!(matches!(
            pending.reconcile("working"),
            Reconciliation::Confirmed { .. }
        ));
    }

    #[test]
    fn pending_transition_serializes_id_as_string() {
        let pending = PendingTransition::begin(EntityKind::Rental, "pending", "active").unwrap();
        let json = serde_json::to_value(&pending).unwrap();
        assert_eq!(json["id"], pending.id.to_string());
        assert_eq!(json["kind"], "rental");

        let restored: PendingTransition = serde_json::from_value(json).unwrap();
        assert_eq!(restored, pending);
    }

    #[test]
    fn reconciliation_serializes_tagged() {
        let json = serde_json::to_value(Reconciliation::RolledBack {
            restore: "pending".into(),
        })
        .unwrap();
        assert_eq!(json["outcome"], "rolled_back");
        assert_eq!(json["restore"], "pending");
    }
}
