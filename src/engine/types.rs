use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Which lifecycle a status string belongs to.
///
/// Each kind owns an independent state space. A `pending` order and a
/// `pending` wallet transaction are unrelated states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Order,
    Rental,
    Ticket,
    Worker,
    Project,
    WalletTransaction,
}

impl EntityKind {
    /// Every kind, in a fixed order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Order,
        EntityKind::Rental,
        EntityKind::Ticket,
        EntityKind::Worker,
        EntityKind::Project,
        EntityKind::WalletTransaction,
    ];

    /// The wire tag used by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Order => "order",
            EntityKind::Rental => "rental",
            EntityKind::Ticket => "ticket",
            EntityKind::Worker => "worker",
            EntityKind::Project => "project",
            EntityKind::WalletTransaction => "wallet_transaction",
        }
    }

    /// Whether `from == to` counts as a legal no-op for this kind.
    ///
    /// Only workers allow it. Other kinds reject `from == to` unless the
    /// pair is listed in their table, and none of them list one.
    pub fn allows_self_transition(self) -> bool {
        matches!(self, EntityKind::Worker)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EngineError::UnknownEntityKind(s.to_string()))
    }
}

/// Visual category of a status badge or action button.
///
/// Semantic only. Mapping a severity to colours is the presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Neutral,
    Info,
    Warning,
    Success,
    Danger,
}

impl Severity {
    /// The five severities.
    pub const ALL: [Severity; 5] = [
        Severity::Neutral,
        Severity::Info,
        Severity::Warning,
        Severity::Success,
        Severity::Danger,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Neutral => write!(f, "neutral"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Success => write!(f, "success"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

/// Label and severity for rendering a bare state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateBadge {
    /// Display text, curated or humanized.
    pub label: String,
    pub severity: Severity,
}

/// A legal next step offered to the user, ready to render as a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionAction {
    pub from: String,
    pub to: String,
    /// Button text.
    pub label: String,
    /// Prompt for the confirmation dialog, before caller interpolation.
    pub confirm_message: String,
    /// Severity of the target state.
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_wire_tags() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
        assert_eq!(
            "wallet_transaction".parse::<EntityKind>().unwrap(),
            EntityKind::WalletTransaction
        );
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = "invoice".parse::<EntityKind>().unwrap_err();
        assert_eq!(err, EngineError::UnknownEntityKind("invoice".into()));
        assert!("Order".parse::<EntityKind>().is_err());
    }

    #[test]
    fn kind_serde_matches_display() {
        let json = serde_json::to_string(&EntityKind::WalletTransaction).unwrap();
        assert_eq!(json, "\"wallet_transaction\"");
        let kind: EntityKind = serde_json::from_str("\"ticket\"").unwrap();
        assert_eq!(kind, EntityKind::Ticket);
    }

    #[test]
    fn only_workers_allow_self_transition() {
        let allowed: Vec<_> = EntityKind::ALL
            .into_iter()
            .filter(|k| k.allows_self_transition())
            .collect();
        assert_eq!(allowed, vec![EntityKind::Worker]);
    }

    #[test]
    fn severity_serializes_lowercase() {
        for severity in Severity::ALL {
            let json = serde_json::to_string(&severity).unwrap();
            assert_eq!(json, format!("\"{severity}\""));
        }
    }
}
