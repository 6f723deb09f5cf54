//! User-facing text and severities for states and transitions.
//!
//! Nothing here gates anything. Every lookup degrades to generic text built
//! from the state name, so an unrecognised pair or state never fails.

use super::types::{EntityKind, Severity, StateBadge};

/// Matches any origin state in the curated action table.
const ANY: &str = "*";

/// Curated text for one transition.
struct Wording {
    // Button text.
    label: &'static str,
    // Confirmation dialog prompt.
    confirm: &'static str,
}

const fn wording(label: &'static str, confirm: &'static str) -> Wording {
    Wording { label, confirm }
}

type Actions = &'static [(&'static str, &'static str, Wording)];

#[rustfmt::skip]
const WORKER_ACTIONS: Actions = &[
    ("applied", "screening_unlocked", wording("Unlock Screening", "Unlock screening for this applicant?")),
    ("screening_unlocked", "training_viewed", wording("Mark Training Viewed", "Mark the training material as viewed?")),
    ("screening_unlocked", "test_submitted", wording("Mark Test Submitted", "Record the screening test as submitted?")),
    ("screening_unlocked", "ready_to_work", wording("Approve Worker", "Approve this worker without a screening test?")),
    ("training_viewed", "test_submitted", wording("Mark Test Submitted", "Record the screening test as submitted?")),
    ("training_viewed", "ready_to_work", wording("Approve Worker", "Approve this worker without a screening test?")),
    ("test_submitted", "ready_to_work", wording("Approve Worker", "Approve this worker and mark them ready to work?")),
    ("test_submitted", "screening_unlocked", wording("Request Retest", "Send this worker back to screening for a retest?")),
    ("test_submitted", "failed", wording("Fail Screening", "Mark this worker's screening as failed?")),
    ("failed", "screening_unlocked", wording("Allow Retry", "Let this worker retake the screening?")),
    ("ready_to_work", "assigned", wording("Assign Project", "Assign this worker to a project?")),
    ("assigned", "working", wording("Start Work", "Mark this worker as working?")),
    ("assigned", "ready_to_work", wording("Unassign", "Remove this worker from the assignment?")),
    ("working", "ready_to_work", wording("Release Worker", "Release this worker back to the pool?")),
    ("suspended", "ready_to_work", wording("Reinstate Worker", "Reinstate this worker as ready to work?")),
    ("suspended", "screening_unlocked", wording("Reinstate to Screening", "Reinstate this worker and reopen screening?")),
    ("suspended", "applied", wording("Reset Application", "Reset this worker back to a fresh application?")),
    (ANY, "suspended", wording("Suspend Worker", "Suspend this worker?")),
];

#[rustfmt::skip]
const ORDER_ACTIONS: Actions = &[
    ("pending", "in_progress", wording("Start Order", "Start working on this order?")),
    ("in_progress", "waiting_user", wording("Request User Input", "Pause this order until the customer responds?")),
    ("in_progress", "completed", wording("Mark Completed", "Mark this order as completed?")),
    ("waiting_user", "in_progress", wording("Resume Order", "Resume work on this order?")),
    ("waiting_user", "completed", wording("Mark Completed", "Mark this order as completed?")),
    (ANY, "cancelled", wording("Cancel Order", "Cancel this order?")),
];

#[rustfmt::skip]
const RENTAL_ACTIONS: Actions = &[
    ("pending", "active", wording("Activate Rental", "Activate this rental?")),
    ("active", "expired", wording("Mark Expired", "Mark this rental as expired?")),
    ("expired", "renewed", wording("Renew Rental", "Renew this rental?")),
    (ANY, "cancelled", wording("Cancel Rental", "Cancel this rental?")),
];

#[rustfmt::skip]
const TICKET_ACTIONS: Actions = &[
    ("open", "in_progress", wording("Start Working", "Take this ticket and start working on it?")),
    ("waiting_user", "in_progress", wording("Resume Ticket", "Resume work on this ticket?")),
    (ANY, "waiting_user", wording("Await User Reply", "Wait for the user to reply on this ticket?")),
    (ANY, "resolved", wording("Resolve Ticket", "Mark this ticket as resolved?")),
    (ANY, "closed", wording("Close Ticket", "Close this ticket?")),
];

#[rustfmt::skip]
const PROJECT_ACTIONS: Actions = &[
    ("draft", "active", wording("Publish Project", "Publish this project?")),
    ("active", "assigned", wording("Assign Worker", "Assign a worker to this project?")),
    ("assigned", "in_progress", wording("Start Project", "Start work on this project?")),
    ("in_progress", "submitted", wording("Submit for Review", "Submit this project for review?")),
    ("submitted", "completed", wording("Approve", "Approve this submission and complete the project?")),
    ("submitted", "in_progress", wording("Request Changes", "Send this project back for changes?")),
];

#[rustfmt::skip]
const WALLET_ACTIONS: Actions = &[
    ("initiated", "pending", wording("Mark Pending", "Mark this transaction as pending?")),
    (ANY, "paid_unverified", wording("Mark Paid", "Mark this transaction as paid pending verification?")),
    (ANY, "success", wording("Approve", "Approve this transaction?")),
    (ANY, "failed", wording("Reject", "Reject this transaction?")),
];

// Curated wording table for `kind`.
fn actions(kind: EntityKind) -> Actions {
    match kind {
        EntityKind::Order => ORDER_ACTIONS,
        EntityKind::Rental => RENTAL_ACTIONS,
        EntityKind::Ticket => TICKET_ACTIONS,
        EntityKind::Worker => WORKER_ACTIONS,
        EntityKind::Project => PROJECT_ACTIONS,
        EntityKind::WalletTransaction => WALLET_ACTIONS,
    }
}

/// Exact pair first, then a wildcard origin.
fn curated(kind: EntityKind, from: &str, to: &str) -> Option<&'static Wording> {
    let table = actions(kind);
    table
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .or_else(|| table.iter().find(|(f, t, _)| *f == ANY && *t == to))
        .map(|(_, _, wording)| wording)
}

/// Turn `ready_to_work` into `ready to work`.
pub fn humanize(state: &str) -> String {
    state
        .split('_')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short button label for moving from `from` to `to`.
///
/// Never empty. Unlisted pairs get `"→ <target>"`.
pub fn label_for(kind: EntityKind, from: &str, to: &str) -> String {
    match curated(kind, from, to) {
        Some(wording) => wording.label.to_string(),
        None => format!("→ {}", humanize(to)),
    }
}

/// Confirmation prompt for moving from `from` to `to`.
///
/// Generic on purpose: amounts and identifiers are interpolated by the
/// caller, which holds the entity.
pub fn confirm_message_for(kind: EntityKind, from: &str, to: &str) -> String {
    match curated(kind, from, to) {
        Some(wording) => wording.confirm.to_string(),
        None => {
            let target = humanize(to);
            if target.is_empty() {
                format!("Change this {} status?", humanize(kind.as_str()))
            } else {
                format!("Change status to {target}?")
            }
        }
    }
}

/// Badge text for every state any kind uses.
const STATE_LABELS: &[(&str, &str)] = &[
    ("active", "Active"),
    ("applied", "Applied"),
    ("assigned", "Assigned"),
    ("cancelled", "Cancelled"),
    ("closed", "Closed"),
    ("completed", "Completed"),
    ("draft", "Draft"),
    ("expired", "Expired"),
    ("failed", "Failed"),
    ("in_progress", "In Progress"),
    ("initiated", "Initiated"),
    ("open", "Open"),
    ("paid_unverified", "Paid (Unverified)"),
    ("pending", "Pending"),
    ("ready_to_work", "Ready to Work"),
    ("renewed", "Renewed"),
    ("resolved", "Resolved"),
    ("screening_unlocked", "Screening Unlocked"),
    ("submitted", "Submitted"),
    ("success", "Successful"),
    ("suspended", "Suspended"),
    ("test_submitted", "Test Submitted"),
    ("training_viewed", "Training Viewed"),
    ("waiting_user", "Waiting on User"),
    ("working", "Working"),
];

/// Badge text for a bare state name.
pub fn display_label(state: &str) -> String {
    STATE_LABELS
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| humanize(state))
}

/// Badge severity for a bare state name. Unknown states are neutral.
pub fn color_category(state: &str) -> Severity {
    match state {
        "completed" | "resolved" | "success" | "ready_to_work" | "active" | "renewed" => {
            Severity::Success
        }
        "in_progress" | "open" | "assigned" | "working" | "screening_unlocked"
        | "training_viewed" | "test_submitted" | "submitted" | "initiated" => Severity::Info,
        "pending" | "waiting_user" | "paid_unverified" | "expired" | "applied" => {
            Severity::Warning
        }
        "failed" | "cancelled" | "suspended" => Severity::Danger,
        _ => Severity::Neutral,
    }
}

/// Label and severity together, for rendering a status badge.
pub fn badge(state: &str) -> StateBadge {
    StateBadge {
        label: display_label(state),
        severity: color_category(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::{all_states, transitions_for};

    #[test]
    fn humanize_splits_underscores() {
        assert_eq!(humanize("ready_to_work"), "ready to work");
        assert_eq!(humanize("open"), "open");
        assert_eq!(humanize("__odd__name_"), "odd name");
    }

    #[test]
    fn curated_labels() {
        assert_eq!(
            label_for(EntityKind::Worker, "test_submitted", "ready_to_work"),
            "Approve Worker"
        );
        assert_eq!(
            label_for(EntityKind::Order, "in_progress", "completed"),
            "Mark Completed"
        );
        assert_eq!(
            label_for(EntityKind::Project, "submitted", "completed"),
            "Approve"
        );
    }

    #[test]
    fn wildcard_origin_applies_to_every_source() {
        for from in ["applied", "working", "ready_to_work"] {
            assert_eq!(
                label_for(EntityKind::Worker, from, "suspended"),
                "Suspend Worker"
            );
        }
        assert_eq!(
            confirm_message_for(EntityKind::Order, "pending", "cancelled"),
            "Cancel this order?"
        );
    }

    #[test]
    fn exact_pair_wins_over_wildcard() {
        assert_eq!(
            label_for(EntityKind::Ticket, "waiting_user", "in_progress"),
            "Resume Ticket"
        );
        assert_eq!(
            label_for(EntityKind::Ticket, "open", "in_progress"),
            "Start Working"
        );
    }

    #[test]
    fn unlisted_pair_falls_back_to_target_name() {
        assert_eq!(
            label_for(EntityKind::Order, "cancelled", "pending"),
            "→ pending"
        );
        assert_eq!(
            label_for(EntityKind::Rental, "active", "ready_to_work"),
            "→ ready to work"
        );
        assert_eq!(
            confirm_message_for(EntityKind::Order, "cancelled", "pending"),
            "Change status to pending?"
        );
    }

    #[test]
    fn labels_never_empty() {
        let odd = ["", "_", "totally_unknown_state", "Ünïcode stàte"];
        for kind in EntityKind::ALL {
            for from in odd {
                for to in odd {
                    assert!(!label_for(kind, from, to).is_empty());
                    assert!(!confirm_message_for(kind, from, to).is_empty());
                }
            }
        }
    }

    #[test]
    fn every_legal_transition_is_curated() {
        for kind in EntityKind::ALL {
            for (from, targets) in transitions_for(kind) {
                for to in targets {
                    assert!(
                        curated(kind, from, to).is_some(),
                        "{kind}: {from} -> {to} has no curated label"
                    );
                }
            }
        }
    }

    #[test]
    fn every_known_state_has_a_display_label() {
        for kind in EntityKind::ALL {
            for state in all_states(kind) {
                assert!(
                    STATE_LABELS.iter().any(|(name, _)| *name == state),
                    "{state} has no display label"
                );
            }
        }
    }

    #[test]
    fn color_categories() {
        assert_eq!(color_category("failed"), Severity::Danger);
        assert_eq!(color_category("completed"), Severity::Success);
        assert_eq!(color_category("totally_unknown_state"), Severity::Neutral);
        assert_eq!(color_category("waiting_user"), Severity::Warning);
        assert_eq!(color_category("open"), Severity::Info);
    }

    #[test]
    fn unknown_badge_is_humanized_and_neutral() {
        assert_eq!(
            badge("awaiting_customs"),
            StateBadge {
                label: "awaiting customs".into(),
                severity: Severity::Neutral,
            }
        );
        assert_eq!(display_label("paid_unverified"), "Paid (Unverified)");
    }
}
