mod presentation;
mod reconcile;
mod registry;
mod types;
mod validator;

pub use presentation::{
    badge, color_category, confirm_message_for, display_label, humanize, label_for,
};
pub use reconcile::{PendingTransition, Reconciliation};
pub use registry::{
    RegistryDefect, StateSet, TransitionTable, all_states, audit, is_known_state, is_terminal,
    terminal_states, transitions_for, transitions_for_tag,
};
pub use types::{EntityKind, Severity, StateBadge, TransitionAction};
pub use validator::{available_actions, can_transition, next_states, validate};
