//! Status transition engine for marketplace entities.
//!
//! Orders, rentals, support tickets, workers, projects and wallet
//! transactions each follow a fixed lifecycle owned by the backend. This
//! crate mirrors those lifecycles so UI surfaces can decide which actions to
//! offer, how to label them, and how to colour a status badge, without a
//! round-trip. It never changes state itself.
//!
//! ```
//! use statusflow::engine::{EntityKind, can_transition, label_for};
//!
//! assert!(can_transition(EntityKind::Order, "pending", "in_progress"));
//! assert_eq!(
//!     label_for(EntityKind::Project, "submitted", "completed"),
//!     "Approve"
//! );
//! ```

pub mod engine;
pub mod error;

pub use error::{EngineError, TransitionError};
