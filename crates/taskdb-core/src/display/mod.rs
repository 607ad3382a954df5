//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly; the wrappers here
//! add context (row numbers, whole-table previews, edit confirmations). All
//! output is markdown, rendered by the terminal front end.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │  (Task, Table)  │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every timestamp that reaches the screen goes through [`FriendlyTime`],
//! which is the only caller of [`crate::timestamp::format_display`] in the
//! display path.
//!
//! ## Module Organization
//!
//! - [`collections`]: whole-table preview ([`Tasks`])
//! - [`results`]: edit outcomes ([`CreateResult`], [`UpdateResult`], [`DeleteResult`])
//! - [`status`]: plain confirmation messages ([`OperationStatus`])
//! - [`datetime`]: friendly timestamps ([`FriendlyTime`])
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::Tasks;
pub use datetime::FriendlyTime;
pub use models::NumberedTask;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
