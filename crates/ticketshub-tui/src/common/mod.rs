//! Shared helpers used across features and overlays.

pub mod role_style;
pub mod task;
pub mod text;

pub use role_style::{RoleStyle, role_style};
pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
pub use text::{format_money, mask, truncate_with_ellipsis};
