//! Utility modules for todo-store.
//!
//! - [`datetime`] - Millisecond timestamps and the monotonic write clock

pub mod datetime;
