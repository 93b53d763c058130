//! todo-store - local persistence for a to-do list
//!
//! This library stores, queries, updates and deletes task records in an
//! embedded SQLite database. Two interchangeable backends implement the same
//! storage capability set; the [`store::TodoStore`] sits on top of whichever
//! one is configured and exposes the to-do operations to the application.
//!
//! # Modules
//!
//! * [`backend`] - Storage capability trait and the SQL / query-builder backends
//! * [`config`] - Application configuration management
//! * [`storage`] - Database connection acquisition
//! * [`store`] - The to-do store itself
//! * [`todo`] - The domain entity handed to the application

/// Backend abstraction layer with swappable storage engines
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error types surfaced by the store
pub mod error;

/// Logging setup on top of the `log` facade
pub mod logger;

/// Local storage layer owning the database connection
pub mod storage;

/// The to-do store and its operations
pub mod store;

/// Domain entity and row mapping
pub mod todo;

/// Utility functions for timestamps
pub mod utils;

pub use error::StoreError;
pub use store::TodoStore;
pub use todo::Todo;
