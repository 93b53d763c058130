//! Local storage module for todo persistence
//!
//! Opens the named SQLite database, either on disk or as a shared in-memory
//! database, and hands the connection to a backend.

pub mod db;

pub use db::LocalStorage;
