//! Constants used throughout the library
//!
//! This module centralizes names and default values so that configuration,
//! storage and logging agree on them.

// Application identity
pub const APP_NAME: &str = "todo-store";
pub const CONFIG_FILE_NAME: &str = "todo-store.toml";
pub const XDG_CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "todo-store.log";

// Database defaults
pub const DEFAULT_DATABASE_NAME: &str = "todo";
pub const DATABASE_FILE_EXTENSION: &str = "db";

// Backend identifiers
pub const BACKEND_SQL: &str = "sql";
pub const BACKEND_QUERY: &str = "query";

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration";
