use log::{debug, info, LevelFilter};
use sea_orm::sqlx::{sqlite::SqliteConnection, Connection};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, RuntimeErr};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::DatabaseConfig;
use crate::constants::{APP_NAME, DATABASE_FILE_EXTENSION};
use crate::error::StoreError;

/// Local storage manager owning the database connection
#[derive(Clone)]
pub struct LocalStorage {
    pub conn: DatabaseConnection,
    location: String,
    // Shared-cache in-memory databases vanish with their last connection
    _anchor: Option<Arc<Mutex<SqliteConnection>>>,
}

impl LocalStorage {
    /// Open (creating if absent) the database described by `config`
    pub async fn open(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let name = config.name.trim();
        if name.is_empty() {
            return Err(StoreError::Config("database name cannot be empty".to_string()));
        }

        if config.in_memory {
            Self::open_in_memory(name).await
        } else {
            let path = Self::database_path(config)?;
            Self::open_file(path).await
        }
    }

    /// Resolve the on-disk location of a named database
    pub fn database_path(config: &DatabaseConfig) -> Result<PathBuf, StoreError> {
        let directory = match &config.directory {
            Some(directory) => directory.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_NAME))
                .ok_or_else(|| StoreError::Config("could not determine data directory".to_string()))?,
        };
        Ok(directory.join(format!("{}.{}", config.name.trim(), DATABASE_FILE_EXTENSION)))
    }

    async fn open_in_memory(name: &str) -> Result<Self, StoreError> {
        // Use shared-cache in-memory SQLite database that persists for app lifetime
        let database_url = format!("sqlite:file:{}?mode=memory&cache=shared", name);

        // Anchor connection outside the pool
        let anchor = SqliteConnection::connect(&database_url)
            .await
            .map_err(|e| DbErr::Conn(RuntimeErr::SqlxError(e)))?;

        let conn = Self::connect(&database_url).await?;
        info!("Opened in-memory database '{}'", name);

        Ok(Self {
            conn,
            location: format!("memory:{}", name),
            _anchor: Some(Arc::new(Mutex::new(anchor))),
        })
    }

    async fn open_file(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let database_url = format!("sqlite://{}?mode=rwc", path.display());
        let conn = Self::connect(&database_url).await?;
        info!("Opened database file {}", path.display());

        Ok(Self {
            conn,
            location: path.display().to_string(),
            _anchor: None,
        })
    }

    async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
        debug!("Connecting to {}", database_url);

        let mut options = ConnectOptions::new(database_url.to_string());
        options
            .min_connections(1)
            .max_connections(4)
            .sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);

        Database::connect(options).await
    }

    /// Human-readable description of where the data lives
    pub fn location(&self) -> &str {
        &self.location
    }
}
