use std::path::PathBuf;
use thiserror::Error;

/// Error types for remote transfer failures.
///
/// Every failure mode of one fetch (connect, handshake, authenticate, open,
/// read) surfaces as one of these variants with the underlying cause
/// attached. The transfer client performs no retries; the scheduler's next
/// tick is the retry.
#[derive(Error, Debug)]
pub enum TransferError {
    /// TCP connection to the remote host failed (refused, unreachable, timeout).
    #[error("TCP connect to {addr} failed: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// SSH handshake or SFTP subsystem setup failed.
    #[error("SSH session with {host} failed: {source}")]
    Handshake {
        host: String,
        #[source]
        source: ssh2::Error,
    },

    /// Key-based authentication was rejected.
    #[error("authentication rejected for user {username}: {source}")]
    Auth {
        username: String,
        #[source]
        source: ssh2::Error,
    },

    /// The remote path could not be opened.
    #[error("remote path {path} not found: {source}")]
    NotFound {
        path: String,
        #[source]
        source: ssh2::Error,
    },

    /// Reading the remote file's contents failed mid-transfer.
    #[error("reading remote file {path} failed: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The fetched bytes are not valid UTF-8 and cannot be stored as text.
    #[error("remote payload is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The blocking transfer task panicked or was cancelled.
    #[error("transfer task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Error types for store operations.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Error creating the database file.
    #[error("database file creation error: {0}")]
    FileCreation(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
}

/// Error types for the CSV export's payload interpretation.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The stored payload is not syntactically valid JSON.
    #[error("stored payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The payload parsed, but has no tabular rendering.
    #[error("stored payload is not tabular: {0}")]
    NotTabular(&'static str),
}

/// Composite error for one import cycle.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The fetch failed; nothing was written to the store.
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// The fetch succeeded but the append failed; the payload was discarded.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Composite error for one export call.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Reading the latest record failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// The stored payload has no rendering in the requested format.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Writing the output file failed.
    #[error("writing export file failed: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer reported an error.
    #[error("writing CSV output failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Error types for startup configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("required environment variable {0} is missing or empty")]
    MissingVar(&'static str),

    /// An environment variable is set but unusable.
    #[error("environment variable {name} is invalid: {reason}")]
    InvalidVar { name: &'static str, reason: String },

    /// The private key file could not be read.
    #[error("failed to read private key {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
