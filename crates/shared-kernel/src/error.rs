// crates/shared-kernel/src/error.rs
use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LineCounterError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LineCounterError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

impl LineCounterError {
    /// Peels off wrapping layers (`Context`, aborted scans) and returns the innermost error.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            Self::Application(ApplicationError::ScanAborted { source, .. }) => source.root(),
            other => other,
        }
    }

    /// True when the innermost error means a file was not valid UTF-8 text.
    pub fn is_decode(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::Decode { .. }))
    }

    /// True when the innermost error means a file could not be counted at all,
    /// either because it is not text or because reading it failed.
    pub fn is_unreadable(&self) -> bool {
        matches!(
            self.root(),
            Self::Infrastructure(InfrastructureError::Decode { .. } | InfrastructureError::FileRead { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, LineCounterError>;

/// The kind of filesystem object a caller expected to find at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    File,
    Directory,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid {expected} path '{path}'. Please enter a valid {expected}.")]
    InvalidPath { path: PathBuf, expected: PathKind },

    #[error("Invalid extension '{extension}': {reason}")]
    InvalidExtension { extension: String, reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Scan of '{root}' aborted after {counted} files")]
    ScanAborted {
        root: PathBuf,
        counted: usize,
        #[source]
        source: Box<LineCounterError>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("'{path}' is not valid UTF-8 text")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk '{path}': {details}")]
    Walk { path: PathBuf, details: String },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl InfrastructureError {
    /// Classifies a read failure on `path`: invalid text becomes `Decode`, anything else `FileRead`.
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            Self::Decode { path, source }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Please specify either a {first} or a {second}, not both")]
    ArgumentConflict { first: String, second: String },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for LineCounterError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LineCounterError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LineCounterError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LineCounterError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LineCounterError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
