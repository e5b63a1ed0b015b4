use thiserror::Error;

/// Failure to fetch or parse the résumé document. Always fatal to bootstrap.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error! status: {status} ({path})")]
    Status { path: String, status: u16 },

    #[error("failed to parse résumé data from {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// The configured document path this failure refers to.
    pub fn path(&self) -> &str {
        match self {
            LoadError::Status { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Transport { path, .. }
            | LoadError::Io { path, .. } => path,
        }
    }
}

/// Failure reading or writing the persisted theme preference.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("theme store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("theme store encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Application-level error type.
///
/// Only `Load` is fatal. Every other variant describes a condition the page
/// degrades around: it is logged through `report` and the UI stays as it was.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("no template for section '{0}'")]
    UnknownTemplate(String),

    #[error("no skill category '{0}'")]
    UnknownCategory(String),

    #[error("missing mount point '#{0}'")]
    MissingMount(String),

    #[error("theme could not be persisted: {0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Load(_))
    }

    /// Stable machine-readable code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Load(_) => "LOAD_ERROR",
            AppError::UnknownTemplate(_) => "UNKNOWN_TEMPLATE",
            AppError::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            AppError::MissingMount(_) => "MISSING_MOUNT",
            AppError::Store(_) => "STORE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Logs the error at a level matching its severity.
    pub fn report(&self) {
        match self {
            AppError::Load(e) => tracing::error!(code = self.code(), "Could not load resume data: {e}"),
            AppError::Internal(e) => tracing::error!(code = self.code(), "Internal error: {e:?}"),
            AppError::Store(e) => tracing::warn!(code = self.code(), "{e}"),
            other => tracing::warn!(code = other.code(), "Ignored: {other}"),
        }
    }
}
