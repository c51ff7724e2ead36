use ::domain::InvalidPlaylistUrl;

use crate::models::events::ImportFailure;
use crate::models::events::ImportFailureKind;

#[derive(Debug, ::thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    InvalidUrl(#[from] InvalidPlaylistUrl),

    #[error("Unable to access the playlist. It may be private, deleted, or unavailable.")]
    MetadataUnavailable,

    #[error("Could not write {}: {source}", .path.display())]
    Filesystem {
        path: ::std::path::PathBuf,
        #[source]
        source: ::std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] ::anyhow::Error),
}

impl ImportError {
    pub fn filesystem(path: impl Into<::std::path::PathBuf>, source: ::std::io::Error) -> Self {
        Self::Filesystem { path: path.into(), source }
    }

    /// Recovers the taxonomy from an error that travelled through a gateway as [`anyhow::Error`].
    pub fn classify(error: ::anyhow::Error) -> Self {
        match error.downcast::<Self>() {
            Ok(error) => error,
            Err(error) => match error.downcast::<InvalidPlaylistUrl>() {
                Ok(error) => Self::InvalidUrl(error),
                Err(error) => Self::Other(error),
            },
        }
    }

    pub fn kind(&self) -> ImportFailureKind {
        match self {
            Self::InvalidUrl(_) => ImportFailureKind::InvalidUrl,
            Self::MetadataUnavailable => ImportFailureKind::MetadataUnavailable,
            Self::Filesystem { .. } => ImportFailureKind::Filesystem,
            Self::Other(_) => ImportFailureKind::Other,
        }
    }
}

impl From<ImportError> for ImportFailure {
    fn from(error: ImportError) -> Self {
        let message = match &error {
            ImportError::Other(error) => format!("{:#}", error),
            error => error.to_string(),
        };

        Self { kind: error.kind(), message: message.into() }
    }
}
