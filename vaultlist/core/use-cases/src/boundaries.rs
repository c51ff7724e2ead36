use ::async_trait::async_trait;

use crate::models::events::DiagnosticEvent;
use crate::models::events::ImportOutcome;
use crate::models::events::ImportProgressEvent;
use crate::utils::aliases::Fallible;

#[async_trait]
pub trait Accept<Request>: Send + Sync {
    type Response;

    async fn accept(self: ::std::sync::Arc<Self>, request: Request) -> Fallible<Self::Response>;
}

#[async_trait]
pub trait Activate: Send + Sync {
    async fn activate(self: ::std::sync::Arc<Self>) -> Fallible<()>;
    async fn deactivate(self: ::std::sync::Arc<Self>) -> Fallible<()>;
}

#[async_trait]
pub trait Update<Event: Send + Sync>: Send + Sync {
    async fn update(self: ::std::sync::Arc<Self>, event: &Event) -> Fallible<()>;
}

pub trait ImportPlaylistOutputBoundary:
    Activate + Update<ImportProgressEvent> + Update<DiagnosticEvent> + Update<ImportOutcome>
{
}

impl<View> ImportPlaylistOutputBoundary for View where
    View: Activate + Update<ImportProgressEvent> + Update<DiagnosticEvent> + Update<ImportOutcome>
{
}

/// Everything one import needs. Directories come from the caller's preferences and are only read.
#[derive(::bon::Builder)]
#[builder(on(_, into))]
#[derive(Debug, Clone)]
pub struct ImportPlaylistRequestModel {
    pub url: String,

    pub save_directory: ::std::path::PathBuf,
    pub base_files_directory: ::std::path::PathBuf,

    /// Stripped from the videos folder path written into the base document.
    pub vault_directory: Option<::std::path::PathBuf>,
}
