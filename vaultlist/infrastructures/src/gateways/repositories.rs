use ::async_trait::async_trait;
use ::derive_new::new;
use ::domain::OutputLayout;
use ::use_cases::errors::ImportError;
use ::use_cases::gateways::NoteRepository;
use ::use_cases::gateways::Save;
use ::use_cases::models::notes::BaseNote;
use ::use_cases::models::notes::IndexNote;
use ::use_cases::models::notes::VideoNote;

use crate::gateways::templates;
use crate::utils::aliases::Fallible;

/// Writes notes as UTF-8 files, replacing whatever was there before.
#[derive(new)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemNoteRepository;

impl FilesystemNoteRepository {
    async fn write(path: &::std::path::Path, contents: String) -> Fallible<()> {
        ::tokio::fs::write(path, contents)
            .await
            .map_err(|source| ImportError::filesystem(path, source))?;

        ::tracing::debug!(path = %path.display(), "wrote note");

        Ok(())
    }

    async fn create_directory(path: &::std::path::Path) -> Fallible<()> {
        ::tokio::fs::create_dir_all(path)
            .await
            .map_err(|source| ImportError::filesystem(path, source))?;

        Ok(())
    }
}

#[async_trait]
impl NoteRepository for FilesystemNoteRepository {
    async fn prepare(self: ::std::sync::Arc<Self>, layout: &OutputLayout) -> Fallible<()> {
        Self::create_directory(&layout.videos_folder).await?;

        if let Some(base_files_directory) = layout.base_document.parent() {
            Self::create_directory(base_files_directory).await?;
        }

        ::tracing::info!(folder = %layout.main_folder.display(), "prepared playlist folders");

        Ok(())
    }
}

#[async_trait]
impl Save<VideoNote> for FilesystemNoteRepository {
    async fn save(self: ::std::sync::Arc<Self>, note: &VideoNote) -> Fallible<()> {
        Self::write(&note.path, templates::render_video(note)).await
    }
}

#[async_trait]
impl Save<IndexNote> for FilesystemNoteRepository {
    async fn save(self: ::std::sync::Arc<Self>, note: &IndexNote) -> Fallible<()> {
        Self::write(&note.path, templates::render_index(note)).await
    }
}

#[async_trait]
impl Save<BaseNote> for FilesystemNoteRepository {
    async fn save(self: ::std::sync::Arc<Self>, note: &BaseNote) -> Fallible<()> {
        Self::write(&note.path, templates::render_base(note)).await
    }
}
