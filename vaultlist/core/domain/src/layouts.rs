use crate::utils::aliases::MaybeOwnedPath;

/// Where one playlist's documents land.
///
/// A pure function of the playlist name and the two configured directories; nothing here touches the
/// filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub main_folder: MaybeOwnedPath,
    pub videos_folder: MaybeOwnedPath,
    pub index_document: MaybeOwnedPath,
    pub base_document: MaybeOwnedPath,
}

impl OutputLayout {
    pub fn derive(name: &str, save_directory: &::std::path::Path, base_files_directory: &::std::path::Path) -> Self {
        let main_folder = save_directory.join(format!("{}_folder", name));
        let videos_folder = main_folder.join("videos");
        let index_document = main_folder.join(format!("{}.md", name));
        let base_document = base_files_directory.join(format!("{}.base", name));

        Self {
            main_folder: main_folder.into(),
            videos_folder: videos_folder.into(),
            index_document: index_document.into(),
            base_document: base_document.into(),
        }
    }

    pub fn video_document(&self, filename: &str) -> ::std::path::PathBuf {
        self.videos_folder.join(format!("{}.md", filename))
    }

    pub fn base_filename(&self) -> ::std::borrow::Cow<'_, str> {
        self.base_document
            .file_name()
            .map(|filename| filename.to_string_lossy())
            .unwrap_or_default()
    }

    /// The videos folder as Obsidian sees it: relative to the vault when it lives inside it, `/`-separated.
    pub fn vault_relative_videos_folder(&self, vault_directory: Option<&::std::path::Path>) -> String {
        match vault_directory.and_then(|vault_directory| self.videos_folder.strip_prefix(vault_directory).ok()) {
            Some(relative) => relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            None => self.videos_folder.to_string_lossy().replace('\\', "/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_every_path_from_the_playlist_name() {
        let layout = OutputLayout::derive(
            "My-List",
            ::std::path::Path::new("/notes/youtube"),
            ::std::path::Path::new("/notes/bases"),
        );

        assert_eq!(&*layout.main_folder, ::std::path::Path::new("/notes/youtube/My-List_folder"));
        assert_eq!(&*layout.videos_folder, ::std::path::Path::new("/notes/youtube/My-List_folder/videos"));
        assert_eq!(&*layout.index_document, ::std::path::Path::new("/notes/youtube/My-List_folder/My-List.md"));
        assert_eq!(&*layout.base_document, ::std::path::Path::new("/notes/bases/My-List.base"));
        assert_eq!(layout.base_filename(), "My-List.base");
        assert_eq!(
            layout.video_document("One"),
            ::std::path::PathBuf::from("/notes/youtube/My-List_folder/videos/One.md")
        );
    }

    #[test]
    fn strips_the_vault_prefix_when_present() {
        let layout = OutputLayout::derive(
            "My-List",
            ::std::path::Path::new("/vault/youtube"),
            ::std::path::Path::new("/vault/bases"),
        );

        assert_eq!(
            layout.vault_relative_videos_folder(Some(::std::path::Path::new("/vault"))),
            "youtube/My-List_folder/videos"
        );
        assert_eq!(
            layout.vault_relative_videos_folder(Some(::std::path::Path::new("/elsewhere"))),
            "/vault/youtube/My-List_folder/videos"
        );
        assert_eq!(layout.vault_relative_videos_folder(None), "/vault/youtube/My-List_folder/videos");
    }
}
