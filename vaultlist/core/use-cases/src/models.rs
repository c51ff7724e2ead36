pub mod descriptors {
    use crate::models::events::DiagnosticEvent;
    use crate::utils::aliases::MaybeOwnedString;

    /// Playlist metadata exactly as the source reported it. Nothing here is guaranteed to be present.
    #[derive(::bon::Builder)]
    #[builder(on(_, into))]
    #[derive(Debug, Clone, Default)]
    pub struct RawPlaylist {
        pub title: Option<MaybeOwnedString>,
        pub thumbnail_url: Option<MaybeOwnedString>,

        /// `None` when the source returned no entries collection at all; `None` items are holes.
        pub entries: Option<Vec<Option<RawVideo>>>,
    }

    #[derive(::bon::Builder)]
    #[builder(on(_, into))]
    #[derive(Debug, Clone, Default)]
    pub struct RawVideo {
        pub id: Option<MaybeOwnedString>,
        pub title: Option<MaybeOwnedString>,
        pub duration: Option<u64>,

        #[builder(default)]
        pub thumbnail_urls: Vec<MaybeOwnedString>,
    }

    #[derive(Debug, Default)]
    pub struct Extraction {
        pub playlist: Option<RawPlaylist>,
        pub diagnostics: Vec<DiagnosticEvent>,
    }
}

pub mod notes {
    use ::domain::Video;

    use crate::utils::aliases::MaybeOwnedPath;
    use crate::utils::aliases::MaybeOwnedString;

    /// One video's document, already linked to its neighbours.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct VideoNote {
        pub video: Video,

        pub playlist_tag: MaybeOwnedString,

        /// Link targets, relative to the videos folder.
        pub index_link: MaybeOwnedString,
        pub previous_link: Option<MaybeOwnedString>,
        pub next_link: Option<MaybeOwnedString>,

        pub path: MaybeOwnedPath,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct IndexNote {
        pub thumbnail_url: Option<MaybeOwnedString>,
        pub base_filename: MaybeOwnedString,

        pub path: MaybeOwnedPath,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BaseNote {
        pub videos_folder: MaybeOwnedString,

        pub path: MaybeOwnedPath,
    }
}

pub mod events {
    use crate::utils::aliases::MaybeOwnedPath;
    use crate::utils::aliases::MaybeOwnedString;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ImportProgressEvent {
        PhaseStarted(ImportPhase),
        PercentageUpdated(ImportPercentageUpdatedEvent),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ImportPhase {
        ValidatingUrl,
        ExtractingPlaylist,
        CreatingFolders,
        CreatingDocuments,
        ProcessingVideo { current: usize, total: usize },
    }

    impl ::std::fmt::Display for ImportPhase {
        fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            match self {
                Self::ValidatingUrl => write!(formatter, "Validating playlist URL..."),
                Self::ExtractingPlaylist => write!(formatter, "Extracting playlist information..."),
                Self::CreatingFolders => write!(formatter, "Creating folders..."),
                Self::CreatingDocuments => write!(formatter, "Creating markdown files..."),
                Self::ProcessingVideo { current, total } => write!(formatter, "Processing video {}/{}...", current, total),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ImportPercentageUpdatedEvent {
        pub percentage: u8,

        pub completed: usize,
        pub total: usize,
    }

    impl ImportPercentageUpdatedEvent {
        pub fn new(completed: usize, total: usize) -> Self {
            let percentage = match total {
                0 => 0,
                total => (completed.min(total) * 100 / total) as u8,
            };

            Self { percentage, completed, total }
        }

        pub fn finished(total: usize) -> Self {
            Self { percentage: 100, completed: total, total }
        }
    }

    /// The single terminal event of an import.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ImportOutcome {
        Succeeded(ImportSummary),
        Failed(ImportFailure),
    }

    impl ImportOutcome {
        pub fn is_success(&self) -> bool {
            matches!(self, Self::Succeeded(_))
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ImportSummary {
        pub message: MaybeOwnedString,

        pub main_folder: MaybeOwnedPath,
        pub index_document: MaybeOwnedPath,
        pub base_document: MaybeOwnedPath,

        pub processed_videos: usize,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ImportFailure {
        pub kind: ImportFailureKind,
        pub message: MaybeOwnedString,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ImportFailureKind {
        InvalidUrl,
        MetadataUnavailable,
        Filesystem,
        Other,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DiagnosticEvent {
        pub level: DiagnosticLevel,
        pub message: MaybeOwnedString,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DiagnosticLevel {
        Warning,
        Error,
    }
}
