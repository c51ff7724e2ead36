//! Directories remembered between runs.

use crate::utils::aliases::Fallible;

/// The JSON preferences file. Every field is optional; unset or empty entries fall back to defaults when
/// resolved with [`Preferences::directories`].
#[derive(Debug, Clone, PartialEq, Eq, Default, ::serde::Serialize, ::serde::Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_directory: Option<::std::path::PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_files_directory: Option<::std::path::PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_directory: Option<::std::path::PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directories {
    pub save_directory: ::std::path::PathBuf,
    pub base_files_directory: ::std::path::PathBuf,
    pub vault_directory: Option<::std::path::PathBuf>,
}

impl Preferences {
    pub const FILENAME: &'static str = ".youtube_playlist_config.json";

    pub fn default_path() -> Fallible<::std::path::PathBuf> {
        use ::anyhow::Context as _;

        let home = ::dirs::home_dir().context("unable to resolve home directory")?;

        Ok(home.join(Self::FILENAME))
    }

    /// Never fails: a missing or unreadable file means nothing was remembered yet.
    pub fn load(path: &::std::path::Path) -> Self {
        let contents = match ::std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ::std::io::ErrorKind::NotFound => return Self::default(),
            Err(error) => {
                ::tracing::warn!(path = %path.display(), %error, "could not read preferences");
                return Self::default();
            },
        };

        match ::serde_json::from_str(&contents) {
            Ok(preferences) => preferences,
            Err(error) => {
                ::tracing::warn!(path = %path.display(), %error, "ignoring corrupt preferences");
                Self::default()
            },
        }
    }

    pub fn save(&self, path: &::std::path::Path) -> Fallible<()> {
        use ::anyhow::Context as _;

        let contents = ::serde_json::to_string_pretty(self)?;

        ::std::fs::write(path, contents).with_context(|| format!("could not write {}", path.display()))?;
        ::tracing::info!(path = %path.display(), "saved preferences");

        Ok(())
    }

    /// Field-wise: anything set in `overrides` wins.
    pub fn overridden_by(self, overrides: Self) -> Self {
        Self {
            save_directory: overrides.save_directory.or(self.save_directory),
            base_files_directory: overrides.base_files_directory.or(self.base_files_directory),
            vault_directory: overrides.vault_directory.or(self.vault_directory),
        }
    }

    pub fn directories(&self, home: &::std::path::Path) -> Directories {
        let save_directory = non_empty(&self.save_directory).unwrap_or_else(|| home.to_path_buf());
        let base_files_directory = non_empty(&self.base_files_directory).unwrap_or_else(|| save_directory.clone());
        let vault_directory = non_empty(&self.vault_directory);

        Directories { save_directory, base_files_directory, vault_directory }
    }
}

impl From<Directories> for Preferences {
    fn from(directories: Directories) -> Self {
        Self {
            save_directory: Some(directories.save_directory),
            base_files_directory: Some(directories.base_files_directory),
            vault_directory: directories.vault_directory,
        }
    }
}

impl Directories {
    /// Set when the `.base` filter would hold an absolute host path, which Obsidian never matches.
    pub fn vault_warning(&self) -> Option<String> {
        match &self.vault_directory {
            None => Some(format!(
                "No vault directory configured; {} will filter on an absolute path. Pass --vault or run `vaultlist config set --vault-directory`.",
                self.base_files_directory.display()
            )),
            Some(vault_directory) if !self.save_directory.starts_with(vault_directory) => Some(format!(
                "{} is outside the vault {}; the .base file will filter on an absolute path.",
                self.save_directory.display(),
                vault_directory.display()
            )),
            Some(_) => None,
        }
    }
}

fn non_empty(path: &Option<::std::path::PathBuf>) -> Option<::std::path::PathBuf> {
    path.as_ref().filter(|path| !path.as_os_str().is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use ::std::path::Path;
    use ::std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_or_corrupt_files_load_as_defaults() {
        let directory = ::tempfile::tempdir().unwrap();

        assert_eq!(Preferences::load(&directory.path().join("absent.json")), Preferences::default());

        let corrupt = directory.path().join("corrupt.json");
        ::std::fs::write(&corrupt, "{ not json").unwrap();
        assert_eq!(Preferences::load(&corrupt), Preferences::default());
    }

    #[test]
    fn saved_preferences_load_back() {
        let directory = ::tempfile::tempdir().unwrap();
        let path = directory.path().join(Preferences::FILENAME);

        let preferences = Preferences {
            save_directory: Some(PathBuf::from("/vault/Playlists")),
            base_files_directory: None,
            vault_directory: Some(PathBuf::from("/vault")),
        };
        preferences.save(&path).unwrap();

        assert_eq!(Preferences::load(&path), preferences);

        let written = ::std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"save_directory\": \"/vault/Playlists\""));
        assert!(!written.contains("base_files_directory"));
    }

    #[test]
    fn unset_directories_fall_back_to_home_then_save_directory() {
        let home = Path::new("/home/someone");

        let defaults = Preferences::default().directories(home);
        assert_eq!(defaults.save_directory, home);
        assert_eq!(defaults.base_files_directory, home);
        assert_eq!(defaults.vault_directory, None);

        let only_save = Preferences { save_directory: Some(PathBuf::from("/notes")), ..Default::default() };
        let directories = only_save.directories(home);
        assert_eq!(directories.base_files_directory, Path::new("/notes"));

        let empty = Preferences { save_directory: Some(PathBuf::new()), ..Default::default() };
        assert_eq!(empty.directories(home).save_directory, home);
    }

    #[test]
    fn overrides_win_field_by_field() {
        let remembered = Preferences {
            save_directory: Some(PathBuf::from("/remembered")),
            base_files_directory: Some(PathBuf::from("/remembered/bases")),
            vault_directory: Some(PathBuf::from("/vault")),
        };
        let overrides = Preferences { save_directory: Some(PathBuf::from("/today")), ..Default::default() };

        let merged = remembered.overridden_by(overrides);

        assert_eq!(merged.save_directory, Some(PathBuf::from("/today")));
        assert_eq!(merged.base_files_directory, Some(PathBuf::from("/remembered/bases")));
        assert_eq!(merged.vault_directory, Some(PathBuf::from("/vault")));
    }

    #[test]
    fn warns_when_the_base_cannot_be_vault_relative() {
        let home = Path::new("/home/someone");

        let unset = Preferences { save_directory: Some(PathBuf::from("/vault/Playlists")), ..Default::default() };
        assert!(unset.directories(home).vault_warning().is_some());

        let outside = Preferences {
            save_directory: Some(PathBuf::from("/elsewhere/Playlists")),
            vault_directory: Some(PathBuf::from("/vault")),
            ..Default::default()
        };
        assert!(outside.directories(home).vault_warning().is_some());

        let inside = Preferences {
            save_directory: Some(PathBuf::from("/vault/Playlists")),
            vault_directory: Some(PathBuf::from("/vault")),
            ..Default::default()
        };
        assert_eq!(inside.directories(home).vault_warning(), None);
    }
}
