use crate::utils::aliases::MaybeOwnedString;
use crate::utils::lazy_regex;

/// A YouTube playlist URL that passed syntactic validation.
///
/// Three shapes are accepted: a playlist page, a watch page carrying a `list`
/// query parameter, and a `youtu.be` short link carrying a `list` query
/// parameter. Validation never touches the network, so a valid URL may still
/// point at a private or deleted playlist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistUrl(MaybeOwnedString);

impl PlaylistUrl {
    pub fn is_valid(candidate: &str) -> bool {
        static REGEX: ::once_cell::sync::Lazy<::regex::Regex> = lazy_regex!(
            r"^(?:https?://)?(?:(?:www\.|m\.|music\.)?youtube\.com/(?:playlist|watch)\?|youtu\.be/[\w-]+\?)(?:[^\s#]*&)?list=[\w-]+"
        );

        REGEX.is_match(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlaylistUrl {
    type Error = InvalidPlaylistUrl;

    fn try_from(candidate: String) -> Result<Self, Self::Error> {
        let trimmed = candidate.trim();

        if Self::is_valid(trimmed) {
            Ok(Self(trimmed.to_owned().into()))
        } else {
            Err(InvalidPlaylistUrl(candidate))
        }
    }
}

impl TryFrom<&str> for PlaylistUrl {
    type Error = InvalidPlaylistUrl;

    fn try_from(candidate: &str) -> Result<Self, Self::Error> {
        candidate.to_owned().try_into()
    }
}

impl ::std::ops::Deref for PlaylistUrl {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ::std::fmt::Display for PlaylistUrl {
    fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPlaylistUrl(pub String);

impl ::std::fmt::Display for InvalidPlaylistUrl {
    fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        if self.0.trim().is_empty() {
            write!(formatter, "Please enter a playlist URL.")
        } else {
            write!(formatter, "Not a valid YouTube playlist URL: {}", self.0.trim())
        }
    }
}

impl ::std::error::Error for InvalidPlaylistUrl {}
