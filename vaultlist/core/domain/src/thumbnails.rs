/// Quality tiers of the static thumbnails YouTube serves for every video, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbnailTier {
    MaxResolution,
    Standard,
    High,
}

impl ThumbnailTier {
    pub const PREFERENCE: [Self; 3] = [Self::MaxResolution, Self::Standard, Self::High];

    pub fn stem(self) -> &'static str {
        match self {
            Self::MaxResolution => "maxresdefault",
            Self::Standard => "sddefault",
            Self::High => "hqdefault",
        }
    }

    /// Recognizes the tier from the file stem of a thumbnail URL, ignoring query and extension.
    pub fn from_url(url: &str) -> Option<Self> {
        let path = url.split(['?', '#']).next()?;
        let filename = path.rsplit('/').next()?;
        let stem = filename.split('.').next()?;

        Self::PREFERENCE.into_iter().find(|tier| tier.stem() == stem)
    }

    /// Picks the best tier among the available ones, settling for [`ThumbnailTier::High`] when none is known.
    pub fn select<Tiers>(available: Tiers) -> Self
    where
        Tiers: IntoIterator<Item = Self>,
    {
        let available = available.into_iter().collect::<Vec<_>>();

        Self::PREFERENCE
            .into_iter()
            .find(|tier| available.contains(tier))
            .unwrap_or(Self::High)
    }

    pub fn url_for(self, video_id: &str) -> String {
        format!("https://i.ytimg.com/vi/{}/{}.jpg", video_id, self.stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_tiers_from_urls() {
        assert_eq!(
            ThumbnailTier::from_url("https://i.ytimg.com/vi/abc/hqdefault.jpg?sqp=-oaymwEb&rs=AOn4"),
            Some(ThumbnailTier::High)
        );
        assert_eq!(
            ThumbnailTier::from_url("https://i.ytimg.com/vi_webp/abc/maxresdefault.webp"),
            Some(ThumbnailTier::MaxResolution)
        );
        assert_eq!(ThumbnailTier::from_url("https://i.ytimg.com/vi/abc/sddefault.jpg"), Some(ThumbnailTier::Standard));
        assert_eq!(ThumbnailTier::from_url("https://i.ytimg.com/vi/abc/mqdefault.jpg"), None);
    }

    #[test]
    fn prefers_the_highest_available_tier() {
        let selected = ThumbnailTier::select([ThumbnailTier::High, ThumbnailTier::MaxResolution]);
        assert_eq!(selected, ThumbnailTier::MaxResolution);

        let selected = ThumbnailTier::select([ThumbnailTier::High, ThumbnailTier::Standard]);
        assert_eq!(selected, ThumbnailTier::Standard);
    }

    #[test]
    fn falls_back_to_high_quality_when_nothing_is_known() {
        assert_eq!(ThumbnailTier::select([]), ThumbnailTier::High);
    }

    #[test]
    fn builds_urls_from_the_video_id() {
        assert_eq!(
            ThumbnailTier::MaxResolution.url_for("dQw4w9WgXcQ"),
            "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }
}
