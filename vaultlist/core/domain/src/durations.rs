/// A video length in whole seconds, rendered as `H:MM:SS`, `M:SS` or `N/A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormattedDuration(pub Option<u64>);

impl FormattedDuration {
    pub const UNAVAILABLE: &'static str = "N/A";
}

impl ::std::ops::Deref for FormattedDuration {
    type Target = Option<u64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Option<u64>> for FormattedDuration {
    fn from(seconds: Option<u64>) -> Self {
        Self(seconds)
    }
}

impl ::std::fmt::Display for FormattedDuration {
    fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let Some(total) = self.0 else {
            return write!(formatter, "{}", Self::UNAVAILABLE);
        };

        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;

        if hours > 0 {
            write!(formatter, "{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            write!(formatter, "{}:{:02}", minutes, seconds)
        }
    }
}
