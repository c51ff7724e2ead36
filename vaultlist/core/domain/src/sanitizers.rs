use crate::utils::lazy_regex;

const FORBIDDEN_FILENAME_CHARACTERS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Drops the characters that cannot appear in a file name on common platforms.
///
/// Everything else, whitespace included, is kept so the result still reads as the original title. That
/// includes `#`, `^`, `[` and `]`, which Obsidian reads as heading, block or link syntax, so a wikilink to
/// a title containing them resolves to the wrong target.
pub fn sanitize_filename(text: &str) -> String {
    text.chars()
        .filter(|character| !FORBIDDEN_FILENAME_CHARACTERS.contains(character))
        .collect()
}

/// Collapses every run of characters outside word characters, `-` and the Arabic block into one `-`.
///
/// Used for the playlist folder and the playlist tag, where spaces and punctuation are not welcome.
pub fn sanitize_tag(text: &str) -> String {
    static REGEX: ::once_cell::sync::Lazy<::regex::Regex> = lazy_regex!(r"[^\w\-\x{0600}-\x{06FF}]+");

    REGEX.replace_all(text, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_sanitizer_keeps_wikilink_syntax() {
        assert_eq!(sanitize_filename("Ep. #3 [live] ^a"), "Ep. #3 [live] ^a");
    }

    #[test]
    fn filename_sanitizer_strips_path_hostile_characters() {
        assert_eq!(sanitize_filename(r#"a\b/c*d?e:f"g<h>i|j"#), "abcdefghij");
        assert_eq!(sanitize_filename("Intro: Part 1 / 2"), "Intro Part 1  2");
        assert_eq!(sanitize_filename("Plain title"), "Plain title");
    }

    #[test]
    fn tag_sanitizer_collapses_runs_into_a_single_hyphen() {
        assert_eq!(sanitize_tag("My: List"), "My-List");
        assert_eq!(sanitize_tag("Rust   &&  Go!!"), "Rust-Go-");
        assert_eq!(sanitize_tag("already-fine_name"), "already-fine_name");
    }

    #[test]
    fn tag_sanitizer_keeps_arabic_text() {
        assert_eq!(sanitize_tag("دروس البرمجة"), "دروس-البرمجة");
        assert_eq!(sanitize_tag("سلسلة، الجزء"), "سلسلة،-الجزء");
    }

    #[test]
    fn tag_sanitizer_never_emits_consecutive_hyphens_from_collapsed_runs() {
        let sanitized = sanitize_tag("a :: b ?? c // d");

        assert_eq!(sanitized, "a-b-c-d");
        assert!(!sanitized.contains("--"));
    }
}
