//! Obsidian document bodies. Everything here is a pure function of one note.

use ::use_cases::models::notes::BaseNote;
use ::use_cases::models::notes::IndexNote;
use ::use_cases::models::notes::VideoNote;

pub fn render_video(note: &VideoNote) -> String {
    let VideoNote { video, playlist_tag, index_link, previous_link, next_link, .. } = note;

    let navigation = [
        previous_link.as_deref().map(|previous| format!("[[{}|« Previous]]", previous)),
        Some(format!("[[{}|Back to playlist]]", index_link)),
        next_link.as_deref().map(|next| format!("[[{}|Next »]]", next)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" | ");

    format!(
        "---\n\
         title: \"{title}\"\n\
         media_link: {url}\n\
         thumbnail: {thumbnail}\n\
         duration: {duration}\n\
         playlist_index: {index}\n\
         tags:\n  - {tag}\n\
         ---\n\
         \n\
         {navigation}\n",
        title = escape(&video.metadata.title),
        url = video.url,
        thumbnail = video.metadata.thumbnail_url,
        duration = video.metadata.duration,
        index = video.metadata.playlist_index,
        tag = playlist_tag,
        navigation = navigation,
    )
}

pub fn render_index(note: &IndexNote) -> String {
    let banner = match note.thumbnail_url.as_deref() {
        Some(url) => format!(
            "thumbnail: {url}\nbanner: \"{escaped}\"\nbanner_x: 0.5\nbanner_y: 0.3\n",
            url = url,
            escaped = escape(url),
        ),
        None => String::new(),
    };

    format!("---\ntags: [playlist]\n{}---\n\n![[{}]]\n", banner, note.base_filename)
}

pub fn render_base(note: &BaseNote) -> String {
    format!(
        "filters:\n\
         \x20 and:\n\
         \x20   - file.inFolder(\"{folder}\")\n\
         properties:\n\
         \x20 note.playlist_index:\n\
         \x20   displayName: \"#\"\n\
         \x20 note.duration:\n\
         \x20   displayName: Duration\n\
         views:\n\
         \x20 - type: cards\n\
         \x20   name: Videos\n\
         \x20   order:\n\
         \x20     - file.name\n\
         \x20     - note.duration\n\
         \x20   sort:\n\
         \x20     - property: playlist_index\n\
         \x20       direction: ASC\n\
         \x20   image: note.thumbnail\n",
        folder = escape(&note.videos_folder),
    )
}

/// Double-quoted YAML scalar body.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use ::domain::FormattedDuration;
    use ::domain::Video;
    use ::domain::VideoMetadata;

    use super::*;

    fn note(previous: Option<&str>, next: Option<&str>) -> VideoNote {
        VideoNote {
            video: Video {
                id: "abc".into(),
                url: Video::watch_url("abc"),
                metadata: VideoMetadata {
                    title: r#"Say "hi" \o/"#.into(),
                    duration: FormattedDuration(Some(3725)),
                    thumbnail_url: "https://i.ytimg.com/vi/abc/hqdefault.jpg".into(),
                    playlist_index: 2,
                },
                filename: "Say hi o".into(),
            },
            playlist_tag: "playlist-Mix".into(),
            index_link: "../Mix".into(),
            previous_link: previous.map(|previous| previous.to_owned().into()),
            next_link: next.map(|next| next.to_owned().into()),
            path: ::std::path::PathBuf::from("/tmp/Mix_folder/videos/Say hi o.md").into(),
        }
    }

    #[test]
    fn video_document_carries_front_matter_and_navigation() {
        let rendered = render_video(&note(Some("First"), Some("Third")));

        assert_eq!(
            rendered,
            "---\n\
             title: \"Say \\\"hi\\\" \\\\o/\"\n\
             media_link: https://www.youtube.com/watch?v=abc\n\
             thumbnail: https://i.ytimg.com/vi/abc/hqdefault.jpg\n\
             duration: 1:02:05\n\
             playlist_index: 2\n\
             tags:\n  - playlist-Mix\n\
             ---\n\
             \n\
             [[First|« Previous]] | [[../Mix|Back to playlist]] | [[Third|Next »]]\n"
        );
    }

    #[test]
    fn edge_videos_omit_the_missing_neighbour() {
        let first = render_video(&note(None, Some("Second")));
        let last = render_video(&note(Some("Second"), None));
        let only = render_video(&note(None, None));

        assert!(first.ends_with("\n[[../Mix|Back to playlist]] | [[Second|Next »]]\n"));
        assert!(last.ends_with("\n[[Second|« Previous]] | [[../Mix|Back to playlist]]\n"));
        assert!(only.ends_with("\n\n[[../Mix|Back to playlist]]\n"));
        assert!(!first.contains("Previous"));
        assert!(!last.contains("Next"));
    }

    #[test]
    fn index_document_embeds_the_base() {
        let with_banner = IndexNote {
            thumbnail_url: Some("https://i.ytimg.com/pl.jpg".into()),
            base_filename: "Mix.base".into(),
            path: ::std::path::PathBuf::from("/tmp/Mix_folder/Mix.md").into(),
        };

        assert_eq!(
            render_index(&with_banner),
            "---\n\
             tags: [playlist]\n\
             thumbnail: https://i.ytimg.com/pl.jpg\n\
             banner: \"https://i.ytimg.com/pl.jpg\"\n\
             banner_x: 0.5\n\
             banner_y: 0.3\n\
             ---\n\
             \n\
             ![[Mix.base]]\n"
        );

        let without_banner = IndexNote { thumbnail_url: None, ..with_banner };
        assert_eq!(render_index(&without_banner), "---\ntags: [playlist]\n---\n\n![[Mix.base]]\n");
    }

    #[test]
    fn base_document_filters_on_the_videos_folder() {
        let rendered = render_base(&BaseNote {
            videos_folder: "Playlists/Mix_folder/videos".into(),
            path: ::std::path::PathBuf::from("/tmp/Mix.base").into(),
        });

        assert!(rendered.starts_with("filters:\n  and:\n    - file.inFolder(\"Playlists/Mix_folder/videos\")\n"));
        assert!(rendered.contains("    sort:\n      - property: playlist_index\n        direction: ASC\n"));
        assert!(rendered.contains("  - type: cards\n"));
        assert!(rendered.ends_with("    image: note.thumbnail\n"));
    }
}
