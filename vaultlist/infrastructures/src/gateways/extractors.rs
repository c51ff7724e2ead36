use ::async_trait::async_trait;
use ::domain::PlaylistUrl;
use ::futures::prelude::*;
use ::use_cases::gateways::PlaylistExtractor;
use ::use_cases::models::descriptors::Extraction;
use ::use_cases::models::descriptors::RawPlaylist;
use ::use_cases::models::descriptors::RawVideo;
use ::use_cases::models::events::DiagnosticEvent;
use ::use_cases::models::events::DiagnosticLevel;

use crate::utils::aliases::BoxedStream;
use crate::utils::aliases::Fallible;
use crate::utils::aliases::MaybeOwnedPath;
use crate::utils::aliases::MaybeOwnedString;

/// Reads playlist metadata by running `yt-dlp` once in flat-playlist mode.
#[derive(::bon::Builder)]
#[builder(on(_, into))]
pub struct YtdlpExtractor {
    program: MaybeOwnedPath,
}

impl YtdlpExtractor {
    pub const DEFAULT_PROGRAM: &'static str = "yt-dlp";
}

#[async_trait]
impl PlaylistExtractor for YtdlpExtractor {
    async fn extract(self: ::std::sync::Arc<Self>, url: PlaylistUrl) -> Fallible<Extraction> {
        use ::anyhow::Context as _;

        #[rustfmt::skip]
        let YtdlpProcess { mut child, stdout, stderr } = YtdlpProcess::spawn(&self.program, [
            "--flat-playlist",
            "--dump-single-json",
            "--ignore-errors",
            "--color", "no_color",
            url.as_str(),
        ])?;

        let (stdout, mut diagnostics) = ::tokio::join!(
            stdout.collect::<Vec<_>>().boxed(),
            stderr
                .filter_map(|line| async move { DiagnosticEvent::from_line(line) })
                .collect::<Vec<_>>()
                .boxed(),
        );

        let status = child.wait().await.context("could not wait for yt-dlp")?;
        let playlist = RawPlaylist::from_output(&stdout.join("\n"));

        if !status.success() {
            diagnostics.push(DiagnosticEvent::from_exit(status, playlist.is_some()));
        }

        for DiagnosticEvent { level, message } in &diagnostics {
            ::tracing::warn!(?level, "yt-dlp: {}", message);
        }

        Ok(Extraction { playlist, diagnostics })
    }
}

/// A running `yt-dlp` with both output pipes exposed as line streams.
///
/// The streams end when the process closes its pipes, after which `child` can be waited on.
struct YtdlpProcess {
    child: ::tokio::process::Child,
    stdout: BoxedStream<MaybeOwnedString>,
    stderr: BoxedStream<MaybeOwnedString>,
}

impl YtdlpProcess {
    fn spawn<Args>(program: &::std::path::Path, args: Args) -> Fallible<Self>
    where
        Args: IntoIterator,
        Args::Item: AsRef<::std::ffi::OsStr>,
    {
        use ::anyhow::Context as _;

        let mut child = ::tokio::process::Command::new(program)
            .args(args)
            .stdin(::std::process::Stdio::null())
            .stdout(::std::process::Stdio::piped())
            .stderr(::std::process::Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("could not run {}", program.display()))?;

        let stdout = child.stdout.take().context("yt-dlp stdout was not captured")?;
        let stderr = child.stderr.take().context("yt-dlp stderr was not captured")?;

        Ok(Self { child, stdout: Self::lines(stdout), stderr: Self::lines(stderr) })
    }

    fn lines<Pipe>(pipe: Pipe) -> BoxedStream<MaybeOwnedString>
    where
        Pipe: ::tokio::io::AsyncRead + ::core::marker::Send + ::core::marker::Unpin + 'static,
    {
        use ::tokio::io::AsyncBufReadExt as _;

        let lines = ::tokio::io::BufReader::new(pipe).lines();

        ::std::boxed::Box::pin(
            ::tokio_stream::wrappers::LinesStream::new(lines)
                .filter_map(|line| async move { line.ok() })
                .map(MaybeOwnedString::from),
        )
    }
}

trait FromYtdlpLine {
    fn from_line<Line>(line: Line) -> Option<Self>
    where
        Line: AsRef<str>,
        Self: Sized;
}

impl FromYtdlpLine for DiagnosticEvent {
    fn from_line<Line>(line: Line) -> Option<Self>
    where
        Line: AsRef<str>,
        Self: Sized,
    {
        let (level, message) = line.as_ref().split_once(':')?;

        let level = match level.trim() {
            "WARNING" => DiagnosticLevel::Warning,
            "ERROR" => DiagnosticLevel::Error,
            _ => return None,
        };

        match message.trim() {
            "" => None,
            message => Some(Self { level, message: message.to_owned().into() }),
        }
    }
}

trait FromYtdlpExit {
    fn from_exit(status: ::std::process::ExitStatus, produced_playlist: bool) -> Self;
}

impl FromYtdlpExit for DiagnosticEvent {
    /// `--ignore-errors` exits non-zero whenever any entry failed, so a run that still produced a playlist
    /// only warrants a warning.
    fn from_exit(status: ::std::process::ExitStatus, produced_playlist: bool) -> Self {
        let level = if produced_playlist { DiagnosticLevel::Warning } else { DiagnosticLevel::Error };

        Self { level, message: format!("yt-dlp exited unsuccessfully ({})", status).into() }
    }
}

trait FromYtdlpOutput {
    fn from_output(output: &str) -> Option<Self>
    where
        Self: Sized;
}

impl FromYtdlpOutput for RawPlaylist {
    fn from_output(output: &str) -> Option<Self> {
        if output.trim().is_empty() {
            ::tracing::warn!("yt-dlp printed no playlist metadata");
            return None;
        }

        match ::serde_json::from_str::<YtdlpPlaylist>(output) {
            Ok(playlist) => Some(playlist.into()),
            Err(error) => {
                ::tracing::warn!(%error, "could not parse yt-dlp playlist metadata");
                None
            },
        }
    }
}

/// `--dump-single-json` output. yt-dlp omits or nulls fields freely, so nothing is required.
#[derive(Debug, ::serde::Deserialize)]
struct YtdlpPlaylist {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    thumbnails: Option<Vec<YtdlpThumbnail>>,
    #[serde(default)]
    entries: Option<Vec<Option<YtdlpEntry>>>,
}

#[derive(Debug, ::serde::Deserialize)]
struct YtdlpEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    thumbnails: Option<Vec<YtdlpThumbnail>>,
}

#[derive(Debug, ::serde::Deserialize)]
struct YtdlpThumbnail {
    #[serde(default)]
    url: Option<String>,
}

fn thumbnail_urls(thumbnails: Option<Vec<YtdlpThumbnail>>) -> impl Iterator<Item = MaybeOwnedString> {
    thumbnails
        .into_iter()
        .flatten()
        .filter_map(|thumbnail| thumbnail.url)
        .map(MaybeOwnedString::from)
}

impl From<YtdlpPlaylist> for RawPlaylist {
    fn from(playlist: YtdlpPlaylist) -> Self {
        let YtdlpPlaylist { title, thumbnails, entries } = playlist;

        // yt-dlp lists playlist thumbnails from smallest to largest.
        let thumbnail_url = thumbnail_urls(thumbnails).last();

        let entries = entries.map(|entries| {
            entries
                .into_iter()
                .map(|entry| entry.map(RawVideo::from))
                .collect()
        });

        Self {
            title: title.map(MaybeOwnedString::from),
            thumbnail_url,
            entries,
        }
    }
}

impl From<YtdlpEntry> for RawVideo {
    fn from(entry: YtdlpEntry) -> Self {
        let YtdlpEntry { id, title, duration, thumbnails } = entry;

        Self {
            id: id.map(MaybeOwnedString::from),
            title: title.map(MaybeOwnedString::from),
            duration: duration
                .filter(|duration| duration.is_finite() && *duration >= 0.0)
                .map(|duration| duration as u64),
            thumbnail_urls: thumbnail_urls(thumbnails).collect(),
        }
    }
}
