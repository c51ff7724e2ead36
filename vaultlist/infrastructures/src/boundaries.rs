use ::async_trait::async_trait;
use ::use_cases::boundaries::Activate;
use ::use_cases::boundaries::Update;
use ::use_cases::models::events::DiagnosticEvent;
use ::use_cases::models::events::DiagnosticLevel;
use ::use_cases::models::events::ImportOutcome;
use ::use_cases::models::events::ImportProgressEvent;

use crate::utils::aliases::BoxedStream;
use crate::utils::aliases::Fallible;
use crate::utils::lazy_progress_style;

/// Draws one import on stderr: a percentage bar with the current phase, diagnostics above it, and the
/// outcome once everything is written.
pub struct TerminalView {
    progress_bars: ::indicatif::MultiProgress,
    import_progress_bar: ::indicatif::ProgressBar,
}

impl TerminalView {
    pub fn new() -> Fallible<Self> {
        static PROGRESS_BAR_STYLE: ::once_cell::sync::Lazy<::indicatif::ProgressStyle> =
            lazy_progress_style!("{prefix} {bar:50} {msg}");

        let progress_bars = ::indicatif::MultiProgress::new();
        progress_bars.set_draw_target(::indicatif::ProgressDrawTarget::hidden());

        let import_progress_bar =
            progress_bars.add(::indicatif::ProgressBar::new(100).with_style(PROGRESS_BAR_STYLE.clone()));

        import_progress_bar.set_prefix(format!("{}", FormattedUninitPercentage));

        Ok(Self { progress_bars, import_progress_bar })
    }
}

#[async_trait]
impl Activate for TerminalView {
    async fn activate(self: ::std::sync::Arc<Self>) -> Fallible<()> {
        self.progress_bars.set_draw_target(::indicatif::ProgressDrawTarget::stderr());
        self.import_progress_bar.tick();

        Ok(())
    }

    async fn deactivate(self: ::std::sync::Arc<Self>) -> Fallible<()> {
        self.progress_bars.set_draw_target(::indicatif::ProgressDrawTarget::hidden());

        Ok(())
    }
}

#[async_trait]
impl Update<ImportProgressEvent> for TerminalView {
    async fn update(self: ::std::sync::Arc<Self>, event: &ImportProgressEvent) -> Fallible<()> {
        match event {
            ImportProgressEvent::PhaseStarted(phase) => {
                self.import_progress_bar.set_message(phase.to_string());
            },
            ImportProgressEvent::PercentageUpdated(event) => {
                let percentage = FormattedPercentage(event.percentage as u64);

                self.import_progress_bar.set_position(*percentage);
                self.import_progress_bar.set_prefix(format!("{}", percentage));
            },
        }

        Ok(())
    }
}

#[async_trait]
impl Update<DiagnosticEvent> for TerminalView {
    async fn update(self: ::std::sync::Arc<Self>, event: &DiagnosticEvent) -> Fallible<()> {
        use ::colored::Colorize as _;

        static DECOY_PROGRESS_BAR_STYLE: ::once_cell::sync::Lazy<::indicatif::ProgressStyle> =
            lazy_progress_style!("{msg}");

        let DiagnosticEvent { message, level } = event;

        let message = match level {
            DiagnosticLevel::Warning => message.yellow(),
            DiagnosticLevel::Error => message.red(),
        };

        let decoy_progress_bar = self
            .progress_bars
            .insert_before(&self.import_progress_bar, ::indicatif::ProgressBar::no_length());

        decoy_progress_bar.set_style(DECOY_PROGRESS_BAR_STYLE.clone());
        decoy_progress_bar.finish_with_message(format!("{}", message));

        Ok(())
    }
}

#[async_trait]
impl Update<ImportOutcome> for TerminalView {
    async fn update(self: ::std::sync::Arc<Self>, event: &ImportOutcome) -> Fallible<()> {
        use ::colored::Colorize as _;

        static PROGRESS_BAR_FINISH_STYLE: ::once_cell::sync::Lazy<::indicatif::ProgressStyle> =
            lazy_progress_style!("{prefix} {bar:50.green} {msg}");

        match event {
            ImportOutcome::Succeeded(summary) => {
                self.import_progress_bar.set_style(PROGRESS_BAR_FINISH_STYLE.clone());
                self.import_progress_bar
                    .finish_with_message(format!("Successfully processed {} videos", summary.processed_videos).green().to_string());

                self.import_progress_bar.println(summary.message.green().to_string());
            },
            ImportOutcome::Failed(failure) => {
                self.import_progress_bar.abandon();

                self.import_progress_bar
                    .println(format!("An error occurred during processing: {}", failure.message).red().to_string());
            },
        }

        Ok(())
    }
}

struct FormattedPercentage(u64);

impl ::std::ops::Deref for FormattedPercentage {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ::std::fmt::Display for FormattedPercentage {
    fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(formatter, "{:>3}%", self.0)
    }
}

struct FormattedUninitPercentage;

impl ::std::fmt::Display for FormattedUninitPercentage {
    fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(formatter, "{:>3}%", "??")
    }
}

/// Everything an import reports, in the order it was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportViewEvent {
    Progress(ImportProgressEvent),
    Diagnostic(DiagnosticEvent),
    Finished(ImportOutcome),
}

/// Forwards every callback into a stream, for front ends that would rather poll than be called.
///
/// The stream ends when the import deactivates its output boundary.
pub struct ChannelView {
    events_tx: ::tokio::sync::Mutex<Option<::tokio::sync::mpsc::UnboundedSender<ImportViewEvent>>>,
}

impl ChannelView {
    pub fn new() -> (Self, BoxedStream<ImportViewEvent>) {
        let (events_tx, events_rx) = ::tokio::sync::mpsc::unbounded_channel();

        let view = Self { events_tx: ::tokio::sync::Mutex::new(Some(events_tx)) };
        let events = ::std::boxed::Box::pin(::tokio_stream::wrappers::UnboundedReceiverStream::new(events_rx));

        (view, events)
    }

    async fn send(&self, event: ImportViewEvent) {
        if let Some(events_tx) = self.events_tx.lock().await.as_ref() {
            if events_tx.send(event).is_err() {
                ::tracing::debug!("import event stream was dropped");
            }
        }
    }
}

#[async_trait]
impl Activate for ChannelView {
    async fn activate(self: ::std::sync::Arc<Self>) -> Fallible<()> {
        Ok(())
    }

    async fn deactivate(self: ::std::sync::Arc<Self>) -> Fallible<()> {
        self.events_tx.lock().await.take();

        Ok(())
    }
}

#[async_trait]
impl Update<ImportProgressEvent> for ChannelView {
    async fn update(self: ::std::sync::Arc<Self>, event: &ImportProgressEvent) -> Fallible<()> {
        self.send(ImportViewEvent::Progress(event.clone())).await;

        Ok(())
    }
}

#[async_trait]
impl Update<DiagnosticEvent> for ChannelView {
    async fn update(self: ::std::sync::Arc<Self>, event: &DiagnosticEvent) -> Fallible<()> {
        self.send(ImportViewEvent::Diagnostic(event.clone())).await;

        Ok(())
    }
}

#[async_trait]
impl Update<ImportOutcome> for ChannelView {
    async fn update(self: ::std::sync::Arc<Self>, event: &ImportOutcome) -> Fallible<()> {
        self.send(ImportViewEvent::Finished(event.clone())).await;

        Ok(())
    }
}
