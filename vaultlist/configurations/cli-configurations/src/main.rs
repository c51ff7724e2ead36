pub(crate) mod settings;
pub(crate) mod utils;

use ::infrastructures::boundaries::TerminalView;
use ::infrastructures::gateways::extractors::YtdlpExtractor;
use ::infrastructures::gateways::repositories::FilesystemNoteRepository;
use ::use_cases::boundaries::Accept;
use ::use_cases::boundaries::ImportPlaylistOutputBoundary;
use ::use_cases::boundaries::ImportPlaylistRequestModel;
use ::use_cases::gateways::NoteRepository;
use ::use_cases::gateways::PlaylistExtractor;
use ::use_cases::interactors::ImportPlaylistInteractor;

use crate::settings::Preferences;
use crate::utils::aliases::Fallible;
use crate::utils::extensions::OptionExt;

#[tokio::main]
async fn main() -> Fallible<::std::process::ExitCode> {
    let logs = ::dirs::data_local_dir().ok()?.join("vaultlist").join("logs");
    let writer = ::tracing_appender::rolling::daily(logs, "vaultlist.log");
    let (writer, _guard) = ::tracing_appender::non_blocking(writer);

    ::tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(
            ::tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| ::tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .init();

    let matches = command().get_matches();

    let preferences_path = match matches.get_one::<::std::path::PathBuf>("config") {
        Some(path) => path.to_owned(),
        None => Preferences::default_path()?,
    };
    let preferences = Preferences::load(&preferences_path);
    let home = ::dirs::home_dir().ok()?;

    match matches.subcommand() {
        Some(("import", matches)) => {
            let overrides = Preferences {
                save_directory: matches.get_one::<::std::path::PathBuf>("save-directory").cloned(),
                base_files_directory: matches.get_one::<::std::path::PathBuf>("base-files-directory").cloned(),
                vault_directory: matches.get_one::<::std::path::PathBuf>("vault-directory").cloned(),
            };
            let directories = preferences.overridden_by(overrides).directories(&home);

            if let Some(warning) = directories.vault_warning() {
                ::tracing::warn!("{}", warning);
                eprintln!("Warning: {}", warning);
            }

            if matches.get_flag("remember") {
                Preferences::from(directories.clone()).save(&preferences_path)?;
            }

            let view = ::std::sync::Arc::new(TerminalView::new()?);
            let extractor = ::std::sync::Arc::new(
                YtdlpExtractor::builder()
                    .program(matches.get_one::<::std::path::PathBuf>("yt-dlp").ok()?.to_owned())
                    .build(),
            );
            let notes = ::std::sync::Arc::new(FilesystemNoteRepository::new());

            let import_playlist_interactor = ::std::sync::Arc::new(
                ImportPlaylistInteractor::builder()
                    .output_boundary(::std::sync::Arc::clone(&view) as ::std::sync::Arc<dyn ImportPlaylistOutputBoundary>)
                    .extractor(::std::sync::Arc::clone(&extractor) as ::std::sync::Arc<dyn PlaylistExtractor>)
                    .notes(::std::sync::Arc::clone(&notes) as ::std::sync::Arc<dyn NoteRepository>)
                    .build(),
            );

            let request = ImportPlaylistRequestModel::builder()
                .url(matches.get_one::<::std::string::String>("url").ok()?.to_owned())
                .save_directory(directories.save_directory)
                .base_files_directory(directories.base_files_directory)
                .maybe_vault_directory(directories.vault_directory)
                .build();

            let outcome = ::tokio::spawn(import_playlist_interactor.accept(request)).await??;

            if outcome.is_success() {
                Ok(::std::process::ExitCode::SUCCESS)
            } else {
                Ok(::std::process::ExitCode::FAILURE)
            }
        },

        Some(("config", matches)) => {
            match matches.subcommand() {
                Some(("show", _)) => {
                    let directories = preferences.directories(&home);

                    println!("Preferences file: {}", preferences_path.display());
                    println!("Save directory: {}", directories.save_directory.display());
                    println!("Base files directory: {}", directories.base_files_directory.display());
                    match directories.vault_directory {
                        Some(vault_directory) => println!("Vault directory: {}", vault_directory.display()),
                        None => println!("Vault directory: not set"),
                    }
                },
                Some(("set", matches)) => {
                    let overrides = Preferences {
                        save_directory: matches.get_one::<::std::path::PathBuf>("save-directory").cloned(),
                        base_files_directory: matches.get_one::<::std::path::PathBuf>("base-files-directory").cloned(),
                        vault_directory: matches.get_one::<::std::path::PathBuf>("vault-directory").cloned(),
                    };

                    preferences.overridden_by(overrides).save(&preferences_path)?;
                    println!("Preferences saved to {}", preferences_path.display());
                },

                _ => unreachable!(),
            }

            Ok(::std::process::ExitCode::SUCCESS)
        },

        _ => unreachable!(),
    }
}

fn command() -> ::clap::Command {
    let directory_args = |save: &'static str, base: &'static str, vault: &'static str| {
        [
            ::clap::Arg::new("save-directory")
                .long(save)
                .help("Where the playlist folder is created")
                .value_parser(::clap::value_parser!(::std::path::PathBuf)),
            ::clap::Arg::new("base-files-directory")
                .long(base)
                .help("Where the .base file is created")
                .value_parser(::clap::value_parser!(::std::path::PathBuf)),
            ::clap::Arg::new("vault-directory")
                .long(vault)
                .help("Obsidian vault root, stripped from the folder the .base file filters on")
                .value_parser(::clap::value_parser!(::std::path::PathBuf)),
        ]
    };

    let [save_directory, base_files_directory, vault_directory] = directory_args("output", "bases", "vault");

    ::clap::Command::new("vaultlist")
        .about("Turns a YouTube playlist into linked Obsidian notes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            ::clap::Arg::new("config")
                .long("config")
                .global(true)
                .help("Preferences file [default: ~/.youtube_playlist_config.json]")
                .value_parser(::clap::value_parser!(::std::path::PathBuf)),
        )
        .arg(
            ::clap::Arg::new("yt-dlp")
                .long("yt-dlp")
                .global(true)
                .default_value(YtdlpExtractor::DEFAULT_PROGRAM)
                .value_parser(::clap::value_parser!(::std::path::PathBuf)),
        )
        .subcommand(
            ::clap::Command::new("import")
                .arg(
                    ::clap::Arg::new("url")
                        .short('i')
                        .required(true)
                        .value_parser(::clap::value_parser!(::std::string::String)),
                )
                .arg(save_directory.short('o'))
                .arg(base_files_directory.short('b'))
                .arg(vault_directory)
                .arg(
                    ::clap::Arg::new("remember")
                        .long("remember")
                        .help("Save the directories used for this import as the new preferences")
                        .action(::clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ::clap::Command::new("config")
                .subcommand_required(true)
                .subcommand(::clap::Command::new("show"))
                .subcommand(::clap::Command::new("set").args(directory_args(
                    "save-directory",
                    "base-files-directory",
                    "vault-directory",
                ))),
        )
}
