mod logging;
mod notify;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use mark_logging::mark_info;
use marklater_core::{parse_tags, BookmarkDraft, PASSWORD_KEY, SERVER_URL_KEY, USERNAME_KEY};
use marklater_engine::{
    ReqwestTransport, SettingsScope, SubmissionEvent, SubmitHandle, TransportSettings,
};

use crate::notify::TermNotifier;
use crate::settings::FileSettingsStore;

#[derive(Parser)]
#[command(name = "marklater", about = "Submit a captured page to a bookmark server")]
struct Cli {
    /// Path to the RON settings file.
    #[arg(long, default_value = "marklater.ron")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit one bookmark to the configured server.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Comma-separated tags; whitespace is trimmed, blanks dropped.
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Update stored settings.
    Config {
        /// Server base URL (synchronized scope).
        #[arg(long)]
        server_url: Option<String>,
        /// Username for the X-Username header (local scope).
        #[arg(long)]
        username: Option<String>,
        /// Password for the X-Password header (local scope).
        #[arg(long)]
        password: Option<String>,
    },
}

fn main() -> ExitCode {
    logging::initialize(logging::LogDestination::File);
    let cli = Cli::parse();

    match cli.command {
        Command::Add {
            title,
            url,
            description,
            tags,
        } => {
            let draft = BookmarkDraft::new(title, url, description, parse_tags(&tags));
            submit(&cli.settings, draft)
        }
        Command::Config {
            server_url,
            username,
            password,
        } => {
            let mut store = FileSettingsStore::load(&cli.settings);
            if let Some(url) = server_url {
                store.set(SettingsScope::Sync, SERVER_URL_KEY, url);
            }
            if let Some(username) = username {
                store.set(SettingsScope::Local, USERNAME_KEY, username);
            }
            if let Some(password) = password {
                store.set(SettingsScope::Local, PASSWORD_KEY, password);
            }
            store.save();
            ExitCode::SUCCESS
        }
    }
}

fn submit(settings_path: &std::path::Path, draft: BookmarkDraft) -> ExitCode {
    let store = Arc::new(FileSettingsStore::load(settings_path));
    let notifier = Arc::new(TermNotifier::new());
    let transport = Arc::new(ReqwestTransport::new(TransportSettings::default()));
    let handle = SubmitHandle::new(store, notifier, transport);

    handle.submit(draft);
    mark_info!("bookmark dispatched, waiting for outcome");

    // A capture popup would close here. The CLI instead keeps the process
    // alive until the controller reports the terminal phase; with no
    // timeout configured this can wait as long as the server does.
    loop {
        if let Some(SubmissionEvent::Finished { result, .. }) =
            handle.recv_timeout(Duration::from_millis(200))
        {
            return match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
    }
}
