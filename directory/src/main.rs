//! Kiosk binary entry point
//!
//! Loads the staff directory, shows the profile named by `--location` and
//! rotates through everyone else. Typing a slug on stdin jumps to that
//! profile, `next` advances and `quit` exits.

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use url::Url;

use directory::{
    core::{canonical_slug, MAX_LOAD_ATTEMPTS},
    services::{ConsoleRenderTarget, MemoryNavigator, RealFileDirectorySource, RealHttpDirectorySource, TokioTimerSource},
    DirectoryConfig, DirectoryError, DirectoryResult, DirectorySession, DirectorySource, LoaderState, SessionEvent,
    SourceLocation,
};
use shared::{component_debug, component_info, logging, ComponentId};

/// Staff directory kiosk
#[derive(Parser)]
#[command(name = "directory")]
#[command(about = "Rotating staff profile kiosk backed by the employee directory API")]
pub struct Args {
    /// Directory source: an http(s) URL or a path to a JSON file
    #[arg(long)]
    pub source: Option<String>,

    /// Page location the kiosk starts on; its `employee` parameter or last
    /// path segment picks the first profile
    #[arg(long, default_value = "https://people.quoralinex.com/index.html")]
    pub location: String,

    /// Milliseconds each profile stays on screen
    #[arg(long)]
    pub rotation_ms: Option<u64>,

    /// Profile shown when the location names nobody
    #[arg(long)]
    pub default_employee: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[tokio::main]
async fn main() -> DirectoryResult<()> {
    // Missing .env is fine
    dotenvy::dotenv().ok();
    let args = Args::parse();

    ComponentId::init_kiosk();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = build_config(&args)?;
    let location = Url::parse(&args.location)
        .map_err(|e| DirectoryError::config(format!("Invalid location {}: {}", args.location, e)))?;

    logging::log_startup(ComponentId::current(), &format!("directory kiosk ({})", config.source));
    component_debug!(ComponentId::current(), "Rotation every {:?}", config.rotation);

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    spawn_stdin_reader(events_tx.clone());
    spawn_shutdown_listener(events_tx.clone());

    match config.source.clone() {
        SourceLocation::Http(url) => {
            run_session(config, RealHttpDirectorySource::new(url), location, events_tx, events_rx).await
        }
        SourceLocation::File(path) => {
            run_session(config, RealFileDirectorySource::new(path), location, events_tx, events_rx).await
        }
    }
}

/// Defaults, then environment, then command-line flags
fn build_config(args: &Args) -> DirectoryResult<DirectoryConfig> {
    let mut config = DirectoryConfig::from_env()?;

    if let Some(source) = &args.source {
        config = config.with_source(source.parse()?);
    }
    if let Some(millis) = args.rotation_ms {
        config = config.with_rotation_ms(millis);
    }
    if let Some(slug) = &args.default_employee {
        config = config.with_default_slug(slug.clone());
    }

    config.validate()?;
    Ok(config)
}

async fn run_session<S: DirectorySource>(
    config: DirectoryConfig,
    source: S,
    location: Url,
    events_tx: UnboundedSender<SessionEvent>,
    mut events_rx: UnboundedReceiver<SessionEvent>,
) -> DirectoryResult<()> {
    let mut session = DirectorySession::new(
        config,
        source,
        ConsoleRenderTarget::new(std::io::stdout()),
        MemoryNavigator::new(location),
        TokioTimerSource::new(events_tx),
    );

    if session.load_directory().await == LoaderState::Failed {
        return Err(DirectoryError::Unavailable { attempts: MAX_LOAD_ATTEMPTS });
    }

    session.run(&mut events_rx).await;
    logging::log_shutdown(ComponentId::current(), "session ended");
    Ok(())
}

fn spawn_stdin_reader(events: UnboundedSender<SessionEvent>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let event = match line.trim() {
                "" => continue,
                "quit" | "exit" => SessionEvent::Shutdown,
                "next" => SessionEvent::Advance,
                slug => SessionEvent::Select { slug: canonical_slug(slug) },
            };
            let stop = event == SessionEvent::Shutdown;
            if events.send(event).is_err() || stop {
                break;
            }
        }
        component_debug!(ComponentId::current(), "Stdin closed");
    });
}

fn spawn_shutdown_listener(events: UnboundedSender<SessionEvent>) {
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                component_info!(ComponentId::current(), "Received Ctrl+C signal");
                let _ = events.send(SessionEvent::Shutdown);
            }
            Err(err) => {
                logging::log_error(ComponentId::current(), "Signal handling", &err);
            }
        }
    });
}
