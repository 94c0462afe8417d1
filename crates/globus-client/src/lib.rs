pub mod app;
pub mod commands;
pub mod config;
pub mod events;
pub mod state;
pub mod status;
pub mod terminal;
pub mod view;

use globus_net::HttpSource;
use globus_store::{FileStore, KeyValueStore, MemoryStore};
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::App;
use crate::config::ClientConfig;
use crate::terminal::TerminalView;

pub async fn run() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("globus_client_lib=info,globus_net=info,globus_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::info!("Starting Globus v{}", env!("CARGO_PKG_VERSION"));

    let config = ClientConfig::from_env();
    tracing::info!(?config, "Loaded configuration");

    let app_kv = open_store(&config);
    let mut app = App::new(HttpSource::new(config.api_url.clone()), app_kv, config.locale);
    let mut view = TerminalView::new(std::io::stdout(), config.color);

    terminal::run_interactive(&mut app, &mut view).await?;

    tracing::info!("Bye");
    Ok(())
}

/// Pick the favorites backend. Storage problems never stop the app: if the
/// data directory is unusable, favorites live in memory for this session.
fn open_store(config: &ClientConfig) -> Box<dyn KeyValueStore> {
    if config.ephemeral {
        return Box::new(MemoryStore::new());
    }

    let opened = match &config.data_dir {
        Some(dir) => FileStore::open_at(dir),
        None => FileStore::new(),
    };

    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "Persistent storage unavailable, favorites will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}
