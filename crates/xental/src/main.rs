use std::fs::{self, OpenOptions};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use xental_config::{Config, ConfigError, WaitlistConfig};
use xental_waitlist::{MemoryStore, RestStore, WaitlistStore};

use crate::app::App;

mod app;
mod landing;

const LOG_FILE: &str = "xental.log";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging();

    let config = match Config::load() {
        Ok(config) => config,
        Err(ConfigError::NoConfigDir) => {
            warn!("no config directory, using defaults");
            Config::default().with_env(|key| std::env::var(key).ok())
        }
        Err(err) => return Err(err.into()),
    };
    let app = App::new(&config, waitlist_store(&config.waitlist));

    let terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| app.run(terminal));
    if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
        warn!(error = %err, "failed to release mouse capture");
    }
    ratatui::restore();
    result
}

/// Log to a file in the data directory; the terminal belongs to the UI.
fn init_logging() {
    let Some(dir) = Config::data_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}

/// Remote table when configured, otherwise an in-memory list.
fn waitlist_store(config: &WaitlistConfig) -> Arc<dyn WaitlistStore> {
    if config.is_remote() {
        info!(table = %config.table, "using remote waitlist");
        Arc::new(RestStore::new(
            &config.base_url,
            &config.table,
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        ))
    } else {
        warn!("no waitlist URL configured, signups are kept in memory");
        Arc::new(MemoryStore::new())
    }
}
