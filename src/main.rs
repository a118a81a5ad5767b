//! Terminal bomber (default binary).
//!
//! Reads `BOMBER_*` settings, optionally starts file logging, then runs the
//! menu loop on the alternate screen. The terminal is restored on every exit
//! path, including errors.

mod app;
mod logging;
mod menu;
mod platform;

use anyhow::Result;

use tui_bomber::engine::Settings;
use tui_bomber::term::TerminalRenderer;

use crate::app::App;

fn main() -> Result<()> {
    let settings = Settings::from_env()?;
    if let Some(path) = &settings.log_path {
        logging::init(settings.log_level, path)?;
    }
    log::info!("starting with {:?}", settings.rules);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = App::new(settings, &mut term).run();

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting on error: {err:#}");
    }
    result
}
