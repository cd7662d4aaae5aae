//! Browser entry point and event loop
//!
//! The loop is synchronous: draw, block on the next key or resize, run the
//! message through the update cycle, repeat until the state asks to quit.

use ratatui::DefaultTerminal;
use tracer_app::config::Settings;
use tracer_app::process::process_message;
use tracer_app::{AppState, BlockSource, Message};
use tracer_core::prelude::*;
use tracer_core::PatternSet;

use crate::theme::Theme;
use crate::{event, render, terminal};

/// Browse the blocks in `source` until the user quits
pub fn run_browser<S>(source: &S, settings: Settings, highlight: PatternSet) -> Result<()>
where
    S: BlockSource + ?Sized,
{
    let mut term = terminal::enter()?;
    let result = run_loop(&mut term, source, settings, highlight);
    terminal::leave();

    if let Err(ref e) = result {
        error!("Browser exited with error: {}", e);
    }
    result
}

fn run_loop<S>(
    term: &mut DefaultTerminal,
    source: &S,
    settings: Settings,
    highlight: PatternSet,
) -> Result<()>
where
    S: BlockSource + ?Sized,
{
    let size = term.size().map_err(|e| Error::terminal(e.to_string()))?;
    let theme = Theme::from_settings(&settings.general);
    let mut state = AppState::new(settings, highlight, size.width, size.height);
    info!("Browsing blocks at {}x{}", size.width, size.height);

    process_message(&mut state, Message::Reload, source)?;

    while !state.should_quit() {
        term.draw(|frame| render::view(frame, &state, &theme))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::read_message()? {
            process_message(&mut state, message, source)?;
        }
    }

    info!("Browser closed");
    Ok(())
}
