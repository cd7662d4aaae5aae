//! Terminal setup and restoration

use ratatui::DefaultTerminal;
use tracer_core::prelude::*;

/// Enter the alternate screen in raw mode.
///
/// A panic hook is installed first so a crash inside the browse loop still
/// leaves the user's shell usable.
pub fn enter() -> Result<DefaultTerminal> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave the alternate screen and restore cooked mode
pub fn leave() {
    ratatui::restore();
    debug!("Terminal restored");
}
