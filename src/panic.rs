use std::panic;

use anyhow::Result;
use tracing::error;

use crate::tui;

/// Installs a hook that puts the terminal back before reporting a panic, then exits.
///
/// Debug builds print a full backtrace; release builds write a crash dump and print where it is.
pub fn init() -> Result<()> {
    #[cfg(debug_assertions)]
    let report = better_panic::Settings::debug()
        .most_recent_first(false)
        .lineno_suffix(true)
        .create_panic_handler();
    #[cfg(not(debug_assertions))]
    let report = crash_report;

    panic::set_hook(Box::new(move |info| {
        if let Err(err) = tui::restore() {
            error!("Unable to restore terminal: {err:?}");
        }
        error!("Panicked: {}", strip_ansi_escapes::strip_str(info.to_string()));
        report(info);
        std::process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

#[cfg(not(debug_assertions))]
fn crash_report(info: &panic::PanicHookInfo<'_>) {
    use human_panic::{handle_dump, metadata, print_msg};

    let meta = metadata!();
    let dump = handle_dump(&meta, info);
    if let Err(err) = print_msg(dump, &meta) {
        eprintln!("Failed to print crash report: {err}");
    }
    eprintln!("{info}");
}
