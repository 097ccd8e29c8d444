//! Panic hook that gives the terminal back before reporting

use std::{panic, process};

use color_eyre::{config::HookBuilder, eyre::Result};

use crate::infrastructure::tui::restore_terminal;

/// Release builds write a human-panic dump; debug builds print a full
/// better-panic backtrace. Either way the report also lands in the log file.
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "marquee crashed. Please file an issue at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        // Raw mode and the alternate screen must go before anything is printed
        if let Err(e) = restore_terminal() {
            log::error!("Unable to restore terminal: {e:?}");
        }

        let report = panic_hook.panic_report(panic_info).to_string();
        log::error!("panic: {}", strip_ansi_escapes::strip_str(&report));

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};
            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
                .homepage(env!("CARGO_PKG_HOMEPAGE"));
            if let Err(e) = print_msg(handle_dump(&meta, panic_info), &meta) {
                eprintln!("human-panic: printing error message failed: {e}");
            }
            eprintln!("{report}");
        }

        #[cfg(debug_assertions)]
        better_panic::Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(better_panic::Verbosity::Full)
            .create_panic_handler()(panic_info);

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
