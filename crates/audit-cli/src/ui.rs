//! Terminal preferences resolved once per process.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower terminals are ignored; tables then render unconstrained.
const MIN_TABLE_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Color status and tier cells in table output.
    pub table_color: bool,
    /// Width tables shrink to, from `COLUMNS`.
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let columns = std::env::var("COLUMNS").ok();

    let _ = UI_PREFS.set(UiPrefs {
        table_color: table_color(flags, stdout_is_tty, no_color),
        term_width: term_width(columns.as_deref()),
    });
}

/// Preferences set by [`init`], or plain defaults before it runs.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn table_color(flags: &GlobalFlags, stdout_is_tty: bool, no_color: bool) -> bool {
    if flags.format != OutputFormat::Table {
        return false;
    }
    match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => stdout_is_tty && !flags.quiet && !no_color,
    }
}

fn term_width(columns: Option<&str>) -> Option<usize> {
    columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TABLE_WIDTH)
}
