//! Terminal output helpers.
//!
//! Status lines go to stderr so stdout stays clean for `kiln command`, whose
//! output is meant to be piped. There is no animated progress: the compiler
//! shares stderr and its diagnostics must not be redrawn over.
//!
//! ```no_run
//! use kiln_cli::ui;
//!
//! ui::init_colors(false);
//!
//! ui::info("Compiling 2 source(s) for linux/native...");
//! ui::success("Build successful");
//! ui::warning("File does not exist: bin/run.html");
//! ```

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::format_duration;
pub use messages::{info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(true);

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var_os("CI").is_some()
        || std::env::var_os("GITHUB_ACTIONS").is_some()
        || std::env::var_os("GITLAB_CI").is_some()
}

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Decide once whether status messages are colored.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
