//! Human-facing console lines (init, config). Query results never go
//! through here: they are JSON envelopes, see `ui::output`.

use std::fmt;
use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

/// Colors only on a terminal and only when NO_COLOR is unset.
fn colored() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T) {
    if colored() {
        println!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
    } else {
        println!("{} {}", icon, msg);
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    line(FG_BLUE, "ℹ️", msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    line(FG_GREEN, "✅", msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    line(FG_YELLOW, "⚠️", msg);
}
