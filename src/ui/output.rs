//! JSON envelopes on stdout.

use crate::errors::{AppError, AppResult};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

/// Write the failure envelope for `err`.
pub fn print_error(err: &AppError) {
    match serde_json::to_string(&err.envelope()) {
        Ok(text) => println!("{}", text),
        Err(_) => println!(r#"{{"success":false,"message":"Internal error"}}"#),
    }
}
