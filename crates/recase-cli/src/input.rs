//! Input resolution: argument, piped stdin, then clipboard

use crate::clipboard;
use recase_core::{RecaseError, RecaseResult};
use std::io::{IsTerminal, Read};
use tracing::debug;

/// Resolve the text to convert
///
/// Priority: the explicit argument, then piped stdin (with one trailing
/// newline stripped), then the clipboard. When every source is empty the
/// no-input error surfaces to the user; nothing is retried.
pub fn resolve(arg: Option<String>) -> RecaseResult<String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    if !std::io::stdin().is_terminal() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        let text = buf.strip_suffix('\n').unwrap_or(&buf);
        let text = text.strip_suffix('\r').unwrap_or(text);
        if !text.trim().is_empty() {
            return Ok(text.to_string());
        }
    }

    match clipboard::read_text() {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) => Err(RecaseError::NoInput),
        Err(err) => {
            debug!("clipboard unavailable: {}", err);
            Err(RecaseError::NoInput)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_argument_wins() {
        assert_eq!(resolve(Some("Some Text".to_string())).unwrap(), "Some Text");
    }

    #[test]
    fn multi_line_argument_passes_through() {
        let text = "line one\nline two".to_string();
        assert_eq!(resolve(Some(text.clone())).unwrap(), text);
    }
}
