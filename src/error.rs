//! Error types shared by the shell.
//!
//! The shell itself never fails; errors only come from parsing option codes
//! that arrive as strings from `<select>` elements.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown language code: {0:?}")]
    UnknownLanguage(String),

    #[error("unknown theme mode: {0:?}")]
    UnknownTheme(String),
}
