use std::{error::Error, fmt::Display};

/// This library's error type. Every failure is a rejected mode string.
///
/// Note: [`Mode::new`](crate::prelude::Mode::new) and the `check_*`/`validate_*`
/// functions return a `Box<dyn Error>` wrapping this type. Print it to the
/// console to see a description of the error, or downcast it to match on the
/// reason.
/// [`str::parse`] returns this type directly.
#[derive(Debug, Clone, PartialEq, Hash)]
pub enum ModeError {
    /// "Mode must not be empty"
    Empty,
    /// "Mode contains invalid characters: (mode)"
    InvalidCharacters(String),
    /// "Mode must start with 'r', 'w', 'x' or 'a': (mode)"
    InvalidFirstCharacter(String),
    /// "Mode cannot be text ('t') and binary ('b') at the same time: (mode)"
    TextAndBinary(String),
    /// "Text mode not allowed when opening in binary: (mode)"
    TextNotAllowed(String),
    /// "Binary mode must start with 'r', 'w', 'a' or 'x': (mode)"
    InvalidBinaryFirstCharacter(String),
}

impl Display for ModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg: String = match self {
            Self::Empty => "Mode must not be empty".to_string(),
            Self::InvalidCharacters(mode) => {
                "Mode contains invalid characters: ".to_string() + mode
            }
            Self::InvalidFirstCharacter(mode) => {
                "Mode must start with 'r', 'w', 'x' or 'a': ".to_string() + mode
            }
            Self::TextAndBinary(mode) => {
                "Mode cannot be text ('t') and binary ('b') at the same time: ".to_string() + mode
            }
            Self::TextNotAllowed(mode) => {
                "Text mode not allowed when opening in binary: ".to_string() + mode
            }
            Self::InvalidBinaryFirstCharacter(mode) => {
                "Binary mode must start with 'r', 'w', 'a' or 'x': ".to_string() + mode
            }
        };
        f.pad(msg.as_str())
    }
}

impl Error for ModeError {
    fn description(&self) -> &str {
        "Mode error"
    }
}
