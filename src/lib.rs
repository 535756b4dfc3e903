use std::error::Error;
use std::fmt::Display;

mod mode;
use mode::Mode;
mod mode_error;
use mode_error::ModeError;

/// Flag characters a mode string may contain when opening a file as raw bytes.
const VALID_BINARY_FLAGS: &str = "rwxab+";

/// Check whether a mode string allows reading.
///
/// *mode*: a mode string, e.g. `"rt"`. Provide anything that can be converted
/// to a string: a [`String`](std::string::String) (`String::from("rt")`) or
/// &str (`"rt"`) --- anything goes.
///
/// Returns an error if the mode string is invalid.
///
/// ```
/// use openmode::prelude::*;
///
/// assert!(check_readable("r+").unwrap());
/// assert!(!check_readable("w").unwrap());
/// ```
pub fn check_readable(mode: impl Display) -> Result<bool, Box<dyn Error>> {
    Ok(Mode::new(mode)?.readable())
}

/// Check whether a mode string allows writing.
///
/// *mode*: a mode string, e.g. `"wt"`. Provide anything that can be converted
/// to a string: a [`String`](std::string::String) (`String::from("wt")`) or
/// &str (`"wt"`) --- anything goes.
///
/// Returns an error if the mode string is invalid.
pub fn check_writable(mode: impl Display) -> Result<bool, Box<dyn Error>> {
    Ok(Mode::new(mode)?.writable())
}

/// Check a mode string is valid for opening a file.
///
/// *mode*: a mode string, e.g. `"r+"`.
///
/// Returns an error if the mode string is invalid.
pub fn validate_open_mode(mode: impl Display) -> Result<(), Box<dyn Error>> {
    Mode::new(mode)?;
    Ok(())
}

/// Check a mode string is valid for opening a file as raw bytes.
///
/// This is a stricter rule set than [`validate_open_mode`](validate_open_mode):
/// the text flag `t` is not allowed anywhere in the mode. The checks run in a
/// fixed order, so a mode that breaks several rules always reports the same
/// error: text flag, then empty, then first flag, then invalid characters.
///
/// *mode*: a mode string, e.g. `"rb"`.
///
/// Returns an error if the mode string is invalid.
///
/// ```
/// use openmode::prelude::*;
///
/// assert!(validate_openbin_mode("w+b").is_ok());
/// assert!(validate_openbin_mode("rt").is_err());
/// ```
pub fn validate_openbin_mode(mode: impl Display) -> Result<(), Box<dyn Error>> {
    let mode = mode.to_string();
    if mode.contains('t') {
        Err(ModeError::TextNotAllowed(mode.clone()))?
    }
    if mode.is_empty() {
        Err(ModeError::Empty)?
    }
    if !mode.starts_with(|flag: char| "rwxa".contains(flag)) {
        Err(ModeError::InvalidBinaryFirstCharacter(mode.clone()))?
    }
    if mode.chars().any(|flag| !VALID_BINARY_FLAGS.contains(flag)) {
        Err(ModeError::InvalidCharacters(mode.clone()))?
    }
    Ok(())
}

/// A convenient way to import all useful structs, traits and functions in this library.
///
/// Note: remember to add the `openmode` crate to the project Cargo.toml first.
///
/// ```
/// use openmode::prelude::*;
/// ```
pub mod prelude {
    #[allow(unused_imports)]
    pub use crate::{
        check_readable, check_writable,
        mode::{Mode, StrExt},
        mode_error::ModeError,
        validate_open_mode, validate_openbin_mode,
    };
}
