use core::fmt::Debug;
use extend::ext;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;

use crate::ModeError;

/// Flag characters a mode string may contain.
const VALID_FLAGS: &str = "rwxtab+";
/// Flag characters a mode string may start with.
const VALID_FIRST_FLAGS: &str = "rwxa";

/// A type that represents a *mode*: a short string of single-character flags
/// describing what you are permitted to do with the file it opens.
///
/// *r*: permission to read the file.
///
/// *w*: permission to wipe the file and replace its contents, creating it if missing.
///
/// *x*: like *w*, but the open must create the file and fails if it already exists.
///
/// *a*: permission to add content to the end of the file, creating it if missing.
///
/// *+*: permission to both read and write, on top of the first flag.
///
/// *b*: the file holds raw bytes. *t*: the file holds text (the default).
///
/// Create an instance of this type with [`Mode::new`](Mode::new), or parse one
/// with [`str::parse`] or [`parse_mode`](StrExt::parse_mode). The mode string is
/// checked on creation: it must not be empty, may only contain the flags `r`,
/// `w`, `x`, `t`, `a`, `b` and `+`, must start with `r`, `w`, `x` or `a`, and
/// cannot ask for text (`t`) and binary (`b`) at the same time. A Mode never
/// changes after it has been created.
///
/// ```
/// use openmode::prelude::*;
///
/// let mode = Mode::new("w+b").unwrap();
/// assert!(mode.readable() && mode.writable() && mode.binary());
/// assert!(Mode::new("rtb").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mode {
    pub(crate) raw: String,
}

impl Mode {
    /// Create an instance of [`Mode`](Mode) from a mode string.
    ///
    /// *mode*: a mode string, e.g. `"rt"` or `"w+b"`. Provide anything that can
    /// be converted to a string: a [`String`](std::string::String)
    /// (`String::from("rb")`) or &str (`"rb"`) --- anything goes.
    ///
    /// Returns an error if the mode string is invalid.
    pub fn new(mode: impl Display) -> Result<Self, Box<dyn Error>> {
        Ok(mode.to_string().parse::<Mode>()?)
    }

    pub(crate) fn validate(&self) -> Result<(), ModeError> {
        if self.raw.is_empty() {
            Err(ModeError::Empty)?
        }
        if self.raw.chars().any(|flag| !VALID_FLAGS.contains(flag)) {
            Err(ModeError::InvalidCharacters(self.raw.clone()))?
        }
        if !self
            .raw
            .starts_with(|flag: char| VALID_FIRST_FLAGS.contains(flag))
        {
            Err(ModeError::InvalidFirstCharacter(self.raw.clone()))?
        }
        if self.contains('t') && self.contains('b') {
            Err(ModeError::TextAndBinary(self.raw.clone()))?
        }
        Ok(())
    }

    /// Check this Mode is suitable for opening a file as raw bytes.
    ///
    /// Returns an error if the mode requests text (`t`).
    pub fn validate_binary(&self) -> Result<(), Box<dyn Error>> {
        self.validate()?;
        if self.contains('t') {
            Err(ModeError::TextNotAllowed(self.raw.clone()))?
        }
        Ok(())
    }

    /// Whether the flag character literally appears in the mode string.
    ///
    /// Every other query on a Mode is built on this.
    pub fn contains(&self, flag: char) -> bool {
        self.raw.contains(flag)
    }

    /// Whether opening with this Mode may create the file.
    ///
    /// True when the mode contains `w` or `x`.
    pub fn creating(&self) -> bool {
        self.contains('w') || self.contains('x')
    }

    /// Whether this Mode permits reading the file.
    ///
    /// True when the mode contains `r` or `+`.
    pub fn readable(&self) -> bool {
        self.contains('r') || self.contains('+')
    }

    /// Whether this Mode permits writing to the file.
    ///
    /// True when the mode contains `w`, `a`, `+` or `x`.
    pub fn writable(&self) -> bool {
        self.contains('w') || self.contains('a') || self.contains('+') || self.contains('x')
    }

    /// Whether writes go to the end of the file.
    ///
    /// True when the mode contains `a`.
    pub fn appendable(&self) -> bool {
        self.contains('a')
    }

    /// Whether this Mode requests update (read and write) access with `+`.
    pub fn updating(&self) -> bool {
        self.contains('+')
    }

    /// Whether opening with this Mode wipes the file's existing contents.
    ///
    /// True when the mode contains `w` or `x`.
    pub fn truncating(&self) -> bool {
        self.contains('w') || self.contains('x')
    }

    /// Whether the open must create the file and fail if it already exists.
    ///
    /// True when the mode contains `x`.
    pub fn exclusive(&self) -> bool {
        self.contains('x')
    }

    /// Whether the file will be opened as raw bytes.
    pub fn binary(&self) -> bool {
        self.contains('b')
    }

    /// Whether the file will be opened as text. Modes are text unless they ask
    /// for binary (`b`).
    pub fn text(&self) -> bool {
        self.contains('t') || !self.contains('b')
    }

    /// Get a mode string for the target platform.
    ///
    /// Platforms without exclusive-create support cannot honour the `x` flag;
    /// builds for them can enable the `no-exclusive-create` feature, which
    /// strips `x` here. Everywhere else this returns the mode string unchanged.
    pub fn to_platform_string(&self) -> String {
        if cfg!(feature = "no-exclusive-create") {
            self.raw.replace('x', "")
        } else {
            self.raw.clone()
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.raw.as_str())
    }
}

impl Debug for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mode({:?})", self.raw)
    }
}

impl Default for Mode {
    /// The default Mode permits reading only: `"r"`.
    fn default() -> Self {
        Self {
            raw: "r".to_string(),
        }
    }
}

impl FromStr for Mode {
    type Err = ModeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = Self { raw: s.to_string() };
        mode.validate()?;
        Ok(mode)
    }
}

impl TryFrom<String> for Mode {
    type Error = ModeError;
    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let mode = Self { raw };
        mode.validate()?;
        Ok(mode)
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.raw
    }
}

#[ext(pub, name = StrExt)]
impl str {
    /// Parse this string as a [`Mode`](Mode).
    ///
    /// Returns an error if this string is not a valid mode.
    ///
    /// ```
    /// use openmode::prelude::*;
    ///
    /// assert!("a+".parse_mode().unwrap().appendable());
    /// ```
    fn parse_mode(&self) -> Result<Mode, Box<dyn Error>> {
        Mode::new(self)
    }
}
