//! The closed set of locale keys an export can read.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Locale key selecting which localized copy of a variant's custom
/// attributes is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    EsCr,
    EnCr,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::EsCr, Lang::EnCr];

    /// The exact key used in the `custom_attributes` mapping.
    #[must_use]
    pub fn as_key(self) -> &'static str {
        match self {
            Lang::EsCr => "es-CR",
            Lang::EnCr => "en-CR",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for Lang {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::ALL
            .into_iter()
            .find(|lang| lang.as_key() == s)
            .ok_or_else(|| CoreError::UnknownLang(s.to_string()))
    }
}
