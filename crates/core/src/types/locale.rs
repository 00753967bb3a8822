//! Interface locales.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Locale`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The segment is not a supported locale.
    #[error("unsupported locale: {0}")]
    Unsupported(String),
}

/// A supported interface locale.
///
/// Every page outside the public set lives under a `/{locale}/` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
    Ar,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Self; 3] = [Self::Fr, Self::En, Self::Ar];

    /// Returns the path segment for this locale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Build an absolute path under this locale, e.g. `/fr/user/dashboard`.
    #[must_use]
    pub fn path(self, rest: &str) -> String {
        format!("/{}/{}", self.as_str(), rest.trim_start_matches('/'))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(Self::Fr),
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            _ => Err(LocaleError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported() {
        assert_eq!("fr".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ar".parse::<Locale>().unwrap(), Locale::Ar);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("FR".parse::<Locale>().is_err());
        assert!("de".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_path() {
        assert_eq!(Locale::Ar.path("user/dashboard"), "/ar/user/dashboard");
        assert_eq!(Locale::En.path("/admin/dossiers"), "/en/admin/dossiers");
    }
}
