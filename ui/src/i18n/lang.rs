//! Supported UI languages.
//!
//! English is the authoring language: its strings live directly in the
//! markup, every other language is applied on top and can be undone.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Hi,
    Ta,
    Te,
}

impl Lang {
    /// Selector and cycle order.
    pub const ALL: [Lang; 4] = [Lang::En, Lang::Hi, Lang::Ta, Lang::Te];

    /// BCP 47 primary subtag, also the catalog file stem.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
            Lang::Ta => "ta",
            Lang::Te => "te",
        }
    }

    /// Label shown on the selector, written in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Hi => "हिंदी",
            Lang::Ta => "தமிழ்",
            Lang::Te => "తెలుగు",
        }
    }

    /// Parse a language code, tolerating case and region qualifiers
    /// (`hi-IN`, `ta_IN`) by matching the primary subtag only.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "hi" => Some(Lang::Hi),
            "ta" => Some(Lang::Ta),
            "te" => Some(Lang::Te),
            _ => None,
        }
    }

    /// Next language in selector order, wrapping around. Drives the
    /// quick-cycle affordance on compact layouts.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Whether this is the authoring language (no catalog, restore target).
    pub fn is_default(self) -> bool {
        self == Lang::En
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
