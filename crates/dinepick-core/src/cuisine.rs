//! The closed cuisine table and its search keywords.

use std::fmt;
use std::str::FromStr;

/// Cuisine categories offered by the picker. `Custom` takes its keyword from
/// free text instead of the fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cuisine {
    Chinese,
    Japanese,
    Western,
    Korean,
    Custom,
}

impl Cuisine {
    pub const ALL: [Cuisine; 5] = [
        Cuisine::Chinese,
        Cuisine::Japanese,
        Cuisine::Western,
        Cuisine::Korean,
        Cuisine::Custom,
    ];

    /// Stable key used on the command line and in logs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Cuisine::Chinese => "chinese",
            Cuisine::Japanese => "japanese",
            Cuisine::Western => "western",
            Cuisine::Korean => "korean",
            Cuisine::Custom => "custom",
        }
    }

    /// Search keyword for a predefined cuisine. `Custom` has none of its own.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Cuisine::Chinese => Some("中式餐廳"),
            Cuisine::Japanese => Some("日本料理"),
            Cuisine::Western => Some("西式餐廳"),
            Cuisine::Korean => Some("韓式料理"),
            Cuisine::Custom => None,
        }
    }

    /// Label shown in the cuisine selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Cuisine::Chinese => "中式料理",
            Cuisine::Japanese => "日本料理",
            Cuisine::Western => "西式料理",
            Cuisine::Korean => "韓式料理",
            Cuisine::Custom => "自訂(在下方輸入)",
        }
    }

    /// Looks up a cuisine by key. Unrecognized or empty keys yield `None`,
    /// which means "no keyword filter".
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Cuisine::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cuisine \"{0}\" (expected one of chinese, japanese, western, korean, custom)")]
pub struct UnknownCuisine(pub String);

impl FromStr for Cuisine {
    type Err = UnknownCuisine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cuisine::from_key(s).ok_or_else(|| UnknownCuisine(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_cuisines_map_to_fixed_keywords() {
        assert_eq!(Cuisine::Chinese.keyword(), Some("中式餐廳"));
        assert_eq!(Cuisine::Japanese.keyword(), Some("日本料理"));
        assert_eq!(Cuisine::Western.keyword(), Some("西式餐廳"));
        assert_eq!(Cuisine::Korean.keyword(), Some("韓式料理"));
        assert_eq!(Cuisine::Custom.keyword(), None);
    }

    #[test]
    fn from_key_is_case_insensitive_and_trims() {
        assert_eq!(Cuisine::from_key(" Japanese "), Some(Cuisine::Japanese));
        assert_eq!(Cuisine::from_key("KOREAN"), Some(Cuisine::Korean));
    }

    #[test]
    fn from_key_rejects_unknown_and_empty() {
        assert_eq!(Cuisine::from_key("thai"), None);
        assert_eq!(Cuisine::from_key(""), None);
        assert!("thai".parse::<Cuisine>().is_err());
    }
}
