//! Typed keys for the size table.
//!
//! Form input arrives as free text ("T-Shirts", " Nike ", "m"). Each key type
//! owns its normalization rule and parses into a closed enumeration, so an
//! unknown token is rejected before it ever reaches the table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Garment class. Each category is a separate sizing namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tshirts,
    Pants,
    Jackets,
    Shoes,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Tshirts, Self::Pants, Self::Jackets, Self::Shoes];

    /// Parse a category, ignoring case, hyphens and surrounding whitespace.
    ///
    /// `"T-Shirts"` and `"t-shirts"` both parse to [`Category::Tshirts`].
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.to_lowercase().replace('-', "");
        match key.trim() {
            "tshirts" => Some(Self::Tshirts),
            "pants" => Some(Self::Pants),
            "jackets" => Some(Self::Jackets),
            "shoes" => Some(Self::Shoes),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tshirts => "tshirts",
            Self::Pants => "pants",
            Self::Jackets => "jackets",
            Self::Shoes => "shoes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Self::Male, Self::Female];

    /// Parse a gender, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }

    /// Parse the single-letter form used in inventory filenames.
    pub fn from_initial(initial: &str) -> Option<Self> {
        match initial {
            "m" => Some(Self::Male),
            "f" => Some(Self::Female),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// First letter, as used in inventory filenames (`nike-m-tshirts-M.jpg`).
    pub fn initial(self) -> char {
        match self {
            Self::Male => 'm',
            Self::Female => 'f',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Retailer whose sizing scheme a size token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Nike,
    Adidas,
    Zara,
}

impl Brand {
    pub const ALL: [Brand; 3] = [Self::Nike, Self::Adidas, Self::Zara];

    /// Parse a brand, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "nike" => Some(Self::Nike),
            "adidas" => Some(Self::Adidas),
            "zara" => Some(Self::Zara),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nike => "nike",
            Self::Adidas => "adidas",
            Self::Zara => "zara",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A size label in canonical form.
///
/// Letter sizes are uppercased (`"m"` → `"M"`), anything containing a
/// non-letter is kept as given (`"42"`, `"10.5"`). Both are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeToken(String);

impl SizeToken {
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && trimmed.chars().all(char::is_alphabetic) {
            Self(trimmed.to_uppercase())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_strips_hyphens_and_case() {
        assert_eq!(Category::parse("T-Shirts"), Some(Category::Tshirts));
        assert_eq!(Category::parse("t-shirts"), Some(Category::Tshirts));
        assert_eq!(Category::parse("  PANTS "), Some(Category::Pants));
        assert_eq!(Category::parse("hats"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_gender_and_brand_parse_trim_and_lowercase() {
        assert_eq!(Gender::parse(" Female"), Some(Gender::Female));
        assert_eq!(Gender::parse("other"), None);
        assert_eq!(Brand::parse("  NIKE "), Some(Brand::Nike));
        assert_eq!(Brand::parse("Adidas"), Some(Brand::Adidas));
        assert_eq!(Brand::parse("puma"), None);
    }

    #[test]
    fn test_gender_initial_roundtrips() {
        for gender in Gender::ALL {
            let initial = gender.initial().to_string();
            assert_eq!(Gender::from_initial(&initial), Some(gender));
        }
    }

    #[test]
    fn test_size_token_uppercases_letter_sizes() {
        assert_eq!(SizeToken::normalize("m").as_str(), "M");
        assert_eq!(SizeToken::normalize(" xl ").as_str(), "XL");
    }

    #[test]
    fn test_size_token_keeps_numeric_sizes() {
        assert_eq!(SizeToken::normalize(" 42 ").as_str(), "42");
        assert_eq!(SizeToken::normalize("10.5").as_str(), "10.5");
        // Mixed tokens are not purely alphabetic, so case is preserved
        assert_eq!(SizeToken::normalize("2xl").as_str(), "2xl");
        assert_eq!(SizeToken::normalize("   ").as_str(), "");
    }

    #[test]
    fn test_display_matches_serde_names() {
        assert_eq!(Category::Tshirts.to_string(), "tshirts");
        assert_eq!(
            serde_json::to_string(&Brand::Zara).unwrap(),
            "\"zara\""
        );
    }
}
