//! Subcommand implementations.

pub mod config;
pub mod inventory;
pub mod resolve;
pub mod serve;
pub mod sizes;

use tryon_core::{Brand, Category, Gender};

/// clap value parser for brand names.
pub(crate) fn parse_brand(raw: &str) -> Result<Brand, String> {
    Brand::parse(raw).ok_or_else(|| format!("unknown brand '{raw}' (expected nike, adidas or zara)"))
}

/// clap value parser for genders.
pub(crate) fn parse_gender(raw: &str) -> Result<Gender, String> {
    Gender::parse(raw).ok_or_else(|| format!("unknown gender '{raw}' (expected male or female)"))
}

/// clap value parser for categories.
pub(crate) fn parse_category(raw: &str) -> Result<Category, String> {
    Category::parse(raw).ok_or_else(|| {
        format!("unknown category '{raw}' (expected tshirts, pants, jackets or shoes)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_parsers_normalize() {
        assert_eq!(parse_brand(" NIKE "), Ok(Brand::Nike));
        assert_eq!(parse_gender("Female"), Ok(Gender::Female));
        assert_eq!(parse_category("T-Shirts"), Ok(Category::Tshirts));
    }

    #[test]
    fn test_value_parsers_name_the_bad_token() {
        assert!(parse_brand("puma").unwrap_err().contains("'puma'"));
        assert!(parse_category("hats").is_err());
    }
}
