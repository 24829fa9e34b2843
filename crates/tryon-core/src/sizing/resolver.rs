//! Brand-to-brand size resolution.

use serde::{Deserialize, Serialize};

use super::table::SizeTable;
use super::types::{Brand, Category, Gender, SizeToken};

/// How to treat a request whose source and target brand are the same.
///
/// The built-in table has no identity rows, so [`IdentityPolicy::TableOnly`]
/// fails same-brand requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityPolicy {
    /// Only the table decides; same-brand requests need explicit rows
    #[default]
    TableOnly,
    /// Same-brand requests return the source size if the table knows it
    Passthrough,
}

/// Translates a size between brand schemes within one category and gender.
///
/// Pure lookup over shared immutable data: safe to call from any number of
/// handlers at once.
#[derive(Debug, Clone, Copy)]
pub struct SizeResolver<'t> {
    table: &'t SizeTable,
    identity: IdentityPolicy,
}

impl SizeResolver<'static> {
    /// Resolver over the built-in table with the default identity policy.
    pub fn builtin() -> Self {
        Self::new(SizeTable::builtin(), IdentityPolicy::default())
    }
}

impl<'t> SizeResolver<'t> {
    pub fn new(table: &'t SizeTable, identity: IdentityPolicy) -> Self {
        Self { table, identity }
    }

    pub fn with_identity(self, identity: IdentityPolicy) -> Self {
        Self { identity, ..self }
    }

    pub fn identity(&self) -> IdentityPolicy {
        self.identity
    }

    pub fn table(&self) -> &'t SizeTable {
        self.table
    }

    /// Resolve a size from raw form values.
    ///
    /// Inputs are normalized first (case, hyphens in the category,
    /// whitespace, letter sizes uppercased). Returns `None` when any token
    /// is unknown or any level of the lookup path is missing.
    pub fn resolve(
        &self,
        category: &str,
        gender: &str,
        from_brand: &str,
        from_size: &str,
        to_brand: &str,
    ) -> Option<String> {
        let size = SizeToken::normalize(from_size);
        let resolved = Category::parse(category).and_then(|category| {
            let gender = Gender::parse(gender)?;
            let from = Brand::parse(from_brand)?;
            let to = Brand::parse(to_brand)?;
            self.resolve_typed(category, gender, from, &size, to)
        });

        if resolved.is_none() {
            tracing::debug!(
                "Size mapping failed for path [{}][{}][{}][{}][{}]",
                category.to_lowercase().replace('-', "").trim(),
                gender.trim().to_lowercase(),
                from_brand.trim().to_lowercase(),
                size,
                to_brand.trim().to_lowercase(),
            );
        }
        resolved
    }

    /// Resolve a size from already-parsed keys.
    pub fn resolve_typed(
        &self,
        category: Category,
        gender: Gender,
        from: Brand,
        size: &SizeToken,
        to: Brand,
    ) -> Option<String> {
        if from == to && self.identity == IdentityPolicy::Passthrough {
            return self
                .table
                .get(category, gender, from, size)
                .map(|_| size.to_string());
        }
        self.table
            .lookup(category, gender, from, size, to)
            .map(str::to_string)
    }
}

impl Default for SizeResolver<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(category: &str, gender: &str, from: &str, size: &str, to: &str) -> Option<String> {
        SizeResolver::builtin().resolve(category, gender, from, size, to)
    }

    #[test]
    fn test_tshirt_nike_small_to_adidas() {
        assert_eq!(resolve("tshirts", "male", "nike", "S", "adidas").as_deref(), Some("44"));
    }

    #[test]
    fn test_lowercase_size_is_normalized() {
        assert_eq!(resolve("tshirts", "male", "nike", "s", "zara").as_deref(), Some("S"));
    }

    #[test]
    fn test_female_pants_adidas_to_nike() {
        assert_eq!(resolve("pants", "female", "adidas", "34", "nike").as_deref(), Some("26"));
    }

    #[test]
    fn test_absent_shoe_size_is_not_found() {
        assert_eq!(resolve("shoes", "male", "nike", "11", "adidas"), None);
    }

    #[test]
    fn test_same_brand_fails_under_table_only() {
        assert_eq!(resolve("jackets", "male", "nike", "M", "nike"), None);
    }

    #[test]
    fn test_same_brand_passthrough_returns_known_size() {
        let resolver = SizeResolver::builtin().with_identity(IdentityPolicy::Passthrough);
        assert_eq!(
            resolver.resolve("jackets", "male", "nike", "m", "Nike").as_deref(),
            Some("M")
        );
        // Male jackets have no S row, so passthrough still fails
        assert_eq!(resolver.resolve("jackets", "male", "nike", "S", "nike"), None);
        // Cross-brand lookups are unaffected
        assert_eq!(
            resolver.resolve("jackets", "male", "nike", "M", "adidas").as_deref(),
            Some("46")
        );
    }

    #[test]
    fn test_unknown_tokens_are_not_found() {
        assert_eq!(resolve("hats", "male", "nike", "M", "adidas"), None);
        assert_eq!(resolve("tshirts", "unisex", "nike", "M", "adidas"), None);
        assert_eq!(resolve("tshirts", "male", "puma", "M", "adidas"), None);
        assert_eq!(resolve("tshirts", "male", "nike", "M", "puma"), None);
        assert_eq!(resolve("", "", "", "", ""), None);
    }

    #[test]
    fn test_form_style_inputs_are_normalized() {
        assert_eq!(
            resolve("T-Shirts", " Male ", " NIKE", " l ", "Adidas ").as_deref(),
            Some("48")
        );
    }

    #[test]
    fn test_letter_case_does_not_matter_for_any_alphabetic_size() {
        for size in ["s", "m", "l"] {
            assert_eq!(
                resolve("tshirts", "female", "zara", size, "adidas"),
                resolve("tshirts", "female", "zara", &size.to_uppercase(), "adidas"),
            );
        }
    }

    #[test]
    fn test_padded_numeric_size_matches_plain() {
        assert_eq!(
            resolve("shoes", "male", "adidas", " 42 ", "nike"),
            resolve("shoes", "male", "adidas", "42", "nike"),
        );
        assert_eq!(resolve("shoes", "male", "adidas", " 42 ", "nike").as_deref(), Some("8"));
    }

    #[test]
    fn test_every_builtin_entry_resolves_through_strings() {
        let resolver = SizeResolver::builtin();
        for (key, targets) in resolver.table().iter() {
            for (to, expected) in targets {
                let got = resolver.resolve(
                    key.category.as_str(),
                    key.gender.as_str(),
                    key.brand.as_str(),
                    key.size.as_str(),
                    to.as_str(),
                );
                assert_eq!(got.as_deref(), Some(expected.as_str()));
            }
        }
    }
}
