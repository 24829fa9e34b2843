//! Immutable size conversion table.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use super::data::BUILTIN_ROWS;
use super::types::{Brand, Category, Gender, SizeToken};

/// Static row layout: source key, then `(target brand, target size)` pairs.
pub(super) type Row = (
    Category,
    Gender,
    Brand,
    &'static str,
    &'static [(Brand, &'static str)],
);

/// Target brand → equivalent size in that brand's scheme.
pub type BrandSizes = BTreeMap<Brand, String>;

/// Full lookup path for one source size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SizeKey {
    pub category: Category,
    pub gender: Gender,
    pub brand: Brand,
    pub size: SizeToken,
}

/// An A→B entry with no B→A entry leading back to the same size.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Asymmetry {
    pub from: SizeKey,
    pub to_brand: Brand,
    pub to_size: String,
    /// What the reverse path resolves to, if anything
    pub reverse: Option<String>,
}

static BUILTIN: LazyLock<SizeTable> = LazyLock::new(|| {
    SizeTable::from_entries(BUILTIN_ROWS.iter().map(|(category, gender, brand, size, targets)| {
        let key = SizeKey {
            category: *category,
            gender: *gender,
            brand: *brand,
            size: SizeToken::normalize(size),
        };
        let targets: BrandSizes = targets
            .iter()
            .map(|(to, to_size)| (*to, (*to_size).to_string()))
            .collect();
        (key, targets)
    }))
});

/// Read-only mapping from [`SizeKey`] to the sizes of every other brand.
///
/// Never mutated after construction; share it by reference.
#[derive(Debug, Clone, Default)]
pub struct SizeTable {
    entries: HashMap<SizeKey, BrandSizes>,
}

impl SizeTable {
    /// The built-in table, initialised on first use.
    pub fn builtin() -> &'static SizeTable {
        &BUILTIN
    }

    /// Build a table from explicit entries. Entries sharing a key are merged.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (SizeKey, BrandSizes)>,
    {
        let mut map: HashMap<SizeKey, BrandSizes> = HashMap::new();
        for (key, targets) in entries {
            map.entry(key).or_default().extend(targets);
        }
        Self { entries: map }
    }

    /// Target sizes for one source size, or `None` if any part of the key is absent.
    pub fn get(
        &self,
        category: Category,
        gender: Gender,
        brand: Brand,
        size: &SizeToken,
    ) -> Option<&BrandSizes> {
        let key = SizeKey {
            category,
            gender,
            brand,
            size: size.clone(),
        };
        self.entries.get(&key)
    }

    /// Full five-level lookup. Never partially matches.
    pub fn lookup(
        &self,
        category: Category,
        gender: Gender,
        from: Brand,
        size: &SizeToken,
        to: Brand,
    ) -> Option<&str> {
        self.get(category, gender, from, size)?
            .get(&to)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SizeKey, &BrandSizes)> {
        self.entries.iter()
    }

    /// All entries ordered by category, gender, brand, then size.
    pub fn sorted(&self) -> Vec<(&SizeKey, &BrandSizes)> {
        let mut rows: Vec<_> = self.entries.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }

    /// Report every entry whose reverse path does not lead back to its source size.
    pub fn missing_reciprocals(&self) -> Vec<Asymmetry> {
        let mut found = Vec::new();
        for (key, targets) in &self.entries {
            for (to_brand, to_size) in targets {
                let reverse = self
                    .lookup(
                        key.category,
                        key.gender,
                        *to_brand,
                        &SizeToken::normalize(to_size),
                        key.brand,
                    )
                    .map(str::to_string);
                if reverse.as_deref() != Some(key.size.as_str()) {
                    found.push(Asymmetry {
                        from: key.clone(),
                        to_brand: *to_brand,
                        to_size: to_size.clone(),
                        reverse,
                    });
                }
            }
        }
        found.sort();
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(category: Category, gender: Gender, brand: Brand, size: &str) -> SizeKey {
        SizeKey {
            category,
            gender,
            brand,
            size: SizeToken::normalize(size),
        }
    }

    fn targets(pairs: &[(Brand, &str)]) -> BrandSizes {
        pairs.iter().map(|(b, s)| (*b, s.to_string())).collect()
    }

    #[test]
    fn test_builtin_has_one_entry_per_row() {
        let table = SizeTable::builtin();
        assert_eq!(table.len(), BUILTIN_ROWS.len());
        assert!(!table.is_empty());
    }

    #[test]
    fn test_builtin_lookup_returns_stored_value_for_every_entry() {
        let table = SizeTable::builtin();
        for (category, gender, brand, size, row_targets) in BUILTIN_ROWS {
            for (to, expected) in *row_targets {
                let got = table.lookup(*category, *gender, *brand, &SizeToken::normalize(size), *to);
                assert_eq!(got, Some(*expected), "{category}/{gender}/{brand}/{size} -> {to}");
            }
        }
    }

    #[test]
    fn test_builtin_has_no_identity_entries() {
        for (key, targets) in SizeTable::builtin().iter() {
            assert!(!targets.contains_key(&key.brand), "identity entry at {key:?}");
        }
    }

    #[test]
    fn test_builtin_is_reciprocal() {
        assert!(SizeTable::builtin().missing_reciprocals().is_empty());
    }

    #[test]
    fn test_lookup_missing_level_is_none() {
        let table = SizeTable::builtin();
        let eleven = SizeToken::normalize("11");
        assert_eq!(
            table.lookup(Category::Shoes, Gender::Male, Brand::Nike, &eleven, Brand::Adidas),
            None
        );
        let s = SizeToken::normalize("S");
        // Male jackets start at M
        assert_eq!(
            table.lookup(Category::Jackets, Gender::Male, Brand::Nike, &s, Brand::Zara),
            None
        );
    }

    #[test]
    fn test_missing_reciprocals_reports_one_way_entries() {
        let table = SizeTable::from_entries([
            (
                key(Category::Pants, Gender::Male, Brand::Nike, "32"),
                targets(&[(Brand::Zara, "32"), (Brand::Adidas, "31")]),
            ),
            (
                key(Category::Pants, Gender::Male, Brand::Zara, "32"),
                targets(&[(Brand::Nike, "32")]),
            ),
        ]);

        let gaps = table.missing_reciprocals();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].from.brand, Brand::Nike);
        assert_eq!(gaps[0].to_brand, Brand::Adidas);
        assert_eq!(gaps[0].reverse, None);
    }

    #[test]
    fn test_from_entries_merges_duplicate_keys() {
        let k = key(Category::Shoes, Gender::Female, Brand::Nike, "6");
        let table = SizeTable::from_entries([
            (k.clone(), targets(&[(Brand::Adidas, "38")])),
            (k.clone(), targets(&[(Brand::Zara, "38")])),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(k.category, k.gender, k.brand, &k.size).map(|t| t.len()), Some(2));
    }

    #[test]
    fn test_sorted_orders_by_key() {
        let rows = SizeTable::builtin().sorted();
        assert!(rows.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(rows[0].0.category, Category::Tshirts);
    }
}
