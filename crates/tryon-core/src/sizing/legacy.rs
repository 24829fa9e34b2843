//! Flat brand-to-brand size map from the first release.
//!
//! Predates categories and genders: Nike 40 = Adidas 44 = Zara M. Lookups are
//! case-insensitive on brand and exact on size. Kept for callers that still
//! send the old three-field form.

/// Map a size between brands using the flat table.
pub fn mapped_size(from_brand: &str, from_size: &str, to_brand: &str) -> Option<&'static str> {
    let targets: &[(&str, &str)] = match (from_brand.to_lowercase().as_str(), from_size) {
        ("nike", "40") => &[("adidas", "44"), ("zara", "M")],
        ("nike", "42") => &[("adidas", "46"), ("zara", "L")],
        ("adidas", "44") => &[("nike", "40"), ("zara", "M")],
        ("adidas", "46") => &[("nike", "42"), ("zara", "L")],
        _ => return None,
    };
    let to = to_brand.to_lowercase();
    targets
        .iter()
        .find(|(brand, _)| *brand == to)
        .map(|(_, size)| *size)
}
