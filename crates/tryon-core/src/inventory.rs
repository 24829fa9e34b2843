//! Garment asset lookup on disk.
//!
//! Assets live under `{root}/{brand}/{gender}/{category}/` and are named
//! `{brand}-{g}-{category}-{size}{ext}`, where `g` is the gender initial:
//! `assets/inventory/nike/male/tshirts/nike-m-tshirts-M.jpg`.

use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::sizing::{Brand, Category, Gender};

/// Locates garment images and default model images.
#[derive(Debug, Clone)]
pub struct GarmentInventory {
    root: PathBuf,
    default_models_dir: PathBuf,
    extensions: Vec<String>,
}

/// A garment image found in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GarmentAsset {
    pub path: PathBuf,
    pub brand: Brand,
    pub gender: Gender,
    pub category: Category,
    pub size: String,
}

/// Optional filters for [`GarmentInventory::list`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryFilter {
    pub brand: Option<Brand>,
    pub gender: Option<Gender>,
    pub category: Option<Category>,
}

impl InventoryFilter {
    fn matches(&self, asset: &GarmentAsset) -> bool {
        self.brand.map_or(true, |b| b == asset.brand)
            && self.gender.map_or(true, |g| g == asset.gender)
            && self.category.map_or(true, |c| c == asset.category)
    }
}

impl GarmentInventory {
    pub fn new(root: PathBuf, default_models_dir: PathBuf, extensions: Vec<String>) -> Self {
        Self {
            root,
            default_models_dir,
            extensions,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.inventory_root(),
            config.default_models_dir(),
            config.inventory.extensions.clone(),
        )
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every size of one garment line.
    pub fn category_dir(&self, brand: Brand, gender: Gender, category: Category) -> PathBuf {
        self.root
            .join(brand.as_str())
            .join(gender.as_str())
            .join(category.as_str())
    }

    /// Asset filename without extension.
    pub fn file_stem(brand: Brand, gender: Gender, category: Category, size: &str) -> String {
        format!("{brand}-{}-{category}-{size}", gender.initial())
    }

    /// First existing asset for the size, trying extensions in configured order.
    pub fn find(
        &self,
        brand: Brand,
        gender: Gender,
        category: Category,
        size: &str,
    ) -> Option<PathBuf> {
        let base = self.category_dir(brand, gender, category);
        if !base.is_dir() {
            tracing::warn!("Inventory path not found: {}", base.display());
            return None;
        }
        self.candidates(base, brand, gender, category, size)
            .find(|path| path.is_file())
    }

    /// Every existing asset for the size, one per matching extension.
    pub fn find_all(
        &self,
        brand: Brand,
        gender: Gender,
        category: Category,
        size: &str,
    ) -> Vec<PathBuf> {
        let base = self.category_dir(brand, gender, category);
        self.candidates(base, brand, gender, category, size)
            .filter(|path| path.is_file())
            .collect()
    }

    /// Candidate paths under `base`, in extension order.
    fn candidates(
        &self,
        base: PathBuf,
        brand: Brand,
        gender: Gender,
        category: Category,
        size: &str,
    ) -> impl Iterator<Item = PathBuf> + '_ {
        let stem = Self::file_stem(brand, gender, category, size);
        self.extensions
            .iter()
            .map(move |ext| base.join(format!("{stem}{ext}")))
    }

    /// Walk the inventory and return every recognizable asset, sorted by path.
    ///
    /// Files whose names don't follow the naming scheme are skipped.
    pub fn list(&self, filter: InventoryFilter) -> Vec<GarmentAsset> {
        let mut assets: Vec<GarmentAsset> = WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| self.parse_asset(e.path()))
            .filter(|asset| filter.matches(asset))
            .collect();

        assets.sort_by(|a, b| a.path.cmp(&b.path));
        assets
    }

    /// Parse `nike-m-tshirts-M.jpg` back into its parts.
    fn parse_asset(&self, path: &Path) -> Option<GarmentAsset> {
        let name = path.file_name()?.to_str()?;
        let lower = name.to_lowercase();
        let ext = self
            .extensions
            .iter()
            .find(|ext| lower.ends_with(&ext.to_lowercase()))?;
        let stem = name.get(..name.len() - ext.len())?;

        let mut parts = stem.splitn(4, '-');
        let brand = Brand::parse(parts.next()?)?;
        let gender = Gender::from_initial(parts.next()?)?;
        let category = Category::parse(parts.next()?)?;
        let size = parts.next().filter(|s| !s.is_empty())?;

        Some(GarmentAsset {
            path: path.to_path_buf(),
            brand,
            gender,
            category,
            size: size.to_string(),
        })
    }

    /// Fallback person image for a gender (`model_{gender}.jpg`), if present.
    pub fn default_model(&self, gender: Gender) -> Option<PathBuf> {
        let path = self.default_model_path(gender);
        path.is_file().then_some(path)
    }

    pub fn default_model_path(&self, gender: Gender) -> PathBuf {
        self.default_models_dir.join(format!("model_{gender}.jpg"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn inventory(dir: &TempDir) -> GarmentInventory {
        GarmentInventory::new(
            dir.path().join("inventory"),
            dir.path().join("default_models"),
            vec![".jpg".into(), ".jpeg".into(), ".png".into()],
        )
    }

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"img").unwrap();
    }

    #[test]
    fn test_file_stem_uses_gender_initial() {
        assert_eq!(
            GarmentInventory::file_stem(Brand::Nike, Gender::Male, Category::Tshirts, "M"),
            "nike-m-tshirts-M"
        );
        assert_eq!(
            GarmentInventory::file_stem(Brand::Zara, Gender::Female, Category::Shoes, "38"),
            "zara-f-shoes-38"
        );
    }

    #[test]
    fn test_find_prefers_extension_order() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);
        let base = inv.category_dir(Brand::Adidas, Gender::Male, Category::Tshirts);
        touch(&base.join("adidas-m-tshirts-44.png"));
        touch(&base.join("adidas-m-tshirts-44.jpg"));

        let found = inv
            .find(Brand::Adidas, Gender::Male, Category::Tshirts, "44")
            .unwrap();
        assert!(found.ends_with("adidas-m-tshirts-44.jpg"));

        let all = inv.find_all(Brand::Adidas, Gender::Male, Category::Tshirts, "44");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_find_missing_directory_or_file() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);
        assert_eq!(inv.find(Brand::Nike, Gender::Female, Category::Pants, "26"), None);

        let base = inv.category_dir(Brand::Nike, Gender::Female, Category::Pants);
        touch(&base.join("nike-f-pants-28.jpg"));
        assert_eq!(inv.find(Brand::Nike, Gender::Female, Category::Pants, "26"), None);
        assert!(inv.find_all(Brand::Nike, Gender::Female, Category::Pants, "26").is_empty());
    }

    #[test]
    fn test_list_parses_and_filters_assets() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);
        touch(&inv.category_dir(Brand::Nike, Gender::Male, Category::Tshirts).join("nike-m-tshirts-M.jpg"));
        touch(&inv.category_dir(Brand::Zara, Gender::Female, Category::Shoes).join("zara-f-shoes-38.PNG"));
        touch(&inv.category_dir(Brand::Zara, Gender::Female, Category::Shoes).join("notes.txt"));
        touch(&inv.root().join("stray-file.jpg"));

        let all = inv.list(InventoryFilter::default());
        assert_eq!(all.len(), 2);

        let zara = inv.list(InventoryFilter {
            brand: Some(Brand::Zara),
            ..InventoryFilter::default()
        });
        assert_eq!(zara.len(), 1);
        assert_eq!(zara[0].category, Category::Shoes);
        assert_eq!(zara[0].gender, Gender::Female);
        assert_eq!(zara[0].size, "38");
    }

    #[test]
    fn test_default_model_lookup() {
        let dir = TempDir::new().unwrap();
        let inv = inventory(&dir);
        assert_eq!(inv.default_model(Gender::Male), None);

        touch(&inv.default_model_path(Gender::Male));
        let path = inv.default_model(Gender::Male).unwrap();
        assert!(path.ends_with("model_male.jpg"));
        assert_eq!(inv.default_model(Gender::Female), None);
    }
}
