//! Tryon Core - size translation and virtual try-on library.
//!
//! The heart of the crate is a static cross-brand size table: given a garment
//! category, gender, the size a shopper wears in one brand, and a target
//! brand, it answers with the equivalent size in the target brand's scheme.
//! Around it sit the services that turn a resolved size into a try-on image
//! and a garment photo into product copy.
//!
//! # Architecture
//!
//! ```text
//! form ──► SizeResolver ──► GarmentInventory ──► ImageGenerator ──► PNG
//! photo ─► ImageDecoder ──► JPEG downscale ───► ProductDescriber ─► ProductContent
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use tryon_core::SizeResolver;
//!
//! let resolver = SizeResolver::builtin();
//! let size = resolver.resolve("t-shirts", "Male", "Nike", "m", "Adidas");
//! assert_eq!(size.as_deref(), Some("46"));
//! ```

// Module declarations
pub mod config;
pub mod describe;
pub mod error;
pub mod imaging;
pub mod inventory;
pub mod llm;
pub mod sizing;
pub mod tryon;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use describe::DescribeService;
pub use error::{ConfigError, DescribeError, Error, ImageError, ProviderError, Result, TryOnError};
pub use inventory::{GarmentAsset, GarmentInventory, InventoryFilter};
pub use llm::{ImageGenerator, ProductDescriber, ProviderFactory};
pub use sizing::{Brand, Category, Gender, IdentityPolicy, SizeResolver, SizeTable, SizeToken};
pub use tryon::{TryOnOutcome, TryOnRequest, TryOnService};
pub use types::{ProductAttributes, ProductContent};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
