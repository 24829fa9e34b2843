//! Garment size translation between brand sizing schemes.
//!
//! A size label only means something inside one brand's scheme, one garment
//! category and one gender. [`SizeTable`] holds the static conversion data and
//! [`SizeResolver`] applies input normalization and the identity policy on
//! top of it.
//!
//! ```rust,ignore
//! use tryon_core::sizing::SizeResolver;
//!
//! let resolver = SizeResolver::builtin();
//! assert_eq!(resolver.resolve("T-Shirts", "male", "Nike", "s", "adidas").as_deref(), Some("44"));
//! ```

mod data;
pub mod legacy;
mod resolver;
mod table;
mod types;

pub use resolver::{IdentityPolicy, SizeResolver};
pub use table::{Asymmetry, BrandSizes, SizeKey, SizeTable};
pub use types::{Brand, Category, Gender, SizeToken};
