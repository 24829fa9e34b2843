//! The `tryon resolve` command: one-off size translation.

use clap::Args;
use serde::Serialize;
use tryon_core::sizing::legacy;
use tryon_core::{Config, IdentityPolicy, SizeResolver, SizeTable};

/// Arguments for the `resolve` command.
///
/// Values are taken as typed on the storefront form ("T-Shirts", "Male",
/// "m") and normalized the same way the API does.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Garment category (tshirts, pants, jackets, shoes)
    pub category: String,

    /// Gender (male, female)
    pub gender: String,

    /// Brand the size comes from
    pub from_brand: String,

    /// Size in the source brand's scheme
    pub from_size: String,

    /// Brand to translate into
    pub to_brand: String,

    /// Return the size unchanged when both brands match
    #[arg(long)]
    pub passthrough: bool,

    /// Use the flat first-release map (category and gender are ignored)
    #[arg(long, conflicts_with = "passthrough")]
    pub legacy: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ResolveOutput<'a> {
    category: &'a str,
    gender: &'a str,
    from_brand: &'a str,
    from_size: &'a str,
    to_brand: &'a str,
    mapped_size: Option<String>,
}

/// Execute the resolve command. Fails when no mapping exists.
pub fn execute(args: ResolveArgs, config: &Config) -> anyhow::Result<()> {
    let mapped_size = lookup(&args, config);

    if args.json {
        let output = ResolveOutput {
            category: &args.category,
            gender: &args.gender,
            from_brand: &args.from_brand,
            from_size: &args.from_size,
            to_brand: &args.to_brand,
            mapped_size: mapped_size.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    match mapped_size {
        Some(size) => {
            if !args.json {
                println!("{size}");
            }
            Ok(())
        }
        None => anyhow::bail!(
            "Size mapping not found: [{}][{}][{}][{}][{}]",
            args.category,
            args.gender,
            args.from_brand,
            args.from_size,
            args.to_brand
        ),
    }
}

fn lookup(args: &ResolveArgs, config: &Config) -> Option<String> {
    if args.legacy {
        return legacy::mapped_size(&args.from_brand, &args.from_size, &args.to_brand)
            .map(str::to_string);
    }

    let identity = if args.passthrough {
        IdentityPolicy::Passthrough
    } else {
        config.sizing.identity
    };
    SizeResolver::new(SizeTable::builtin(), identity).resolve(
        &args.category,
        &args.gender,
        &args.from_brand,
        &args.from_size,
        &args.to_brand,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: [&str; 5]) -> ResolveArgs {
        ResolveArgs {
            category: values[0].into(),
            gender: values[1].into(),
            from_brand: values[2].into(),
            from_size: values[3].into(),
            to_brand: values[4].into(),
            passthrough: false,
            legacy: false,
            json: false,
        }
    }

    #[test]
    fn test_lookup_uses_table() {
        let a = args(["t-shirts", "Male", "Nike", "m", "Adidas"]);
        assert_eq!(lookup(&a, &Config::default()).as_deref(), Some("46"));
    }

    #[test]
    fn test_passthrough_flag_overrides_config() {
        let mut a = args(["shoes", "male", "nike", "9", "nike"]);
        assert_eq!(lookup(&a, &Config::default()), None);
        a.passthrough = true;
        assert_eq!(lookup(&a, &Config::default()).as_deref(), Some("9"));
    }

    #[test]
    fn test_legacy_map_ignores_category() {
        let mut a = args(["anything", "whatever", "Nike", "40", "zara"]);
        a.legacy = true;
        assert_eq!(lookup(&a, &Config::default()).as_deref(), Some("M"));
    }

    #[test]
    fn test_missing_mapping_is_an_error() {
        let a = args(["shoes", "male", "nike", "11", "adidas"]);
        let err = execute(a, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("[shoes][male][nike][11][adidas]"));
    }
}
