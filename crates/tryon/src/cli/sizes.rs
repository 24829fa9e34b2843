//! The `tryon sizes` command for inspecting the conversion table.

use clap::{Args, Subcommand};
use serde::Serialize;
use tryon_core::sizing::{Asymmetry, BrandSizes, SizeKey};
use tryon_core::SizeTable;

/// Arguments for the `sizes` command.
#[derive(Args, Debug)]
pub struct SizesArgs {
    #[command(subcommand)]
    pub command: SizesCommand,
}

/// Subcommands for the size table.
#[derive(Subcommand, Debug)]
pub enum SizesCommand {
    /// Report entries whose reverse lookup does not lead back
    Audit {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every entry of the table
    Table {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct TableRow<'a> {
    #[serde(flatten)]
    key: &'a SizeKey,
    targets: &'a BrandSizes,
}

/// Execute the sizes command.
pub fn execute(args: SizesArgs) -> anyhow::Result<()> {
    let table = SizeTable::builtin();

    match args.command {
        SizesCommand::Audit { json } => {
            let gaps = table.missing_reciprocals();
            if json {
                println!("{}", serde_json::to_string_pretty(&gaps)?);
            } else if gaps.is_empty() {
                println!("All {} entries are reciprocal.", table.len());
            } else {
                for gap in &gaps {
                    println!("{}", describe_gap(gap));
                }
                println!("{} one-way mapping(s) in {} entries.", gaps.len(), table.len());
            }
        }

        SizesCommand::Table { json } => {
            let rows = table.sorted();
            if json {
                let rows: Vec<TableRow> = rows
                    .into_iter()
                    .map(|(key, targets)| TableRow { key, targets })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (key, targets) in rows {
                    println!("{}", format_row(key, targets));
                }
            }
        }
    }

    Ok(())
}

fn format_row(key: &SizeKey, targets: &BrandSizes) -> String {
    let targets: Vec<String> = targets
        .iter()
        .map(|(brand, size)| format!("{brand}={size}"))
        .collect();
    format!(
        "{:<8} {:<7} {:<7} {:<4} -> {}",
        key.category,
        key.gender,
        key.brand,
        key.size,
        targets.join(" ")
    )
}

fn describe_gap(gap: &Asymmetry) -> String {
    let from = &gap.from;
    let reverse = gap.reverse.as_deref().unwrap_or("nothing");
    format!(
        "{}/{}: {} {} -> {} {}, but {} {} -> {} gives {reverse}",
        from.category,
        from.gender,
        from.brand,
        from.size,
        gap.to_brand,
        gap.to_size,
        gap.to_brand,
        gap.to_size,
        from.brand
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tryon_core::{Brand, Category, Gender, SizeToken};

    fn key() -> SizeKey {
        SizeKey {
            category: Category::Pants,
            gender: Gender::Male,
            brand: Brand::Nike,
            size: SizeToken::normalize("32"),
        }
    }

    #[test]
    fn test_format_row_lists_targets_in_brand_order() {
        let targets: BrandSizes = [(Brand::Zara, "32".to_string()), (Brand::Adidas, "32".to_string())]
            .into_iter()
            .collect();
        let row = format_row(&key(), &targets);
        assert!(row.starts_with("pants"));
        assert!(row.ends_with("-> adidas=32 zara=32"));
    }

    #[test]
    fn test_describe_gap_names_both_directions() {
        let gap = Asymmetry {
            from: key(),
            to_brand: Brand::Adidas,
            to_size: "31".into(),
            reverse: None,
        };
        assert_eq!(
            describe_gap(&gap),
            "pants/male: nike 32 -> adidas 31, but adidas 31 -> nike gives nothing"
        );
    }

    #[test]
    fn test_table_rows_serialize_flat() {
        let targets: BrandSizes = [(Brand::Adidas, "32".to_string())].into_iter().collect();
        let k = key();
        let json = serde_json::to_value(TableRow {
            key: &k,
            targets: &targets,
        })
        .unwrap();
        assert_eq!(json["category"], "pants");
        assert_eq!(json["size"], "32");
        assert_eq!(json["targets"]["adidas"], "32");
    }
}
