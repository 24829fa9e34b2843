//! The `tryon inventory` command for browsing garment assets.

use clap::{Args, Subcommand};
use tryon_core::{Brand, Category, Config, GarmentInventory, Gender, InventoryFilter};

use super::{parse_brand, parse_category, parse_gender};

/// Arguments for the `inventory` command.
#[derive(Args, Debug)]
pub struct InventoryArgs {
    #[command(subcommand)]
    pub command: InventoryCommand,
}

/// Subcommands for the garment inventory.
#[derive(Subcommand, Debug)]
pub enum InventoryCommand {
    /// List assets, optionally filtered
    List {
        #[arg(long, value_parser = parse_brand)]
        brand: Option<Brand>,

        #[arg(long, value_parser = parse_gender)]
        gender: Option<Gender>,

        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,

        /// Print the assets as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the asset served for one size
    Find {
        #[arg(value_parser = parse_brand)]
        brand: Brand,

        #[arg(value_parser = parse_gender)]
        gender: Gender,

        #[arg(value_parser = parse_category)]
        category: Category,

        /// Size in the brand's own scheme
        size: String,
    },
}

/// Execute the inventory command.
pub fn execute(args: InventoryArgs, config: &Config) -> anyhow::Result<()> {
    let inventory = GarmentInventory::from_config(config);

    match args.command {
        InventoryCommand::List {
            brand,
            gender,
            category,
            json,
        } => {
            let assets = inventory.list(InventoryFilter {
                brand,
                gender,
                category,
            });
            if json {
                println!("{}", serde_json::to_string_pretty(&assets)?);
            } else if assets.is_empty() {
                println!("No assets under {}", inventory.root().display());
            } else {
                for asset in &assets {
                    println!(
                        "{:<7} {:<7} {:<8} {:<4} {}",
                        asset.brand,
                        asset.gender,
                        asset.category,
                        asset.size,
                        asset.path.display()
                    );
                }
            }
        }

        InventoryCommand::Find {
            brand,
            gender,
            category,
            size,
        } => match inventory.find(brand, gender, category, &size) {
            Some(path) => println!("{}", path.display()),
            None => anyhow::bail!(
                "Garment not found in inventory: {} under {}",
                GarmentInventory::file_stem(brand, gender, category, &size),
                inventory.category_dir(brand, gender, category).display()
            ),
        },
    }

    Ok(())
}
