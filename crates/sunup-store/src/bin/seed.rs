//! # Sample Catalog Generator
//!
//! Writes a realistic breakfast-shop catalog file for development, plus an
//! optional sample order log.
//!
//! ## Usage
//! ```bash
//! # Write ./menu.json (default)
//! cargo run -p sunup-store --bin seed
//!
//! # Custom paths
//! cargo run -p sunup-store --bin seed -- --out ./data/menu.json
//! cargo run -p sunup-store --bin seed -- --orders ./data/orders.json
//! ```
//!
//! ## Generated Catalog
//! Covers every pricing shape the resolver handles:
//! - regular / with-egg toasts
//! - small / medium / large drinks
//! - crust-variant pancakes and noodles
//! - piece-count nuggets
//! - bundle combos and single-price sides
//! - flavored items with and without multiple price options

use std::env;

use chrono::{Duration, Local};
use sunup_core::cart::Cart;
use sunup_core::menu::{CatalogDoc, CategoryDoc, MenuItem, VariantKind};
use sunup_core::pricing;
use sunup_store::{CatalogStore, OrderLedger};
use tracing_subscriber::EnvFilter;

/// (category, note, items) for the sample menu.
fn sample_categories() -> Vec<(&'static str, Option<&'static str>, Vec<MenuItem>)> {
    vec![
        (
            "Toasts",
            None,
            vec![
                MenuItem::new("Ham Toast")
                    .with_price(VariantKind::Regular, 35)
                    .with_price(VariantKind::WithEgg, 45),
                MenuItem::new("Pork Floss Toast")
                    .with_price(VariantKind::Regular, 40)
                    .with_price(VariantKind::WithEgg, 50),
                MenuItem::new("Jam Toast")
                    .with_price(VariantKind::Regular, 25)
                    .with_flavors(["Strawberry", "Peanut", "Chocolate"]),
            ],
        ),
        (
            "Egg Pancakes",
            Some("made to order"),
            vec![
                MenuItem::new("Egg Pancake Roll")
                    .with_price(VariantKind::DanbingCrust, 35)
                    .with_price(VariantKind::HefenCrust, 40)
                    .with_flavors(["Original", "Bacon", "Corn"]),
                MenuItem::new("Plain Pancake Roll").with_price(VariantKind::DanbingCrust, 30),
            ],
        ),
        (
            "Fried Sides",
            None,
            vec![
                MenuItem::new("Chicken Nuggets")
                    .with_price(VariantKind::EightPieces, 50)
                    .with_price(VariantKind::TenPieces, 60),
                MenuItem::new("Fries")
                    .with_price(VariantKind::Small, 30)
                    .with_price(VariantKind::Large, 45),
                MenuItem::new("Hash Brown").with_price(VariantKind::Single, 15),
            ],
        ),
        (
            "Drinks",
            Some("iced available"),
            vec![
                MenuItem::new("Milk Tea")
                    .with_price(VariantKind::Small, 25)
                    .with_price(VariantKind::Medium, 30)
                    .with_price(VariantKind::Large, 35),
                MenuItem::new("Soy Milk")
                    .with_price(VariantKind::Small, 20)
                    .with_price(VariantKind::Large, 30),
                MenuItem::new("Black Tea").with_price(VariantKind::Single, 20),
            ],
        ),
        (
            "Combos",
            None,
            vec![
                MenuItem::new("Combo A (toast + drink)").with_price(VariantKind::Bundle, 55),
                MenuItem::new("Combo B (pancake + nuggets + drink)")
                    .with_price(VariantKind::Bundle, 95),
            ],
        ),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut out_path = String::from("./menu.json");
    let mut orders_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--orders" => {
                if i + 1 < args.len() {
                    orders_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Sunup POS Sample Catalog Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --out <PATH>     Catalog file path (default: ./menu.json)");
                println!("      --orders <PATH>  Also write a sample order log");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Generating catalog...");

    let doc = CatalogDoc {
        menu_name: "Sunup Breakfast".to_string(),
        source_files: Vec::new(),
        categories: sample_categories()
            .into_iter()
            .map(|(category, note, items)| CategoryDoc {
                category_name: category.to_string(),
                note: note.map(str::to_string),
                items,
            })
            .collect(),
    };
    // Round-tripping through parse backfills the item ids.
    let store = CatalogStore::parse(&serde_json::to_string(&doc)?)?;
    store.save(&out_path)?;
    println!(
        "✓ Wrote {} items in {} categories to {}",
        store.item_count(),
        store.categories().count(),
        out_path
    );

    if let Some(orders_path) = orders_path {
        println!();
        println!("Generating sample orders...");

        let mut ledger = OrderLedger::open(&orders_path);
        let mut written = 0;

        // A couple of yesterday's orders plus one for today, so the
        // per-day sequence reset is visible in the file.
        for (days_ago, picks) in [(1, 3usize), (0, 1)] {
            let at = Local::now() - Duration::days(days_ago);
            for _ in 0..picks {
                let mut cart = Cart::new();
                for item in store.items().take(2) {
                    let selections = pricing::selectable_variants(item);
                    if let (Some(pick), Some(category)) =
                        (selections.first(), store.category_of(item.id))
                    {
                        cart.add_or_increment(item, category, &pick.label, pick.price);
                    }
                }

                let id = ledger.next_order_id_for(at.date_naive());
                ledger.append(cart.checkout(id, at))?;
                written += 1;
            }
        }

        println!("✓ Wrote {} orders to {}", written, orders_path);
    }

    println!();
    println!("✓ Seed complete!");
    Ok(())
}
