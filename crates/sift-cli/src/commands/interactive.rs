use anyhow::Result;
use sift_config::Config;
use sift_core::max_price_of;
use sift_engine::{EngineConfig, EngineSnapshot, FilterEngine, FilterField};
use sift_sources::{CatalogProvider, demo_catalog};
use sift_storage::FilterStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn handle(config: &Config) -> Result<()> {
    let catalog = demo_catalog();
    let price_ceiling = max_price_of(&catalog);
    let provider = Arc::new(
        CatalogProvider::new(catalog)
            .with_latency(Duration::from_millis(config.provider_latency_ms)),
    );
    let store = Arc::new(FilterStore::new(super::state_path(config)));
    let engine = FilterEngine::spawn(
        provider,
        store,
        EngineConfig {
            debounce: Duration::from_millis(config.debounce_ms),
            page_size: config.page_size,
            persist: super::persist_mode(config),
        },
    );
    let mut snapshots = engine.subscribe();

    println!("Commands: brand=X  category=X  price=X  rating=X  sort=X  next  prev  show  quit");
    println!("Prices range from 0 to {price_ceiling:.2}; ratings from 0 to 5.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                render(&snapshot);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "" => {}
                    "quit" | "q" => break,
                    "next" | "n" => engine.next_page(),
                    "prev" | "p" => engine.previous_page(),
                    "show" => render(&engine.snapshot()),
                    other => match parse_edit(other) {
                        Some((field, value)) => engine.set_field(field, value),
                        None => println!("Unrecognized command: {other}"),
                    },
                }
            }
        }
    }

    engine.shutdown().await;
    Ok(())
}

fn parse_edit(line: &str) -> Option<(FilterField, String)> {
    let (key, value) = line.split_once('=')?;
    let field = match key.trim() {
        "brand" => FilterField::Brand,
        "category" => FilterField::Category,
        "price" => FilterField::MaxPrice,
        "rating" => FilterField::MaxRating,
        "sort" => FilterField::Sort,
        _ => return None,
    };
    Some((field, value.trim().to_string()))
}

fn render(snapshot: &EngineSnapshot) {
    if snapshot.loading {
        println!("Fetching products...");
        return;
    }
    if let Some(error) = &snapshot.error {
        println!("{error}");
        return;
    }
    if snapshot.page.items.is_empty() {
        println!("No products found");
    } else {
        for product in &snapshot.page.items {
            println!(
                "{:>3}  {:<22} {:<12} {:<12} {:>9.2} {:>6.1}",
                product.id,
                product.name,
                product.brand,
                product.category,
                product.price,
                product.rating
            );
        }
    }
    let mut nav = String::new();
    if snapshot.page.has_previous {
        nav.push_str("  [prev]");
    }
    if snapshot.page.has_next {
        nav.push_str("  [next]");
    }
    println!(
        "Page {} of {} ({} products){nav}",
        snapshot.page.page, snapshot.page.page_count, snapshot.page.total
    );
}
