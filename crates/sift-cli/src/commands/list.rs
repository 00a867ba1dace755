use anyhow::Result;
use sift_config::Config;
use sift_core::{FilterQuery, Paginator, Product, execute};
use sift_sources::{CatalogProvider, ProductProvider, demo_catalog};
use std::time::Duration;

use crate::cli::ListArgs;

pub async fn handle(args: ListArgs, config: &Config) -> Result<()> {
    let query = FilterQuery {
        brand: args.brand,
        category: args.category,
        max_price: args.max_price,
        max_rating: args.max_rating,
        sort: args.sort,
    };

    // One-shot mode skips the simulated network delay.
    let provider = CatalogProvider::new(demo_catalog()).with_latency(Duration::ZERO);
    let products = provider.fetch(&query).await?;
    let results = execute(&products, &query);

    let mut pager = Paginator::new(config.page_size);
    pager.set_items(results);
    for _ in 1..args.page.max(1) {
        if !pager.next() {
            break;
        }
    }

    print_page(&pager);
    Ok(())
}

fn print_page(pager: &Paginator<Product>) {
    if pager.current_slice().is_empty() {
        println!("No products found");
    } else {
        println!(
            "{:>3}  {:<22} {:<12} {:<12} {:>9} {:>6}",
            "id", "name", "brand", "category", "price", "rating"
        );
        for product in pager.current_slice() {
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
    if pager.has_previous() {
        nav.push_str("  [prev]");
    }
    if pager.has_next() {
        nav.push_str("  [next]");
    }
    println!(
        "Page {} of {} ({} products){nav}",
        pager.page(),
        pager.page_count(),
        pager.total()
    );
}
