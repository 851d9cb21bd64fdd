//! The `askrate history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use askrate_core::scoring;
use askrate_store::Store;

pub fn execute(ratings_store: PathBuf) -> Result<()> {
    let store = Store::open(&ratings_store)?;
    let keys = store.keys()?;
    let ratings: Vec<i64> = store.all_stored()?;

    if keys.is_empty() {
        println!("No ratings recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Session", "Rating"]);
    for (key, rating) in keys.iter().zip(&ratings) {
        table.add_row(vec![key.clone(), format!("{rating}%")]);
    }
    println!("{table}");

    let divisor = keys.last().and_then(|k| k.parse::<i64>().ok()).unwrap_or(0);
    match scoring::average_rating(&ratings, divisor) {
        Some(average) => println!("Average rating is {average}"),
        None => println!("Average rating is unavailable (non-numeric session keys)."),
    }
    Ok(())
}
