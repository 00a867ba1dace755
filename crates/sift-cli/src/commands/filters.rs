use anyhow::Result;
use sift_config::Config;
use sift_storage::FilterStore;

use crate::cli::FiltersCommands;

pub async fn handle(cmd: FiltersCommands, config: &Config) -> Result<()> {
    let store = FilterStore::new(super::state_path(config));
    match cmd {
        FiltersCommands::Show => match store.load() {
            Some(query) => println!("{}", serde_json::to_string_pretty(&query)?),
            None => println!("No saved filters"),
        },
        FiltersCommands::Clear => {
            store.clear().await?;
            println!("Cleared saved filters");
        }
    }
    Ok(())
}
