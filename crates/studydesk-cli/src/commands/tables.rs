//! The `studydesk tables` command.

use std::path::PathBuf;

use anyhow::Result;

use studydesk_core::model::Difficulty;
use studydesk_core::traits::TableCatalog;
use studydesk_store::config::load_config_from;

pub fn execute(difficulty: Option<Difficulty>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = config.table_catalog();

    let levels: Vec<Difficulty> = match difficulty {
        Some(d) => vec![d],
        None => Difficulty::ALL.to_vec(),
    };

    for level in levels {
        let tables = catalog.list(level)?;
        println!("{level} ({} tables)", tables.len());
        if tables.is_empty() {
            println!(
                "  No tables available. Add .csv files to {}",
                catalog.difficulty_dir(level).display()
            );
        }
        for name in &tables {
            println!("  {name}");
        }
    }

    Ok(())
}
