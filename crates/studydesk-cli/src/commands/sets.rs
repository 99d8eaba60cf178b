//! The `studydesk sets`, `create-set`, and `delete-set` commands.

use std::path::PathBuf;

use anyhow::{Context, Result};

use studydesk_core::model::{Card, CardSet};
use studydesk_core::review::validate_card_set;
use studydesk_core::traits::CardSetStore;
use studydesk_store::config::load_config_from;

pub fn list(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = config.card_sets();
    let names = store.list()?;

    if names.is_empty() {
        println!(
            "No sets available. Create one with `studydesk create-set` or add .json files to {}",
            store.root().display()
        );
        return Ok(());
    }

    for name in &names {
        let set = store.read(name)?;
        println!("  {name} ({} cards)", set.cards.len());
    }
    println!("\n{} set(s)", names.len());

    Ok(())
}

pub fn create(name: String, cards: Vec<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = config.card_sets();

    let new_cards = cards
        .iter()
        .map(|raw| parse_card(raw))
        .collect::<Result<Vec<_>>>()?;

    let existing = store.exists(&name)?;
    let mut set = if existing {
        store.read(&name)?
    } else {
        CardSet {
            name: name.trim().to_string(),
            cards: Vec::new(),
        }
    };
    let added = new_cards.len();
    set.cards.extend(new_cards);

    for w in validate_card_set(&set) {
        let prefix = w
            .card
            .map(|i| format!("[card {}] ", i + 1))
            .unwrap_or_default();
        println!("  {prefix}WARNING: {}", w.message);
    }

    store.write(&set)?;
    if existing {
        println!("Updated set '{}' (+{added} cards, {} total)", set.name, set.cards.len());
    } else {
        println!("Created set '{}' with {} cards", set.name, set.cards.len());
    }

    Ok(())
}

pub fn delete(name: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    if config.card_sets().delete(&name)? {
        println!("Deleted set '{name}'");
    } else {
        println!("No set named '{name}'");
    }
    Ok(())
}

/// Parse a `question=answer` argument.
fn parse_card(raw: &str) -> Result<Card> {
    let (question, answer) = raw
        .split_once('=')
        .with_context(|| format!("invalid card '{raw}', expected question=answer"))?;
    Ok(Card::new(question.trim(), answer.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_card_splits_on_first_equals() {
        let card = parse_card(" 2+2 = 4 ").unwrap();
        assert_eq!(card.question, "2+2");
        assert_eq!(card.answer, "4");

        let card = parse_card("a=b=c").unwrap();
        assert_eq!(card.question, "a");
        assert_eq!(card.answer, "b=c");
    }

    #[test]
    fn parse_card_rejects_missing_separator() {
        let err = parse_card("no separator").unwrap_err();
        assert!(err.to_string().contains("question=answer"));
    }
}
