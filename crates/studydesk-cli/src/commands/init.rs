//! The `studydesk init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("studydesk.toml"), SAMPLE_CONFIG)?;

    for (path, content) in [
        ("tables/easy/and_or.csv", EASY_TABLE),
        ("tables/normal/implication.csv", NORMAL_TABLE),
        ("tables/hard/biconditional_xor.csv", HARD_TABLE),
        ("sets/logic.json", SAMPLE_SET),
    ] {
        write_if_missing(Path::new(path), content)?;
    }

    println!("\nNext steps:");
    println!("  1. Add your own tables under tables/<easy|normal|hard>/");
    println!("  2. Run: studydesk play --difficulty easy");
    println!("  3. Run: studydesk review --set logic");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# studydesk configuration

# Relative directories below resolve against data_dir.
# STUDYDESK_DATA_DIR overrides it; ${VAR} references are expanded.
data_dir = "."
tables_dir = "tables"
scores_dir = "games_history"
sets_dir = "sets"
review_history_dir = "history"

# Quiz blanking
blank_probability = 0.5
excluded_columns = [0, 1, 2]
skip_final_row = true

# Flashcards
shuffle_cards = true

[time_limits]
easy = 60
normal = 90
hard = 120
"#;

const EASY_TABLE: &str = "\
p,q,r,p AND q,(p AND q) OR r
T,T,T,T,T
T,T,F,T,T
T,F,T,F,T
T,F,F,F,F
F,T,T,F,T
F,T,F,F,F
F,F,T,F,T
F,F,F,F,F
";

const NORMAL_TABLE: &str = "\
p,q,r,NOT p,p -> q,(p -> q) AND r
T,T,T,F,T,T
T,T,F,F,T,F
T,F,T,F,F,F
T,F,F,F,F,F
F,T,T,T,T,T
F,T,F,T,T,F
F,F,T,T,T,T
F,F,F,T,T,F
";

const HARD_TABLE: &str = "\
p,q,r,p <-> q,q XOR r,(p <-> q) -> (q XOR r)
T,T,T,T,F,F
T,T,F,T,T,T
T,F,T,F,T,T
T,F,F,F,F,T
F,T,T,F,F,T
F,T,F,F,T,T
F,F,T,T,T,T
F,F,F,T,F,F
";

const SAMPLE_SET: &str = r#"[
  {
    "question": "What is the value of T AND F?",
    "answer": "F"
  },
  {
    "question": "What is the value of T OR F?",
    "answer": "T"
  },
  {
    "question": "Which connective is false only when T implies F?",
    "answer": "implication"
  }
]
"#;
