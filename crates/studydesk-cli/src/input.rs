//! Line input from stdin that can be raced against a timer.

use std::io::{BufRead, Write};

use tokio::sync::mpsc;

/// Lines typed by the player.
///
/// A detached thread does the blocking reads, so a pending read never holds
/// up shutdown once the quiz is over.
pub struct InputLines {
    rx: mpsc::UnboundedReceiver<String>,
}

impl InputLines {
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { rx }
    }

    /// Next line, or `None` at end of input.
    pub async fn next_line(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}

/// Print a prompt without a trailing newline.
pub fn prompt(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}
