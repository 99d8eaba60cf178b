//! Flashcard review sessions.
//!
//! A review walks through a card set once, checks each typed answer
//! case-insensitively, and keeps the misses for the history record.

use std::fmt;

use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ReviewError;
use crate::model::{Card, CardSet, Mistake, ReviewRecord};

/// Result of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct!"),
            Verdict::Incorrect { expected } => {
                write!(f, "Incorrect! The correct answer was: {expected}")
            }
        }
    }
}

/// Compare a typed answer against the expected one, ignoring case and
/// surrounding whitespace.
pub fn check_answer(expected: &str, given: &str) -> Verdict {
    if given.trim().to_lowercase() == expected.trim().to_lowercase() {
        Verdict::Correct
    } else {
        Verdict::Incorrect {
            expected: expected.to_string(),
        }
    }
}

/// A problem found in a card set.
#[derive(Debug, Clone)]
pub struct SetWarning {
    /// Zero-based card index, if the warning is about one card.
    pub card: Option<usize>,
    pub message: String,
}

/// Check a card set for common issues.
pub fn validate_card_set(set: &CardSet) -> Vec<SetWarning> {
    let mut warnings = Vec::new();

    if set.name.trim().is_empty() {
        warnings.push(SetWarning {
            card: None,
            message: "set name is empty".into(),
        });
    }

    if set.cards.is_empty() {
        warnings.push(SetWarning {
            card: None,
            message: "set has no cards".into(),
        });
    }

    for (i, card) in set.cards.iter().enumerate() {
        if card.question.trim().is_empty() {
            warnings.push(SetWarning {
                card: Some(i),
                message: "question is empty".into(),
            });
        }
        if card.answer.trim().is_empty() {
            warnings.push(SetWarning {
                card: Some(i),
                message: "answer is empty".into(),
            });
        }
    }

    warnings
}

/// Order cards are presented in.
pub enum CardOrder<'a, R: Rng + ?Sized> {
    /// As stored in the set.
    AsStored,
    /// Shuffled with the given generator.
    Shuffled(&'a mut R),
}

/// An in-progress review of one card set.
#[derive(Debug)]
pub struct ReviewSession {
    set_name: String,
    queue: Vec<Card>,
    position: usize,
    score: u32,
    mistakes: Vec<Mistake>,
}

impl ReviewSession {
    pub fn start<R: Rng + ?Sized>(set: CardSet, order: CardOrder<'_, R>) -> Result<Self, ReviewError> {
        if set.cards.is_empty() {
            return Err(ReviewError::EmptySet(set.name));
        }
        let mut queue = set.cards;
        if let CardOrder::Shuffled(rng) = order {
            queue.shuffle(rng);
        }
        Ok(Self {
            set_name: set.name,
            queue,
            position: 0,
            score: 0,
            mistakes: Vec::new(),
        })
    }

    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    /// The card awaiting an answer.
    pub fn current(&self) -> Option<&Card> {
        self.queue.get(self.position)
    }

    /// `(answered, total)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.position, self.queue.len())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn mistakes(&self) -> &[Mistake] {
        &self.mistakes
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.queue.len()
    }

    /// Answer the current card and advance.
    pub fn answer(&mut self, given: &str) -> Result<Verdict, ReviewError> {
        let card = self
            .queue
            .get(self.position)
            .ok_or(ReviewError::AlreadyComplete)?;
        let verdict = check_answer(&card.answer, given);
        if verdict.is_correct() {
            self.score += 1;
        } else {
            self.mistakes.push(Mistake {
                question: card.question.clone(),
                user_answer: given.trim().to_string(),
                answer: card.answer.clone(),
            });
        }
        self.position += 1;
        Ok(verdict)
    }

    /// Close the review into a history record.
    pub fn finish(self, timestamp: DateTime<Local>) -> Result<ReviewRecord, ReviewError> {
        if !self.is_finished() {
            return Err(ReviewError::Incomplete {
                answered: self.position,
                total: self.queue.len(),
            });
        }
        tracing::info!(
            set = %self.set_name,
            score = self.score,
            total = self.queue.len(),
            "review complete"
        );
        Ok(ReviewRecord {
            set_name: self.set_name,
            score: self.score,
            total: self.queue.len() as u32,
            mistakes: self.mistakes,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn arithmetic() -> CardSet {
        CardSet {
            name: "arithmetic".into(),
            cards: vec![
                Card::new("What is 2 + 2?", "4"),
                Card::new("Capital of France?", "Paris"),
                Card::new("Opposite of true?", "False"),
            ],
        }
    }

    #[test]
    fn answers_compare_case_insensitively() {
        assert_eq!(check_answer("Correct Answer", "correct answer"), Verdict::Correct);
        assert_eq!(check_answer("Paris", "  PARIS "), Verdict::Correct);
        let verdict = check_answer("Correct Answer", "incorrect answer");
        assert_eq!(
            verdict.to_string(),
            "Incorrect! The correct answer was: Correct Answer"
        );
        assert_eq!(Verdict::Correct.to_string(), "Correct!");
    }

    #[test]
    fn review_collects_mistakes() {
        let mut session =
            ReviewSession::start::<StdRng>(arithmetic(), CardOrder::AsStored).unwrap();

        assert!(session.answer("4").unwrap().is_correct());
        assert!(!session.answer("London").unwrap().is_correct());
        assert_eq!(session.progress(), (2, 3));
        assert!(session.answer("false").unwrap().is_correct());
        assert!(session.is_finished());
        assert_eq!(session.answer("extra"), Err(ReviewError::AlreadyComplete));

        let record = session.finish(Local::now()).unwrap();
        assert_eq!(record.score, 2);
        assert_eq!(record.total, 3);
        assert_eq!(
            record.mistakes,
            vec![Mistake {
                question: "Capital of France?".into(),
                user_answer: "London".into(),
                answer: "Paris".into(),
            }]
        );
    }

    #[test]
    fn perfect_review_has_no_mistakes() {
        let set = CardSet {
            name: "one".into(),
            cards: vec![Card::new("What is 2 + 2?", "4")],
        };
        let mut session = ReviewSession::start::<StdRng>(set, CardOrder::AsStored).unwrap();
        session.answer("4").unwrap();
        let record = session.finish(Local::now()).unwrap();
        assert!(record.mistakes.is_empty());
        assert_eq!(record.score, 1);
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = ReviewSession::start(arithmetic(), CardOrder::Shuffled(&mut rng)).unwrap();
        let mut seen = Vec::new();
        while let Some(card) = session.current() {
            seen.push(card.question.clone());
            let answer = card.answer.clone();
            session.answer(&answer).unwrap();
        }
        seen.sort();
        let mut expected: Vec<String> = arithmetic().cards.into_iter().map(|c| c.question).collect();
        expected.sort();
        assert_eq!(seen, expected);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn finishing_early_is_an_error() {
        let mut session =
            ReviewSession::start::<StdRng>(arithmetic(), CardOrder::AsStored).unwrap();
        session.answer("4").unwrap();
        let err = session.finish(Local::now()).unwrap_err();
        assert_eq!(err, ReviewError::Incomplete { answered: 1, total: 3 });
    }

    #[test]
    fn empty_set_cannot_be_reviewed() {
        let set = CardSet {
            name: "empty".into(),
            cards: vec![],
        };
        let err = ReviewSession::start::<StdRng>(set, CardOrder::AsStored).unwrap_err();
        assert_eq!(err, ReviewError::EmptySet("empty".into()));
    }

    #[test]
    fn validation_flags_blank_cards() {
        let set = CardSet {
            name: "  ".into(),
            cards: vec![Card::new("Q?", ""), Card::new("", "A")],
        };
        let warnings = validate_card_set(&set);
        assert!(warnings.iter().any(|w| w.message == "set name is empty"));
        assert!(warnings
            .iter()
            .any(|w| w.card == Some(0) && w.message == "answer is empty"));
        assert!(warnings
            .iter()
            .any(|w| w.card == Some(1) && w.message == "question is empty"));
    }
}
