// ABOUTME: Blocked word list parsing and case-insensitive set edits
// ABOUTME: Comma-separated storage format with order-preserving membership changes

use std::fmt;

/// Outcome of one word in an add/remove batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordOutcome {
    Added(String),
    AlreadyListed(String),
    Removed(String),
    NotListed(String),
}

impl WordOutcome {
    /// No-op outcomes surface to the user as warnings
    pub fn is_warning(&self) -> bool {
        matches!(self, WordOutcome::AlreadyListed(_) | WordOutcome::NotListed(_))
    }

    /// The word this outcome is about
    pub fn word(&self) -> &str {
        match self {
            WordOutcome::Added(w)
            | WordOutcome::AlreadyListed(w)
            | WordOutcome::Removed(w)
            | WordOutcome::NotListed(w) => w,
        }
    }
}

/// Result of applying one batch of edits through the gateway
#[derive(Debug, Clone)]
pub struct WordListReport {
    /// Per-word outcomes in input order
    pub outcomes: Vec<WordOutcome>,
    /// The list state after the batch
    pub list: BlockedWordList,
    /// Whether the batch changed the list and was written back
    pub persisted: bool,
}

/// Ordered word list stored remotely as one comma-separated string.
///
/// Membership is case-insensitive; insertion order is preserved so an
/// add followed by a remove restores the original string exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedWordList {
    words: Vec<String>,
}

impl BlockedWordList {
    /// Parse the comma-separated property value, dropping empty segments
    pub fn parse(raw: &str) -> Self {
        Self {
            words: raw
                .split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership check
    pub fn contains(&self, word: &str) -> bool {
        let needle = word.to_lowercase();
        self.words.iter().any(|w| w.to_lowercase() == needle)
    }

    /// Add each word that is not yet listed, in input order.
    ///
    /// Each membership check sees the list as already modified by earlier
    /// words in the same batch, so duplicate inputs warn on the second hit.
    pub fn add_all<S: AsRef<str>>(&mut self, words: &[S]) -> Vec<WordOutcome> {
        words
            .iter()
            .map(|word| {
                let word = word.as_ref();
                if self.contains(word) {
                    WordOutcome::AlreadyListed(word.to_string())
                } else {
                    self.words.push(word.to_string());
                    WordOutcome::Added(word.to_string())
                }
            })
            .collect()
    }

    /// Remove each listed word, in input order
    pub fn remove_all<S: AsRef<str>>(&mut self, words: &[S]) -> Vec<WordOutcome> {
        words
            .iter()
            .map(|word| {
                let word = word.as_ref();
                if self.contains(word) {
                    let needle = word.to_lowercase();
                    self.words.retain(|w| w.to_lowercase() != needle);
                    WordOutcome::Removed(word.to_string())
                } else {
                    WordOutcome::NotListed(word.to_string())
                }
            })
            .collect()
    }
}

impl fmt::Display for BlockedWordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_drops_empty_segments_and_trims() {
        let list = BlockedWordList::parse("CEO, HR,,Payroll,");
        assert_eq!(list.words(), &["CEO", "HR", "Payroll"]);

        assert!(BlockedWordList::parse("").is_empty());
    }

    #[test]
    fn round_trips_preserve_order() {
        let list = BlockedWordList::parse("CEO,HR,Payroll");
        assert_eq!(list.to_string(), "CEO,HR,Payroll");
    }

    #[test]
    fn contains_is_case_insensitive() {
        let list = BlockedWordList::parse("CEO,HR");
        assert!(list.contains("ceo"));
        assert!(list.contains("Hr"));
        assert!(!list.contains("Finance"));
    }

    #[test]
    fn add_appends_absent_words() {
        let mut list = BlockedWordList::parse("CEO,HR");
        let outcomes = list.add_all(&["Finance"]);
        assert_eq!(outcomes, vec![WordOutcome::Added("Finance".to_string())]);
        assert_eq!(list.to_string(), "CEO,HR,Finance");
    }

    #[test]
    fn repeated_add_is_a_noop_warning() {
        let mut list = BlockedWordList::parse("CEO,HR");
        list.add_all(&["Finance"]);
        let outcomes = list.add_all(&["Finance"]);
        assert_eq!(
            outcomes,
            vec![WordOutcome::AlreadyListed("Finance".to_string())]
        );
        assert_eq!(list.to_string(), "CEO,HR,Finance");
    }

    #[test]
    fn add_warns_case_insensitively_and_keeps_going() {
        let mut list = BlockedWordList::parse("CEO,HR");
        let outcomes = list.add_all(&["ceo", "Finance"]);
        assert_eq!(
            outcomes,
            vec![
                WordOutcome::AlreadyListed("ceo".to_string()),
                WordOutcome::Added("Finance".to_string()),
            ]
        );
        assert_eq!(list.to_string(), "CEO,HR,Finance");
    }

    #[test]
    fn batch_membership_is_sequential_not_snapshot() {
        let mut list = BlockedWordList::default();
        let outcomes = list.add_all(&["x", "X"]);
        assert_eq!(
            outcomes,
            vec![
                WordOutcome::Added("x".to_string()),
                WordOutcome::AlreadyListed("X".to_string()),
            ]
        );
        assert_eq!(list.to_string(), "x");
    }

    #[test]
    fn remove_deletes_present_words() {
        let mut list = BlockedWordList::parse("CEO,HR,Finance");
        let outcomes = list.remove_all(&["hr"]);
        assert_eq!(outcomes, vec![WordOutcome::Removed("hr".to_string())]);
        assert_eq!(list.to_string(), "CEO,Finance");
    }

    #[test]
    fn repeated_remove_is_a_noop_warning() {
        let mut list = BlockedWordList::parse("CEO,HR");
        list.remove_all(&["HR"]);
        let outcomes = list.remove_all(&["HR"]);
        assert_eq!(outcomes, vec![WordOutcome::NotListed("HR".to_string())]);
        assert_eq!(list.to_string(), "CEO");
    }

    #[test]
    fn add_then_remove_restores_original_exactly() {
        let original = BlockedWordList::parse("CEO,HR");
        let mut list = original.clone();
        list.add_all(&["Exec"]);
        list.remove_all(&["Exec"]);
        assert_eq!(list, original);
        assert_eq!(list.to_string(), "CEO,HR");
    }

    #[test]
    fn empty_batches_change_nothing() {
        let mut list = BlockedWordList::parse("CEO");
        assert!(list.add_all::<&str>(&[]).is_empty());
        assert!(list.remove_all::<&str>(&[]).is_empty());
        assert_eq!(list.to_string(), "CEO");
    }
}
