/// True iff the trimmed raw input ends with '?'. Deliberately coarse;
/// the contract is a pure function of the raw text, not of the
/// normalized token stream.
pub fn is_question(text: &str) -> bool {
    text.trim().ends_with('?')
}

/// A sentiment score of exactly zero counts as non-negative, so
/// neutral and empty inputs route to the "p" branch.
pub fn is_non_negative(score: f64) -> bool {
    score >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_mark_at_the_end_means_question() {
        assert!(is_question("Are you happy?"));
        assert!(is_question("  Are you happy?  "));
        assert!(!is_question("I am happy."));
        assert!(!is_question("What? No way"));
        assert!(!is_question(""));
    }

    #[test]
    fn zero_score_is_non_negative() {
        assert!(is_non_negative(0.0));
        assert!(is_non_negative(0.4));
        assert!(!is_non_negative(-0.1));
    }
}
