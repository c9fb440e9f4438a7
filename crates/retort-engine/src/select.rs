use retort_core::{ConfigurationError, SimpleRng};

use crate::tree::{NodeId, ResponseTree};

/// Walk the tree for one query and pick a reply.
///
/// Candidates are the leaves under every topic node matching a query
/// token, or the leaves of the `""` fallback bucket when nothing
/// matched. They are collected in first-seen order and deduplicated,
/// so a seeded rng makes the pick reproducible. The previous reply is
/// excluded only when at least one alternative remains.
pub fn select_response(
    tree: &ResponseTree,
    category: &str,
    sentiment: &str,
    query_tokens: &[String],
    last_reply: &str,
    rng: &mut SimpleRng,
) -> Result<String, ConfigurationError> {
    let category_node = tree
        .child(ResponseTree::ROOT, category)
        .ok_or_else(|| ConfigurationError::MissingCategory(category.to_string()))?;
    let sentiment_node =
        tree.child(category_node, sentiment)
            .ok_or_else(|| ConfigurationError::MissingSentiment {
                category: category.to_string(),
                sentiment: sentiment.to_string(),
            })?;

    let mut candidates: Vec<String> = Vec::new();
    for token in query_tokens {
        if let Some(topic_node) = tree.child(sentiment_node, token) {
            collect_leaves(tree, topic_node, &mut candidates);
        }
    }

    if candidates.is_empty() {
        let fallback =
            tree.child(sentiment_node, "")
                .ok_or_else(|| ConfigurationError::MissingFallback {
                    category: category.to_string(),
                    sentiment: sentiment.to_string(),
                })?;
        collect_leaves(tree, fallback, &mut candidates);
    }

    if candidates.len() > 1 && !last_reply.is_empty() {
        candidates.retain(|c| c != last_reply);
    }

    if candidates.is_empty() {
        // Unreachable with a well-formed fallback bucket; still a
        // configuration error, never a silent empty reply.
        return Err(ConfigurationError::EmptyCandidates {
            category: category.to_string(),
            sentiment: sentiment.to_string(),
        });
    }

    Ok(candidates[rng.next_index(candidates.len())].clone())
}

/// Append the labels of `topic_node`'s leaves, skipping ones already
/// collected (set semantics, first-seen order kept).
fn collect_leaves(tree: &ResponseTree, topic_node: NodeId, candidates: &mut Vec<String>) {
    for label in tree.child_labels(topic_node) {
        if !candidates.iter().any(|c| c == label) {
            candidates.push(label.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(rows_spec: &[&[&str]]) -> ResponseTree {
        let rows: Vec<Vec<String>> = rows_spec
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        ResponseTree::from_rows(&rows).unwrap()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn matching_topic_beats_fallback() {
        let t = tree(&[
            &["s", "p", "", "I am fine"],
            &["s", "p", "weather", "It is sunny"],
        ]);
        let mut rng = SimpleRng::new(1);
        let reply =
            select_response(&t, "s", "p", &tokens(&["how", "weather"]), "", &mut rng).unwrap();
        assert_eq!(reply, "It is sunny");
    }

    #[test]
    fn no_topic_match_uses_fallback_bucket() {
        let t = tree(&[
            &["s", "p", "", "I am fine"],
            &["s", "p", "weather", "It is sunny"],
        ]);
        let mut rng = SimpleRng::new(1);
        let reply = select_response(&t, "s", "p", &tokens(&["asdkjas"]), "", &mut rng).unwrap();
        assert_eq!(reply, "I am fine");
    }

    #[test]
    fn candidates_from_multiple_topics_are_merged_and_deduped() {
        let t = tree(&[
            &["s", "p", "", "fallback"],
            &["s", "p", "rain", "Take an umbrella", "Stay inside"],
            &["s", "p", "storm", "Stay inside"],
        ]);
        // Pick many times; only the two unique replies may appear
        let mut rng = SimpleRng::new(9);
        for _ in 0..20 {
            let reply =
                select_response(&t, "s", "p", &tokens(&["rain", "storm"]), "", &mut rng).unwrap();
            assert!(reply == "Take an umbrella" || reply == "Stay inside");
        }
    }

    #[test]
    fn last_reply_is_excluded_when_alternatives_exist() {
        let t = tree(&[&["s", "p", "", "Reply one", "Reply two"]]);
        let mut rng = SimpleRng::new(3);
        for _ in 0..10 {
            let reply = select_response(&t, "s", "p", &tokens(&[]), "Reply one", &mut rng).unwrap();
            assert_eq!(reply, "Reply two");
        }
    }

    #[test]
    fn only_candidate_repeats_rather_than_failing() {
        let t = tree(&[&["s", "p", "", "Only answer"]]);
        let mut rng = SimpleRng::new(3);
        let reply = select_response(&t, "s", "p", &tokens(&[]), "Only answer", &mut rng).unwrap();
        assert_eq!(reply, "Only answer");
    }

    #[test]
    fn seeded_rng_makes_selection_deterministic() {
        let t = tree(&[&["s", "p", "", "Reply one", "Reply two", "Reply three"]]);
        let pick = |seed| {
            let mut rng = SimpleRng::new(seed);
            select_response(&t, "s", "p", &tokens(&[]), "", &mut rng).unwrap()
        };
        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn missing_branches_are_configuration_errors() {
        let t = tree(&[&["s", "p", "", "fine"]]);
        let mut rng = SimpleRng::new(1);

        let missing_category = select_response(&t, "q", "p", &tokens(&[]), "", &mut rng);
        assert!(matches!(
            missing_category,
            Err(ConfigurationError::MissingCategory(c)) if c == "q"
        ));

        let missing_sentiment = select_response(&t, "s", "n", &tokens(&[]), "", &mut rng);
        assert!(matches!(
            missing_sentiment,
            Err(ConfigurationError::MissingSentiment { .. })
        ));
    }

    #[test]
    fn missing_fallback_is_discovered_on_unmatched_topic() {
        let t = tree(&[&["s", "p", "weather", "It is sunny"]]);
        let mut rng = SimpleRng::new(1);

        // A matching topic works without any fallback bucket
        let ok = select_response(&t, "s", "p", &tokens(&["weather"]), "", &mut rng);
        assert_eq!(ok.unwrap(), "It is sunny");

        // An unmatched topic needs the fallback and errors without it
        let missing = select_response(&t, "s", "p", &tokens(&["food"]), "", &mut rng);
        assert!(matches!(
            missing,
            Err(ConfigurationError::MissingFallback { .. })
        ));
    }
}
