//! Context selection: pick the clauses relevant to a batch of questions.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::clause_store::Clause;

/// Chooses the grounding context for a set of questions.
pub trait ContextSelector: Send + Sync {
    /// Returns the newline-joined context for `questions` drawn from `clauses`.
    /// Empty only when `clauses` is empty.
    fn select_context(&self, questions: &[String], clauses: &[Clause]) -> String;
}

/// Lower-case keyword → index into the document's clause list.
///
/// "no claim discount"/"ncd" and "room rent"/"icu" share a clause.
pub const POLICY_KEYWORDS: &[(&str, usize)] = &[
    ("grace period", 0),
    ("pre-existing", 1),
    ("maternity", 2),
    ("cataract", 3),
    ("organ donor", 4),
    ("no claim discount", 5),
    ("ncd", 5),
    ("health check-up", 6),
    ("hospital", 7),
    ("ayush", 8),
    ("room rent", 9),
    ("icu", 9),
];

/// Substring keyword matcher.
///
/// Matching is plain `contains` on the lower-cased question, so "icu" also
/// fires inside "ridiculous". Hits are pooled across all questions of the
/// request and emitted in original clause order, each distinct text once.
/// With no hits at all, every clause is used.
#[derive(Clone, Debug)]
pub struct KeywordSelector {
    keywords: &'static [(&'static str, usize)],
}

impl KeywordSelector {
    /// Uses a custom table. Keywords must be lower-case.
    pub fn new(keywords: &'static [(&'static str, usize)]) -> Self {
        Self { keywords }
    }

    /// Indices of matched clauses, ascending. Indices past `clause_count` are skipped.
    fn matched_indices(&self, questions: &[String], clause_count: usize) -> BTreeSet<usize> {
        let mut hits = BTreeSet::new();
        for question in questions {
            let q = question.to_lowercase();
            for &(keyword, idx) in self.keywords {
                if idx < clause_count && q.contains(keyword) {
                    hits.insert(idx);
                }
            }
        }
        hits
    }
}

impl Default for KeywordSelector {
    fn default() -> Self {
        Self::new(POLICY_KEYWORDS)
    }
}

impl ContextSelector for KeywordSelector {
    fn select_context(&self, questions: &[String], clauses: &[Clause]) -> String {
        let hits = self.matched_indices(questions, clauses.len());

        if hits.is_empty() {
            debug!(clauses = clauses.len(), "no keyword matched, using full document");
            return join(clauses.iter());
        }

        let mut seen = HashSet::new();
        let picked: Vec<&Clause> = hits
            .into_iter()
            .map(|i| &clauses[i])
            .filter(|&c| seen.insert(c.as_str()))
            .collect();

        debug!(matched = picked.len(), "keyword context selected");
        join(picked.into_iter())
    }
}

fn join<'a>(clauses: impl Iterator<Item = &'a Clause>) -> String {
    clauses.map(Clause::as_str).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause_store::POLICY_CLAUSES;

    fn clauses() -> Vec<Clause> {
        POLICY_CLAUSES.iter().copied().map(Clause::from).collect()
    }

    fn qs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn grace_period_question_selects_grace_clause() {
        let ctx = KeywordSelector::default()
            .select_context(&qs(&["What is the grace period?"]), &clauses());
        assert_eq!(ctx, POLICY_CLAUSES[0]);
    }

    #[test]
    fn unmatched_questions_fall_back_to_full_document() {
        let all = clauses();
        let ctx = KeywordSelector::default()
            .select_context(&qs(&["What is the capital of France?"]), &all);
        assert_eq!(ctx, POLICY_CLAUSES.join("\n"));
    }

    #[test]
    fn ncd_and_no_claim_discount_resolve_to_one_clause() {
        let ctx = KeywordSelector::default().select_context(
            &qs(&["How does the NCD work?", "Is there a No Claim Discount?"]),
            &clauses(),
        );
        assert_eq!(ctx, POLICY_CLAUSES[5]);
    }

    #[test]
    fn matches_are_pooled_across_questions_in_clause_order() {
        let ctx = KeywordSelector::default().select_context(
            &qs(&["What are the ICU limits?", "Cataract waiting time?", "grace period"]),
            &clauses(),
        );
        let expected = [POLICY_CLAUSES[0], POLICY_CLAUSES[3], POLICY_CLAUSES[9]].join("\n");
        assert_eq!(ctx, expected);
    }

    #[test]
    fn matching_is_plain_substring() {
        // "icu" inside "ridiculous" still selects the room-rent/ICU clause.
        let ctx = KeywordSelector::default()
            .select_context(&qs(&["Is this premium ridiculous?"]), &clauses());
        assert_eq!(ctx, POLICY_CLAUSES[9]);
    }

    #[test]
    fn duplicate_clause_texts_collapse() {
        let dup = vec![Clause::from("same"), Clause::from("same")];
        static TABLE: &[(&str, usize)] = &[("a", 0), ("b", 1)];
        let ctx = KeywordSelector::new(TABLE).select_context(&qs(&["a b"]), &dup);
        assert_eq!(ctx, "same");
    }

    #[test]
    fn short_clause_list_ignores_out_of_range_keywords() {
        let two = vec![Clause::from("first"), Clause::from("second")];
        let ctx = KeywordSelector::default().select_context(&qs(&["icu charges?"]), &two);
        // keyword points past the end, so nothing matched -> full fallback
        assert_eq!(ctx, "first\nsecond");
    }

    #[test]
    fn empty_clause_list_gives_empty_context() {
        let ctx = KeywordSelector::default().select_context(&qs(&["grace period"]), &[]);
        assert!(ctx.is_empty());
    }
}
