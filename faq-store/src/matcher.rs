use crate::{FaqItem, FaqStore};

impl FaqStore {
    /// Looks up a stored answer for `query`. See [`find_best_answer`].
    pub fn find_best_answer(&self, query: &str) -> Option<&str> {
        find_best_answer(self.items(), query)
    }
}

/// Two linear passes over `items`, case-insensitive:
///
/// 1. first item whose question equals the query;
/// 2. first item where the query contains the question or vice versa.
///
/// A blank query returns `None`; otherwise it would be a substring of every
/// question and match the first item.
pub fn find_best_answer<'a>(items: &'a [FaqItem], query: &str) -> Option<&'a str> {
    if query.trim().is_empty() {
        return None;
    }
    let query = query.to_lowercase();

    let exact = items
        .iter()
        .find(|item| item.question.to_lowercase() == query);
    if let Some(item) = exact {
        return Some(&item.answer);
    }

    items
        .iter()
        .find(|item| {
            let question = item.question.to_lowercase();
            question.contains(&query) || query.contains(&question)
        })
        .map(|item| item.answer.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<FaqItem> {
        vec![
            FaqItem::new("What courses are offered at PCCOER?", "B.Tech and M.Tech."),
            FaqItem::new("What is PCCOER?", "An engineering college in Pune."),
            FaqItem::new("Fees", "Contact the accounts office."),
            FaqItem::new("What is PCCOER?", "Duplicate, never returned."),
        ]
    }

    #[test]
    fn exact_match_ignores_case() {
        let items = sample();
        assert_eq!(
            find_best_answer(&items, "what is pccoer?"),
            Some("An engineering college in Pune.")
        );
    }

    #[test]
    fn exact_pass_runs_before_substring_pass() {
        // Item 0 contains "PCCOER?" as a substring, but item 1 is exact.
        let items = sample();
        assert_eq!(
            find_best_answer(&items, "WHAT IS PCCOER?"),
            Some("An engineering college in Pune.")
        );
    }

    #[test]
    fn query_inside_question_matches_first_in_order() {
        let items = sample();
        assert_eq!(find_best_answer(&items, "pccoer"), Some("B.Tech and M.Tech."));
    }

    #[test]
    fn question_inside_query_matches() {
        let items = sample();
        assert_eq!(
            find_best_answer(&items, "Tell me about the FEES structure"),
            Some("Contact the accounts office.")
        );
    }

    #[test]
    fn unrelated_query_is_a_miss() {
        let items = sample();
        assert_eq!(find_best_answer(&items, "hostel timings"), None);
        assert_eq!(find_best_answer(&[], "anything"), None);
    }

    #[test]
    fn blank_query_never_matches() {
        let items = sample();
        assert_eq!(find_best_answer(&items, ""), None);
        assert_eq!(find_best_answer(&items, "   "), None);
    }

    #[test]
    fn store_delegates_to_matcher() {
        let store = FaqStore::from_items(sample());
        assert_eq!(store.find_best_answer("fees"), Some("Contact the accounts office."));
    }
}
