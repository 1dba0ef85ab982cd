//! Prompt builder: persona preamble, recent queries, current question, FAQ block.

use faq_store::FaqStore;

use crate::history::MAX_HISTORY;

/// Role instruction that opens every prompt.
pub const PERSONA: &str = "You are an admission enquiry chatbot for Pimpri Chinchwad College of Engineering and Research (PCCOER).";

const FAQ_INSTRUCTION: &str = "Based on the following FAQ data, answer clearly and concisely. If the answer is not in the FAQ, suggest contacting the college.";

const GENERIC_INSTRUCTION: &str = "Provide a helpful response. If you don't have specific information, suggest contacting the college directly.";

/// Build the single text prompt sent to the model.
///
/// `history` is rendered oldest first as `Previous Query N: ...`; only the
/// last [`MAX_HISTORY`] entries are used. With a non-empty FAQ the whole
/// dataset is appended as pretty JSON.
///
/// # Example
/// ```
/// # use contextor::prompt::build_prompt;
/// # use faq_store::FaqStore;
/// let prompt = build_prompt("Hostel?", &["Fees?".to_string()], &FaqStore::default());
/// assert!(prompt.contains("Previous Query 1: Fees?"));
/// assert!(prompt.contains("User's Current Question: Hostel?"));
/// ```
pub fn build_prompt(query: &str, history: &[String], faq: &FaqStore) -> String {
    let skip = history.len().saturating_sub(MAX_HISTORY);
    let history_context: String = history[skip..]
        .iter()
        .enumerate()
        .map(|(i, past)| format!("\nPrevious Query {}: {}", i + 1, past))
        .collect();

    let mut out = String::new();
    out.push_str(PERSONA);
    out.push_str("\n\n");
    out.push_str(&history_context);
    out.push_str("\n\nUser's Current Question: ");
    out.push_str(query);
    out.push_str("\n\n");

    if faq.is_empty() {
        out.push_str(GENERIC_INSTRUCTION);
    } else {
        out.push_str(FAQ_INSTRUCTION);
        out.push_str("\n\nFAQ Data:\n");
        out.push_str(&faq.to_pretty_json());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use faq_store::FaqItem;

    #[test]
    fn empty_faq_uses_generic_instruction() {
        let prompt = build_prompt("Is there a hostel?", &[], &FaqStore::default());

        assert_eq!(
            prompt,
            format!(
                "{PERSONA}\n\n\n\nUser's Current Question: Is there a hostel?\n\n{GENERIC_INSTRUCTION}"
            )
        );
        assert!(!prompt.contains("FAQ Data"));
    }

    #[test]
    fn faq_block_and_history_are_rendered_in_order() {
        let faq = FaqStore::from_items(vec![FaqItem::new("Fees?", "Ask accounts.")]);
        let history = vec!["first".to_string(), "second".to_string()];

        let prompt = build_prompt("third", &history, &faq);

        let expected = format!(
            "{PERSONA}\n\n\nPrevious Query 1: first\nPrevious Query 2: second\n\n\
             User's Current Question: third\n\n{FAQ_INSTRUCTION}\n\nFAQ Data:\n{}\n",
            faq.to_pretty_json()
        );
        assert_eq!(prompt, expected);
    }

    #[test]
    fn only_the_last_two_history_entries_are_used() {
        let history: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let prompt = build_prompt("q", &history, &FaqStore::default());

        assert!(prompt.contains("Previous Query 1: b"));
        assert!(prompt.contains("Previous Query 2: c"));
        assert!(!prompt.contains("Previous Query 3"));
        assert!(!prompt.contains(": a\n"));
    }
}
