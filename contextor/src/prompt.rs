//! Prompt builder: grounding instructions + context block + question.

use crate::answer::NOT_FOUND;

/// Instruction preamble. The model is told to answer from the context only
/// and to reply with [`NOT_FOUND`] verbatim otherwise.
pub fn instructions() -> String {
    format!(
        "You are an assistant that answers questions based on the provided text. \
         Use ONLY the information from the text below to answer the question. \
         If the answer is not in the text, say '{NOT_FOUND}'"
    )
}

/// Build the full prompt for one question.
///
/// # Example
/// ```
/// use contextor::prompt::build_prompt;
/// let p = build_prompt("Grace Period: 30 days.", "What is the grace period?");
/// assert!(p.contains("Document Context:\nGrace Period: 30 days."));
/// assert!(p.ends_with("Answer:"));
/// ```
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "{}\n\nDocument Context:\n{context}\n\nQuestion: {question}\n\nAnswer:",
        instructions()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_layout_is_stable() {
        let p = build_prompt("C1\nC2", "Q?");
        let expected = "You are an assistant that answers questions based on the provided text. \
                        Use ONLY the information from the text below to answer the question. \
                        If the answer is not in the text, say 'Information not found in the document.'\
                        \n\nDocument Context:\nC1\nC2\n\nQuestion: Q?\n\nAnswer:";
        assert_eq!(p, expected);
    }
}
