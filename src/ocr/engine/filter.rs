use crate::ocr::Token;

/// Keeps tokens that carry text, in emission order, with their text trimmed.
///
/// Negative confidence is the recognizer's marker for boxes without text.
/// There is no positive threshold; a confidence of zero is still kept.
pub fn filter_tokens(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter_map(|token| {
            let text = token.text.trim();
            if text.is_empty() || token.confidence < 0 {
                return None;
            }
            let text = text.to_string();
            Some(Token { text, ..token })
        })
        .collect()
}
