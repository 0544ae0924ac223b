use std::collections::BTreeSet;

pub const DEFAULT_LANGUAGE: &str = "eng";

/// Picks the language actually passed to the recognizer.
///
/// Rules, first match wins:
/// 1. the requested code when it is installed;
/// 2. `eng` when it is installed;
/// 3. the first installed code in sorted order. This is only a fallback so
///    recognition can run at all, not a match for what was asked;
/// 4. the requested code, unchanged, when nothing is installed. The recognizer
///    then reports the problem itself.
pub fn select_language(requested: &str, available: &BTreeSet<String>) -> String {
    match (
        available.contains(requested),
        available.contains(DEFAULT_LANGUAGE),
        available.first(),
    ) {
        (true, _, _) => requested.to_string(),
        (false, true, _) => DEFAULT_LANGUAGE.to_string(),
        (false, false, Some(first)) => first.clone(),
        (false, false, None) => requested.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn keeps_requested_language_when_installed() {
        assert_eq!(select_language("eng", &langs(&["eng"])), "eng");
        assert_eq!(select_language("deu", &langs(&["eng", "deu"])), "deu");
    }

    #[test]
    fn falls_back_to_english() {
        assert_eq!(select_language("fra", &langs(&["eng", "deu"])), "eng");
    }

    #[test]
    fn falls_back_to_first_sorted_language() {
        assert_eq!(select_language("fra", &langs(&["deu"])), "deu");
        let available = langs(&["spa", "deu", "jpn"]);
        let first = select_language("fra", &available);
        assert_eq!(first, "deu");
        for _ in 0..5 {
            assert_eq!(select_language("fra", &available), first);
        }
    }

    #[test]
    fn returns_requested_when_nothing_installed() {
        assert_eq!(select_language("fra", &BTreeSet::new()), "fra");
    }
}
