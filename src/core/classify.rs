//! Classifier - turns raw input lines into typed elements

use crate::core::model::{Collection, Element, ElementKind};

/// A token that could not be parsed as the requested kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken<'a> {
    pub token: &'a str,
    pub kind: ElementKind,
}

impl std::fmt::Display for SkippedToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\" is not a {}. It will be skipped.",
            self.token,
            self.kind.type_name()
        )
    }
}

/// Classify raw lines into a collection of `kind` elements.
///
/// Malformed tokens are handed to `on_skip` as soon as they are seen and do
/// not end up in the collection. Only integers can be malformed.
pub fn classify<S, F>(lines: &[S], kind: ElementKind, mut on_skip: F) -> Collection
where
    S: AsRef<str>,
    F: FnMut(SkippedToken<'_>),
{
    let mut collection = Collection::new(kind);

    for line in lines {
        let line = line.as_ref();
        match kind {
            ElementKind::Integer => {
                for token in line.split_whitespace() {
                    match token.parse::<i64>() {
                        Ok(n) => collection.push(Element::Integer(n)),
                        Err(e) => {
                            tracing::debug!("skipping token {:?}: {}", token, e);
                            on_skip(SkippedToken { token, kind });
                        }
                    }
                }
            }
            ElementKind::Line => collection.push(Element::Line(line.to_string())),
            ElementKind::Word => {
                for token in line.split_whitespace() {
                    collection.push(Element::Word(token.to_string()));
                }
            }
        }
    }

    tracing::debug!(
        "classified {} input lines into {} {}",
        lines.len(),
        collection.len(),
        kind.label()
    );
    collection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(collection: &Collection) -> Vec<String> {
        collection.elements.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_classify_words_drops_empty_tokens() {
        let collection = classify(&["  a   b "], ElementKind::Word, |_| {});
        assert_eq!(words(&collection), vec!["a", "b"]);
        assert_eq!(collection.kind, ElementKind::Word);
    }

    #[test]
    fn test_classify_words_blank_line() {
        let collection = classify(&["", "   ", "\t"], ElementKind::Word, |_| {});
        assert!(collection.is_empty());
    }

    #[test]
    fn test_classify_lines_verbatim() {
        let collection = classify(&["  first ", "", "second"], ElementKind::Line, |_| {});
        assert_eq!(
            collection.elements,
            vec![
                Element::Line("  first ".to_string()),
                Element::Line(String::new()),
                Element::Line("second".to_string()),
            ]
        );
    }

    #[test]
    fn test_classify_integers() {
        let collection = classify(&["3 1 2", "1", "-7 +4"], ElementKind::Integer, |_| {});
        assert_eq!(
            collection.elements,
            vec![
                Element::Integer(3),
                Element::Integer(1),
                Element::Integer(2),
                Element::Integer(1),
                Element::Integer(-7),
                Element::Integer(4),
            ]
        );
    }

    #[test]
    fn test_classify_integers_reports_each_skip() {
        let mut skipped = Vec::new();
        let collection = classify(
            &["1 x 2", "9223372036854775808 y"],
            ElementKind::Integer,
            |s| skipped.push(s.to_string()),
        );

        assert_eq!(collection.len(), 2);
        assert_eq!(
            skipped,
            vec![
                "\"x\" is not a long. It will be skipped.",
                "\"9223372036854775808\" is not a long. It will be skipped.",
                "\"y\" is not a long. It will be skipped.",
            ]
        );
    }

    #[test]
    fn test_classify_integers_extremes() {
        let collection = classify(
            &["9223372036854775807 -9223372036854775808"],
            ElementKind::Integer,
            |_| {},
        );
        assert_eq!(
            collection.elements,
            vec![Element::Integer(i64::MAX), Element::Integer(i64::MIN)]
        );
    }

    #[test]
    fn test_classify_empty_input() {
        let lines: Vec<String> = Vec::new();
        for kind in [ElementKind::Integer, ElementKind::Line, ElementKind::Word] {
            let collection = classify(&lines, kind, |_| panic!("nothing to skip"));
            assert!(collection.is_empty());
            assert_eq!(collection.kind, kind);
        }
    }
}
