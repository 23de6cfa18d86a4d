//! Attribute column mini-language
//!
//! The 9th GFF column holds `;`-separated `key=value` pairs (or bare keys).
//! Parsing is best-effort: malformed attribute text degrades to whatever
//! key/value pairs can be extracted, and never fails.

use indexmap::IndexMap;

/// Parse an attribute column into an insertion-ordered key/value mapping.
///
/// Rules:
/// - `"."` or an empty string yields an empty mapping
/// - candidates are split on `;`, trimmed, and skipped when empty
///   (tolerates trailing or doubled separators)
/// - each candidate splits on its *first* `=`; values may contain `=`
/// - key and value are trimmed independently
/// - a candidate without `=` becomes a bare key with an empty value
/// - duplicate keys overwrite: the last occurrence wins
pub fn parse_attributes(raw: &str) -> IndexMap<String, String> {
    let mut attrs = IndexMap::new();

    if raw.is_empty() || raw == "." {
        return attrs;
    }

    for candidate in raw.split(';') {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }

        match candidate.split_once('=') {
            Some((key, value)) => {
                attrs.insert(key.trim().to_string(), value.trim().to_string());
            }
            None => {
                attrs.insert(candidate.to_string(), String::new());
            }
        }
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_dot() {
        assert!(parse_attributes("").is_empty());
        assert!(parse_attributes(".").is_empty());
    }

    #[test]
    fn test_basic_pairs() {
        let attrs = parse_attributes("ID=gene1;Name=TestGene;Note=something");
        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs["ID"], "gene1");
        assert_eq!(attrs["Name"], "TestGene");
        assert_eq!(attrs["Note"], "something");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let attrs = parse_attributes("ID=x;Parent=y;Alias=z");
        let keys: Vec<&str> = attrs.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["ID", "Parent", "Alias"]);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let attrs = parse_attributes("a=1;a=2");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs["a"], "2");
    }

    #[test]
    fn test_value_containing_equals() {
        let attrs = parse_attributes("Note=depth=30;ID=x");
        assert_eq!(attrs["Note"], "depth=30");
        assert_eq!(attrs["ID"], "x");
    }

    #[test]
    fn test_bare_key() {
        let attrs = parse_attributes("pseudo;ID=gene1");
        assert_eq!(attrs["pseudo"], "");
        assert_eq!(attrs["ID"], "gene1");
    }

    #[test]
    fn test_whitespace_and_stray_separators() {
        let attrs = parse_attributes(" ID = gene1 ;; Name=N ;");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["ID"], "gene1");
        assert_eq!(attrs["Name"], "N");
    }
}
