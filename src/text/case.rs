// Mon Jan 26 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_\-.]+").unwrap());
static LOWER_TO_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());
static ACRONYM_TO_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

/// Identifier case conversion. Word splitting is acronym-aware, so
/// "HTTPServer" becomes ["HTTP", "Server"] rather than one word per capital.
pub struct CaseUtils;

impl CaseUtils {
    pub fn split_words(s: &str) -> Vec<String> {
        let spaced = SEPARATORS.replace_all(s, " ");
        let spaced = LOWER_TO_UPPER.replace_all(&spaced, "$1 $2");
        let spaced = ACRONYM_TO_WORD.replace_all(&spaced, "$1 $2");
        spaced
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn to_snake_case(s: &str) -> String {
        Self::split_words(s)
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<String>>()
            .join("_")
    }

    pub fn to_screaming_snake_case(s: &str) -> String {
        Self::split_words(s)
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<String>>()
            .join("_")
    }

    pub fn to_kebab_case(s: &str) -> String {
        Self::split_words(s)
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<String>>()
            .join("-")
    }

    pub fn to_camel_case(s: &str) -> String {
        let words = Self::split_words(s);
        let mut out = String::new();
        for (i, word) in words.iter().enumerate() {
            if i == 0 {
                out.push_str(&word.to_lowercase());
            } else {
                out.push_str(&Self::capitalize_word(word));
            }
        }
        out
    }

    pub fn to_pascal_case(s: &str) -> String {
        Self::split_words(s)
            .iter()
            .map(|w| Self::capitalize_word(w))
            .collect()
    }

    fn capitalize_word(word: &str) -> String {
        let lower = word.to_lowercase();
        let mut chars = lower.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(CaseUtils::split_words("camelCaseValue"), vec!["camel", "Case", "Value"]);
        assert_eq!(CaseUtils::split_words("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(CaseUtils::split_words("snake_case-mix two"), vec!["snake", "case", "mix", "two"]);
        assert!(CaseUtils::split_words("").is_empty());
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(CaseUtils::to_snake_case("camelCaseValue"), "camel_case_value");
        assert_eq!(CaseUtils::to_snake_case("HTTPServerPort"), "http_server_port");
        assert_eq!(CaseUtils::to_snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(CaseUtils::to_camel_case("snake_case_value"), "snakeCaseValue");
        assert_eq!(CaseUtils::to_camel_case("kebab-case-value"), "kebabCaseValue");
        assert_eq!(CaseUtils::to_camel_case("PascalCase"), "pascalCase");
    }

    #[test]
    fn test_to_pascal_and_kebab() {
        assert_eq!(CaseUtils::to_pascal_case("snake_case_value"), "SnakeCaseValue");
        assert_eq!(CaseUtils::to_kebab_case("SomeValue"), "some-value");
        assert_eq!(CaseUtils::to_screaming_snake_case("someValue"), "SOME_VALUE");
    }

    #[test]
    fn test_round_trip_stability() {
        let snake = CaseUtils::to_snake_case("HTTPServerPort");
        assert_eq!(CaseUtils::to_snake_case(&snake), snake);
        assert_eq!(CaseUtils::to_camel_case(&snake), "httpServerPort");
    }
}
