// Sat Jan 24 2026 - Alex

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use indexmap::IndexMap;
use serde_json::Value;

pub struct MapUtils;

impl MapUtils {
    pub fn is_empty<K, V>(map: Option<&HashMap<K, V>>) -> bool {
        map.map_or(true, |m| m.is_empty())
    }

    pub fn is_not_empty<K, V>(map: Option<&HashMap<K, V>>) -> bool {
        !Self::is_empty(map)
    }

    pub fn get_or_default<'a, K, V>(map: &'a HashMap<K, V>, key: &K, default: &'a V) -> &'a V
    where
        K: Eq + Hash,
    {
        map.get(key).unwrap_or(default)
    }

    /// String coercion: strings pass through, numbers and bools render via
    /// Display, everything else yields the default.
    pub fn get_string(map: &serde_json::Map<String, Value>, key: &str, default: &str) -> String {
        match map.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => default.to_string(),
        }
    }

    /// Bool coercion accepts true/false, yes/no, on/off and 1/0, in any
    /// case. Numbers coerce as zero/nonzero.
    pub fn get_bool(map: &serde_json::Map<String, Value>, key: &str, default: bool) -> bool {
        match map.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map_or(default, |f| f != 0.0),
            Some(Value::String(s)) => match s.to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => true,
                "false" | "no" | "off" | "0" => false,
                _ => default,
            },
            _ => default,
        }
    }

    pub fn get_i64(map: &serde_json::Map<String, Value>, key: &str, default: i64) -> i64 {
        match map.get(key) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            Some(Value::Bool(b)) => *b as i64,
            _ => default,
        }
    }

    pub fn get_f64(map: &serde_json::Map<String, Value>, key: &str, default: f64) -> f64 {
        match map.get(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Value-to-key inversion. Duplicate values keep the last key the
    /// iteration hands us, so callers wanting determinism should invert an
    /// ordered map.
    pub fn invert<K, V>(map: &HashMap<K, V>) -> HashMap<V, K>
    where
        K: Clone,
        V: Eq + Hash + Clone,
    {
        map.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
    }

    /// Right-hand entries win on key collision.
    pub fn merge<K, V>(left: &HashMap<K, V>, right: &HashMap<K, V>) -> HashMap<K, V>
    where
        K: Eq + Hash + Clone,
        V: Clone,
    {
        let mut out = left.clone();
        for (k, v) in right {
            out.insert(k.clone(), v.clone());
        }
        out
    }

    pub fn filter_keys<K, V, F>(map: &HashMap<K, V>, pred: F) -> HashMap<K, V>
    where
        K: Eq + Hash + Clone,
        V: Clone,
        F: Fn(&K) -> bool,
    {
        map.iter()
            .filter(|(k, _)| pred(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn to_sorted<K, V>(map: &HashMap<K, V>) -> BTreeMap<K, V>
    where
        K: Ord + Clone,
        V: Clone,
    {
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Order-preserving copy of a pair list; first insertion wins for
    /// duplicate keys but its value is updated, IndexMap semantics.
    pub fn to_ordered<K, V>(pairs: &[(K, V)]) -> IndexMap<K, V>
    where
        K: Eq + Hash + Clone,
        V: Clone,
    {
        pairs.iter().cloned().collect()
    }

    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> HashMap<K, V>
    where
        K: Eq + Hash + Clone,
        V: Clone,
    {
        pairs.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Map<String, Value> {
        let Value::Object(map) = json!({
            "name": "anchor",
            "count": 42,
            "ratio": "3.5",
            "enabled": "yes",
            "disabled": 0,
            "tags": ["a", "b"]
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn test_get_string_coercion() {
        let m = sample();
        assert_eq!(MapUtils::get_string(&m, "name", "x"), "anchor");
        assert_eq!(MapUtils::get_string(&m, "count", "x"), "42");
        assert_eq!(MapUtils::get_string(&m, "tags", "x"), "x");
        assert_eq!(MapUtils::get_string(&m, "missing", "x"), "x");
    }

    #[test]
    fn test_get_bool_coercion() {
        let m = sample();
        assert!(MapUtils::get_bool(&m, "enabled", false));
        assert!(!MapUtils::get_bool(&m, "disabled", true));
        assert!(MapUtils::get_bool(&m, "missing", true));
        assert!(!MapUtils::get_bool(&m, "name", false));
    }

    #[test]
    fn test_numeric_coercion() {
        let m = sample();
        assert_eq!(MapUtils::get_i64(&m, "count", -1), 42);
        assert_eq!(MapUtils::get_i64(&m, "missing", -1), -1);
        assert_eq!(MapUtils::get_f64(&m, "ratio", 0.0), 3.5);
        assert_eq!(MapUtils::get_f64(&m, "name", 1.5), 1.5);
    }

    #[test]
    fn test_invert_and_merge() {
        let mut left = HashMap::new();
        left.insert("a", 1);
        left.insert("b", 2);
        let inverted = MapUtils::invert(&left);
        assert_eq!(inverted.get(&1), Some(&"a"));

        let mut right = HashMap::new();
        right.insert("b", 9);
        right.insert("c", 3);
        let merged = MapUtils::merge(&left, &right);
        assert_eq!(merged.get("b"), Some(&9));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_ordered_and_sorted() {
        let pairs = [("z", 1), ("a", 2), ("z", 3)];
        let ordered = MapUtils::to_ordered(&pairs);
        assert_eq!(ordered.get_index(0), Some((&"z", &3)));

        let map = MapUtils::from_pairs(&pairs);
        let sorted = MapUtils::to_sorted(&map);
        assert_eq!(sorted.keys().next(), Some(&"a"));
    }

    #[test]
    fn test_get_or_default() {
        let mut m = HashMap::new();
        m.insert("k", 5);
        assert_eq!(*MapUtils::get_or_default(&m, &"k", &0), 5);
        assert_eq!(*MapUtils::get_or_default(&m, &"missing", &0), 0);
        assert!(MapUtils::is_empty::<&str, i32>(None));
        assert!(MapUtils::is_not_empty(Some(&m)));
    }
}
