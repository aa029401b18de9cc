// Sun Jan 25 2026 - Alex

use std::borrow::Cow;

use super::error::TextError;

pub struct StringUtils;

impl StringUtils {
    pub fn is_empty(s: Option<&str>) -> bool {
        s.map_or(true, |s| s.is_empty())
    }

    pub fn is_not_empty(s: Option<&str>) -> bool {
        !Self::is_empty(s)
    }

    pub fn is_blank(s: Option<&str>) -> bool {
        s.map_or(true, |s| s.trim().is_empty())
    }

    pub fn is_not_blank(s: Option<&str>) -> bool {
        !Self::is_blank(s)
    }

    pub fn default_if_empty<'a>(s: Option<&'a str>, default: &'a str) -> &'a str {
        match s {
            Some(s) if !s.is_empty() => s,
            _ => default,
        }
    }

    pub fn default_if_blank<'a>(s: Option<&'a str>, default: &'a str) -> &'a str {
        match s {
            Some(s) if !s.trim().is_empty() => s,
            _ => default,
        }
    }

    pub fn trim_to_empty(s: Option<&str>) -> &str {
        s.map_or("", str::trim)
    }

    pub fn trim_to_none(s: Option<&str>) -> Option<&str> {
        s.map(str::trim).filter(|t| !t.is_empty())
    }

    /// Strips leading chars listed in `strip`; an empty strip set means
    /// whitespace.
    pub fn strip_start<'a>(s: &'a str, strip: &str) -> &'a str {
        if strip.is_empty() {
            s.trim_start()
        } else {
            s.trim_start_matches(|c| strip.contains(c))
        }
    }

    pub fn strip_end<'a>(s: &'a str, strip: &str) -> &'a str {
        if strip.is_empty() {
            s.trim_end()
        } else {
            s.trim_end_matches(|c| strip.contains(c))
        }
    }

    pub fn pad_start(s: &str, width: usize, pad_char: char) -> String {
        let len = s.chars().count();
        if len >= width {
            s.to_string()
        } else {
            let padding: String = std::iter::repeat(pad_char).take(width - len).collect();
            format!("{}{}", padding, s)
        }
    }

    pub fn pad_end(s: &str, width: usize, pad_char: char) -> String {
        let len = s.chars().count();
        if len >= width {
            s.to_string()
        } else {
            let padding: String = std::iter::repeat(pad_char).take(width - len).collect();
            format!("{}{}", s, padding)
        }
    }

    pub fn center(s: &str, width: usize, pad_char: char) -> String {
        let len = s.chars().count();
        if len >= width {
            return s.to_string();
        }
        let total = width - len;
        let left: String = std::iter::repeat(pad_char).take(total / 2).collect();
        let right: String = std::iter::repeat(pad_char).take(total - total / 2).collect();
        format!("{}{}{}", left, s, right)
    }

    /// Shortens to `max_width` chars, ellipsis included. Widths below 4
    /// leave no room for content plus "...".
    pub fn abbreviate(s: &str, max_width: usize) -> Result<String, TextError> {
        if max_width < 4 {
            return Err(TextError::AbbreviateWidth(max_width));
        }
        if s.chars().count() <= max_width {
            return Ok(s.to_string());
        }
        let head: String = s.chars().take(max_width - 3).collect();
        Ok(format!("{}...", head))
    }

    pub fn truncate(s: &str, max_chars: usize) -> Cow<'_, str> {
        if s.chars().count() <= max_chars {
            Cow::Borrowed(s)
        } else {
            Cow::Owned(s.chars().take(max_chars).collect())
        }
    }

    pub fn equals_ignore_case(a: &str, b: &str) -> bool {
        a.to_lowercase() == b.to_lowercase()
    }

    pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
        let mut sc = s.chars();
        for pc in prefix.chars() {
            match sc.next() {
                Some(c) if c.to_lowercase().eq(pc.to_lowercase()) => {}
                _ => return false,
            }
        }
        true
    }

    pub fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
        let mut sc = s.chars().rev();
        for pc in suffix.chars().rev() {
            match sc.next() {
                Some(c) if c.to_lowercase().eq(pc.to_lowercase()) => {}
                _ => return false,
            }
        }
        true
    }

    /// Byte index of the first case-insensitive occurrence.
    pub fn index_of_ignore_case(s: &str, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        s.char_indices()
            .map(|(i, _)| i)
            .find(|&i| Self::starts_with_ignore_case(&s[i..], needle))
    }

    pub fn contains_ignore_case(s: &str, needle: &str) -> bool {
        Self::index_of_ignore_case(s, needle).is_some()
    }

    /// Char-indexed substring. Negative indices count back from the end,
    /// everything clamps, start past end yields empty.
    pub fn substring(s: &str, start: isize, end: isize) -> String {
        let chars: Vec<char> = s.chars().collect();
        let len = chars.len() as isize;
        let resolve = |i: isize| -> usize {
            let i = if i < 0 { len + i } else { i };
            i.clamp(0, len) as usize
        };
        let (a, b) = (resolve(start), resolve(end));
        if a >= b {
            String::new()
        } else {
            chars[a..b].iter().collect()
        }
    }

    pub fn substring_from(s: &str, start: isize) -> String {
        let len = s.chars().count() as isize;
        Self::substring(s, start, len)
    }

    pub fn capitalize(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn uncapitalize(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn swap_case(s: &str) -> String {
        s.chars()
            .flat_map(|c| {
                if c.is_uppercase() {
                    c.to_lowercase().collect::<Vec<char>>()
                } else if c.is_lowercase() {
                    c.to_uppercase().collect::<Vec<char>>()
                } else {
                    vec![c]
                }
            })
            .collect()
    }

    pub fn repeat_with_separator(s: &str, n: usize, sep: &str) -> String {
        if n == 0 {
            return String::new();
        }
        let mut out = String::with_capacity(s.len() * n + sep.len() * (n - 1));
        for i in 0..n {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(s);
        }
        out
    }

    /// Non-overlapping occurrence count.
    pub fn count_matches(s: &str, sub: &str) -> usize {
        if sub.is_empty() {
            return 0;
        }
        s.matches(sub).count()
    }

    pub fn remove_all(s: &str, sub: &str) -> String {
        if sub.is_empty() {
            return s.to_string();
        }
        s.replace(sub, "")
    }

    /// The remainder of `b` from the first char where the two diverge;
    /// empty when `b` is a prefix-equal match.
    pub fn difference(a: &str, b: &str) -> String {
        let prefix_chars = a
            .chars()
            .zip(b.chars())
            .take_while(|(x, y)| x == y)
            .count();
        b.chars().skip(prefix_chars).collect()
    }

    pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
        let mut end = 0;
        for (ca, cb) in a.chars().zip(b.chars()) {
            if ca != cb {
                break;
            }
            end += ca.len_utf8();
        }
        &a[..end]
    }

    pub fn reverse(s: &str) -> String {
        s.chars().rev().collect()
    }

    pub fn wrap(s: &str, wrap_with: &str) -> String {
        format!("{}{}{}", wrap_with, s, wrap_with)
    }

    /// Removes `wrap_with` from both ends only when present on both.
    pub fn unwrap_pair<'a>(s: &'a str, wrap_with: &str) -> &'a str {
        if wrap_with.is_empty() || s.len() < wrap_with.len() * 2 {
            return s;
        }
        if s.starts_with(wrap_with) && s.ends_with(wrap_with) {
            &s[wrap_with.len()..s.len() - wrap_with.len()]
        } else {
            s
        }
    }

    pub fn split_non_empty(s: &str, delim: char) -> Vec<String> {
        s.split(delim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn join_non_blank(parts: &[&str], sep: &str) -> String {
        parts
            .iter()
            .filter(|p| !p.trim().is_empty())
            .copied()
            .collect::<Vec<&str>>()
            .join(sep)
    }

    pub fn is_numeric(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
    }

    pub fn is_alpha(s: &str) -> bool {
        !s.is_empty() && s.chars().all(char::is_alphabetic)
    }

    pub fn is_alphanumeric(s: &str) -> bool {
        !s.is_empty() && s.chars().all(char::is_alphanumeric)
    }

    pub fn is_whitespace(s: &str) -> bool {
        !s.is_empty() && s.chars().all(char::is_whitespace)
    }
}
