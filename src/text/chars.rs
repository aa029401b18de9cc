// Mon Jan 26 2026 - Alex

use std::cmp::Ordering;

pub struct CharUtils;

impl CharUtils {
    pub const NUL: char = '\0';
    pub const CR: char = '\r';
    pub const LF: char = '\n';
    pub const SPACE: char = ' ';

    pub fn is_ascii_printable(c: char) -> bool {
        ('\x20'..='\x7e').contains(&c)
    }

    pub fn is_ascii_alpha(c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    pub fn is_ascii_alpha_upper(c: char) -> bool {
        c.is_ascii_uppercase()
    }

    pub fn is_ascii_alpha_lower(c: char) -> bool {
        c.is_ascii_lowercase()
    }

    pub fn is_ascii_numeric(c: char) -> bool {
        c.is_ascii_digit()
    }

    pub fn is_ascii_alphanumeric(c: char) -> bool {
        c.is_ascii_alphanumeric()
    }

    pub fn to_digit(c: char, radix: u32) -> Option<u32> {
        c.to_digit(radix)
    }

    pub fn from_digit(digit: u32, radix: u32) -> Option<char> {
        char::from_digit(digit, radix)
    }

    pub fn to_hex_char(nibble: u8) -> Option<char> {
        char::from_digit(nibble as u32, 16)
    }

    pub fn from_hex_char(c: char) -> Option<u8> {
        c.to_digit(16).map(|d| d as u8)
    }

    pub fn swap_case_char(c: char) -> char {
        if c.is_ascii_uppercase() {
            c.to_ascii_lowercase()
        } else if c.is_ascii_lowercase() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    pub fn compare_ignore_case(a: char, b: char) -> Ordering {
        a.to_lowercase().cmp(b.to_lowercase())
    }
}
