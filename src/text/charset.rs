// Mon Jan 26 2026 - Alex

use std::fmt;

use super::error::TextError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
    Ascii,
}

impl Charset {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Latin1 => "ISO-8859-1",
            Charset::Ascii => "US-ASCII",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bom {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl Bom {
    pub fn len(&self) -> usize {
        match self {
            Bom::Utf8 => 3,
            Bom::Utf16Le | Bom::Utf16Be => 2,
            Bom::Utf32Le | Bom::Utf32Be => 4,
        }
    }
}

pub struct CharsetUtils;

impl CharsetUtils {
    /// Resolves common charset aliases, case-insensitively.
    pub fn normalize_name(name: &str) -> Result<Charset, TextError> {
        let key = name.trim().to_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            "utf-16le" | "utf16le" => Ok(Charset::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Charset::Utf16Be),
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" => Ok(Charset::Latin1),
            "ascii" | "us-ascii" => Ok(Charset::Ascii),
            _ => Err(TextError::UnknownCharset(name.to_string())),
        }
    }

    pub fn is_valid_utf8(bytes: &[u8]) -> bool {
        std::str::from_utf8(bytes).is_ok()
    }

    pub fn decode_utf8(bytes: &[u8]) -> Result<String, TextError> {
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|e| TextError::InvalidUtf8 { valid_up_to: e.valid_up_to() })
    }

    pub fn decode_utf8_lossy(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    /// UTF-32 BOMs are checked before UTF-16 ones; the UTF-32LE BOM starts
    /// with the UTF-16LE one.
    pub fn detect_bom(bytes: &[u8]) -> Option<Bom> {
        if bytes.starts_with(&[0xff, 0xfe, 0x00, 0x00]) {
            Some(Bom::Utf32Le)
        } else if bytes.starts_with(&[0x00, 0x00, 0xfe, 0xff]) {
            Some(Bom::Utf32Be)
        } else if bytes.starts_with(&[0xef, 0xbb, 0xbf]) {
            Some(Bom::Utf8)
        } else if bytes.starts_with(&[0xff, 0xfe]) {
            Some(Bom::Utf16Le)
        } else if bytes.starts_with(&[0xfe, 0xff]) {
            Some(Bom::Utf16Be)
        } else {
            None
        }
    }

    pub fn strip_bom(bytes: &[u8]) -> &[u8] {
        match Self::detect_bom(bytes) {
            Some(bom) => &bytes[bom.len()..],
            None => bytes,
        }
    }

    /// Latin-1 decoding cannot fail; every byte maps to U+0000..U+00FF.
    pub fn decode_latin1(bytes: &[u8]) -> String {
        bytes.iter().map(|&b| b as char).collect()
    }

    pub fn encode_latin1(s: &str) -> Result<Vec<u8>, TextError> {
        s.chars()
            .map(|c| {
                let code = c as u32;
                if code <= 0xff {
                    Ok(code as u8)
                } else {
                    Err(TextError::UnrepresentableChar(code))
                }
            })
            .collect()
    }

    pub fn decode(charset: Charset, bytes: &[u8]) -> Result<String, TextError> {
        log::debug!("decoding {} bytes as {}", bytes.len(), charset);
        match charset {
            Charset::Utf8 => Self::decode_utf8(bytes),
            Charset::Latin1 => Ok(Self::decode_latin1(bytes)),
            Charset::Ascii => {
                match bytes.iter().position(|&b| b > 0x7f) {
                    Some(offset) => Err(TextError::InvalidEncoding { charset: "US-ASCII", offset }),
                    None => Ok(bytes.iter().map(|&b| b as char).collect()),
                }
            }
            Charset::Utf16Le => Self::decode_utf16(bytes, "UTF-16LE", u16::from_le_bytes),
            Charset::Utf16Be => Self::decode_utf16(bytes, "UTF-16BE", u16::from_be_bytes),
        }
    }

    fn decode_utf16(
        bytes: &[u8],
        name: &'static str,
        read: fn([u8; 2]) -> u16,
    ) -> Result<String, TextError> {
        if bytes.len() % 2 != 0 {
            return Err(TextError::InvalidEncoding { charset: name, offset: bytes.len() - 1 });
        }
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| read([pair[0], pair[1]]))
            .collect();
        let mut out = String::with_capacity(units.len());
        // Surrogate pairs consume two units, so track consumed units rather
        // than decoded chars to report the right byte offset.
        let mut unit_idx = 0usize;
        for decoded in char::decode_utf16(units.into_iter()) {
            match decoded {
                Ok(c) => {
                    out.push(c);
                    unit_idx += c.len_utf16();
                }
                Err(_) => {
                    return Err(TextError::InvalidEncoding { charset: name, offset: unit_idx * 2 })
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(CharsetUtils::normalize_name("utf8").unwrap(), Charset::Utf8);
        assert_eq!(CharsetUtils::normalize_name("UTF-8").unwrap(), Charset::Utf8);
        assert_eq!(CharsetUtils::normalize_name("latin1").unwrap(), Charset::Latin1);
        assert_eq!(CharsetUtils::normalize_name("ISO_8859_1").unwrap(), Charset::Latin1);
        assert_eq!(CharsetUtils::normalize_name("US-ASCII").unwrap(), Charset::Ascii);
        assert_eq!(CharsetUtils::normalize_name("utf 16le").unwrap(), Charset::Utf16Le);
        assert!(matches!(
            CharsetUtils::normalize_name("klingon"),
            Err(TextError::UnknownCharset(_))
        ));
    }

    #[test]
    fn test_utf8_validation() {
        assert!(CharsetUtils::is_valid_utf8("héllo".as_bytes()));
        assert!(!CharsetUtils::is_valid_utf8(&[0xff, 0xfe, 0x41]));
        assert_eq!(CharsetUtils::decode_utf8(b"abc").unwrap(), "abc");
        assert_eq!(
            CharsetUtils::decode_utf8(&[0x61, 0xff]),
            Err(TextError::InvalidUtf8 { valid_up_to: 1 })
        );
        assert_eq!(CharsetUtils::decode_utf8_lossy(&[0x61, 0xff]), "a\u{fffd}");
    }

    #[test]
    fn test_bom_detection() {
        assert_eq!(CharsetUtils::detect_bom(&[0xef, 0xbb, 0xbf, 0x41]), Some(Bom::Utf8));
        assert_eq!(CharsetUtils::detect_bom(&[0xff, 0xfe, 0x41, 0x00]), Some(Bom::Utf16Le));
        assert_eq!(CharsetUtils::detect_bom(&[0xff, 0xfe, 0x00, 0x00]), Some(Bom::Utf32Le));
        assert_eq!(CharsetUtils::detect_bom(b"plain"), None);
        assert_eq!(CharsetUtils::strip_bom(&[0xef, 0xbb, 0xbf, 0x41]), &[0x41]);
        assert_eq!(CharsetUtils::strip_bom(b"xy"), b"xy");
    }

    #[test]
    fn test_latin1() {
        let bytes = [0x63, 0x61, 0x66, 0xe9];
        assert_eq!(CharsetUtils::decode_latin1(&bytes), "café");
        assert_eq!(CharsetUtils::encode_latin1("café").unwrap(), bytes.to_vec());
        assert_eq!(
            CharsetUtils::encode_latin1("snowman ☃"),
            Err(TextError::UnrepresentableChar(0x2603))
        );
    }

    #[test]
    fn test_decode_dispatch() {
        assert_eq!(CharsetUtils::decode(Charset::Utf8, b"hi").unwrap(), "hi");
        assert_eq!(CharsetUtils::decode(Charset::Ascii, b"hi").unwrap(), "hi");
        assert!(matches!(
            CharsetUtils::decode(Charset::Ascii, &[0x68, 0xc3]),
            Err(TextError::InvalidEncoding { charset: "US-ASCII", offset: 1 })
        ));

        let le: Vec<u8> = "hé".encode_utf16().flat_map(u16::to_le_bytes).collect();
        assert_eq!(CharsetUtils::decode(Charset::Utf16Le, &le).unwrap(), "hé");
        let be: Vec<u8> = "hé".encode_utf16().flat_map(u16::to_be_bytes).collect();
        assert_eq!(CharsetUtils::decode(Charset::Utf16Be, &be).unwrap(), "hé");

        // Odd length and a lone surrogate both fail.
        assert!(CharsetUtils::decode(Charset::Utf16Le, &[0x41]).is_err());
        assert!(CharsetUtils::decode(Charset::Utf16Le, &[0x00, 0xd8]).is_err());
    }

    #[test]
    fn test_utf16_error_offset_after_surrogate_pair() {
        // One astral char (two code units, four bytes), then a lone high
        // surrogate. The error must point past the whole pair.
        let mut bytes: Vec<u8> = "😀".encode_utf16().flat_map(u16::to_le_bytes).collect();
        bytes.extend_from_slice(&0xd83du16.to_le_bytes());
        assert_eq!(
            CharsetUtils::decode(Charset::Utf16Le, &bytes),
            Err(TextError::InvalidEncoding { charset: "UTF-16LE", offset: 4 })
        );
    }
}
