//! The closed keyword table for hardware states that have no decimal
//! spelling. Swapping this table and the width constants is all another
//! target format would need.

use crate::value::Float80;

/// Every accepted spelling. Bare `inf`/`nan` are positive; the first entry
/// listed for a pattern is its canonical spelling.
static KEYWORDS: [(&str, Float80); 10] = [
    ("snan", Float80::SNAN),
    ("+snan", Float80::SNAN),
    ("-snan", Float80::NEG_SNAN),
    ("qnan", Float80::QNAN),
    ("+qnan", Float80::QNAN),
    ("nan", Float80::QNAN),
    ("-qnan", Float80::NEG_QNAN),
    ("inf", Float80::INFINITY),
    ("+inf", Float80::INFINITY),
    ("-inf", Float80::NEG_INFINITY),
];

/// Case-insensitive keyword lookup.
pub fn lookup(keyword: &str) -> Option<Float80> {
    let keyword = keyword.trim();
    KEYWORDS
        .iter()
        .find(|(spelling, _)| keyword.eq_ignore_ascii_case(spelling))
        .map(|&(_, value)| value)
}

/// Canonical spelling for the six patterns that have one. Arbitrary-payload
/// NaNs and everything else return `None`.
pub fn keyword_for(value: Float80) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|&&(_, pattern)| pattern == value)
        .map(|&(spelling, _)| spelling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_canonical_patterns() {
        assert_eq!(lookup("inf"), Some(Float80::INFINITY));
        assert_eq!(lookup("+inf"), Some(Float80::INFINITY));
        assert_eq!(lookup("-inf"), Some(Float80::NEG_INFINITY));
        assert_eq!(lookup("nan"), Some(Float80::QNAN));
        assert_eq!(lookup("qnan"), Some(Float80::QNAN));
        assert_eq!(lookup("-qnan"), Some(Float80::NEG_QNAN));
        assert_eq!(lookup("snan"), Some(Float80::SNAN));
        assert_eq!(lookup("-snan"), Some(Float80::NEG_SNAN));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("+QNAN"), lookup("nan"));
        assert_eq!(lookup("Inf"), Some(Float80::INFINITY));
        assert_eq!(lookup("-SNaN"), Some(Float80::NEG_SNAN));
    }

    #[test]
    fn lookup_rejects_near_misses() {
        assert_eq!(lookup("infinity"), None);
        assert_eq!(lookup("nans"), None);
        assert_eq!(lookup("- inf"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn canonical_spellings_round_trip() {
        for &(spelling, pattern) in &KEYWORDS {
            let canonical = keyword_for(pattern).expect("canonical spelling");
            assert_eq!(lookup(canonical), Some(pattern), "spelling {spelling}");
        }
        assert_eq!(keyword_for(Float80::NEG_SNAN), Some("-snan"));
        assert_eq!(keyword_for(Float80::QNAN), Some("qnan"));
        assert_eq!(keyword_for(Float80::ZERO), None);
    }
}
