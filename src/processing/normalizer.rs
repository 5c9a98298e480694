//! Text normalization into a canonical lexical form

/// Lowercase, canonicalize punctuation and whitespace, and split letter/digit runs.
///
/// Only `a-z`, `0-9`, whitespace and the technical marks `+ . # / -` survive;
/// everything else becomes a space. Dash glyphs collapse to `-`. The result is
/// a fixed point: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut filtered = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        let c = match c {
            '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
            _ => c,
        };
        if is_kept(c) {
            filtered.push(c);
        } else {
            filtered.push(' ');
        }
    }

    let split = split_letter_digit(&filtered);
    split.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '.' | '#' | '/' | '-') || c.is_whitespace()
}

/// `python3` -> `python 3`, `3d` -> `3 d`
fn split_letter_digit(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if let Some(p) = prev {
            let boundary = (p.is_ascii_alphabetic() && c.is_ascii_digit())
                || (p.is_ascii_digit() && c.is_ascii_alphabetic());
            if boundary {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_normalization() {
        assert_eq!(normalize("  Senior   Rust\tEngineer\n"), "senior rust engineer");
        assert_eq!(normalize("Node.js, C++ & C#!"), "node.js c++ c#");
        assert_eq!(normalize("CI/CD (Jenkins)"), "ci/cd jenkins");
    }

    #[test]
    fn test_letter_digit_split() {
        assert_eq!(normalize("Python3"), "python 3");
        assert_eq!(normalize("10+years"), "10+years");
        assert_eq!(normalize("5years"), "5 years");
        assert_eq!(normalize("a1b2"), "a 1 b 2");
        assert_eq!(normalize("ICD-10"), "icd-10");
    }

    #[test]
    fn test_dash_glyphs() {
        assert_eq!(normalize("front\u{2013}end"), "front-end");
        assert_eq!(normalize("back\u{2014}end"), "back-end");
        assert_eq!(normalize("non\u{2011}breaking"), "non-breaking");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!! @@@ ***"), "");
    }

    #[test]
    fn test_fixed_point() {
        let samples = [
            "Experienced Python3 developer — AWS/GCP, K8s; 10+ yrs.",
            "Requirements:\n- C++17\n- Node.js\u{2013}Express",
            "\u{212A}8s caf\u{e9} na\u{ef}ve r\u{e9}sum\u{e9}",
            "ÀÉÎ 42abc def99 x_y",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not a fixed point for {:?}", s);
        }
    }
}
