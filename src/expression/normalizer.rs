//! Rewriting of operator spellings into the canonical alphabet
//!
//! | Canonical | Meaning       | Accepted spellings  |
//! |-----------|---------------|---------------------|
//! | `^`       | AND           | `and`, `&&`, `^`    |
//! | `v`       | OR            | `or`, `\|\|`, `v`   |
//! | `~`       | NOT           | `not`, `!`, `~`     |
//! | `>`       | IMPLIES       | `->`, `>`           |
//! | `-`       | BICONDITIONAL | `<->`, `-`          |

use log::debug;

/// Substitutions applied in order
///
/// Longer spellings come before the shorter ones they contain, so `<->` is
/// consumed before `->` can match inside it and `not ` swallows its trailing
/// space before the bare `not`.
const REWRITES: [(&str, &str); 9] = [
    ("or", "v"),
    ("||", "v"),
    ("and", "^"),
    ("&&", "^"),
    ("not ", "~"),
    ("not", "~"),
    ("!", "~"),
    ("<->", "-"),
    ("->", ">"),
];

/// Normalize a raw expression into the canonical operator alphabet
///
/// Leading and trailing whitespace is trimmed. Nesting is not inspected; this
/// is a plain textual rewrite.
///
/// # Examples
///
/// ```
/// use proptable::normalize;
///
/// assert_eq!(normalize("  a and not b -> c "), "a ^ ~b > c");
/// assert_eq!(normalize("!(p || q) <-> r"), "~(p v q) - r");
/// ```
pub fn normalize(raw: &str) -> String {
    let normalized = REWRITES
        .iter()
        .fold(raw.trim().to_string(), |text, (from, to)| text.replace(from, to));
    debug!("normalized {:?} to {:?}", raw, normalized);
    normalized
}
