//! Company code derivation
//!
//! A company created through the API gets its primary key from its display
//! name. The rule is part of the public contract because the derived code is
//! returned to the client and used for every later lookup:
//!
//! 1. lowercase the name
//! 2. collapse every run of non-alphanumeric characters into a single `-`
//! 3. trim `-` from both ends
//!
//! Letters and digits outside ASCII are kept, so "Café" becomes `café`.
//! Such codes are percent-encoded in request paths (`/companies/caf%C3%A9`)
//! and decoded again by the path extractor.
//!
//! ```
//! use biztime::core::slug::slugify;
//!
//! assert_eq!(slugify("Test Co"), "test-co");
//! assert_eq!(slugify("  Apple, Inc. "), "apple-inc");
//! ```

use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("separator pattern is valid"));

/// Derive a path-segment code from a company name
///
/// Two names may map to the same code ("Acme Inc" and "acme-inc"); the
/// store's uniqueness constraint rejects the second insert.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    SEPARATORS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
