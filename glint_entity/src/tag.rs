// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hashtag pattern and the scanner for custom-pattern kinds.
//!
//! A tag is a `#` followed by word characters containing at least one ASCII
//! letter. The match always starts at the hash sign, so text glued to the
//! left of it (`word#tag`) is never part of the tag.

use std::sync::LazyLock;

use regex::Regex;

use crate::kind::EntityKind;
use crate::types::{Occurrence, Payload, TextRange};

/// Source of the tag pattern.
pub const TAG_PATTERN: &str = r"#\w*[A-Za-z]+\w*";

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TAG_PATTERN).expect("tag pattern is a valid regex"));

/// The compiled tag pattern.
pub(crate) fn pattern() -> &'static Regex {
    &TAG
}

/// Scanner for one kind recognized by a custom pattern instead of the
/// external detector.
#[derive(Clone, Debug)]
pub struct PatternScanner {
    kind: EntityKind,
    pattern: &'static Regex,
}

impl PatternScanner {
    /// Scanner for `kind`, or `None` when the kind has no custom pattern.
    pub fn for_kind(kind: EntityKind) -> Option<Self> {
        let pattern = kind.custom_pattern()?;
        Some(Self { kind, pattern })
    }

    /// The kind this scanner produces.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Scan the whole of `text`, returning matches in text order.
    pub fn scan(&self, text: &str) -> Vec<Occurrence> {
        self.pattern
            .find_iter(text)
            .map(|m| {
                tracing::trace!(kind = %self.kind, start = m.start(), text = m.as_str(), "pattern match");
                let range = TextRange::from(m.range());
                let payload = match self.kind {
                    EntityKind::Tag => Payload::Tag(m.as_str().to_owned()),
                    other => unreachable!("{other} has no custom pattern"),
                };
                Occurrence::new(range, payload)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tags(text: &str) -> Vec<&str> {
        pattern().find_iter(text).map(|m| m.as_str()).collect()
    }

    #[rstest]
    #[case::single_letter("#a", &["#a"])]
    #[case::digits_only("#123", &[])]
    #[case::glued_to_word("word#tag", &["#tag"])]
    #[case::bare_hash("# ", &[])]
    #[case::digits_then_letters("#123abc", &["#123abc"])]
    #[case::underscore_only("#_", &[])]
    #[case::double_hash("##tag", &["#tag"])]
    #[case::adjacent_tags("#one#two", &["#one", "#two"])]
    #[case::in_sentence("big #deal today", &["#deal"])]
    fn tag_pattern_cases(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(tags(text), expected);
    }

    #[test]
    fn scanner_reports_ranges_and_literal_payloads() {
        let scanner = PatternScanner::for_kind(EntityKind::Tag).unwrap();
        let found = scanner.scan("so #deal and #123 or x#y");
        assert_eq!(
            found,
            vec![
                Occurrence::new(TextRange::new(3, 5), Payload::Tag("#deal".into())),
                Occurrence::new(TextRange::new(22, 2), Payload::Tag("#y".into())),
            ]
        );
    }

    #[test]
    fn native_kinds_have_no_scanner() {
        assert!(PatternScanner::for_kind(EntityKind::Url).is_none());
        assert!(PatternScanner::for_kind(EntityKind::Address).is_none());
    }
}
