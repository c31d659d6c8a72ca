// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small regex-backed [`DataDetector`] for phone numbers, links and ISO dates.
//!
//! This is not locale aware and never reports addresses or transit
//! information. It exists so hosts without a platform detector, demos, and
//! tests have something concrete behind the detector contract.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use regex::{Captures, Regex};
use url::Url;

use crate::detector::{DataDetector, MatchFields, RawMatch};
use crate::kind::NativeTypes;
use crate::types::TextRange;

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b")
        .expect("phone pattern is a valid regex")
});

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)[^\s<>\[\]{}|\\^`\x00-\x1f]+")
        .expect("link pattern is a valid regex")
});

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").expect("date pattern is a valid regex")
});

/// Punctuation trimmed from the end of a link match.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', '\'', '"'];

/// Regex-backed reference detector.
///
/// Matches are returned in text order. When two patterns overlap, the match
/// starting first (then the longer one) is kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicDetector;

impl BasicDetector {
    /// Create the detector.
    pub const fn new() -> Self {
        Self
    }

    fn phones(text: &str, out: &mut Vec<RawMatch>) {
        for m in PHONE.find_iter(text) {
            let fields = MatchFields {
                phone_number: Some(m.as_str().to_owned()),
                ..MatchFields::default()
            };
            out.push(RawMatch::new(m.range().into(), NativeTypes::PHONE_NUMBER, fields));
        }
    }

    fn links(text: &str, out: &mut Vec<RawMatch>) {
        for m in LINK.find_iter(text) {
            let trimmed = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
            if trimmed.is_empty() {
                continue;
            }
            let url = if trimmed.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("www.")) {
                Url::parse(&format!("http://{trimmed}")).ok()
            } else {
                Url::parse(trimmed).ok()
            };
            let fields = MatchFields {
                url,
                ..MatchFields::default()
            };
            out.push(RawMatch::new(
                TextRange::new(m.start(), trimmed.len()),
                NativeTypes::LINK,
                fields,
            ));
        }
    }

    fn dates(text: &str, out: &mut Vec<RawMatch>) {
        for caps in ISO_DATE.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let date = parse_iso_date(&caps);
            let fields = MatchFields {
                date,
                ..MatchFields::default()
            };
            out.push(RawMatch::new(whole.range().into(), NativeTypes::DATE, fields));
        }
    }
}

fn parse_iso_date(caps: &Captures<'_>) -> Option<DateTime<Utc>> {
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    let day = caps.get(3)?.as_str().parse().ok()?;
    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&naive))
}

impl DataDetector for BasicDetector {
    fn find(&self, text: &str, types: NativeTypes) -> Vec<RawMatch> {
        let mut found = Vec::new();
        if types.contains(NativeTypes::LINK) {
            Self::links(text, &mut found);
        }
        if types.contains(NativeTypes::DATE) {
            Self::dates(text, &mut found);
        }
        if types.contains(NativeTypes::PHONE_NUMBER) {
            Self::phones(text, &mut found);
        }
        found.sort_by(|a, b| {
            a.range
                .start
                .cmp(&b.range.start)
                .then(b.range.len.cmp(&a.range.len))
        });

        let mut out: Vec<RawMatch> = Vec::with_capacity(found.len());
        for m in found {
            if out.last().is_some_and(|prev| prev.range.overlaps(&m.range)) {
                continue;
            }
            out.push(m);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn spans(text: &str, types: NativeTypes) -> Vec<(NativeTypes, &str)> {
        BasicDetector
            .find(text, types)
            .into_iter()
            .map(|m| (m.kind, m.range.slice(text).unwrap()))
            .collect()
    }

    #[test]
    fn finds_phone_and_link_in_text_order() {
        let text = "Call 555-123-4567 or visit http://example.com #deal";
        assert_eq!(
            spans(text, NativeTypes::all()),
            vec![
                (NativeTypes::PHONE_NUMBER, "555-123-4567"),
                (NativeTypes::LINK, "http://example.com"),
            ]
        );
    }

    #[test]
    fn only_requested_types_are_reported() {
        let text = "Call 555-123-4567 or visit http://example.com";
        assert_eq!(
            spans(text, NativeTypes::LINK),
            vec![(NativeTypes::LINK, "http://example.com")]
        );
        assert!(spans(text, NativeTypes::ADDRESS).is_empty());
    }

    #[test]
    fn link_trailing_punctuation_is_trimmed() {
        let found = BasicDetector.find("see www.example.org.", NativeTypes::LINK);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].range, TextRange::new(4, 15));
        assert_eq!(
            found[0].fields.url.as_ref().map(Url::as_str),
            Some("http://www.example.org/")
        );
    }

    #[test]
    fn impossible_dates_match_without_a_value() {
        let found = BasicDetector.find("on 2026-10-17 or 2026-13-45", NativeTypes::DATE);
        assert_eq!(found.len(), 2);
        let first = found[0].fields.date.expect("valid date decodes");
        assert_eq!((first.year(), first.month(), first.day()), (2026, 10, 17));
        assert!(found[1].fields.date.is_none());
    }

    #[test]
    fn overlapping_matches_keep_the_earlier_one() {
        let text = "http://example.com/5551234567";
        assert_eq!(
            spans(text, NativeTypes::all()),
            vec![(NativeTypes::LINK, text)]
        );
    }
}
