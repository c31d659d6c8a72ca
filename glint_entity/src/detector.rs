// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract for the external, natively provided data detector.

use chrono::{DateTime, Utc};
use url::Url;

use crate::kind::{EntityKind, NativeTypes};
use crate::types::{Components, Occurrence, Payload, TextRange};

/// External detector for the natively recognized kinds.
///
/// Implementations scan `text` once for every type in `types` and return the
/// matches in text order. A match must carry exactly one of the requested
/// flags; anything else is a contract violation and aborts decoding.
pub trait DataDetector {
    /// Find all matches of the requested types in `text`.
    fn find(&self, text: &str, types: NativeTypes) -> Vec<RawMatch>;
}

impl<T: DataDetector + ?Sized> DataDetector for &T {
    fn find(&self, text: &str, types: NativeTypes) -> Vec<RawMatch> {
        (**self).find(text, types)
    }
}

impl<T: DataDetector + ?Sized> DataDetector for Box<T> {
    fn find(&self, text: &str, types: NativeTypes) -> Vec<RawMatch> {
        (**self).find(text, types)
    }
}

/// Fields a detector managed to decode for a match.
///
/// Only the field belonging to the match's kind is read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchFields {
    /// Address or transit components.
    pub components: Option<Components>,
    /// Date value.
    pub date: Option<DateTime<Utc>>,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Link target.
    pub url: Option<Url>,
}

/// One undecoded detector result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawMatch {
    /// Matched range.
    pub range: TextRange,
    /// The single type flag this match belongs to.
    pub kind: NativeTypes,
    /// Decoded sub-fields, possibly incomplete.
    pub fields: MatchFields,
}

impl RawMatch {
    /// Create a match.
    pub fn new(range: TextRange, kind: NativeTypes, fields: MatchFields) -> Self {
        Self {
            range,
            kind,
            fields,
        }
    }

    /// Convert into a typed occurrence.
    ///
    /// Missing fields become an empty payload; the occurrence is kept.
    ///
    /// # Panics
    ///
    /// If `kind` is not exactly one flag contained in `requested`. Such a
    /// result means the detector broke its contract.
    pub fn decode(self, requested: NativeTypes) -> Occurrence {
        let kind = match EntityKind::from_native(self.kind) {
            Some(kind) if requested.contains(self.kind) => kind,
            _ => panic!(
                "detector returned unmappable kind {:?} (requested {:?})",
                self.kind, requested
            ),
        };
        let MatchFields {
            components,
            date,
            phone_number,
            url,
        } = self.fields;
        let payload = match kind {
            EntityKind::Address => Payload::Address(components),
            EntityKind::Date => Payload::Date(date),
            EntityKind::PhoneNumber => Payload::PhoneNumber(phone_number),
            EntityKind::Url => Payload::Url(url),
            EntityKind::TransitInformation => Payload::TransitInformation(components),
            EntityKind::Tag => unreachable!("tags are never natively detected"),
        };
        Occurrence::new(self.range, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_keeps_undecodable_matches() {
        let m = RawMatch::new(TextRange::new(0, 4), NativeTypes::DATE, MatchFields::default());
        let occ = m.decode(NativeTypes::DATE | NativeTypes::LINK);
        assert_eq!(occ.range, TextRange::new(0, 4));
        assert_eq!(occ.payload, Payload::Date(None));
    }

    #[test]
    fn decode_reads_the_field_for_its_kind() {
        let fields = MatchFields {
            phone_number: Some("555-0100".into()),
            url: Url::parse("https://example.com").ok(),
            ..MatchFields::default()
        };
        let m = RawMatch::new(TextRange::new(2, 8), NativeTypes::PHONE_NUMBER, fields);
        let occ = m.decode(NativeTypes::all());
        assert_eq!(occ.payload, Payload::PhoneNumber(Some("555-0100".into())));
    }

    #[test]
    #[should_panic(expected = "unmappable kind")]
    fn decode_panics_on_combined_flags() {
        let m = RawMatch::new(
            TextRange::new(0, 1),
            NativeTypes::DATE | NativeTypes::ADDRESS,
            MatchFields::default(),
        );
        let _ = m.decode(NativeTypes::all());
    }

    #[test]
    #[should_panic(expected = "unmappable kind")]
    fn decode_panics_on_unrequested_kind() {
        let m = RawMatch::new(TextRange::new(0, 1), NativeTypes::LINK, MatchFields::default());
        let _ = m.decode(NativeTypes::DATE);
    }
}
