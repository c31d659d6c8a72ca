// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text ranges, typed payloads, and occurrences.

use core::ops::Range;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use url::Url;

use crate::kind::EntityKind;

/// Named components of a structured match (for example `"City"` → `"Lisbon"`).
pub type Components = BTreeMap<String, String>;

/// Half-open range `[start, start + len)` over the UTF-8 code units of a text buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRange {
    /// First code unit covered.
    pub start: usize,
    /// Number of code units covered.
    pub len: usize,
}

impl TextRange {
    /// Create a range from a start offset and a length.
    #[inline(always)]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Create a range from start and end offsets. `end` is clamped to `start`.
    #[inline]
    pub const fn from_bounds(start: usize, end: usize) -> Self {
        Self {
            start,
            len: end.saturating_sub(start),
        }
    }

    /// One past the last code unit covered.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether the range covers nothing.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `offset` lies inside the range. Empty ranges contain nothing.
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end()
    }

    /// Whether the two ranges share at least one code unit.
    #[inline]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// The standard library range with the same bounds.
    #[inline]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The covered slice of `text`, or `None` if the range is out of bounds
    /// or splits a character.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.as_range())
    }
}

impl From<Range<usize>> for TextRange {
    fn from(r: Range<usize>) -> Self {
        Self::from_bounds(r.start, r.end)
    }
}

/// Decoded value of an occurrence, one variant per [`EntityKind`].
///
/// `None` inside a variant means the detector matched the range but could
/// not decode the value. Such occurrences are indexed and styled, but
/// dispatching them does nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Payload {
    /// Address components.
    Address(Option<Components>),
    /// Point in time.
    Date(Option<DateTime<Utc>>),
    /// Phone number as written.
    PhoneNumber(Option<String>),
    /// Parsed link.
    Url(Option<Url>),
    /// Transit components (airline, flight number, ...).
    TransitInformation(Option<Components>),
    /// The matched tag text, including the leading `#`.
    Tag(String),
}

impl Payload {
    /// The kind this payload belongs to.
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Address(_) => EntityKind::Address,
            Self::Date(_) => EntityKind::Date,
            Self::PhoneNumber(_) => EntityKind::PhoneNumber,
            Self::Url(_) => EntityKind::Url,
            Self::TransitInformation(_) => EntityKind::TransitInformation,
            Self::Tag(_) => EntityKind::Tag,
        }
    }

    /// Whether the value failed to decode.
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::Address(v) | Self::TransitInformation(v) => v.is_none(),
            Self::Date(v) => v.is_none(),
            Self::PhoneNumber(v) => v.is_none(),
            Self::Url(v) => v.is_none(),
            Self::Tag(_) => false,
        }
    }
}

/// A detected span of text plus its decoded value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occurrence {
    /// Where the entity sits in the text.
    pub range: TextRange,
    /// What the entity decoded to.
    pub payload: Payload,
}

impl Occurrence {
    /// Create an occurrence.
    pub const fn new(range: TextRange, payload: Payload) -> Self {
        Self { range, payload }
    }

    /// Shorthand for `self.payload.kind()`.
    #[inline]
    pub const fn kind(&self) -> EntityKind {
        self.payload.kind()
    }
}

/// A link annotation already present on the input text's styling.
///
/// These are not produced by detection; the aggregator turns them into
/// extra [`EntityKind::Url`] occurrences when links are enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkAnnotation {
    /// Range carrying the link attribute.
    pub range: TextRange,
    /// Link target, when it is a valid URL.
    pub url: Option<Url>,
}

impl LinkAnnotation {
    /// The `Url` occurrence standing for this annotation.
    pub fn to_occurrence(&self) -> Occurrence {
        Occurrence::new(self.range, Payload::Url(self.url.clone()))
    }
}
