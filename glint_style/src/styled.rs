// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `StyledText`: an immutable string with range-keyed attribute overlays.

use std::sync::Arc;

use glint_entity::{LinkAnnotation, TextRange};
use url::Url;

use crate::attrs::{AttrKey, AttrValue, AttributeBundle};
use crate::paragraph::ParagraphStyle;

/// An attribute bundle applied to a range.
#[derive(Clone, Debug, PartialEq)]
pub struct AttrSpan {
    /// Covered range.
    pub range: TextRange,
    /// Attributes set on the range.
    pub attrs: AttributeBundle,
}

/// A maximal range over which the effective attributes do not change.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRun {
    /// Covered range.
    pub range: TextRange,
    /// Effective attributes for the whole range.
    pub attrs: AttributeBundle,
}

/// Text plus ordered attribute spans and an optional paragraph style.
///
/// Spans are layered in order: where two spans set the same key on the same
/// code unit, the later span wins. Values are never edited in place; the
/// `with_*` builders return a new value and the text buffer is shared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    text: Arc<str>,
    spans: Vec<AttrSpan>,
    paragraph: Option<ParagraphStyle>,
}

impl StyledText {
    /// Unstyled text.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
            paragraph: None,
        }
    }

    /// Copy with one more span layered on top.
    #[must_use]
    pub fn with_span(mut self, range: TextRange, attrs: AttributeBundle) -> Self {
        self.spans.push(AttrSpan { range, attrs });
        self
    }

    /// Copy with the paragraph style replaced.
    #[must_use]
    pub fn with_paragraph(mut self, paragraph: ParagraphStyle) -> Self {
        self.paragraph = Some(paragraph);
        self
    }

    pub(crate) fn from_parts(
        text: Arc<str>,
        spans: Vec<AttrSpan>,
        paragraph: Option<ParagraphStyle>,
    ) -> Self {
        Self {
            text,
            spans,
            paragraph,
        }
    }

    /// The text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn shared_text(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    /// Spans, bottom to top.
    pub fn spans(&self) -> &[AttrSpan] {
        &self.spans
    }

    /// Paragraph style, if any.
    pub fn paragraph(&self) -> Option<&ParagraphStyle> {
        self.paragraph.as_ref()
    }

    /// Length in code units.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Effective attributes at `offset`: every span covering it, merged in order.
    pub fn attributes_at(&self, offset: usize) -> AttributeBundle {
        let mut out = AttributeBundle::new();
        for span in &self.spans {
            if span.range.contains(offset) {
                out.merge(&span.attrs);
            }
        }
        out
    }

    /// Flatten the spans into consecutive runs covering the whole text.
    ///
    /// Adjacent runs always differ in their attributes.
    pub fn runs(&self) -> Vec<StyleRun> {
        let len = self.len();
        if len == 0 {
            return Vec::new();
        }
        let mut cuts: Vec<usize> = Vec::with_capacity(self.spans.len() * 2 + 2);
        cuts.push(0);
        cuts.push(len);
        for span in &self.spans {
            cuts.push(span.range.start.min(len));
            cuts.push(span.range.end().min(len));
        }
        cuts.sort_unstable();
        cuts.dedup();

        let mut runs: Vec<StyleRun> = Vec::new();
        for pair in cuts.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            let attrs = self.attributes_at(start);
            match runs.last_mut() {
                Some(last) if last.attrs == attrs => {
                    last.range = TextRange::from_bounds(last.range.start, end);
                }
                _ => runs.push(StyleRun {
                    range: TextRange::from_bounds(start, end),
                    attrs,
                }),
            }
        }
        runs
    }

    /// Spans carrying [`AttrKey::LINK`], as link annotations.
    ///
    /// [`AttrValue::Link`] values are taken as is and [`AttrValue::Text`]
    /// values are parsed; anything else yields an annotation without a URL.
    pub fn link_annotations(&self) -> Vec<LinkAnnotation> {
        self.spans
            .iter()
            .filter_map(|span| {
                let url = match span.attrs.get(&AttrKey::LINK)? {
                    AttrValue::Link(url) => Some(url.clone()),
                    AttrValue::Text(s) => Url::parse(s).ok(),
                    _ => None,
                };
                Some(LinkAnnotation {
                    range: span.range,
                    url,
                })
            })
            .collect()
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Color;

    fn color(c: Color) -> AttributeBundle {
        AttributeBundle::new().with(AttrKey::FOREGROUND_COLOR, AttrValue::Color(c))
    }

    #[test]
    fn later_spans_win_on_overlap() {
        let red = Color::rgb(255, 0, 0);
        let text = StyledText::new("abcdef")
            .with_span(TextRange::new(0, 4), color(Color::BLACK))
            .with_span(TextRange::new(2, 4), color(red));
        assert_eq!(
            text.attributes_at(1).get(&AttrKey::FOREGROUND_COLOR),
            Some(&AttrValue::Color(Color::BLACK))
        );
        assert_eq!(
            text.attributes_at(3).get(&AttrKey::FOREGROUND_COLOR),
            Some(&AttrValue::Color(red))
        );
    }

    #[test]
    fn runs_cover_the_text_and_coalesce() {
        let text = StyledText::new("abcdefgh")
            .with_span(TextRange::new(2, 2), color(Color::BLACK))
            .with_span(TextRange::new(4, 2), color(Color::BLACK));
        let runs = text.runs();
        let ranges: Vec<_> = runs.iter().map(|r| r.range).collect();
        assert_eq!(
            ranges,
            vec![
                TextRange::new(0, 2),
                TextRange::new(2, 4),
                TextRange::new(6, 2),
            ]
        );
        assert!(runs[0].attrs.is_empty());
        assert_eq!(runs[1].attrs, color(Color::BLACK));
    }

    #[test]
    fn runs_of_empty_text_are_empty() {
        assert!(StyledText::new("").runs().is_empty());
    }

    #[test]
    fn link_annotations_accept_urls_and_text() {
        let url = Url::parse("https://example.com/a").unwrap();
        let text = StyledText::new("one two three")
            .with_span(
                TextRange::new(0, 3),
                AttributeBundle::new().with(AttrKey::LINK, AttrValue::Link(url.clone())),
            )
            .with_span(TextRange::new(4, 3), color(Color::BLACK))
            .with_span(
                TextRange::new(8, 5),
                AttributeBundle::new().with(AttrKey::LINK, AttrValue::Text("not a url".into())),
            );
        assert_eq!(
            text.link_annotations(),
            vec![
                LinkAnnotation {
                    range: TextRange::new(0, 3),
                    url: Some(url),
                },
                LinkAnnotation {
                    range: TextRange::new(8, 5),
                    url: None,
                },
            ]
        );
    }
}
