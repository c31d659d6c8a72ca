// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph-level style.

/// Horizontal alignment of lines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum TextAlignment {
    /// Left for left-to-right scripts, right otherwise.
    #[default]
    Natural,
    /// Flush left.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
    /// Stretched to both edges, except the last line.
    Justified,
}

/// How lines too long for the container are broken or shortened.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    WordWrap,
    /// Wrap at any character.
    CharWrap,
    /// Cut off at the container edge.
    Clip,
    /// Ellipsis at the start of the last line.
    TruncateHead,
    /// Ellipsis at the end of the last line.
    #[default]
    TruncateTail,
    /// Ellipsis in the middle of the last line.
    TruncateMiddle,
}

/// Style applied to whole paragraphs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParagraphStyle {
    /// Line alignment.
    pub alignment: TextAlignment,
    /// Line breaking.
    pub line_break: LineBreakMode,
    /// Extra space between lines, in points.
    pub line_spacing: f64,
    /// Extra space after each paragraph, in points.
    pub paragraph_spacing: f64,
    /// Indent of lines after the first, in points.
    pub head_indent: f64,
}

impl ParagraphStyle {
    /// Copy of `self` with alignment and line breaking replaced.
    #[must_use]
    pub fn with_layout(mut self, alignment: TextAlignment, line_break: LineBreakMode) -> Self {
        self.alignment = alignment;
        self.line_break = line_break;
        self
    }
}
