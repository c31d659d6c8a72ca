// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity style applicator.

use glint_entity::{KindSet, TextRange};
use glint_index::OccurrenceIndex;

use crate::attrs::{AttrKey, AttrValue, AttributeBundle, Color, Font, KindBundles};
use crate::paragraph::{LineBreakMode, TextAlignment};
use crate::styled::{AttrSpan, StyledText};

/// Label-level presentation applied beneath entity styling.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelStyle {
    /// Paragraph alignment.
    pub alignment: TextAlignment,
    /// Paragraph line breaking.
    pub line_break: LineBreakMode,
    /// Font for the whole text, below any input styling.
    pub font: Option<Font>,
    /// Glyph color for the whole text, below any input styling.
    pub text_color: Option<Color>,
}

impl LabelStyle {
    fn base_bundle(&self) -> AttributeBundle {
        let mut base = AttributeBundle::new();
        if let Some(font) = &self.font {
            base.insert(AttrKey::FONT, AttrValue::Font(font.clone()));
        }
        if let Some(color) = self.text_color {
            base.insert(AttrKey::FOREGROUND_COLOR, AttrValue::Color(color));
        }
        base
    }
}

/// Produce the styled text a renderer should draw.
///
/// Layers, bottom to top:
///
/// 1. the label's font and text color over the whole text,
/// 2. the input's own spans, unchanged,
/// 3. for each kind in `enabled` with occurrences in `index`, in kind
///    declaration order, that kind's bundle over each occurrence range.
///
/// Because later layers win, a kind declared later overrides an earlier one
/// where their ranges overlap. The paragraph style is the input's (or a
/// default) with alignment and line breaking taken from `style`.
///
/// `input` is never modified and the output depends only on the arguments,
/// so applying twice with the same arguments yields equal values.
pub fn apply(
    input: &StyledText,
    index: &OccurrenceIndex,
    enabled: KindSet,
    bundles: &KindBundles,
    style: &LabelStyle,
) -> StyledText {
    let paragraph = input
        .paragraph()
        .cloned()
        .unwrap_or_default()
        .with_layout(style.alignment, style.line_break);

    let mut spans = Vec::with_capacity(input.spans().len() + index.len() + 1);
    let base = style.base_bundle();
    if !base.is_empty() && !input.is_empty() {
        spans.push(AttrSpan {
            range: TextRange::new(0, input.len()),
            attrs: base,
        });
    }
    spans.extend_from_slice(input.spans());

    let styled_kinds = enabled & index.kinds();
    let before = spans.len();
    for (kind, range) in index.ranges_for(styled_kinds) {
        let bundle = bundles.get(kind);
        if bundle.is_empty() {
            continue;
        }
        spans.push(AttrSpan {
            range,
            attrs: bundle.clone(),
        });
    }
    tracing::debug!(
        kinds = ?styled_kinds,
        entity_spans = spans.len() - before,
        "applied entity styling"
    );

    StyledText::from_parts(input.shared_text(), spans, Some(paragraph))
}
