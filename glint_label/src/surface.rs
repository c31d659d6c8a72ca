// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering surface a label draws into.

use core::ops::Range;

use glint_hit::TextLayout;
use glint_style::{LineBreakMode, StyledText};
use kurbo::{Insets, Point};

/// Container geometry handed to the surface with each new text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Padding between the label bounds and the text container.
    pub insets: Insets,
    /// Maximum number of lines; `0` means unlimited.
    pub max_lines: usize,
    /// Line breaking for the container.
    pub line_break: LineBreakMode,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            insets: Insets::ZERO,
            max_lines: 0,
            line_break: LineBreakMode::default(),
        }
    }
}

/// Host rendering surface: owns the text layout and draws it.
///
/// The label replaces the styled text wholesale and then asks for a redraw.
/// Hit testing goes through the [`TextLayout`] supertrait, so the surface
/// must re-lay out its text before answering layout queries.
pub trait Surface: TextLayout {
    /// Install new styled text and container parameters.
    fn replace_text(&mut self, text: &StyledText, params: &LayoutParams);

    /// Schedule a redraw.
    fn request_redraw(&mut self);
}

/// What to draw and where, in label space.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawRequest {
    /// Glyphs that fit in the container.
    pub glyphs: Range<usize>,
    /// Top-left of the text container.
    pub origin: Point,
}
