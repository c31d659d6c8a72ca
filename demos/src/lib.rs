// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the Glint demos.

use std::ops::Range;

use glint_hit::TextLayout;
use glint_label::{LayoutParams, Surface};
use glint_style::StyledText;
use kurbo::{Point, Rect};

/// Glyph advance, in points.
pub const ADVANCE: f64 = 8.0;
/// Line height, in points.
pub const LINE_HEIGHT: f64 = 16.0;

/// Fixed-advance layout that wraps at a column limit, breaking only at spaces.
#[derive(Debug)]
pub struct WrappedMono {
    columns: usize,
    lines: Vec<Range<usize>>,
    max_lines: usize,
}

impl WrappedMono {
    /// A layout wrapping at `columns` glyphs.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            lines: Vec::new(),
            max_lines: 0,
        }
    }

    fn relayout(&mut self, text: &str) {
        self.lines.clear();
        let mut start = 0;
        let mut last_space = None;
        for (i, ch) in text.char_indices() {
            if ch == ' ' {
                last_space = Some(i);
            }
            if i - start >= self.columns {
                let end = last_space.filter(|s| *s > start).map_or(i, |s| s + 1);
                self.lines.push(start..end);
                start = end;
                last_space = None;
            }
        }
        if start < text.len() {
            self.lines.push(start..text.len());
        }
        if self.max_lines > 0 {
            self.lines.truncate(self.max_lines);
        }
    }

    /// Row holding `glyph`.
    pub fn line_of(&self, glyph: usize) -> Option<usize> {
        self.lines.iter().position(|l| l.contains(&glyph))
    }

    /// Center of the glyph for `offset`, relative to the container origin.
    pub fn glyph_center(&self, offset: usize) -> Option<Point> {
        let row = self.line_of(offset)?;
        let col = offset - self.lines[row].start;
        Some(Point::new(
            (col as f64 + 0.5) * ADVANCE,
            (row as f64 + 0.5) * LINE_HEIGHT,
        ))
    }
}

impl TextLayout for WrappedMono {
    fn glyph_index_for_point(&self, point: Point) -> Option<usize> {
        let last_row = self.lines.len().checked_sub(1)?;
        let row = ((point.y.max(0.0) / LINE_HEIGHT) as usize).min(last_row);
        let line = &self.lines[row];
        let col = (point.x.max(0.0) / ADVANCE) as usize;
        Some((line.start + col).min(line.end - 1))
    }

    fn line_fragment_used_rect(&self, glyph: usize) -> Option<Rect> {
        let row = self.line_of(glyph)?;
        let line = &self.lines[row];
        let y0 = row as f64 * LINE_HEIGHT;
        Some(Rect::new(0.0, y0, line.len() as f64 * ADVANCE, y0 + LINE_HEIGHT))
    }

    fn character_index_for_glyph(&self, glyph: usize) -> usize {
        glyph
    }

    fn glyph_range(&self) -> Range<usize> {
        0..self.lines.last().map_or(0, |l| l.end)
    }
}

impl Surface for WrappedMono {
    fn replace_text(&mut self, text: &StyledText, params: &LayoutParams) {
        self.max_lines = params.max_lines;
        self.relayout(text.text());
        tracing::info!(lines = self.lines.len(), runs = text.runs().len(), "surface updated");
    }

    fn request_redraw(&mut self) {
        tracing::info!("redraw requested");
    }
}
