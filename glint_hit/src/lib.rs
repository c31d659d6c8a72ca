// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glint Hit: map a point in label space to the occurrence under it.
//!
//! Typesetting is not done here. The host's text engine implements
//! [`TextLayout`], which answers three narrow questions about a laid-out
//! text container: which glyph is nearest a point, what rectangle the glyphs
//! of that glyph's line actually occupy, and which character a glyph came
//! from. [`resolve`] chains those answers with an
//! [`OccurrenceIndex`] lookup.
//!
//! Resolution steps:
//!
//! 1. Empty text never hits.
//! 2. The point is moved into container space by subtracting the left and
//!    top insets.
//! 3. The nearest glyph's line fragment must contain the point. A point past
//!    the end of a short line is nearest to that line's last glyph, but lies
//!    outside its used rect, so it misses.
//! 4. The glyph's character offset is looked up in the index.
//!
//! A miss is `None`, never an error.
//!
//! # Example
//!
//! ```rust
//! use core::ops::Range;
//! use glint_entity::{Occurrence, Payload, TextRange};
//! use glint_hit::{TextLayout, resolve};
//! use glint_index::OccurrenceIndex;
//! use kurbo::{Insets, Point, Rect};
//!
//! /// One line, 10 points per glyph, 20 points tall.
//! struct Line(usize);
//!
//! impl TextLayout for Line {
//!     fn glyph_index_for_point(&self, point: Point) -> Option<usize> {
//!         let last = self.0.checked_sub(1)?;
//!         Some(((point.x.max(0.0) / 10.0) as usize).min(last))
//!     }
//!     fn line_fragment_used_rect(&self, _glyph: usize) -> Option<Rect> {
//!         Some(Rect::new(0.0, 0.0, self.0 as f64 * 10.0, 20.0))
//!     }
//!     fn character_index_for_glyph(&self, glyph: usize) -> usize {
//!         glyph
//!     }
//!     fn glyph_range(&self) -> Range<usize> {
//!         0..self.0
//!     }
//! }
//!
//! let text = "see #deal";
//! let index = OccurrenceIndex::from_occurrences([Occurrence::new(
//!     TextRange::new(4, 5),
//!     Payload::Tag("#deal".into()),
//! )]);
//! let layout = Line(text.len());
//! let insets = Insets::uniform(8.0);
//!
//! let hit = resolve(Point::new(8.0 + 55.0, 8.0 + 10.0), insets, &layout, text.len(), &index);
//! assert_eq!(hit.map(|o| o.range), Some(TextRange::new(4, 5)));
//! // Past the end of the line.
//! assert!(resolve(Point::new(8.0 + 200.0, 18.0), insets, &layout, text.len(), &index).is_none());
//! ```

use core::ops::Range;

use glint_entity::Occurrence;
use glint_index::OccurrenceIndex;
use kurbo::{Insets, Point, Rect};

/// Contract with the host's text layout engine.
///
/// All coordinates are in text-container space: the origin is the top-left
/// of the area inside the label's insets.
pub trait TextLayout {
    /// The glyph nearest `point`, or `None` when nothing is laid out.
    fn glyph_index_for_point(&self, point: Point) -> Option<usize>;

    /// The rectangle occupied by the glyphs of the line fragment holding
    /// `glyph`. This excludes trailing space up to the container width.
    fn line_fragment_used_rect(&self, glyph: usize) -> Option<Rect>;

    /// The text offset `glyph` was generated from.
    fn character_index_for_glyph(&self, glyph: usize) -> usize;

    /// Glyphs that fit in the container, for drawing.
    fn glyph_range(&self) -> Range<usize>;
}

impl<T: TextLayout + ?Sized> TextLayout for &T {
    fn glyph_index_for_point(&self, point: Point) -> Option<usize> {
        (**self).glyph_index_for_point(point)
    }

    fn line_fragment_used_rect(&self, glyph: usize) -> Option<Rect> {
        (**self).line_fragment_used_rect(glyph)
    }

    fn character_index_for_glyph(&self, glyph: usize) -> usize {
        (**self).character_index_for_glyph(glyph)
    }

    fn glyph_range(&self) -> Range<usize> {
        (**self).glyph_range()
    }
}

/// Move a label-space point into text-container space.
pub fn to_container(point: Point, insets: Insets) -> Point {
    Point::new(point.x - insets.x0, point.y - insets.y0)
}

/// Text offset under a label-space `point`, if the point lands on a glyph's
/// line.
pub fn resolve_offset<L: TextLayout + ?Sized>(
    point: Point,
    insets: Insets,
    layout: &L,
    text_len: usize,
) -> Option<usize> {
    if text_len == 0 {
        return None;
    }
    let local = to_container(point, insets);
    let glyph = layout.glyph_index_for_point(local)?;
    let used = layout.line_fragment_used_rect(glyph)?;
    if !used.contains(local) {
        tracing::trace!(?local, ?used, glyph, "point outside line fragment");
        return None;
    }
    Some(layout.character_index_for_glyph(glyph))
}

/// The occurrence under a label-space `point`.
///
/// See the crate docs for the resolution steps.
pub fn resolve<'a, L: TextLayout + ?Sized>(
    point: Point,
    insets: Insets,
    layout: &L,
    text_len: usize,
    index: &'a OccurrenceIndex,
) -> Option<&'a Occurrence> {
    let offset = resolve_offset(point, insets, layout, text_len)?;
    let hit = index.lookup(offset);
    tracing::trace!(offset, kind = ?hit.map(Occurrence::kind), "hit resolved");
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_entity::{EntityKind, Payload, TextRange};

    const ADVANCE: f64 = 10.0;
    const LINE_HEIGHT: f64 = 20.0;

    /// Monospace layout with explicit line breaks: each line is a range of
    /// glyphs and glyph `i` is character `i`.
    struct Lines(Vec<Range<usize>>);

    impl Lines {
        fn line_of(&self, glyph: usize) -> Option<usize> {
            self.0.iter().position(|l| l.contains(&glyph))
        }
    }

    impl TextLayout for Lines {
        fn glyph_index_for_point(&self, point: Point) -> Option<usize> {
            let last = self.0.len().checked_sub(1)?;
            let row = ((point.y.max(0.0) / LINE_HEIGHT) as usize).min(last);
            let line = &self.0[row];
            let col = (point.x.max(0.0) / ADVANCE) as usize;
            Some((line.start + col).min(line.end - 1))
        }

        fn line_fragment_used_rect(&self, glyph: usize) -> Option<Rect> {
            let row = self.line_of(glyph)?;
            let line = &self.0[row];
            let y0 = row as f64 * LINE_HEIGHT;
            Some(Rect::new(
                0.0,
                y0,
                (line.end - line.start) as f64 * ADVANCE,
                y0 + LINE_HEIGHT,
            ))
        }

        fn character_index_for_glyph(&self, glyph: usize) -> usize {
            glyph
        }

        fn glyph_range(&self) -> Range<usize> {
            0..self.0.last().map_or(0, |l| l.end)
        }
    }

    fn index() -> OccurrenceIndex {
        // "call 555 #x" / "www.a.b"
        OccurrenceIndex::from_occurrences([
            Occurrence::new(TextRange::new(5, 3), Payload::PhoneNumber(None)),
            Occurrence::new(TextRange::new(9, 2), Payload::Tag("#x".into())),
            Occurrence::new(TextRange::new(11, 7), Payload::Url(None)),
        ])
    }

    fn layout() -> Lines {
        Lines(vec![0..11, 11..18])
    }

    fn center_of(glyph: usize, row: usize, line_start: usize) -> Point {
        Point::new(
            (glyph - line_start) as f64 * ADVANCE + ADVANCE / 2.0,
            row as f64 * LINE_HEIGHT + LINE_HEIGHT / 2.0,
        )
    }

    #[test]
    fn resolves_glyphs_to_occurrences() {
        let idx = index();
        let hit = |p| resolve(p, Insets::ZERO, &layout(), 18, &idx).map(Occurrence::kind);
        assert_eq!(hit(center_of(6, 0, 0)), Some(EntityKind::PhoneNumber));
        assert_eq!(hit(center_of(10, 0, 0)), Some(EntityKind::Tag));
        assert_eq!(hit(center_of(13, 1, 11)), Some(EntityKind::Url));
        assert_eq!(hit(center_of(1, 0, 0)), None);
    }

    #[test]
    fn insets_are_subtracted() {
        let idx = index();
        let insets = Insets::new(30.0, 40.0, 0.0, 0.0);
        let p = center_of(6, 0, 0) + kurbo::Vec2::new(30.0, 40.0);
        assert_eq!(
            resolve(p, insets, &layout(), 18, &idx).map(Occurrence::kind),
            Some(EntityKind::PhoneNumber)
        );
        // Without the inset the same point lands on the second line, past its end.
        assert_eq!(resolve(p, Insets::ZERO, &layout(), 18, &idx), None);
    }

    #[test]
    fn dead_zone_past_a_short_line_misses() {
        let idx = index();
        // Second line is 7 glyphs wide; x = 100 is past its end but the
        // nearest glyph (17) belongs to the URL occurrence.
        let p = Point::new(100.0, LINE_HEIGHT * 1.5);
        assert_eq!(layout().glyph_index_for_point(p), Some(17));
        assert_eq!(resolve(p, Insets::ZERO, &layout(), 18, &idx), None);
    }

    #[test]
    fn empty_text_never_hits() {
        let idx = index();
        assert_eq!(resolve_offset(center_of(6, 0, 0), Insets::ZERO, &layout(), 0), None);
        assert_eq!(resolve(center_of(6, 0, 0), Insets::ZERO, &layout(), 0, &idx), None);
    }

    #[test]
    fn empty_layout_never_hits() {
        let idx = index();
        let empty = Lines(Vec::new());
        assert_eq!(resolve(Point::ORIGIN, Insets::ZERO, &empty, 18, &idx), None);
        assert_eq!(empty.glyph_range(), 0..0);
    }
}
