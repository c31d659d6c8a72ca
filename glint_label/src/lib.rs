// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glint Label: a text label that recognizes and dispatches entities.
//!
//! [`EntityLabel`] ties the other Glint crates together:
//!
//! - text and configuration changes run detection
//!   ([`glint_entity::detect`]) and rebuild the
//!   [`OccurrenceIndex`](glint_index::OccurrenceIndex) when needed,
//! - the enabled kinds' bundles are applied with [`glint_style::apply`] and
//!   the result is handed to the host [`Surface`],
//! - pointer events are resolved with [`glint_hit::resolve`] and dispatched
//!   to an [`EntityObserver`](glint_responder::EntityObserver).
//!
//! Each setter does the least work its change needs. Several changes can be
//! grouped in a [`Batch`] so that work runs once, with one redraw.
//!
//! # Example
//!
//! ```rust
//! use core::ops::Range;
//! use glint_entity::{BasicDetector, EntityKind, KindSet};
//! use glint_hit::TextLayout;
//! use glint_label::{EntityLabel, LayoutParams, Surface};
//! use glint_style::{AttributeBundle, StyledText};
//! use kurbo::{Point, Rect};
//!
//! /// One line, 10 points per glyph.
//! #[derive(Default)]
//! struct Line {
//!     len: usize,
//!     redraws: usize,
//! }
//!
//! impl TextLayout for Line {
//!     fn glyph_index_for_point(&self, p: Point) -> Option<usize> {
//!         Some(((p.x.max(0.0) / 10.0) as usize).min(self.len.checked_sub(1)?))
//!     }
//!     fn line_fragment_used_rect(&self, _: usize) -> Option<Rect> {
//!         Some(Rect::new(0.0, 0.0, self.len as f64 * 10.0, 20.0))
//!     }
//!     fn character_index_for_glyph(&self, glyph: usize) -> usize {
//!         glyph
//!     }
//!     fn glyph_range(&self) -> Range<usize> {
//!         0..self.len
//!     }
//! }
//!
//! impl Surface for Line {
//!     fn replace_text(&mut self, text: &StyledText, _: &LayoutParams) {
//!         self.len = text.len();
//!     }
//!     fn request_redraw(&mut self) {
//!         self.redraws += 1;
//!     }
//! }
//!
//! let mut label = EntityLabel::new(BasicDetector, Line::default());
//! label.set_text("Call 555-123-4567 or visit http://example.com #deal");
//! assert_eq!(label.occurrences().len(), 3);
//!
//! let hit = label.hit_test(Point::new(65.0, 10.0));
//! assert_eq!(hit.map(|o| o.kind()), Some(EntityKind::PhoneNumber));
//!
//! // Several changes, one redraw.
//! let before = label.surface().redraws;
//! {
//!     let mut batch = label.batch();
//!     batch.set_bundle(EntityKind::Tag, AttributeBundle::new());
//!     batch.set_enabled_kinds(KindSet::TAG | KindSet::URL);
//! }
//! assert_eq!(label.surface().redraws, before + 1);
//! assert_eq!(label.occurrences().len(), 2);
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`LabelConfig`].

mod config;
mod label;
mod press;
mod surface;

pub use config::{ConfigError, EdgeInsets, LabelConfig};
pub use glint_entity::ConfigError as KindError;
pub use label::{Batch, EntityLabel};
pub use surface::{DrawRequest, LayoutParams, Surface};
