// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glint Style: immutable styled text and entity styling.
//!
//! - [`StyledText`] pairs a shared string with ordered [`AttrSpan`] overlays
//!   and an optional [`ParagraphStyle`]. It is a value: builders return new
//!   values, nothing is edited in place.
//! - [`AttributeBundle`] is an opaque, ordered set of style attributes;
//!   [`KindBundles`] holds one per [`EntityKind`](glint_entity::EntityKind).
//! - [`apply`] layers the bundles of the enabled kinds over an input text,
//!   using the ranges recorded in an [`OccurrenceIndex`](glint_index::OccurrenceIndex).
//!
//! # Example
//!
//! ```rust
//! use glint_entity::{KindSet, Occurrence, Payload, TextRange};
//! use glint_index::OccurrenceIndex;
//! use glint_style::{AttrKey, AttrValue, Color, KindBundles, LabelStyle, StyledText, apply};
//!
//! let input = StyledText::new("see #deal");
//! let index = OccurrenceIndex::from_occurrences([Occurrence::new(
//!     TextRange::new(4, 5),
//!     Payload::Tag("#deal".into()),
//! )]);
//!
//! let styled = apply(&input, &index, KindSet::all(), &KindBundles::default(), &LabelStyle::default());
//! assert_eq!(
//!     styled.attributes_at(5).get(&AttrKey::FOREGROUND_COLOR),
//!     Some(&AttrValue::Color(Color::LINK_BLUE)),
//! );
//! assert!(styled.attributes_at(0).is_empty());
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`LabelStyle`],
//!   [`ParagraphStyle`] and their value types.

mod apply;
mod attrs;
mod paragraph;
mod styled;

pub use apply::{LabelStyle, apply};
pub use attrs::{AttrKey, AttrValue, AttributeBundle, Color, Font, KindBundles, UnderlineStyle};
pub use paragraph::{LineBreakMode, ParagraphStyle, TextAlignment};
pub use styled::{AttrSpan, StyleRun, StyledText};
