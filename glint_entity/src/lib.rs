// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glint Entity: entity kinds, typed payloads, and detection orchestration.
//!
//! Glint annotates displayed text with structured entities (addresses, dates,
//! phone numbers, links, transit references and hashtag-style tags). This
//! crate is the bottom layer:
//!
//! - [`EntityKind`] enumerates the kinds. Every kind except [`EntityKind::Tag`]
//!   is recognized by an external [`DataDetector`]; tags are scanned here with
//!   [`TAG_PATTERN`].
//! - [`TextRange`], [`Payload`] and [`Occurrence`] describe what was found.
//! - [`detect`] runs all enabled detectors over a text and concatenates their
//!   results. Native kinds are always requested from the detector in a single
//!   batched call.
//!
//! It does not recognize addresses, dates, phone numbers or links itself.
//! Hosts plug in their platform detector; [`BasicDetector`] is a small
//! regex-backed stand-in for demos and tests.
//!
//! # Example
//!
//! ```rust
//! use glint_entity::{BasicDetector, EntityKind, KindSet, detect};
//!
//! let text = "Call 555-123-4567 or visit http://example.com #deal";
//! let found = detect(&BasicDetector, text, &[], KindSet::all());
//!
//! let kinds: Vec<_> = found.iter().map(|o| o.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [EntityKind::PhoneNumber, EntityKind::Url, EntityKind::Tag]
//! );
//! assert_eq!(found[2].range.slice(text), Some("#deal"));
//! ```
//!
//! ## Offsets
//!
//! Offsets and lengths count UTF-8 code units of the Rust string, so
//! [`TextRange::slice`] can borrow the matched text directly.
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for kinds, ranges and payloads.

mod aggregate;
mod basic;
mod detector;
mod error;
mod kind;
mod tag;
mod types;

pub use aggregate::detect;
pub use basic::BasicDetector;
pub use detector::{DataDetector, MatchFields, RawMatch};
pub use error::ConfigError;
pub use kind::{EntityKind, KindSet, NativeTypes};
pub use tag::{PatternScanner, TAG_PATTERN};
pub use types::{Components, LinkAnnotation, Occurrence, Payload, TextRange};
