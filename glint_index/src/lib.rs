// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glint Index: occurrences keyed by entity kind, with offset lookup.
//!
//! [`OccurrenceIndex`] keeps one bucket of [`Occurrence`](glint_entity::Occurrence)
//! values per [`EntityKind`](glint_entity::EntityKind).
//!
//! - [`OccurrenceIndex::rebuild`] replaces every bucket from a detection pass.
//! - [`OccurrenceIndex::invalidate`] marks the index stale after a text edit.
//! - [`OccurrenceIndex::lookup`] resolves a text offset to the occurrence
//!   covering it with a linear scan, consulting kinds in declaration order
//!   and each bucket in detection order.
//!
//! Ranges may overlap, within a kind or across kinds; nothing is
//! deduplicated. The lookup order above is the only tie-break.
//!
//! # Example
//!
//! ```rust
//! use glint_entity::{EntityKind, Occurrence, Payload, TextRange};
//! use glint_index::OccurrenceIndex;
//!
//! let idx = OccurrenceIndex::from_occurrences([
//!     Occurrence::new(TextRange::new(0, 5), Payload::Tag("#deal".into())),
//!     Occurrence::new(TextRange::new(10, 8), Payload::PhoneNumber(None)),
//! ]);
//!
//! assert_eq!(idx.lookup(3).map(|o| o.kind()), Some(EntityKind::Tag));
//! assert_eq!(idx.lookup(12).map(|o| o.kind()), Some(EntityKind::PhoneNumber));
//! assert!(idx.lookup(7).is_none());
//! ```

mod index;

pub use index::OccurrenceIndex;

#[cfg(test)]
mod tests {
    use super::*;
    use glint_entity::{EntityKind, Occurrence, Payload, TextRange};
    use proptest::prelude::*;

    fn occurrence(kind: usize, start: usize, len: usize) -> Occurrence {
        let payload = match EntityKind::ALL[kind] {
            EntityKind::Address => Payload::Address(None),
            EntityKind::Date => Payload::Date(None),
            EntityKind::PhoneNumber => Payload::PhoneNumber(Some(format!("p{start}"))),
            EntityKind::Url => Payload::Url(None),
            EntityKind::TransitInformation => Payload::TransitInformation(None),
            EntityKind::Tag => Payload::Tag(format!("#t{start}")),
        };
        Occurrence::new(TextRange::new(start, len), payload)
    }

    fn occurrences() -> impl Strategy<Value = Vec<Occurrence>> {
        prop::collection::vec(
            (0..EntityKind::COUNT, 0_usize..100, 0_usize..12)
                .prop_map(|(kind, start, len)| occurrence(kind, start, len)),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn every_covered_offset_resolves_to_a_covering_occurrence(occs in occurrences()) {
            let idx = OccurrenceIndex::from_occurrences(occs.clone());
            for occ in &occs {
                for offset in occ.range.as_range() {
                    let hit = idx.lookup(offset);
                    prop_assert!(hit.is_some());
                    let hit = hit.unwrap();
                    prop_assert!(hit.range.contains(offset));
                    // Nothing of an earlier kind covers this offset.
                    prop_assert!(hit.kind() <= occ.kind());
                    if hit.kind() == occ.kind() {
                        let bucket = idx.occurrences(occ.kind());
                        let first = bucket.iter().position(|o| o.range.contains(offset));
                        let own = bucket.iter().position(|o| o == occ);
                        prop_assert!(first <= own);
                    }
                }
            }
        }

        #[test]
        fn uncovered_offsets_resolve_to_nothing(occs in occurrences()) {
            let idx = OccurrenceIndex::from_occurrences(occs.clone());
            for offset in 0..120 {
                let covered = occs.iter().any(|o| o.range.contains(offset));
                prop_assert_eq!(idx.lookup(offset).is_some(), covered);
            }
        }

        #[test]
        fn rebuild_preserves_per_kind_detection_order(occs in occurrences()) {
            let idx = OccurrenceIndex::from_occurrences(occs.clone());
            prop_assert_eq!(idx.len(), occs.len());
            for kind in EntityKind::ALL {
                let expected: Vec<&Occurrence> = occs.iter().filter(|o| o.kind() == kind).collect();
                let stored: Vec<&Occurrence> = idx.occurrences(kind).iter().collect();
                prop_assert_eq!(stored, expected);
            }
        }
    }
}
