// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `OccurrenceIndex`: per-kind buckets and offset lookup.

use core::fmt;

use glint_entity::{EntityKind, KindSet, Occurrence, TextRange};

/// Mapping from [`EntityKind`] to the occurrences of that kind, in detection order.
///
/// Buckets are stored in kind declaration order, which is also the order
/// [`OccurrenceIndex::lookup`] consults them in.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OccurrenceIndex {
    buckets: [Vec<Occurrence>; EntityKind::COUNT],
    built: bool,
}

impl fmt::Debug for OccurrenceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<(EntityKind, usize)> = EntityKind::ALL
            .into_iter()
            .map(|kind| (kind, self.buckets[kind.index()].len()))
            .filter(|(_, n)| *n > 0)
            .collect();
        f.debug_struct("OccurrenceIndex")
            .field("built", &self.built)
            .field("counts", &counts)
            .finish()
    }
}

impl OccurrenceIndex {
    /// Create an empty index that has never been built.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh index from `occurrences`, in the order given.
    pub fn from_occurrences<I: IntoIterator<Item = Occurrence>>(occurrences: I) -> Self {
        let mut idx = Self::new();
        idx.rebuild(occurrences);
        idx
    }

    /// Clear every bucket, then append each occurrence to its kind's bucket
    /// in the order received. Marks the index built.
    pub fn rebuild<I: IntoIterator<Item = Occurrence>>(&mut self, occurrences: I) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        for occ in occurrences {
            self.buckets[occ.kind().index()].push(occ);
        }
        self.built = true;
        tracing::debug!(occurrences = self.len(), "occurrence index rebuilt");
    }

    /// Drop all occurrences and mark the index stale.
    ///
    /// Call when the text changes; lookups return `None` until the next
    /// [`rebuild`](Self::rebuild).
    pub fn invalidate(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.built = false;
    }

    /// Whether the index reflects the current text.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// The first occurrence whose range contains `offset`.
    ///
    /// Kinds are consulted in declaration order and each bucket in detection
    /// order, so when ranges of different kinds overlap the earliest-declared
    /// kind wins, and within a kind the earliest-detected occurrence wins.
    pub fn lookup(&self, offset: usize) -> Option<&Occurrence> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter())
            .find(|occ| occ.range.contains(offset))
    }

    /// Visit every occurrence containing `offset`, in lookup order.
    pub fn visit_offset<'a, F: FnMut(&'a Occurrence)>(&'a self, offset: usize, mut f: F) {
        for occ in self.iter() {
            if occ.range.contains(offset) {
                f(occ);
            }
        }
    }

    /// Every occurrence containing `offset`, in lookup order.
    pub fn query_offset(&self, offset: usize) -> impl Iterator<Item = &Occurrence> + '_ {
        self.iter().filter(move |occ| occ.range.contains(offset))
    }

    /// Occurrences of `kind`, in detection order.
    pub fn occurrences(&self, kind: EntityKind) -> &[Occurrence] {
        &self.buckets[kind.index()]
    }

    /// Ranges of the kinds in `kinds`, kind by kind in declaration order.
    pub fn ranges_for(&self, kinds: KindSet) -> impl Iterator<Item = (EntityKind, TextRange)> + '_ {
        kinds.kinds().flat_map(move |kind| {
            self.buckets[kind.index()]
                .iter()
                .map(move |occ| (kind, occ.range))
        })
    }

    /// All occurrences, kind by kind in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Occurrence> + '_ {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    /// Kinds with at least one occurrence.
    pub fn kinds(&self) -> KindSet {
        EntityKind::ALL
            .into_iter()
            .filter(|kind| !self.buckets[kind.index()].is_empty())
            .collect()
    }

    /// Total number of occurrences.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether there are no occurrences.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_entity::Payload;

    fn tag(start: usize, len: usize) -> Occurrence {
        Occurrence::new(TextRange::new(start, len), Payload::Tag("#t".into()))
    }

    fn url(start: usize, len: usize) -> Occurrence {
        Occurrence::new(TextRange::new(start, len), Payload::Url(None))
    }

    #[test]
    fn new_index_is_not_built() {
        let idx = OccurrenceIndex::new();
        assert!(!idx.is_built());
        assert!(idx.is_empty());
        assert_eq!(idx.lookup(0), None);
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let mut idx = OccurrenceIndex::from_occurrences([tag(0, 2), url(5, 3)]);
        assert_eq!(idx.len(), 2);
        idx.rebuild([tag(10, 2)]);
        assert_eq!(idx.len(), 1);
        assert!(idx.occurrences(EntityKind::Url).is_empty());
        assert_eq!(idx.kinds(), KindSet::TAG);
    }

    #[test]
    fn invalidate_marks_stale_and_hides_occurrences() {
        let mut idx = OccurrenceIndex::from_occurrences([tag(0, 2)]);
        idx.invalidate();
        assert!(!idx.is_built());
        assert_eq!(idx.lookup(1), None);
    }

    #[test]
    fn overlapping_kinds_resolve_to_the_earlier_declared_kind() {
        // Tag is inserted first but Url is declared before Tag.
        let idx = OccurrenceIndex::from_occurrences([tag(0, 6), url(2, 6)]);
        assert_eq!(idx.lookup(3).map(Occurrence::kind), Some(EntityKind::Url));
        assert_eq!(idx.lookup(0).map(Occurrence::kind), Some(EntityKind::Tag));
        assert_eq!(idx.lookup(7).map(Occurrence::kind), Some(EntityKind::Url));
        assert_eq!(idx.lookup(8), None);
    }

    #[test]
    fn overlap_within_a_kind_resolves_to_the_first_detected() {
        let idx = OccurrenceIndex::from_occurrences([tag(4, 4), tag(0, 10)]);
        assert_eq!(idx.lookup(5).map(|o| o.range), Some(TextRange::new(4, 4)));
        assert_eq!(idx.lookup(1).map(|o| o.range), Some(TextRange::new(0, 10)));
    }

    #[test]
    fn query_and_visit_agree() {
        let idx = OccurrenceIndex::from_occurrences([tag(0, 6), url(2, 6), tag(3, 1)]);
        let queried: Vec<_> = idx.query_offset(3).collect();
        let mut visited = Vec::new();
        idx.visit_offset(3, |o| visited.push(o));
        assert_eq!(queried, visited);
        assert_eq!(queried.len(), 3);
        assert_eq!(queried[0].kind(), EntityKind::Url);
    }

    #[test]
    fn ranges_for_filters_kinds() {
        let idx = OccurrenceIndex::from_occurrences([tag(0, 2), url(5, 3), tag(9, 2)]);
        let ranges: Vec<_> = idx.ranges_for(KindSet::TAG).collect();
        assert_eq!(
            ranges,
            vec![
                (EntityKind::Tag, TextRange::new(0, 2)),
                (EntityKind::Tag, TextRange::new(9, 2)),
            ]
        );
        assert_eq!(idx.ranges_for(KindSet::DATE).count(), 0);
    }
}
