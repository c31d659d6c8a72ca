// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detection aggregator: one batched native pass, one scan per custom kind,
//! then pre-existing link annotations.

use crate::detector::DataDetector;
use crate::kind::KindSet;
use crate::tag::PatternScanner;
use crate::types::{LinkAnnotation, Occurrence};

/// Detect every enabled kind in `text`.
///
/// - All enabled native kinds are requested from `detector` in a single call.
/// - Each enabled custom-pattern kind gets its own scanner, run once.
/// - When [`KindSet::URL`] is enabled, `links` (link annotations already on
///   the input styling) are appended as extra `Url` occurrences, after
///   everything detected.
///
/// Results keep each detector's own order and are concatenated in that
/// sequence. Returns an empty list when `enabled` or `text` is empty.
///
/// # Panics
///
/// If the detector returns a match of a kind that was not requested or cannot
/// be mapped to an [`EntityKind`](crate::EntityKind).
pub fn detect<D: DataDetector + ?Sized>(
    detector: &D,
    text: &str,
    links: &[LinkAnnotation],
    enabled: KindSet,
) -> Vec<Occurrence> {
    if enabled.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let native = enabled.native_types();
    let scanners: Vec<PatternScanner> = enabled.kinds().filter_map(PatternScanner::for_kind).collect();

    let mut out = Vec::new();
    if !native.is_empty() {
        let raw = detector.find(text, native);
        tracing::debug!(types = ?native, matches = raw.len(), "native detection");
        out.extend(raw.into_iter().map(|m| m.decode(native)));
    }
    for scanner in &scanners {
        let found = scanner.scan(text);
        tracing::debug!(kind = %scanner.kind(), matches = found.len(), "pattern scan");
        out.extend(found);
    }
    if enabled.contains(KindSet::URL) && !links.is_empty() {
        tracing::debug!(links = links.len(), "appending existing link annotations");
        out.extend(links.iter().map(LinkAnnotation::to_occurrence));
    }
    out
}
