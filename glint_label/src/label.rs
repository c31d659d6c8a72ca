// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `EntityLabel`: configuration, invalidation, batching and taps.

use core::fmt;
use core::ops::{Deref, DerefMut};
use std::sync::Arc;

use glint_entity::{DataDetector, EntityKind, KindSet, Occurrence, detect};
use glint_hit::{TextLayout, resolve};
use glint_index::OccurrenceIndex;
use glint_responder::{EntityObserver, Outcome, dispatch, dispatch_hit};
use glint_style::{
    AttributeBundle, Color, Font, KindBundles, LabelStyle, LineBreakMode, StyledText,
    TextAlignment, apply,
};
use kurbo::{Insets, Point};

use crate::config::{ConfigError, LabelConfig, validate_insets};
use crate::press::{PressResult, PressState};
use crate::surface::{DrawRequest, LayoutParams, Surface};

bitflags::bitflags! {
    /// Work owed to the surface after configuration changes.
    ///
    /// Levels nest: [`DETECT`](Self::DETECT) implies a restyle, and any
    /// restyle implies pushing new text to the surface.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub(crate) struct Invalidation: u8 {
        /// Only attribute bundles changed; reuse the index.
        const ATTRIBUTES = 1 << 0;
        /// Label-level style changed; reuse the index.
        const STYLE = 1 << 1;
        /// Text or enabled kinds changed; re-detect.
        const DETECT = 1 << 2;
        /// Container geometry changed; no restyle needed.
        const LAYOUT = 1 << 3;
    }
}

impl Invalidation {
    const RESTYLE: Self = Self::ATTRIBUTES.union(Self::STYLE).union(Self::DETECT);
}

/// A text label that detects, styles and dispatches entities.
///
/// Every setter states the work it causes. Outside a batch that work happens
/// before the setter returns and ends with exactly one redraw request. Inside
/// a [`batch`](Self::batch) the work is recorded and performed once when the
/// outermost batch ends. Setting a value equal to the current one does
/// nothing.
///
/// | Setter | Work |
/// |---|---|
/// | [`set_text`](Self::set_text), [`set_styled_text`](Self::set_styled_text) | re-detect, restyle, redraw |
/// | [`set_enabled_kinds`](Self::set_enabled_kinds) | re-detect, restyle, redraw |
/// | [`set_bundle`](Self::set_bundle), [`set_bundles`](Self::set_bundles) | restyle from the existing index, redraw |
/// | [`set_alignment`](Self::set_alignment), [`set_line_break_mode`](Self::set_line_break_mode), [`set_font`](Self::set_font), [`set_text_color`](Self::set_text_color) | restyle, redraw |
/// | [`set_insets`](Self::set_insets), [`set_max_lines`](Self::set_max_lines) | new layout parameters, redraw |
pub struct EntityLabel<D, S> {
    detector: D,
    surface: S,
    input: StyledText,
    enabled: KindSet,
    bundles: KindBundles,
    style: LabelStyle,
    insets: Insets,
    max_lines: usize,
    index: OccurrenceIndex,
    output: StyledText,
    observer: Option<Box<dyn EntityObserver>>,
    press: PressState,
    batch_depth: usize,
    pending: Invalidation,
}

impl<D, S> fmt::Debug for EntityLabel<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityLabel")
            .field("text", &self.input.text())
            .field("enabled", &self.enabled)
            .field("index", &self.index)
            .field("has_observer", &self.observer.is_some())
            .field("batch_depth", &self.batch_depth)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl<D: DataDetector, S: Surface> EntityLabel<D, S> {
    /// An empty label with every kind enabled and the default bundles.
    pub fn new(detector: D, surface: S) -> Self {
        let mut label = Self {
            detector,
            surface,
            input: StyledText::default(),
            enabled: KindSet::all(),
            bundles: KindBundles::default(),
            style: LabelStyle::default(),
            insets: Insets::ZERO,
            max_lines: 0,
            index: OccurrenceIndex::new(),
            output: StyledText::default(),
            observer: None,
            press: PressState::default(),
            batch_depth: 0,
            pending: Invalidation::empty(),
        };
        label.invalidate(Invalidation::DETECT | Invalidation::LAYOUT);
        label
    }

    /// A label configured from `config`.
    pub fn with_config(detector: D, surface: S, config: &LabelConfig) -> Result<Self, ConfigError> {
        let mut label = Self::new(detector, surface);
        label.configure(config)?;
        Ok(label)
    }

    /// Apply a whole configuration as one batch.
    ///
    /// Validation happens first; on error nothing changes.
    pub fn configure(&mut self, config: &LabelConfig) -> Result<(), ConfigError> {
        let insets = validate_insets(config.insets.into())?;
        let mut batch = self.batch();
        batch.set_enabled_kinds(config.kind_set());
        batch.set_alignment(config.alignment);
        batch.set_line_break_mode(config.line_break);
        batch.set_max_lines(config.max_lines);
        batch.set_font(config.font.clone());
        batch.set_text_color(config.text_color);
        batch.set_insets(insets)?;
        Ok(())
    }

    /// Open a batched-configuration scope.
    ///
    /// Setters called through the guard record their work; when the last
    /// open guard drops, the label re-detects or restyles once, as needed,
    /// and requests at most one redraw. Guards nest.
    pub fn batch(&mut self) -> Batch<'_, D, S> {
        self.batch_depth += 1;
        Batch { label: self }
    }

    /// Whether a batch scope is open.
    pub fn in_batch(&self) -> bool {
        self.batch_depth > 0
    }

    /// Replace the text with unstyled `text`.
    pub fn set_text(&mut self, text: impl Into<Arc<str>>) {
        self.set_styled_text(StyledText::new(text));
    }

    /// Replace the input styled text. Link annotations on it are reported as
    /// URLs when [`KindSet::URL`] is enabled.
    pub fn set_styled_text(&mut self, text: StyledText) {
        if self.input == text {
            return;
        }
        self.input = text;
        self.index.invalidate();
        self.press.cancel();
        self.invalidate(Invalidation::DETECT);
    }

    /// Replace the enabled kinds.
    pub fn set_enabled_kinds(&mut self, kinds: KindSet) {
        if self.enabled == kinds {
            return;
        }
        self.enabled = kinds;
        self.index.invalidate();
        self.press.cancel();
        self.invalidate(Invalidation::DETECT);
    }

    /// Replace the bundle for one kind.
    pub fn set_bundle(&mut self, kind: EntityKind, bundle: AttributeBundle) {
        if self.bundles.set(kind, bundle) {
            self.refresh_attributes_only(KindSet::of(kind));
        }
    }

    /// Replace every bundle.
    pub fn set_bundles(&mut self, bundles: KindBundles) {
        if self.bundles == bundles {
            return;
        }
        let changed: KindSet = EntityKind::ALL
            .into_iter()
            .filter(|kind| self.bundles.get(*kind) != bundles.get(*kind))
            .collect();
        self.bundles = bundles;
        self.refresh_attributes_only(changed);
    }

    /// Re-apply styling for `kinds` from the existing index, without detection.
    ///
    /// Does nothing when the index has not been built for the current text;
    /// the pending detection will restyle anyway.
    pub fn refresh_attributes_only(&mut self, kinds: KindSet) {
        if !self.index.is_built() {
            tracing::trace!(?kinds, "index stale; attribute refresh skipped");
            return;
        }
        tracing::trace!(?kinds, "attribute refresh");
        self.invalidate(Invalidation::ATTRIBUTES);
    }

    /// Set paragraph alignment.
    pub fn set_alignment(&mut self, alignment: TextAlignment) {
        if self.style.alignment != alignment {
            self.style.alignment = alignment;
            self.invalidate(Invalidation::STYLE);
        }
    }

    /// Set line breaking. Affects both the paragraph style and the container.
    pub fn set_line_break_mode(&mut self, line_break: LineBreakMode) {
        if self.style.line_break != line_break {
            self.style.line_break = line_break;
            self.invalidate(Invalidation::STYLE);
        }
    }

    /// Set the base font.
    pub fn set_font(&mut self, font: Option<Font>) {
        if self.style.font != font {
            self.style.font = font;
            self.invalidate(Invalidation::STYLE);
        }
    }

    /// Set the base text color.
    pub fn set_text_color(&mut self, color: Option<Color>) {
        if self.style.text_color != color {
            self.style.text_color = color;
            self.invalidate(Invalidation::STYLE);
        }
    }

    /// Set the text insets.
    pub fn set_insets(&mut self, insets: Insets) -> Result<(), ConfigError> {
        let insets = validate_insets(insets)?;
        if self.insets != insets {
            self.insets = insets;
            self.invalidate(Invalidation::LAYOUT);
        }
        Ok(())
    }

    /// Set the maximum line count; `0` means unlimited.
    pub fn set_max_lines(&mut self, max_lines: usize) {
        if self.max_lines != max_lines {
            self.max_lines = max_lines;
            self.invalidate(Invalidation::LAYOUT);
        }
    }

    /// Install or remove the tap observer.
    pub fn set_observer(&mut self, observer: Option<Box<dyn EntityObserver>>) {
        self.observer = observer;
    }

    /// The input text, as last set.
    pub fn styled_text(&self) -> &StyledText {
        &self.input
    }

    /// The styled text last handed to the surface.
    pub fn rendered_text(&self) -> &StyledText {
        &self.output
    }

    /// Enabled kinds.
    pub fn enabled_kinds(&self) -> KindSet {
        self.enabled
    }

    /// Current bundles.
    pub fn bundles(&self) -> &KindBundles {
        &self.bundles
    }

    /// Current label style.
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Current insets.
    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Current maximum line count.
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// The occurrence index. Empty and unbuilt while a re-detection is pending.
    pub fn occurrences(&self) -> &OccurrenceIndex {
        &self.index
    }

    /// The detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface, mutably. Call after the host resizes or re-lays out.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Parameters for the text container.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            insets: self.insets,
            max_lines: self.max_lines,
            line_break: self.style.line_break,
        }
    }

    /// The occurrence under a label-space point.
    pub fn hit_test(&self, point: Point) -> Option<&Occurrence> {
        resolve(point, self.insets, &self.surface, self.input.len(), &self.index)
    }

    /// Hit test and dispatch in one step, for hosts that recognize taps
    /// themselves.
    pub fn handle_tap(&mut self, point: Point) -> Outcome {
        let hit = resolve(point, self.insets, &self.surface, self.input.len(), &self.index);
        let observer: Option<&mut dyn EntityObserver> = match &mut self.observer {
            Some(observer) => Some(observer.as_mut()),
            None => None,
        };
        dispatch_hit(hit, observer)
    }

    /// Pointer went down. Returns whether it landed on an occurrence, in
    /// which case the host should keep delivering this pointer's events.
    pub fn on_pointer_down(&mut self, point: Point) -> bool {
        let hit = resolve(point, self.insets, &self.surface, self.input.len(), &self.index);
        self.press.on_down(hit)
    }

    /// Pointer went up. Dispatches when it is over the occurrence it went
    /// down on.
    pub fn on_pointer_up(&mut self, point: Point) -> Outcome {
        let hit = resolve(point, self.insets, &self.surface, self.input.len(), &self.index);
        match self.press.on_up(hit) {
            PressResult::Activate(occurrence) => {
                let observer: Option<&mut dyn EntityObserver> = match &mut self.observer {
                    Some(observer) => Some(observer.as_mut()),
                    None => None,
                };
                dispatch(&occurrence, observer)
            }
            PressResult::Suppressed => Outcome::Ignored,
        }
    }

    /// Pointer interaction was cancelled by the host.
    pub fn on_pointer_cancel(&mut self) {
        self.press.cancel();
    }

    /// Whether a pointer is down over an occurrence.
    pub fn is_pressed(&self) -> bool {
        self.press.pressed().is_some()
    }

    /// What to draw: the glyphs that fit, offset by the insets.
    pub fn draw_request(&self) -> DrawRequest {
        DrawRequest {
            glyphs: self.surface.glyph_range(),
            origin: Point::new(self.insets.x0, self.insets.y0),
        }
    }

    fn invalidate(&mut self, work: Invalidation) {
        if self.in_batch() {
            self.pending |= work;
        } else {
            self.flush(work);
        }
    }

    fn flush(&mut self, work: Invalidation) {
        if work.is_empty() {
            return;
        }
        if work.contains(Invalidation::DETECT) {
            let links = self.input.link_annotations();
            let found = detect(&self.detector, self.input.text(), &links, self.enabled);
            self.index.rebuild(found);
        }
        let restyle = work.intersects(Invalidation::RESTYLE);
        if restyle {
            self.output = apply(
                &self.input,
                &self.index,
                self.enabled,
                &self.bundles,
                &self.style,
            );
        }
        if restyle || work.contains(Invalidation::LAYOUT) {
            let params = self.layout_params();
            self.surface.replace_text(&self.output, &params);
        }
        self.surface.request_redraw();
        tracing::debug!(?work, occurrences = self.index.len(), "label flushed");
    }
}

/// A batched-configuration scope. See [`EntityLabel::batch`].
///
/// Dereferences to the label, so every setter is available on the guard.
pub struct Batch<'a, D: DataDetector, S: Surface> {
    label: &'a mut EntityLabel<D, S>,
}

impl<D: DataDetector, S: Surface> fmt::Debug for Batch<'_, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Batch")
            .field("depth", &self.label.batch_depth)
            .field("pending", &self.label.pending)
            .finish()
    }
}

impl<D: DataDetector, S: Surface> Deref for Batch<'_, D, S> {
    type Target = EntityLabel<D, S>;

    fn deref(&self) -> &Self::Target {
        self.label
    }
}

impl<D: DataDetector, S: Surface> DerefMut for Batch<'_, D, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.label
    }
}

impl<D: DataDetector, S: Surface> Drop for Batch<'_, D, S> {
    fn drop(&mut self) {
        self.label.batch_depth -= 1;
        if self.label.batch_depth == 0 {
            let work = core::mem::take(&mut self.label.pending);
            self.label.flush(work);
        }
    }
}
