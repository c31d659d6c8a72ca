// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-data label configuration and its errors.

use glint_entity::{EntityKind, KindSet};
use glint_style::{Color, Font, LineBreakMode, TextAlignment};
use kurbo::Insets;
use thiserror::Error;

/// Errors from validating label configuration.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// An entity kind name did not parse.
    #[error(transparent)]
    Kind(#[from] glint_entity::ConfigError),
    /// Insets must be finite and non-negative on every side.
    #[error("insets must be finite and non-negative, got {0:?}")]
    InvalidInsets(Insets),
}

/// Check that every side of `insets` is finite and non-negative.
pub(crate) fn validate_insets(insets: Insets) -> Result<Insets, ConfigError> {
    let sides = [insets.x0, insets.y0, insets.x1, insets.y1];
    if sides.iter().all(|v| v.is_finite() && *v >= 0.0) {
        Ok(insets)
    } else {
        Err(ConfigError::InvalidInsets(insets))
    }
}

/// Padding between the label bounds and its text, per side.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    /// Top padding.
    pub top: f64,
    /// Left padding.
    pub left: f64,
    /// Bottom padding.
    pub bottom: f64,
    /// Right padding.
    pub right: f64,
}

impl From<EdgeInsets> for Insets {
    fn from(e: EdgeInsets) -> Self {
        Self::new(e.left, e.top, e.right, e.bottom)
    }
}

/// Everything a label can be configured with, as plain data.
///
/// Apply it with [`EntityLabel::configure`](crate::EntityLabel::configure),
/// which validates it and performs the resulting work once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct LabelConfig {
    /// Kinds to detect. Order is irrelevant.
    pub enabled_kinds: Vec<EntityKind>,
    /// Paragraph alignment.
    pub alignment: TextAlignment,
    /// Line breaking.
    pub line_break: LineBreakMode,
    /// Maximum line count; `0` means unlimited.
    pub max_lines: usize,
    /// Text insets.
    pub insets: EdgeInsets,
    /// Base font.
    pub font: Option<Font>,
    /// Base text color.
    pub text_color: Option<Color>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            enabled_kinds: EntityKind::ALL.to_vec(),
            alignment: TextAlignment::default(),
            line_break: LineBreakMode::default(),
            max_lines: 0,
            insets: EdgeInsets::default(),
            font: None,
            text_color: None,
        }
    }
}

impl LabelConfig {
    /// Parse kind names (`"phoneNumber"`, `"url"`, ...) into
    /// [`enabled_kinds`](Self::enabled_kinds).
    pub fn with_kind_names<I, S>(mut self, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.enabled_kinds = names
            .into_iter()
            .map(|name| name.as_ref().parse::<EntityKind>())
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// Enabled kinds as a set.
    pub fn kind_set(&self) -> KindSet {
        self.enabled_kinds.iter().copied().collect()
    }
}
