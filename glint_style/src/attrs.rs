// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute keys, values, and bundles.

use std::borrow::Cow;

use glint_entity::EntityKind;
use smallvec::SmallVec;
use url::Url;

/// Name of a style attribute.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttrKey(Cow<'static, str>);

impl AttrKey {
    /// Glyph color.
    pub const FOREGROUND_COLOR: Self = Self::from_static("foregroundColor");
    /// Fill behind glyphs.
    pub const BACKGROUND_COLOR: Self = Self::from_static("backgroundColor");
    /// Font.
    pub const FONT: Self = Self::from_static("font");
    /// Underline style.
    pub const UNDERLINE: Self = Self::from_static("underline");
    /// Link target. Spans carrying this key are reported by
    /// [`StyledText::link_annotations`](crate::StyledText::link_annotations).
    pub const LINK: Self = Self::from_static("link");

    /// Key backed by a static name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Key with an arbitrary name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The key's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// The default entity color (`#007AFF`).
    pub const LINK_BLUE: Self = Self::rgb(0x00, 0x7A, 0xFF);

    /// Opaque color from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Color from components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Font request, resolved by the host's text engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Family name.
    pub family: String,
    /// Point size.
    pub size: f64,
}

impl Font {
    /// Create a font request.
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Underline drawing style.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnderlineStyle {
    /// No underline.
    #[default]
    None,
    /// One thin line.
    Single,
    /// Two thin lines.
    Double,
    /// One thick line.
    Thick,
}

/// Value of a style attribute. Opaque to Glint; interpreted by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A color.
    Color(Color),
    /// A font.
    Font(Font),
    /// An underline style.
    Underline(UnderlineStyle),
    /// A flag.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A real number.
    Float(f64),
    /// Free text (also accepted as a link target).
    Text(String),
    /// A link target.
    Link(Url),
}

/// Small ordered map of style attributes applied together.
///
/// Inserting an existing key replaces its value in place, so iteration order
/// is first-insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeBundle {
    entries: SmallVec<[(AttrKey, AttrValue); 4]>,
}

impl AttributeBundle {
    /// An empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundle applied to every kind until the host says otherwise:
    /// [`Color::LINK_BLUE`] foreground and a single underline.
    pub fn default_entity() -> Self {
        Self::new()
            .with(AttrKey::FOREGROUND_COLOR, AttrValue::Color(Color::LINK_BLUE))
            .with(AttrKey::UNDERLINE, AttrValue::Underline(UnderlineStyle::Single))
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: AttrKey, value: AttrValue) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, returning the previous value.
    pub fn insert(&mut self, key: AttrKey, value: AttrValue) -> Option<AttrValue> {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(core::mem::replace(slot, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Value for `key`.
    pub fn get(&self, key: &AttrKey) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &AttrKey) -> Option<AttrValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Overlay `other` onto `self`; `other` wins on shared keys.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.insert(key.clone(), value.clone());
        }
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttrKey, &AttrValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One attribute bundle per entity kind.
#[derive(Clone, Debug, PartialEq)]
pub struct KindBundles {
    bundles: [AttributeBundle; EntityKind::COUNT],
}

impl Default for KindBundles {
    fn default() -> Self {
        Self::uniform(&AttributeBundle::default_entity())
    }
}

impl KindBundles {
    /// The same bundle for every kind.
    pub fn uniform(bundle: &AttributeBundle) -> Self {
        Self {
            bundles: core::array::from_fn(|_| bundle.clone()),
        }
    }

    /// Bundle for `kind`.
    pub fn get(&self, kind: EntityKind) -> &AttributeBundle {
        &self.bundles[kind.index()]
    }

    /// Replace the bundle for `kind`. Returns whether it changed.
    pub fn set(&mut self, kind: EntityKind, bundle: AttributeBundle) -> bool {
        let slot = &mut self.bundles[kind.index()];
        if *slot == bundle {
            return false;
        }
        *slot = bundle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut b = AttributeBundle::new()
            .with(AttrKey::FONT, AttrValue::Int(1))
            .with(AttrKey::LINK, AttrValue::Int(2));
        assert_eq!(b.insert(AttrKey::FONT, AttrValue::Int(3)), Some(AttrValue::Int(1)));
        let keys: Vec<_> = b.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["font", "link"]);
        assert_eq!(b.get(&AttrKey::FONT), Some(&AttrValue::Int(3)));
    }

    #[test]
    fn merge_lets_the_overlay_win() {
        let mut base = AttributeBundle::new()
            .with(AttrKey::FOREGROUND_COLOR, AttrValue::Color(Color::BLACK))
            .with(AttrKey::new("kern"), AttrValue::Float(1.5));
        base.merge(&AttributeBundle::default_entity());
        assert_eq!(
            base.get(&AttrKey::FOREGROUND_COLOR),
            Some(&AttrValue::Color(Color::LINK_BLUE))
        );
        assert_eq!(base.get(&AttrKey::new("kern")), Some(&AttrValue::Float(1.5)));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn remove_drops_only_that_key() {
        let mut b = AttributeBundle::default_entity();
        assert!(b.remove(&AttrKey::UNDERLINE).is_some());
        assert!(b.remove(&AttrKey::UNDERLINE).is_none());
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn kind_bundles_default_to_the_entity_bundle() {
        let mut bundles = KindBundles::default();
        for kind in EntityKind::ALL {
            assert_eq!(bundles.get(kind), &AttributeBundle::default_entity());
        }
        assert!(!bundles.set(EntityKind::Date, AttributeBundle::default_entity()));
        assert!(bundles.set(EntityKind::Date, AttributeBundle::new()));
        assert!(bundles.get(EntityKind::Date).is_empty());
        assert!(!bundles.get(EntityKind::Tag).is_empty());
    }
}
