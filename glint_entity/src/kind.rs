// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity kinds, the kind set, and the native detector type mask.

use core::fmt;
use core::str::FromStr;

use regex::Regex;

use crate::error::ConfigError;
use crate::tag;

/// A category of structured data recognized in displayed text.
///
/// Declaration order is significant. Every place that walks several kinds
/// (style merging, offset lookup, [`KindSet::kinds`]) walks them in this order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum EntityKind {
    /// Postal address.
    Address,
    /// Calendar date or date and time.
    Date,
    /// Telephone number.
    PhoneNumber,
    /// Web link.
    Url,
    /// Flight or other transit reference.
    TransitInformation,
    /// Hashtag-style tag, scanned by Glint itself.
    Tag,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Address,
        Self::Date,
        Self::PhoneNumber,
        Self::Url,
        Self::TransitInformation,
        Self::Tag,
    ];

    /// Number of kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this kind in [`EntityKind::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable camelCase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Date => "date",
            Self::PhoneNumber => "phoneNumber",
            Self::Url => "url",
            Self::TransitInformation => "transitInformation",
            Self::Tag => "tag",
        }
    }

    /// Whether matches of this kind come from the external [`DataDetector`](crate::DataDetector).
    pub const fn uses_external_detector(self) -> bool {
        self.native_type().is_some()
    }

    /// The detector flag requesting this kind, if it is natively detected.
    pub const fn native_type(self) -> Option<NativeTypes> {
        match self {
            Self::Address => Some(NativeTypes::ADDRESS),
            Self::Date => Some(NativeTypes::DATE),
            Self::PhoneNumber => Some(NativeTypes::PHONE_NUMBER),
            Self::Url => Some(NativeTypes::LINK),
            Self::TransitInformation => Some(NativeTypes::TRANSIT_INFORMATION),
            Self::Tag => None,
        }
    }

    /// The pattern scanned for this kind when it is not natively detected.
    pub fn custom_pattern(self) -> Option<&'static Regex> {
        match self {
            Self::Tag => Some(tag::pattern()),
            _ => None,
        }
    }

    /// Map a single detector flag back to its kind.
    ///
    /// Returns `None` unless `flag` is exactly one known flag.
    pub fn from_native(flag: NativeTypes) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.native_type() == Some(flag))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::UnknownKind(s.to_owned()))
    }
}

bitflags::bitflags! {
    /// Type mask understood by the external detector.
    ///
    /// All enabled native kinds are folded into one mask so the detector
    /// scans the text once.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NativeTypes: u8 {
        /// Postal addresses.
        const ADDRESS             = 0b0000_0001;
        /// Dates.
        const DATE                = 0b0000_0010;
        /// Phone numbers.
        const PHONE_NUMBER        = 0b0000_0100;
        /// Links.
        const LINK                = 0b0000_1000;
        /// Transit information.
        const TRANSIT_INFORMATION = 0b0001_0000;
    }
}

bitflags::bitflags! {
    /// Set of enabled entity kinds.
    ///
    /// Iterating with [`KindSet::kinds`] always yields declaration order,
    /// independent of how the set was built.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KindSet: u8 {
        /// [`EntityKind::Address`].
        const ADDRESS             = 1 << 0;
        /// [`EntityKind::Date`].
        const DATE                = 1 << 1;
        /// [`EntityKind::PhoneNumber`].
        const PHONE_NUMBER        = 1 << 2;
        /// [`EntityKind::Url`].
        const URL                 = 1 << 3;
        /// [`EntityKind::TransitInformation`].
        const TRANSIT_INFORMATION = 1 << 4;
        /// [`EntityKind::Tag`].
        const TAG                 = 1 << 5;
    }
}

impl KindSet {
    /// The singleton set for `kind`.
    #[inline]
    pub const fn of(kind: EntityKind) -> Self {
        Self::from_bits_truncate(1 << kind.index())
    }

    /// Whether `kind` is in the set.
    #[inline]
    pub const fn has(self, kind: EntityKind) -> bool {
        self.contains(Self::of(kind))
    }

    /// Kinds in the set, in declaration order.
    pub fn kinds(self) -> impl Iterator<Item = EntityKind> {
        EntityKind::ALL.into_iter().filter(move |kind| self.has(*kind))
    }

    /// Union of the detector flags for the natively detected kinds in the set.
    pub fn native_types(self) -> NativeTypes {
        self.kinds()
            .filter_map(EntityKind::native_type)
            .fold(NativeTypes::empty(), |acc, flag| acc | flag)
    }
}

impl Default for KindSet {
    fn default() -> Self {
        Self::all()
    }
}

impl From<EntityKind> for KindSet {
    fn from(kind: EntityKind) -> Self {
        Self::of(kind)
    }
}

impl FromIterator<EntityKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = EntityKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, kind| acc | Self::of(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tag_uses_a_custom_pattern() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.uses_external_detector(), kind != EntityKind::Tag);
            assert_eq!(kind.custom_pattern().is_some(), kind == EntityKind::Tag);
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.name().parse::<EntityKind>(), Ok(kind));
        }
        assert_eq!(
            "email".parse::<EntityKind>(),
            Err(ConfigError::UnknownKind("email".into()))
        );
    }

    #[test]
    fn kinds_iterate_in_declaration_order() {
        let set: KindSet = [EntityKind::Tag, EntityKind::Address, EntityKind::Url]
            .into_iter()
            .collect();
        let kinds: Vec<_> = set.kinds().collect();
        assert_eq!(
            kinds,
            vec![EntityKind::Address, EntityKind::Url, EntityKind::Tag]
        );
    }

    #[test]
    fn native_types_exclude_tag() {
        let set = KindSet::URL | KindSet::PHONE_NUMBER | KindSet::TAG;
        assert_eq!(
            set.native_types(),
            NativeTypes::LINK | NativeTypes::PHONE_NUMBER
        );
        assert!(KindSet::TAG.native_types().is_empty());
    }

    #[test]
    fn from_native_requires_a_single_flag() {
        assert_eq!(
            EntityKind::from_native(NativeTypes::DATE),
            Some(EntityKind::Date)
        );
        assert_eq!(
            EntityKind::from_native(NativeTypes::DATE | NativeTypes::LINK),
            None
        );
        assert_eq!(EntityKind::from_native(NativeTypes::empty()), None);
    }
}
