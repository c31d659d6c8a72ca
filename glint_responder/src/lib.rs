// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glint Responder: route a resolved occurrence to a typed callback.
//!
//! An [`EntityObserver`] has one callback per entity kind, each taking the
//! decoded value. Every callback has an empty default body, so an observer
//! implements only the kinds it cares about.
//!
//! [`dispatch`] matches the occurrence's payload and calls exactly one
//! callback, or none:
//!
//! - A payload that failed to decode calls nothing.
//! - A missing observer calls nothing.
//!
//! Either way the result is [`Outcome::Handled`]: the tap landed on an
//! entity, so the host should not run its default gesture behavior.
//! [`Outcome::Ignored`] comes only from [`dispatch_hit`] when there was no
//! occurrence under the pointer.
//!
//! # Example
//!
//! ```rust
//! use glint_entity::{Occurrence, Payload, TextRange};
//! use glint_responder::{EntityObserver, Outcome, dispatch, dispatch_hit};
//!
//! #[derive(Default)]
//! struct Tags(Vec<String>);
//!
//! impl EntityObserver for Tags {
//!     fn on_tag(&mut self, tag: &str) {
//!         self.0.push(tag.to_owned());
//!     }
//! }
//!
//! let mut tags = Tags::default();
//! let occ = Occurrence::new(TextRange::new(0, 5), Payload::Tag("#deal".into()));
//!
//! assert_eq!(dispatch(&occ, Some(&mut tags)), Outcome::Handled);
//! assert_eq!(dispatch_hit(None, Some(&mut tags)), Outcome::Ignored);
//! assert_eq!(tags.0, ["#deal"]);
//! ```

use chrono::{DateTime, Utc};
use glint_entity::{Components, Occurrence, Payload};
use url::Url;

/// Receiver of entity taps, one callback per kind.
pub trait EntityObserver {
    /// An address was tapped.
    fn on_address(&mut self, components: &Components) {
        let _ = components;
    }

    /// A date was tapped.
    fn on_date(&mut self, date: DateTime<Utc>) {
        let _ = date;
    }

    /// A phone number was tapped.
    fn on_phone_number(&mut self, number: &str) {
        let _ = number;
    }

    /// A link was tapped.
    fn on_url(&mut self, url: &Url) {
        let _ = url;
    }

    /// Transit information was tapped.
    fn on_transit_info(&mut self, components: &Components) {
        let _ = components;
    }

    /// A tag was tapped. `tag` includes the leading `#`.
    fn on_tag(&mut self, tag: &str) {
        let _ = tag;
    }
}

impl<T: EntityObserver + ?Sized> EntityObserver for Box<T> {
    fn on_address(&mut self, components: &Components) {
        (**self).on_address(components);
    }

    fn on_date(&mut self, date: DateTime<Utc>) {
        (**self).on_date(date);
    }

    fn on_phone_number(&mut self, number: &str) {
        (**self).on_phone_number(number);
    }

    fn on_url(&mut self, url: &Url) {
        (**self).on_url(url);
    }

    fn on_transit_info(&mut self, components: &Components) {
        (**self).on_transit_info(components);
    }

    fn on_tag(&mut self, tag: &str) {
        (**self).on_tag(tag);
    }
}

/// Whether a tap was consumed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The tap landed on an entity; suppress default handling.
    Handled,
    /// No entity under the tap; the host may handle it.
    Ignored,
}

impl Outcome {
    /// Whether this is [`Outcome::Handled`].
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// Call the observer callback matching `occurrence`'s payload.
pub fn dispatch(occurrence: &Occurrence, observer: Option<&mut dyn EntityObserver>) -> Outcome {
    let Some(observer) = observer else {
        tracing::trace!(kind = %occurrence.kind(), "no observer; tap dropped");
        return Outcome::Handled;
    };
    match &occurrence.payload {
        Payload::Address(Some(components)) => observer.on_address(components),
        Payload::Date(Some(date)) => observer.on_date(*date),
        Payload::PhoneNumber(Some(number)) => observer.on_phone_number(number),
        Payload::Url(Some(url)) => observer.on_url(url),
        Payload::TransitInformation(Some(components)) => observer.on_transit_info(components),
        Payload::Tag(tag) => observer.on_tag(tag),
        Payload::Address(None)
        | Payload::Date(None)
        | Payload::PhoneNumber(None)
        | Payload::Url(None)
        | Payload::TransitInformation(None) => {
            tracing::trace!(kind = %occurrence.kind(), "undecoded payload; nothing to dispatch");
        }
    }
    Outcome::Handled
}

/// [`dispatch`] for the result of a hit test: `None` is [`Outcome::Ignored`].
pub fn dispatch_hit(
    occurrence: Option<&Occurrence>,
    observer: Option<&mut dyn EntityObserver>,
) -> Outcome {
    match occurrence {
        Some(occurrence) => dispatch(occurrence, observer),
        None => Outcome::Ignored,
    }
}
