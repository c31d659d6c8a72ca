// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detection, styling and tap dispatch on a wrapped monospace label.
//!
//! This example shows how to combine:
//! - `glint_entity::BasicDetector` as a stand-in platform detector,
//! - a fixed-advance layout implementing `glint_hit::TextLayout`,
//! - `glint_label::EntityLabel` for batching and press/release pairing,
//! - a `glint_responder::EntityObserver` printing what was tapped.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p glint_demos --example label_taps`

use chrono::{DateTime, Utc};
use glint_demos::{ADVANCE, LINE_HEIGHT, WrappedMono};
use glint_entity::{BasicDetector, Components, EntityKind, KindSet};
use glint_label::{EntityLabel, LabelConfig};
use glint_responder::EntityObserver;
use glint_style::{AttrKey, AttrValue, AttributeBundle, Color, UnderlineStyle};
use kurbo::Point;
use url::Url;

/// Prints every tap.
struct Printer;

impl EntityObserver for Printer {
    fn on_address(&mut self, components: &Components) {
        println!("address tapped: {components:?}");
    }

    fn on_date(&mut self, date: DateTime<Utc>) {
        println!("date tapped: {}", date.format("%Y-%m-%d"));
    }

    fn on_phone_number(&mut self, number: &str) {
        println!("phone number tapped: {number}");
    }

    fn on_url(&mut self, url: &Url) {
        println!("link tapped: {url}");
    }

    fn on_tag(&mut self, tag: &str) {
        println!("tag tapped: {tag}");
    }
}

/// Center of the glyph for `offset` in label space.
fn point_for(label: &EntityLabel<BasicDetector, WrappedMono>, offset: usize) -> Option<Point> {
    let local = label.surface().glyph_center(offset)?;
    Some(local + label.draw_request().origin.to_vec2())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = LabelConfig::default();
    let mut label = match EntityLabel::with_config(BasicDetector, WrappedMono::new(24), &config) {
        Ok(label) => label,
        Err(err) => {
            eprintln!("bad configuration: {err}");
            return;
        }
    };
    label.set_observer(Some(Box::new(Printer)));

    let text = "Call 555-123-4567 or visit http://example.com before 2026-03-01 #deal";
    {
        let mut batch = label.batch();
        batch.set_text(text);
        batch.set_bundle(
            EntityKind::Tag,
            AttributeBundle::new()
                .with(AttrKey::FOREGROUND_COLOR, AttrValue::Color(Color::rgb(0xAF, 0x52, 0xDE)))
                .with(AttrKey::UNDERLINE, AttrValue::Underline(UnderlineStyle::None)),
        );
        if let Err(err) = batch.set_insets(kurbo::Insets::uniform(4.0)) {
            eprintln!("bad insets: {err}");
        }
    }

    for occ in label.occurrences().iter() {
        println!(
            "{:>18} {:?} {:?}",
            occ.kind().to_string(),
            occ.range.as_range(),
            occ.range.slice(text).unwrap_or_default()
        );
    }

    for needle in ["555", "example", "2026", "#deal", "visit"] {
        let Some(offset) = text.find(needle) else { continue };
        let Some(point) = point_for(&label, offset + 1) else { continue };
        label.on_pointer_down(point);
        let outcome = label.on_pointer_up(point);
        println!("tap on {needle:?} at {point:?}: {outcome:?}");
    }

    // Past the end of the first (wrapped) line: nothing there.
    let dead_zone = Point::new(4.0 + 23.5 * ADVANCE, 4.0 + 0.5 * LINE_HEIGHT);
    println!("tap in dead zone: {:?}", label.handle_tap(dead_zone));

    // Only tags from now on.
    label.set_enabled_kinds(KindSet::TAG);
    println!("occurrences with tags only: {}", label.occurrences().len());
}
