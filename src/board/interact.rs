//! Hover-driven detail overlay and the keystroke destructor launch.

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::dom::ElementId;
use crate::search::ResultItem;
use crate::world::{Body, BodyKind, Category, Group};

use super::Board;

pub const DESTRUCTOR_RADIUS: f32 = 100.0;

/// Matter-style launch force, scaled to a velocity change at spawn.
const LAUNCH_FORCE: Vec2 = Vec2::new(0.0, -6.0);
const LAUNCH_FORCE_SPREAD: f32 = 0.5;
const LAUNCH_IMPULSE_SCALE: f32 = 250.0;

/// Keys that type without wrecking anything.
const PASSIVE_KEYS: &[&str] = &[
    "Shift",
    "Meta",
    "Control",
    "Tab",
    "ArrowUp",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
];

impl Board {
    /// Pointer entered an element.
    ///
    /// Unknown handles are ignored; destroyed hits are inert; anything that
    /// is not a result projection closes the overlay.
    pub fn hover_enter(&mut self, element: ElementId) {
        let Some(el) = self.dom.element(element) else { return };

        if el.has_class("hit-destroyed") {
            return;
        }
        if !el.has_class("hit-result") {
            self.hide_overlay();
            return;
        }
        let Some(object_id) = el.dom_id.clone() else { return };

        let mut found: Option<ResultItem> = None;
        for (id, _) in self.world.bodies_in(Group::Results) {
            let Some(metadata) = self.registry.get(id) else { continue };
            if let Some(item) = &metadata.item {
                if item.object_id == object_id {
                    found = Some(item.clone());
                    break;
                }
            }
        }
        if let Some(item) = found {
            self.show_overlay(&item);
        }
    }

    /// Pointer left; always closes the overlay.
    pub fn hover_leave(&mut self) {
        self.hide_overlay();
    }

    fn show_overlay(&mut self, item: &ResultItem) {
        let title = match item.release_year() {
            Some(year) => format!("{} ({})", item.title, year),
            None => item.title.clone(),
        };
        let text = format!(
            "#{}\n{}\n{}\n\n{}",
            item.rank,
            title,
            item.genres.join(", "),
            item.overview.as_deref().unwrap_or(""),
        );
        self.dom.set_text(self.overlay, text);
        self.dom.add_class(self.overlay, "shown");
    }

    pub fn hide_overlay(&mut self) {
        self.dom.remove_class(self.overlay, "shown");
    }

    /// A keystroke in the search box. Navigation and modifier keys pass
    /// through; everything else launches a wrecking ball from below the
    /// world into the stack. Fire-and-forget: the sweep cleans it up.
    pub fn key_down(&mut self, key: &str, meta: bool) {
        if meta || PASSIVE_KEYS.contains(&key) {
            return;
        }

        let world_width = self.settings.world_width();
        let world_height = self.settings.world_height();

        let mut rng = rand::rng();
        let lo = 2.0 * DESTRUCTOR_RADIUS;
        let hi = world_width - 2.0 * DESTRUCTOR_RADIUS;
        let x = if lo < hi {
            rng.random_range(lo..hi)
        } else {
            world_width / 2.0
        };

        let mut ball = Body::circle(
            BodyKind::Destructor,
            x,
            world_height + 2.0 * DESTRUCTOR_RADIUS,
            DESTRUCTOR_RADIUS,
        )
        .with_friction(0.0)
        .with_friction_air(0.0)
        .with_filter(Category::DESTRUCTOR, Category::RESULT_ITEM);

        let force = LAUNCH_FORCE
            + Vec2::new(
                rng.random_range(-LAUNCH_FORCE_SPREAD..LAUNCH_FORCE_SPREAD),
                0.0,
            );
        ball.apply_impulse(force * LAUNCH_IMPULSE_SCALE);

        let id = self.world.add(Group::Loose, ball);
        debug!(?id, x, "launched destructor");
    }
}
