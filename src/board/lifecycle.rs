//! Body lifecycle: `active` -> `invalidated` -> `removed`.
//!
//! A new result page invalidates everything first, then spawns the fresh
//! batch; a periodic sweep deletes whatever has fallen out of the world.

use tracing::debug;

use crate::search::ResultPage;
use crate::world::{BodyId, BodyKind, Category, Group};

use super::{factory, layout, Board};

impl Board {
    /// React to a new result page.
    ///
    /// Ordering is load-bearing: invalidate existing bodies, hide the
    /// overlay, then branch on empty before layout and spawn.
    pub fn apply_results(&mut self, page: &ResultPage) {
        self.invalidate_existing();
        self.hide_overlay();

        if page.is_empty() {
            let (body, metadata) = factory::create_no_results_body(&mut self.dom, &self.settings);
            let id = self.world.add(Group::Results, body);
            self.registry.insert(id, metadata);
            debug!("no results; spawned the no-results body");
            return;
        }

        let positions = layout::pyramid(&self.settings);
        let mut placeholders: Vec<BodyId> = Vec::new();
        let mut spawned = 0usize;

        for (cell, position) in positions.iter().enumerate() {
            match page.items.get(cell) {
                Some(item) => {
                    let mut item = item.clone();
                    item.rank = cell + 1;
                    let (body, metadata) = factory::create_result_body(
                        &mut self.dom,
                        &self.settings,
                        position.x,
                        position.y,
                        item,
                    );
                    let id = self.world.add(Group::Results, body);
                    self.registry.insert(id, metadata);
                    spawned += 1;
                }
                None => {
                    // The layout pass always covers the full grid; empty
                    // cells get throwaway bodies purged right below
                    let body = factory::create_placeholder(position.x, position.y);
                    placeholders.push(self.world.add(Group::Results, body));
                }
            }
        }

        for id in placeholders {
            self.world.remove(id);
        }

        debug!(spawned, total = page.total, "spawned result page");
    }

    /// Mark every live non-boundary body as destroyed: collision mask
    /// cleared so it falls through the floor, projection styled destroyed.
    /// Idempotent, so rapid re-queries are safe.
    fn invalidate_existing(&mut self) {
        for id in self.world.all_ids() {
            let Some(body) = self.world.body_mut(id) else { continue };
            match body.kind {
                BodyKind::Boundary => continue,
                BodyKind::ResultItem
                | BodyKind::Placeholder
                | BodyKind::Destructor
                | BodyKind::NoResults => {
                    body.filter.mask = Category::empty();
                    body.wake();
                    if let Some(metadata) = self.registry.get(id) {
                        self.dom.add_class(metadata.element, "hit-destroyed");
                    }
                }
            }
        }
    }

    /// Remove every body, in any group, that has fallen past twice the
    /// world height, deleting its metadata and projection with it.
    pub fn sweep(&mut self) {
        let threshold = self.settings.sweep_threshold();
        let out_of_bounds: Vec<BodyId> = self
            .world
            .all_ids()
            .into_iter()
            .filter(|id| {
                self.world
                    .body(*id)
                    .is_some_and(|body| body.position.y > threshold)
            })
            .collect();

        let removed = out_of_bounds.len();
        for id in out_of_bounds {
            if let Some(metadata) = self.registry.remove(id) {
                self.dom.remove(metadata.element);
            }
            self.world.remove(id);
        }

        if removed > 0 {
            debug!(removed, "swept out-of-bounds bodies");
        }
    }
}
