//! The result board: synchronization engine between the rigid-body world
//! and the DOM-like surface.
//!
//! `Board` is the single owned context every component operates on; the
//! components live in submodules but share its state directly.

pub mod debug;
pub mod factory;
pub mod interact;
pub mod layout;
pub mod lifecycle;
pub mod sync;

use std::collections::HashMap;

use crate::config::BoardSettings;
use crate::dom::{Dom, ElementId};
use crate::search::ResultItem;
use crate::world::{Body, BodyId, BodyKind, Category, Group, Physics, World};

pub use debug::DebugRender;

/// The bridge between one body and its projection. Lifetime is tied 1:1 to
/// the body; the registry entry is removed in lockstep with body removal.
#[derive(Debug, Clone)]
pub struct BodyMetadata {
    pub element: ElementId,
    pub width: f32,
    pub height: f32,
    pub item: Option<ResultItem>,
}

/// Side-table mapping body handles to their metadata, replacing ad-hoc
/// attachment of presentation state to physics bodies.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    map: HashMap<BodyId, BodyMetadata>,
}

impl MetadataRegistry {
    pub fn insert(&mut self, id: BodyId, metadata: BodyMetadata) {
        self.map.insert(id, metadata);
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyMetadata> {
        self.map.get(&id)
    }

    pub fn remove(&mut self, id: BodyId) -> Option<BodyMetadata> {
        self.map.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Owned context for the whole board. Initialization builds the static
/// boundaries and the overlay element; everything else is driven by
/// queries, input events, and the three engine drivers.
pub struct Board {
    pub settings: BoardSettings,
    pub world: World,
    pub physics: Physics,
    pub dom: Dom,
    pub registry: MetadataRegistry,
    pub overlay: ElementId,
    pub debug: DebugRender,
}

impl Board {
    pub fn new(settings: BoardSettings) -> Self {
        let mut world = World::new();
        let mut dom = Dom::new();

        let width = settings.world_width();
        let height = settings.world_height();

        // Ground
        world.add(
            Group::Boundaries,
            Body::rectangle(BodyKind::Boundary, width / 2.0, height, width, 20.0)
                .with_static(true)
                .with_filter(Category::GROUND, Category::COLLIDE_ALL),
        );
        // Left wall
        world.add(
            Group::Boundaries,
            Body::rectangle(BodyKind::Boundary, 0.0, height / 2.0, 20.0, height)
                .with_static(true)
                .with_filter(Category::WALLS, Category::COLLIDE_ALL),
        );
        // Right wall
        world.add(
            Group::Boundaries,
            Body::rectangle(BodyKind::Boundary, width, height / 2.0, 20.0, height)
                .with_static(true)
                .with_filter(Category::WALLS, Category::COLLIDE_ALL),
        );

        let overlay = dom.create_element();

        let physics = Physics::new(settings.timescale);

        Self {
            settings,
            world,
            physics,
            dom,
            registry: MetadataRegistry::default(),
            overlay,
            debug: DebugRender::default(),
        }
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self, dt: f32) {
        self.physics.step(&mut self.world, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_has_three_boundaries_and_nothing_else() {
        let board = Board::new(BoardSettings::default());
        assert_eq!(board.world.bodies_in(Group::Boundaries).count(), 3);
        assert_eq!(board.world.len(), 3);
        assert!(board.registry.is_empty());
        // Only the overlay element exists
        assert_eq!(board.dom.len(), 1);
    }

    #[test]
    fn boundaries_are_static_full_mask() {
        let board = Board::new(BoardSettings::default());
        for (_, body) in board.world.bodies_in(Group::Boundaries) {
            assert!(body.is_static);
            assert_eq!(body.kind, BodyKind::Boundary);
            assert_eq!(body.filter.mask, Category::COLLIDE_ALL);
            assert!(Category::BOUNDARY.contains(body.filter.category));
        }
    }
}
