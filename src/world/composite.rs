use std::collections::HashMap;

use super::body::{Body, BodyId};

/// The named body groups the board manages as units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Ground and walls. Created once, never removed.
    Boundaries,
    /// Result-item bodies, replaced wholesale on every query.
    Results,
    /// Ephemeral bodies owned directly by the world (destructors).
    Loose,
}

#[derive(Debug, Default)]
struct Composite {
    ids: Vec<BodyId>,
}

/// Body arena plus composite membership.
#[derive(Debug, Default)]
pub struct World {
    bodies: HashMap<BodyId, Body>,
    next_id: u64,
    boundaries: Composite,
    results: Composite,
    loose: Composite,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    fn composite(&self, group: Group) -> &Composite {
        match group {
            Group::Boundaries => &self.boundaries,
            Group::Results => &self.results,
            Group::Loose => &self.loose,
        }
    }

    fn composite_mut(&mut self, group: Group) -> &mut Composite {
        match group {
            Group::Boundaries => &mut self.boundaries,
            Group::Results => &mut self.results,
            Group::Loose => &mut self.loose,
        }
    }

    pub fn add(&mut self, group: Group, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(id, body);
        self.composite_mut(group).ids.push(id);
        id
    }

    /// Remove a body from the arena and whichever composite holds it.
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let body = self.bodies.remove(&id)?;
        for group in [Group::Boundaries, Group::Results, Group::Loose] {
            self.composite_mut(group).ids.retain(|other| *other != id);
        }
        Some(body)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(&id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(&id)
    }

    pub fn bodies_in(&self, group: Group) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.composite(group)
            .ids
            .iter()
            .filter_map(move |id| self.bodies.get(id).map(|body| (*id, body)))
    }

    pub fn ids_in(&self, group: Group) -> Vec<BodyId> {
        self.composite(group).ids.clone()
    }

    /// Every body across all composites.
    pub fn all_ids(&self) -> Vec<BodyId> {
        let mut ids = Vec::with_capacity(self.bodies.len());
        for group in [Group::Boundaries, Group::Results, Group::Loose] {
            ids.extend_from_slice(&self.composite(group).ids);
        }
        ids
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
