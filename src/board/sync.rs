//! Per-frame projection of body transforms onto elements.

use crate::utils::math::{round_px, round_rad};
use crate::world::Group;

use super::Board;

impl Board {
    /// Write every live result body's transform onto its element.
    ///
    /// Sleeping bodies are skipped: they are motionless, so the transform
    /// already on their element is still correct and the write is saved.
    /// Bodies without metadata (placeholders mid-pass) are skipped too.
    pub fn sync_projections(&mut self) {
        let mut writes: Vec<(crate::dom::ElementId, i32, i32, f32)> = Vec::new();

        for (id, body) in self.world.bodies_in(Group::Results) {
            if body.sleeping {
                continue;
            }
            let Some(metadata) = self.registry.get(id) else { continue };
            // Center-based position, anchored to the element's top-left
            let x = round_px(body.position.x - metadata.width / 2.0);
            let y = round_px(body.position.y - metadata.height / 2.0);
            writes.push((metadata.element, x, y, round_rad(body.angle)));
        }

        for (element, x, y, rotation) in writes {
            self.dom.set_style(element, "--x", format!("{x}px"));
            self.dom.set_style(element, "--y", format!("{y}px"));
            self.dom.set_style(element, "--rotation", format!("{rotation}rad"));
        }
    }
}
