//! Optional wireframe view of the simulation, toggled at runtime.

use crate::config::BoardSettings;
use crate::world::{BodyKind, Group, World};

/// Scale of the ASCII raster: world pixels per character cell.
const CELL: f32 = 24.0;

#[derive(Debug, Default)]
pub struct DebugRender {
    pub enabled: bool,
}

impl DebugRender {
    pub fn toggle(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Render every body's bounds into a character raster of the visible world.
///
/// `#` boundary, `o` destructor, `x` sleeping, `*` anything else awake.
pub fn wireframe(world: &World, settings: &BoardSettings) -> String {
    let cols = (settings.world_width() / CELL).ceil() as usize;
    let rows = (settings.world_height() / CELL).ceil() as usize;
    let mut raster = vec![vec![' '; cols]; rows];

    for group in [Group::Boundaries, Group::Results, Group::Loose] {
        for (_, body) in world.bodies_in(group) {
            let glyph = match body.kind {
                BodyKind::Boundary => '#',
                BodyKind::Destructor => 'o',
                BodyKind::ResultItem | BodyKind::Placeholder | BodyKind::NoResults => {
                    if body.sleeping {
                        'x'
                    } else {
                        '*'
                    }
                }
            };
            let (min, max) = body.aabb();
            let col_lo = (min.x / CELL).floor().max(0.0) as usize;
            let col_hi = ((max.x / CELL).ceil() as usize).min(cols);
            let row_lo = (min.y / CELL).floor().max(0.0) as usize;
            let row_hi = ((max.y / CELL).ceil() as usize).min(rows);
            for row in row_lo..row_hi {
                for col in col_lo..col_hi {
                    raster[row][col] = glyph;
                }
            }
        }
    }

    let mut out = String::with_capacity(rows * (cols + 1));
    for row in raster {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::config::BoardSettings;

    #[test]
    fn wireframe_shows_boundaries() {
        let board = Board::new(BoardSettings::default());
        let frame = wireframe(&board.world, &board.settings);
        assert!(frame.contains('#'));
        // Raster covers the visible world
        assert_eq!(
            frame.lines().count(),
            (board.settings.world_height() / CELL).ceil() as usize
        );
    }

    #[test]
    fn toggle_flips_state() {
        let mut debug = DebugRender::default();
        assert!(!debug.enabled);
        debug.toggle(true);
        assert!(debug.enabled);
    }
}
