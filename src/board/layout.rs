use glam::Vec2;

use crate::config::BoardSettings;

/// Spawn coordinates for a full page, row-major from the top row down.
///
/// Every row carries the full column count, center-aligned on the world's
/// horizontal center; the horizontal pitch widens toward the bottom row so
/// the stack settles into a pyramid silhouette instead of a sheer column.
/// Always returns exactly `columns * rows` coordinates; unused cells are
/// filled with placeholder bodies and purged right after the layout pass.
pub fn pyramid(settings: &BoardSettings) -> Vec<Vec2> {
    let columns = settings.columns;
    let rows = settings.rows;
    let center_x = settings.world_width() / 2.0;
    let spawn_y = settings.spawn_y();

    let mut positions = Vec::with_capacity(columns * rows);
    for row in 0..rows {
        // Gap grows linearly from the top row to the configured gap at the bottom
        let gap = settings.column_gap * (row + 1) as f32 / rows as f32;
        let pitch = settings.item_width + gap;
        let row_width = columns as f32 * settings.item_width + (columns - 1) as f32 * gap;
        let first_x = center_x - row_width / 2.0 + settings.item_width / 2.0;
        let y = spawn_y + row as f32 * (settings.item_height + settings.row_gap);

        for column in 0..columns {
            positions.push(Vec2::new(first_x + column as f32 * pitch, y));
        }
    }
    positions
}
