use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use toml;

const CONFIG_FILE: &str = "board.toml";

/// Board geometry, spawn grid, and driver cadences.
///
/// Defaults mirror the classic layout: a 9x4 page of 72x108 items in a world
/// two columns wider and one row taller than the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Spawn grid dimensions; page size is `columns * rows`.
    pub columns: usize,
    pub rows: usize,

    /// Fixed dimensions of one result item, in pixels.
    pub item_width: f32,
    pub item_height: f32,

    /// Horizontal and vertical gap between spawn cells.
    pub column_gap: f32,
    pub row_gap: f32,

    /// How many item-heights above the grid the stack spawns.
    pub spawn_offset_rows: usize,

    /// Dimensions of the single no-results body.
    pub no_results_width: f32,
    pub no_results_height: f32,

    /// Simulation time scale applied to every physics step.
    pub timescale: f32,

    /// Physics step rate, Hz.
    pub step_hz: u32,
    /// Display refresh rate driving the sync pass, Hz.
    pub frame_hz: u32,
    /// Out-of-bounds sweep interval, milliseconds.
    pub sweep_interval_ms: u64,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            columns: 9,
            rows: 4,
            item_width: 72.0,
            item_height: 108.0, // 2:3 poster aspect
            column_gap: 10.0,
            row_gap: 30.0,
            spawn_offset_rows: 2,
            no_results_width: 320.0,
            no_results_height: 50.0,
            timescale: 1.2,
            step_hz: 60,
            frame_hz: 60,
            sweep_interval_ms: 1000,
        }
    }
}

impl BoardSettings {
    /// Number of results requested per query.
    pub fn page_size(&self) -> usize {
        self.columns * self.rows
    }

    /// Visible world width: the grid plus one spare column on each side.
    pub fn world_width(&self) -> f32 {
        (self.columns as f32 + 2.0) * self.item_width
    }

    /// Visible world height: the grid plus one spare row.
    pub fn world_height(&self) -> f32 {
        (self.rows as f32 + 1.0) * self.item_height
    }

    /// Y coordinate of the top of the spawn stack, above the visible world.
    pub fn spawn_y(&self) -> f32 {
        -((self.rows + self.spawn_offset_rows) as f32 * self.item_height)
    }

    /// Bodies falling past this y coordinate get swept.
    pub fn sweep_threshold(&self) -> f32 {
        2.0 * self.world_height()
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.step_hz as f64)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_hz as f64)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "rubble", "rubble-search")
        .map(|proj| proj.config_dir().join(CONFIG_FILE))
}

pub fn save_settings(settings: &BoardSettings) -> std::io::Result<()> {
    if let Some(path) = config_path() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(settings)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, toml)?;
    }
    Ok(())
}

pub fn load_settings() -> Option<BoardSettings> {
    if let Some(path) = config_path() {
        if let Ok(data) = fs::read_to_string(path) {
            if let Ok(settings) = toml::from_str::<BoardSettings>(&data) {
                return Some(settings);
            }
        }
    }
    None
}
