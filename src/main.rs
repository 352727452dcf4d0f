use std::time::Duration;

use tracing::info;

use rubble_search::app::{Engine, InputEvent};
use rubble_search::board::Board;
use rubble_search::config;
use rubble_search::search::MemoryIndex;
use rubble_search::utils::logging::{init_logging, log_system_info};

/// Scripted demo: queries land, the stack falls, a few keystrokes wreck it.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    log_system_info();

    let settings = config::load_settings().unwrap_or_default();
    let board = Board::new(settings);
    let (engine, handle) = Engine::new(board, MemoryIndex::sample_catalog());

    let runner = tokio::spawn(engine.run());

    handle.send(InputEvent::Query("alien".to_string()));
    tokio::time::sleep(Duration::from_secs(2)).await;

    for key in ["c", "o", "v"] {
        handle.send(InputEvent::KeyDown {
            key: key.to_string(),
            meta: false,
        });
        tokio::time::sleep(Duration::from_millis(400)).await;
    }

    handle.send(InputEvent::Query("no such movie".to_string()));
    tokio::time::sleep(Duration::from_secs(2)).await;

    handle.shutdown();
    let board = runner.await?;

    info!(
        bodies = board.world.len(),
        elements = board.dom.len(),
        "demo finished"
    );
    println!(
        "{}",
        rubble_search::board::debug::wireframe(&board.world, &board.settings)
    );
    Ok(())
}
