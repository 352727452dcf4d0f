use std::time::Duration;

use rubble_search::app::{Engine, InputEvent};
use rubble_search::board::Board;
use rubble_search::config::BoardSettings;
use rubble_search::search::MemoryIndex;
use rubble_search::world::{BodyKind, Group};

async fn advance(ticks: usize) {
    for _ in 0..ticks {
        tokio::time::advance(Duration::from_millis(20)).await;
    }
}

#[tokio::test(start_paused = true)]
async fn engine_processes_queries_and_shuts_down_cleanly() {
    let board = Board::new(BoardSettings::default());
    let (engine, handle) = Engine::new(board, MemoryIndex::sample_catalog());
    let runner = tokio::spawn(engine.run());

    handle.send(InputEvent::Query("alien".to_string()));
    // Let the step, frame, and sweep drivers all fire a few times
    advance(60).await;

    handle.shutdown();
    let board = runner.await.unwrap();

    let items: Vec<_> = board
        .world
        .bodies_in(Group::Results)
        .filter(|(_, body)| body.kind == BodyKind::ResultItem)
        .collect();
    assert_eq!(items.len(), 3);

    // The frame driver projected transforms onto every live element
    for (id, _) in items {
        let element = board.registry.get(id).unwrap().element;
        let el = board.dom.element(element).unwrap();
        assert!(el.style("--x").is_some());
        assert!(el.style("--y").is_some());
        assert!(el.style("--rotation").is_some());
    }
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_an_idle_engine() {
    let board = Board::new(BoardSettings::default());
    let (engine, handle) = Engine::new(board, MemoryIndex::sample_catalog());
    let runner = tokio::spawn(engine.run());

    advance(5).await;
    handle.shutdown();
    let board = runner.await.unwrap();
    assert_eq!(board.world.len(), 3); // just the boundaries
}

#[tokio::test(start_paused = true)]
async fn empty_backend_takes_the_no_results_branch() {
    let board = Board::new(BoardSettings::default());
    let (engine, handle) = Engine::new(board, MemoryIndex::from_items(Vec::new()));
    let runner = tokio::spawn(engine.run());

    handle.send(InputEvent::Query("anything".to_string()));
    advance(10).await;

    handle.shutdown();
    let board = runner.await.unwrap();
    // Empty backend means an empty page, which is the no-results branch
    assert_eq!(
        board
            .world
            .bodies_in(Group::Results)
            .filter(|(_, body)| body.kind == BodyKind::NoResults)
            .count(),
        1
    );
}

#[tokio::test(start_paused = true)]
async fn destructor_is_swept_by_the_running_drivers() {
    let board = Board::new(BoardSettings::default());
    let (engine, handle) = Engine::new(board, MemoryIndex::sample_catalog());
    let runner = tokio::spawn(engine.run());

    handle.send(InputEvent::KeyDown {
        key: "a".to_string(),
        meta: false,
    });
    // Enough virtual time for the launch, the fall, and several sweeps
    advance(600).await;

    handle.shutdown();
    let board = runner.await.unwrap();
    assert_eq!(board.world.bodies_in(Group::Loose).count(), 0);
}

#[tokio::test(start_paused = true)]
async fn debug_toggle_flips_wireframe_rendering() {
    let board = Board::new(BoardSettings::default());
    let (engine, handle) = Engine::new(board, MemoryIndex::sample_catalog());
    let runner = tokio::spawn(engine.run());

    handle.send(InputEvent::DebugToggle(true));
    advance(5).await;
    handle.send(InputEvent::DebugToggle(false));
    advance(5).await;

    handle.shutdown();
    let board = runner.await.unwrap();
    assert!(!board.debug.enabled);
}
