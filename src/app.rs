//! Engine loop: one single-threaded task interleaving the physics step,
//! the frame sync pass, the out-of-bounds sweep, and user input.
//!
//! All board state is owned by the loop, so the three drivers and the
//! input handlers never race; there is no locking anywhere.

use tokio::select;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, trace, warn};

use crate::board::{debug, Board};
use crate::dom::ElementId;
use crate::search::{FacetFilter, QueryAdapter, SearchBackend};

/// Unbuffered user input, handled synchronously on receipt.
#[derive(Debug, Clone)]
pub enum InputEvent {
    Query(String),
    HoverEnter(ElementId),
    HoverLeave,
    KeyDown { key: String, meta: bool },
    DebugToggle(bool),
}

/// Control surface for a running engine.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    events: mpsc::UnboundedSender<InputEvent>,
    shutdown: watch::Sender<bool>,
}

impl EngineHandle {
    pub fn send(&self, event: InputEvent) {
        let _ = self.events.send(event);
    }

    /// Stop all three drivers; the run loop returns the final board.
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(true);
    }
}

pub struct Engine<B: SearchBackend> {
    board: Board,
    adapter: QueryAdapter<B>,
    events: mpsc::UnboundedReceiver<InputEvent>,
    shutdown: watch::Receiver<bool>,
}

impl<B: SearchBackend> Engine<B> {
    pub fn new(board: Board, backend: B) -> (Self, EngineHandle) {
        let adapter = QueryAdapter::new(
            backend,
            FacetFilter::new("record_type", "movie"),
            board.settings.page_size(),
        );
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let engine = Self {
            board,
            adapter,
            events: events_rx,
            shutdown: shutdown_rx,
        };
        let handle = EngineHandle {
            events: events_tx,
            shutdown: shutdown_tx,
        };
        (engine, handle)
    }

    /// Drive the board until shutdown. Returns the board so callers can
    /// inspect or reuse its final state.
    pub async fn run(self) -> Board {
        let Engine {
            mut board,
            adapter,
            mut events,
            mut shutdown,
        } = self;

        let step_dt = board.settings.step_interval().as_secs_f32();

        let mut step = interval(board.settings.step_interval());
        let mut frame = interval(board.settings.frame_interval());
        let mut sweep = interval(board.settings.sweep_interval());
        step.set_missed_tick_behavior(MissedTickBehavior::Skip);
        frame.set_missed_tick_behavior(MissedTickBehavior::Skip);
        sweep.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("engine running");
        loop {
            select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                Some(event) = events.recv() => {
                    handle_event(&mut board, &adapter, event);
                }
                _ = step.tick() => {
                    board.step(step_dt);
                }
                _ = frame.tick() => {
                    board.sync_projections();
                    if board.debug.enabled {
                        trace!("\n{}", debug::wireframe(&board.world, &board.settings));
                    }
                }
                _ = sweep.tick() => {
                    board.sweep();
                }
            }
        }
        info!("engine stopped");
        board
    }
}

fn handle_event<B: SearchBackend>(board: &mut Board, adapter: &QueryAdapter<B>, event: InputEvent) {
    match event {
        InputEvent::Query(text) => match adapter.query(&text) {
            Ok(page) => board.apply_results(&page),
            Err(error) => warn!(%error, "query failed"),
        },
        InputEvent::HoverEnter(element) => board.hover_enter(element),
        InputEvent::HoverLeave => board.hover_leave(),
        InputEvent::KeyDown { key, meta } => board.key_down(&key, meta),
        InputEvent::DebugToggle(enabled) => board.debug.toggle(enabled),
    }
}
