//! Tick scheduler: runs the board engine on its own thread at `time_delta` ms.
//!
//! The engine is moved into the thread, which becomes its only mutator.
//! Commands arrive via `mpsc` channel and are applied at the next tick
//! boundary. After every tick the snapshot is handed to the redraw hook and
//! stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use pixelboard_core::state::BoardSnapshot;
use pixelboard_sim::BoardEngine;

use crate::state::LoopCommand;

/// Fixed-period deadline tracker.
///
/// Deadlines advance by the interval in force when each tick finishes, so an
/// interval change only affects the ticks after it.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    next_tick: Instant,
}

impl TickClock {
    pub fn new(start: Instant) -> Self {
        Self { next_tick: start }
    }

    /// Move the deadline forward by `interval` and return how long to sleep
    /// from `now`. When more than two intervals behind, the deadline resets
    /// to `now` instead of trying to catch up.
    pub fn advance(&mut self, interval: Duration, now: Instant) -> Duration {
        self.next_tick += interval;
        if self.next_tick > now {
            return self.next_tick - now;
        }
        if now - self.next_tick > interval * 2 {
            self.next_tick = now;
        }
        Duration::ZERO
    }

    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }
}

/// Spawn the board loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_board_loop<F>(
    engine: BoardEngine,
    latest_snapshot: Arc<Mutex<Option<BoardSnapshot>>>,
    redraw: F,
) -> std::io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)>
where
    F: FnMut(&BoardSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("pixelboard-tick".into())
        .spawn(move || {
            run_board_loop(engine, cmd_rx, &latest_snapshot, redraw);
        })?;

    Ok((cmd_tx, handle))
}

/// The board loop. Runs until Shutdown command or channel disconnect.
fn run_board_loop<F>(
    mut engine: BoardEngine,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<BoardSnapshot>>,
    mut redraw: F,
) where
    F: FnMut(&BoardSnapshot),
{
    let mut clock = TickClock::new(Instant::now());
    tracing::info!(time_delta_ms = engine.time_delta(), "board loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Board(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::info!(tick = engine.time().tick, "board loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (engine handles pause internally)
        let snapshot = engine.tick();

        // 3. Let the host redraw
        redraw(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next deadline
        let interval = Duration::from_millis(engine.time_delta());
        let pause = clock.advance(interval, Instant::now());
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }
}
