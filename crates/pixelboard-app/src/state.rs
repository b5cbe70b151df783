//! Host state shared between the embedding application and the board loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, bail, Context, Result};

use pixelboard_core::commands::BoardCommand;
use pixelboard_core::state::BoardSnapshot;
use pixelboard_sim::BoardEngine;

use crate::scheduler;

/// Commands sent from the host to the board loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A board command to forward to the engine.
    Board(BoardCommand),
    /// Shut down the board loop thread gracefully.
    Shutdown,
}

/// Handle to a running (or not yet started) board loop.
#[derive(Default)]
pub struct AppState {
    /// `None` before `start` and after `stop`.
    command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Updated by the loop thread after each tick.
    latest_snapshot: Arc<Mutex<Option<BoardSnapshot>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the board loop with an already-built engine.
    pub fn start<F>(&self, engine: BoardEngine, redraw: F) -> Result<()>
    where
        F: FnMut(&BoardSnapshot) + Send + 'static,
    {
        let mut tx_lock = self.command_tx.lock().map_err(|e| anyhow!("{e}"))?;
        if tx_lock.is_some() {
            bail!("board loop already running");
        }

        let (cmd_tx, handle) =
            scheduler::spawn_board_loop(engine, self.latest_snapshot.clone(), redraw)
                .context("failed to spawn board loop thread")?;

        *tx_lock = Some(cmd_tx);
        *self.handle.lock().map_err(|e| anyhow!("{e}"))? = Some(handle);
        Ok(())
    }

    /// True while a started loop thread is still alive.
    pub fn is_running(&self) -> bool {
        let started = self
            .command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false);
        let alive = self
            .handle
            .lock()
            .map(|h| h.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false);
        started && alive
    }

    /// Forward a command to the board loop.
    pub fn send(&self, command: BoardCommand) -> Result<()> {
        let tx_lock = self.command_tx.lock().map_err(|e| anyhow!("{e}"))?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(LoopCommand::Board(command))
                .context("board loop has stopped"),
            None => bail!("board loop not started"),
        }
    }

    /// Latest published snapshot, if any tick has run.
    pub fn latest_snapshot(&self) -> Option<BoardSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }

    /// Stop the loop and wait for its thread. Safe to call repeatedly.
    pub fn stop(&self) -> Result<()> {
        let tx = self.command_tx.lock().map_err(|e| anyhow!("{e}"))?.take();
        if let Some(tx) = tx {
            // A send error means the loop already exited.
            let _ = tx.send(LoopCommand::Shutdown);
        }

        let handle = self.handle.lock().map_err(|e| anyhow!("{e}"))?.take();
        if let Some(handle) = handle {
            handle
                .join()
                .map_err(|_| anyhow!("board loop thread panicked"))?;
        }
        Ok(())
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            tracing::warn!(%err, "board loop did not stop cleanly");
        }
    }
}
