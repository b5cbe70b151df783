//! Board engine: owns the board, processes commands, runs the update pass.
//!
//! `BoardEngine` is completely headless. Hosts drive it by calling `tick`
//! on their own schedule, which keeps every behavior deterministically testable.

use std::collections::VecDeque;
use std::sync::Arc;

use glam::IVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pixelboard_core::color::{Color, ColorScheme, SchemeCatalog};
use pixelboard_core::commands::BoardCommand;
use pixelboard_core::error::{BoardError, Result};
use pixelboard_core::state::BoardSnapshot;
use pixelboard_core::types::{BoardPhase, ObjectId, ObjectTag, SchemeId, SimTime};

use crate::board::{BoardObject, BoardState};
use crate::board_setup;
use crate::config::BoardConfig;
use crate::grid::Grid;
use crate::registry::UpdateRegistry;
use crate::snapshot;

/// The board engine. Sole mutator of the board state.
pub struct BoardEngine {
    board: BoardState,
    registry: UpdateRegistry,
    catalog: SchemeCatalog,
    time: SimTime,
    phase: BoardPhase,
    rng: ChaCha8Rng,
    next_object_id: u32,
    command_queue: VecDeque<BoardCommand>,
}

impl BoardEngine {
    /// Engine with the built-in kinds and palettes.
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_parts(config, UpdateRegistry::builtin(), SchemeCatalog::builtin())
    }

    /// Engine with a host-supplied registry and catalog.
    /// Refuses to start on any configuration error.
    pub fn with_parts(
        config: BoardConfig,
        registry: UpdateRegistry,
        catalog: SchemeCatalog,
    ) -> Result<Self> {
        let scheme = catalog
            .get(config.default_scheme)
            .cloned()
            .ok_or(BoardError::UnknownColorScheme(config.default_scheme))?;
        let board = BoardState::new(&config, scheme)?;

        tracing::info!(
            columns = board.grid.columns(),
            rows = board.grid.rows(),
            square_size = board.square_size,
            time_delta_ms = board.time_delta_ms,
            scheme = %board.active_scheme.name,
            "board initialized"
        );

        Ok(Self {
            board,
            registry,
            catalog,
            time: SimTime::default(),
            phase: BoardPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_object_id: 0,
            command_queue: VecDeque::new(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: BoardCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = BoardCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply queued commands, run one update pass unless paused, and return
    /// the resulting snapshot.
    pub fn tick(&mut self) -> BoardSnapshot {
        self.process_commands();

        if self.phase == BoardPhase::Running {
            self.update();
            self.time.advance(self.board.time_delta_ms);
            tracing::debug!(tick = self.time.tick, objects = self.board.objects.len(), "tick");
        }

        self.snapshot()
    }

    /// Snapshot of the current board without advancing it.
    pub fn snapshot(&self) -> BoardSnapshot {
        snapshot::build_snapshot(&self.board, &self.registry, &self.time, self.phase)
    }

    // --- Direct commands ---
    //
    // These take effect immediately. Since they need `&mut self`, they can
    // only run between ticks.

    /// Spawn an object and return its id. Positions outside the grid are clamped.
    pub fn spawn_object(
        &mut self,
        tag: ObjectTag,
        position: IVec2,
        velocity: IVec2,
        color: Option<Color>,
    ) -> ObjectId {
        let id = self.allocate_id();
        if !self.registry.contains(&tag) {
            let err = BoardError::UnknownTag(tag.clone());
            tracing::warn!(%id, %err, "object will be inert");
        }
        let object = board_setup::build_object(&self.board, id, tag, position, velocity, color);
        self.push_object(object)
    }

    pub fn spawn_vpong(
        &mut self,
        position: IVec2,
        velocity: IVec2,
        color: Option<Color>,
    ) -> ObjectId {
        self.spawn_object(ObjectTag::VPONG, position, velocity, color)
    }

    /// Spawn a VPong at a seeded-random square and heading.
    pub fn spawn_random_vpong(&mut self) -> ObjectId {
        let id = self.allocate_id();
        let object = board_setup::random_vpong(&self.board, &mut self.rng, id);
        self.push_object(object)
    }

    pub fn despawn_object(&mut self, id: ObjectId) -> Result<()> {
        let index = self
            .board
            .objects
            .iter()
            .position(|o| o.id == id)
            .ok_or(BoardError::UnknownObject(id))?;
        // `remove`, not `swap_remove`: the remaining update order must not change.
        let object = self.board.objects.remove(index);
        tracing::info!(%id, tag = %object.tag, "object despawned");
        Ok(())
    }

    pub fn clear_objects(&mut self) {
        let count = self.board.objects.len();
        self.board.objects.clear();
        tracing::info!(count, "objects cleared");
    }

    pub fn clear_squares(&mut self) {
        self.board.grid.clear();
        tracing::info!("squares cleared");
    }

    /// Paint the cursor colour onto a square.
    pub fn paint_square(&mut self, x: i32, y: i32) -> Result<()> {
        let color = self.board.cursor_color.clone();
        self.board.grid.apply_color(x, y, color)
    }

    pub fn set_active_color_scheme(&mut self, id: SchemeId) -> Result<()> {
        let scheme = self
            .catalog
            .get(id)
            .cloned()
            .ok_or(BoardError::UnknownColorScheme(id))?;
        tracing::info!(scheme = %scheme.name, "colour scheme changed");
        self.board.active_scheme = scheme;
        Ok(())
    }

    pub fn set_cursor_color(&mut self, color: Color) {
        self.board.cursor_color = color;
    }

    /// Change the interval for subsequent ticks. Zero is rejected.
    pub fn set_tick_interval(&mut self, millis: u64) -> Result<()> {
        if millis == 0 {
            return Err(BoardError::InvalidConfiguration(
                "tick interval must be at least 1ms".into(),
            ));
        }
        self.board.time_delta_ms = millis;
        Ok(())
    }

    /// Stop running update passes. Idempotent.
    pub fn pause(&mut self) {
        self.phase = BoardPhase::Paused;
    }

    /// Resume update passes. Idempotent.
    pub fn resume(&mut self) {
        self.phase = BoardPhase::Running;
    }

    // --- Queries ---

    pub fn grid(&self) -> &Grid {
        &self.board.grid
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn objects(&self) -> &[BoardObject] {
        &self.board.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&BoardObject> {
        self.board.object(id)
    }

    pub fn active_color_scheme(&self) -> &ColorScheme {
        &self.board.active_scheme
    }

    pub fn color_schemes(&self) -> &[Arc<ColorScheme>] {
        self.catalog.schemes()
    }

    pub fn cursor_color(&self) -> &Color {
        &self.board.cursor_color
    }

    /// Current tick interval (milliseconds).
    pub fn time_delta(&self) -> u64 {
        self.board.time_delta_ms
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    pub fn registry(&self) -> &UpdateRegistry {
        &self.registry
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;
        id
    }

    fn push_object(&mut self, object: BoardObject) -> ObjectId {
        let id = object.id;
        tracing::info!(
            %id,
            tag = %object.tag,
            position = ?object.body.position,
            velocity = ?object.body.velocity,
            "object spawned"
        );
        self.board.objects.push(object);
        id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Rejected commands are logged and dropped.
    fn handle_command(&mut self, command: BoardCommand) {
        let result = match command {
            BoardCommand::SpawnObject {
                tag,
                position,
                velocity,
                color,
            } => {
                self.spawn_object(tag, position, velocity, color);
                Ok(())
            }
            BoardCommand::SpawnVPong {
                position,
                velocity,
                color,
            } => {
                self.spawn_vpong(position, velocity, color);
                Ok(())
            }
            BoardCommand::SpawnRandomVPong => {
                self.spawn_random_vpong();
                Ok(())
            }
            BoardCommand::DespawnObject { id } => self.despawn_object(id),
            BoardCommand::ClearObjects => {
                self.clear_objects();
                Ok(())
            }
            BoardCommand::PaintSquare { x, y } => match self.paint_square(x, y) {
                Err(err @ BoardError::OutOfBounds { .. }) => {
                    tracing::debug!(%err, "paint ignored");
                    Ok(())
                }
                other => other,
            },
            BoardCommand::ClearSquares => {
                self.clear_squares();
                Ok(())
            }
            BoardCommand::SetActiveColorScheme { scheme_id } => {
                self.set_active_color_scheme(scheme_id)
            }
            BoardCommand::SetCursorColor { color } => {
                self.set_cursor_color(color);
                Ok(())
            }
            BoardCommand::SetTickInterval { millis } => self.set_tick_interval(millis),
            BoardCommand::Pause => {
                self.pause();
                Ok(())
            }
            BoardCommand::Resume => {
                self.resume();
                Ok(())
            }
        };

        if let Err(err) = result {
            tracing::warn!(%err, "command rejected");
        }
    }

    /// One update pass over every object, in insertion order.
    ///
    /// The object list is detached while the pass runs so each update gets
    /// the whole board mutably. An object whose tag has no behavior is
    /// skipped; an object whose update fails is rolled back to its previous
    /// state. Neither affects the other objects.
    fn update(&mut self) {
        let mut objects = std::mem::take(&mut self.board.objects);

        for object in &mut objects {
            let Some(update) = self.registry.resolve(&object.tag) else {
                let err = BoardError::UnknownTag(object.tag.clone());
                tracing::debug!(id = %object.id, %err, "object skipped");
                continue;
            };

            let before = object.body.clone();
            if let Err(err) = update(&mut object.body, &mut self.board) {
                tracing::warn!(id = %object.id, tag = %object.tag, %err, "object update failed");
                object.body = before;
            }
        }

        // Anything an update pushed onto the board joins after the existing objects.
        objects.append(&mut self.board.objects);
        self.board.objects = objects;
    }
}
