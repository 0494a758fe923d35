//! Game controller - owns one game session end to end
//!
//! The controller is only handed out by [`GameController::init`], after every
//! texture has loaded and both factions are placed. Pointer events can
//! therefore never reach a half-initialized board.
//!
//! # Event Flow
//!
//! ```text
//! pixel -> BoardCoordinateSystem::pixel_to_cell -> BoardState::handle_cell_click -> draw_frame
//! ```
//!
//! Clicks off the board are dropped before they reach the state machine.

use super::components::Faction;
use super::error::GameResult;
use super::resources::{ClickOutcome, CurrentTurn};
use super::rules::{BoardState, MoveRules, NoMoveRules, Side};
use crate::assets::{AssetSource, LoadOptions, TextureCatalog};
use crate::core::BoardLayoutConfig;
use crate::rendering::{draw_frame, BoardCoordinateSystem, Renderer};
use bevy::math::Vec2;
use std::sync::Arc;
use tracing::{info, trace};

/// Loaded textures, board state and input routing for one board
pub struct GameController {
    textures: TextureCatalog,
    coordinates: BoardCoordinateSystem,
    board: BoardState,
    turn: CurrentTurn,
    rules: Box<dyn MoveRules>,
}

impl GameController {
    /// Load all textures, place both factions and draw the first frame
    ///
    /// Black takes the top half and Red the bottom half. Any asset failure
    /// aborts initialization and no controller is produced.
    pub async fn init<S, R>(
        layout: BoardLayoutConfig,
        source: &S,
        options: LoadOptions,
        renderer: &mut R,
    ) -> GameResult<Self>
    where
        S: AssetSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let layout = Arc::new(layout);
        let mut textures = TextureCatalog::new(Arc::clone(&layout), options);
        textures.init(source).await?;

        let mut controller = Self {
            textures,
            coordinates: BoardCoordinateSystem::new(layout),
            board: BoardState::new(),
            turn: CurrentTurn::default(),
            rules: Box::new(NoMoveRules),
        };
        controller.place_factions()?;
        controller.render(renderer)?;

        info!(
            "[GAME_INIT] Board ready: {} pieces, {} to move",
            controller.board.len(),
            controller.turn.faction
        );
        Ok(controller)
    }

    /// Replace the move rules consulted for move requests
    pub fn with_rules(mut self, rules: impl MoveRules + 'static) -> Self {
        self.rules = Box::new(rules);
        self
    }

    fn place_factions(&mut self) -> GameResult<()> {
        self.board.create_faction(Faction::Black, Side::Top)?;
        self.board.create_faction(Faction::Red, Side::Bottom)?;
        Ok(())
    }

    /// Route a pointer press at a canvas pixel
    ///
    /// Returns `None` for clicks outside the grid. Otherwise the click drives
    /// the selection state machine and the frame is redrawn.
    pub fn on_pointer_event<R>(
        &mut self,
        position: Vec2,
        renderer: &mut R,
    ) -> GameResult<Option<ClickOutcome>>
    where
        R: Renderer + ?Sized,
    {
        let Some(cell) = self.coordinates.pixel_to_cell(position) else {
            trace!(
                "[INPUT] Click at {:?} is off the board {:?}",
                position,
                self.coordinates.raw_cell(position)
            );
            return Ok(None);
        };

        let outcome = self
            .board
            .handle_cell_click(cell, self.turn.faction, self.rules.as_ref());
        self.render(renderer)?;
        Ok(Some(outcome))
    }

    /// Redraw the current board
    pub fn render<R>(&self, renderer: &mut R) -> GameResult<()>
    where
        R: Renderer + ?Sized,
    {
        draw_frame(&self.board, &self.textures, &self.coordinates, renderer)?;
        Ok(())
    }

    /// Put every piece back on its starting cell and redraw
    pub fn new_game<R>(&mut self, renderer: &mut R) -> GameResult<()>
    where
        R: Renderer + ?Sized,
    {
        self.board.reset();
        self.place_factions()?;
        self.render(renderer)?;
        info!("[GAME_INIT] New game started");
        Ok(())
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn textures(&self) -> &TextureCatalog {
        &self.textures
    }

    pub fn coordinates(&self) -> &BoardCoordinateSystem {
        &self.coordinates
    }

    pub fn active_faction(&self) -> Faction {
        self.turn.faction
    }
}
