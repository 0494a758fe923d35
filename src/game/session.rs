//! Game session resource
//!
//! Pairs the [`GameController`] with the [`DrawList`] it renders into so the
//! bevy systems can reach both through one resource.

use super::controller::GameController;
use super::error::GameResult;
use super::resources::ClickOutcome;
use crate::rendering::DrawList;
use bevy::prelude::*;

#[derive(Resource)]
pub struct GameSession {
    controller: GameController,
    frame: DrawList,
}

impl GameSession {
    /// Wrap an initialized controller and the frame it already drew
    pub fn new(controller: GameController, frame: DrawList) -> Self {
        Self { controller, frame }
    }

    pub fn click(&mut self, position: Vec2) -> GameResult<Option<ClickOutcome>> {
        self.controller.on_pointer_event(position, &mut self.frame)
    }

    pub fn new_game(&mut self) -> GameResult<()> {
        self.controller.new_game(&mut self.frame)
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn frame(&self) -> &DrawList {
        &self.frame
    }
}
