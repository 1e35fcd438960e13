//! The fight stage
//!
//! Entity order is floor, fighters, walls, timer. After every entity has
//! updated, a physics pass resolves each fighter against the floor, the other
//! fighters and the walls.

use glam::Vec2;

use super::{FIGHT, POSTGAME};
use crate::consts::{FLOOR_HEIGHT, WALL_HEIGHT, WALL_RISE, WALL_WIDTH};
use crate::renderer::Color;
use crate::scene::{Entity, Frame, Scene, SceneContent, SceneSwitcher};
use crate::settings::Settings;
use crate::sim::collision::{Sides, rect_rect_collision, rect_rect_eject};
use crate::sim::{Block, Character, MatchTimer};

pub struct FightScene {
    pub floor: Block,
    pub chars: Vec<Character>,
    pub walls: Vec<Block>,
    pub timer: MatchTimer,
}

impl FightScene {
    /// Lay out the stage for `viewport` with one fighter per configured player
    pub fn new(viewport: Vec2, settings: &Settings, switcher: &SceneSwitcher) -> Self {
        let (w, h) = (viewport.x, viewport.y);

        let floor = Block::new(
            Vec2::new(w / 2.0, h - FLOOR_HEIGHT / 2.0),
            Vec2::new(w, FLOOR_HEIGHT),
            Color::FLOOR,
        );

        // Real positions are assigned on load
        let body = Vec2::new(w / 18.0, h / 3.0);
        let chars = settings
            .players
            .iter()
            .map(|controls| Character::new(Vec2::new(0.0, h * 3.0 / 4.0), body, controls.clone()))
            .collect();

        let wall_size = Vec2::new(WALL_WIDTH, WALL_HEIGHT);
        let wall_y = h - WALL_RISE;
        let walls = vec![
            Block::new(Vec2::new(-WALL_WIDTH / 2.0, wall_y), wall_size, Color::TRANSPARENT),
            Block::new(Vec2::new(w + WALL_WIDTH / 2.0, wall_y), wall_size, Color::TRANSPARENT),
        ];

        let timer = MatchTimer::new(
            w / 2.0,
            settings.match_length_ms(),
            switcher.clone(),
            POSTGAME,
        );

        Self {
            floor,
            chars,
            walls,
            timer,
        }
    }

    pub fn into_scene(self, viewport: Vec2) -> Scene {
        Scene::new(FIGHT, viewport, self)
    }

    /// Spread fighters evenly across the stage, standing at three quarters height
    fn spread_fighters(&mut self, viewport: Vec2) {
        let divisions = self.chars.len().saturating_sub(1).max(1) as f32;
        for (z, c) in self.chars.iter_mut().enumerate() {
            c.body.center = Vec2::new(
                (1.0 + z as f32 * 30.0 / divisions) * viewport.x / 32.0,
                viewport.y * 3.0 / 4.0,
            );
        }
    }

    /// Collision response for every fighter, in list order
    fn resolve_collisions(&mut self) {
        let running = self.timer.is_running();

        for i in 0..self.chars.len() {
            let fighter = &mut self.chars[i];
            fighter.can_move = running;

            if rect_rect_collision(&fighter.body, &self.floor.rect) {
                rect_rect_eject(&mut fighter.body, &self.floor.rect, Sides::ALL, false);
                fighter.land();
            }

            // Push every other fighter sideways, away from this one
            let pusher = fighter.body;
            for (j, other) in self.chars.iter_mut().enumerate() {
                if j != i {
                    rect_rect_eject(&mut other.body, &pusher, Sides::HORIZONTAL, true);
                }
            }

            let fighter = &mut self.chars[i];
            for wall in &self.walls {
                rect_rect_eject(&mut fighter.body, &wall.rect, Sides::ALL, false);
            }
        }
    }
}

impl SceneContent for FightScene {
    fn entities(&self) -> Vec<&dyn Entity> {
        vec![&self.floor, &self.chars, &self.walls, &self.timer]
    }

    fn entities_mut(&mut self) -> Vec<&mut dyn Entity> {
        vec![
            &mut self.floor,
            &mut self.chars,
            &mut self.walls,
            &mut self.timer,
        ]
    }

    fn on_load(&mut self, frame: &Frame) {
        self.spread_fighters(frame.viewport);
    }

    fn after_update(&mut self, _frame: &Frame) {
        self.resolve_collisions();
    }
}
