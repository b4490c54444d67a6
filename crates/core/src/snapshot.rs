use serde::Serialize;

use crate::entities::{Coin, Obstacle};
use crate::types::{ObstacleKind, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Active obstacles per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ObstacleTally {
    pub car: usize,
    pub truck: usize,
    pub barrier: usize,
}

impl ObstacleTally {
    pub fn from_obstacles(obstacles: &[Obstacle]) -> Self {
        let mut tally = Self::default();
        for o in obstacles {
            tally.add(o.kind);
        }
        tally
    }

    pub fn add(&mut self, kind: ObstacleKind) {
        match kind {
            ObstacleKind::Car => self.car += 1,
            ObstacleKind::Truck => self.truck += 1,
            ObstacleKind::Barrier => self.barrier += 1,
        }
    }

    pub fn get(&self, kind: ObstacleKind) -> usize {
        match kind {
            ObstacleKind::Car => self.car,
            ObstacleKind::Truck => self.truck,
            ObstacleKind::Barrier => self.barrier,
        }
    }

    pub fn total(&self) -> usize {
        self.car + self.truck + self.barrier
    }
}

/// Read-only copy of every field of a round, for rendering and telemetry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub width: i32,
    pub height: i32,
    pub player_x: i32,
    pub player_y: i32,
    pub player_lives: i32,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    pub paused: bool,
    pub obstacle_speed: f64,
    pub coin_speed: f64,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub road_lines: Vec<f64>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = PLAYFIELD_WIDTH;
        self.height = PLAYFIELD_HEIGHT;
        self.player_x = 0;
        self.player_y = 0;
        self.player_lives = 0;
        self.score = 0;
        self.level = 1;
        self.game_over = false;
        self.paused = false;
        self.obstacle_speed = 0.0;
        self.coin_speed = 0.0;
        self.obstacles.clear();
        self.coins.clear();
        self.road_lines.clear();
    }

    pub fn obstacle_tally(&self) -> ObstacleTally {
        ObstacleTally::from_obstacles(&self.obstacles)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            width: 0,
            height: 0,
            player_x: 0,
            player_y: 0,
            player_lives: 0,
            score: 0,
            level: 0,
            game_over: false,
            paused: false,
            obstacle_speed: 0.0,
            coin_speed: 0.0,
            obstacles: Vec::new(),
            coins: Vec::new(),
            road_lines: Vec::new(),
        };
        s.clear();
        s
    }
}
