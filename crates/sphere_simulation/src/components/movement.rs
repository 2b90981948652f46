//! Movement компоненты: позиция, смещение за тик, footprint, направление

use bevy::prelude::*;
use serde::Serialize;

use crate::config::TILE_SIZE;

/// Позиция в world pixels (левый верхний угол footprint, Y растёт вниз)
///
/// Меняется только movement системами (input/AI + collision resolver).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct WorldPosition(pub Vec2);

/// Смещение за текущий тик (dx, dy)
///
/// Обнуляется в начале каждого тика и пересчитывается из input или AI.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Displacement(pub Vec2);

/// Квадратный footprint (сторона = размер тайла)
///
/// Используется и для коллизий, и для melee/click проверок.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Footprint {
    pub size: f32,
}

impl Default for Footprint {
    fn default() -> Self {
        Self { size: TILE_SIZE }
    }
}

impl Footprint {
    pub fn half(&self) -> f32 {
        self.size / 2.0
    }
}

/// Направление движения (для выбора анимации внешним рендером)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Направление по смещению; приоритет: Right, Left, Down, Up
    ///
    /// `None` если entity стоит на месте.
    pub fn from_displacement(delta: Vec2) -> Option<Self> {
        if delta.x > 0.0 {
            Some(Self::Right)
        } else if delta.x < 0.0 {
            Some(Self::Left)
        } else if delta.y > 0.0 {
            Some(Self::Down)
        } else if delta.y < 0.0 {
            Some(Self::Up)
        } else {
            None
        }
    }
}

/// Последнее направление движения + движется ли entity в этом тике
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Facing {
    pub direction: Direction,
    pub moving: bool,
}

impl Facing {
    pub fn update(&mut self, delta: Vec2) {
        match Direction::from_displacement(delta) {
            Some(direction) => {
                self.direction = direction;
                self.moving = true;
            }
            None => self.moving = false,
        }
    }
}
