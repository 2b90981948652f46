//! Окружение сессии: препятствия, границы карты, viewport, roster врагов

use bevy::math::IRect;
use bevy::prelude::*;

/// Статические препятствия (фиксированы на всю сессию)
///
/// Порядок важен: при нескольких пересечениях побеждает последнее.
#[derive(Resource, Debug, Clone, Default)]
pub struct Obstacles(pub Vec<IRect>);

impl Obstacles {
    pub fn iter(&self) -> impl Iterator<Item = &IRect> {
        self.0.iter()
    }
}

/// Размер карты в пикселях (ширина/высота слоя × размер тайла)
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub size: Vec2,
}

impl MapBounds {
    pub fn from_tiles(width: u32, height: u32, tile_size: f32) -> Self {
        Self {
            size: Vec2::new(width as f32 * tile_size, height as f32 * tile_size),
        }
    }
}

/// Логический размер экрана (320×240)
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Vec2::new(320.0, 240.0),
        }
    }
}

/// Упорядоченный список живых врагов
///
/// Порядок = порядок вставки; определяет порядок обхода в combat pass
/// (первый в roster побеждает в tie-break). Удаление только через
/// `retain_survivors`, никогда по индексу во время обхода.
#[derive(Resource, Debug, Clone, Default)]
pub struct EnemyRoster(pub Vec<Entity>);

impl EnemyRoster {
    pub fn push(&mut self, entity: Entity) {
        self.0.push(entity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Строит новый roster без `defeated`, сохраняя относительный порядок
    pub fn retain_survivors(&mut self, defeated: &[Entity]) {
        let survivors: Vec<Entity> = self
            .0
            .iter()
            .copied()
            .filter(|entity| !defeated.contains(entity))
            .collect();
        self.0 = survivors;
    }
}
