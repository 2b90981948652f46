//! Snapshot мира для внешнего рендера
//!
//! Собирается после тика. Координаты в world pixels; рендер сам прибавляет
//! `camera_offset`. Враги идут в порядке roster.

use bevy::prelude::*;
use serde::Serialize;

use crate::camera::ViewCamera;
use crate::components::{
    Direction, EnemyRoster, Facing, Health, Obstacles, Player, Potion, WorldPosition,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub position: [f32; 2],
    pub facing: Direction,
    pub moving: bool,
    pub health: u32,
    pub max_health: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub position: [f32; 2],
    pub facing: Direction,
    pub moving: bool,
    pub health: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PotionView {
    pub position: [f32; 2],
    pub heal_amount: u32,
}

/// Всё, что нужно рендеру для одного кадра
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    /// `None` только если игрок не заспавнен
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub potions: Vec<PotionView>,
    /// `[min_x, min_y, max_x, max_y]`
    pub obstacles: Vec<[i32; 4]>,
    pub camera_offset: [f32; 2],
}

/// Строит `FrameSnapshot` из текущего состояния World
pub fn build_render_frame(world: &mut World) -> FrameSnapshot {
    let player = world
        .query_filtered::<(&WorldPosition, &Facing, &Health), With<Player>>()
        .iter(world)
        .next()
        .map(|(position, facing, health)| PlayerView {
            position: position.0.to_array(),
            facing: facing.direction,
            moving: facing.moving,
            health: health.current,
            max_health: health.max,
        });

    let roster: Vec<Entity> = world
        .get_resource::<EnemyRoster>()
        .map(|roster| roster.0.clone())
        .unwrap_or_default();
    let enemies = roster
        .iter()
        .filter_map(|&enemy| {
            let position = world.get::<WorldPosition>(enemy)?;
            let facing = world.get::<Facing>(enemy)?;
            let health = world.get::<Health>(enemy)?;
            Some(EnemyView {
                position: position.0.to_array(),
                facing: facing.direction,
                moving: facing.moving,
                health: health.current,
            })
        })
        .collect();

    let mut potions: Vec<(Entity, PotionView)> = world
        .query::<(Entity, &WorldPosition, &Potion)>()
        .iter(world)
        .map(|(entity, position, potion)| {
            (
                entity,
                PotionView {
                    position: position.0.to_array(),
                    heal_amount: potion.heal_amount,
                },
            )
        })
        .collect();
    // Стабильный порядок (порядок spawn)
    potions.sort_by_key(|(entity, _)| entity.index());

    let obstacles = world
        .get_resource::<Obstacles>()
        .map(|obstacles| {
            obstacles
                .iter()
                .map(|rect| [rect.min.x, rect.min.y, rect.max.x, rect.max.y])
                .collect()
        })
        .unwrap_or_default();

    let camera_offset = world
        .get_resource::<ViewCamera>()
        .map(|camera| camera.offset.to_array())
        .unwrap_or_default();

    FrameSnapshot {
        player,
        enemies,
        potions: potions.into_iter().map(|(_, view)| view).collect(),
        obstacles,
        camera_offset,
    }
}
