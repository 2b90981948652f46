//! Chase AI: враг с `FollowsPlayer` делает шаг к игроку
//!
//! По каждой оси независимо: ±speed к игроку, 0 если координаты совпадают.
//! Диагональ не нормализуется (по диагонали враг сближается в √2 раз быстрее).
//! Без pathfinding: препятствия обрабатывает только collision resolver.

use bevy::prelude::*;

use crate::components::{Displacement, Enemy, FollowsPlayer, Player, WorldPosition};
use crate::config::SimulationConfig;

/// Смещение врага за тик в сторону игрока
pub fn chase_step(enemy: Vec2, player: Vec2, speed: f32) -> Vec2 {
    Vec2::new(axis_step(enemy.x, player.x), axis_step(enemy.y, player.y)) * speed
}

fn axis_step(from: f32, to: f32) -> f32 {
    if from < to {
        1.0
    } else if from > to {
        -1.0
    } else {
        0.0
    }
}

/// Система: пересчёт Displacement врагов
///
/// Displacement сбрасывается каждый тик; idle враги остаются с нулём.
/// Позиция игрока берётся уже после его движения в этом тике.
pub fn enemy_chase_ai(
    config: Res<SimulationConfig>,
    players: Query<&WorldPosition, With<Player>>,
    mut enemies: Query<
        (&WorldPosition, &mut Displacement, Has<FollowsPlayer>),
        (With<Enemy>, Without<Player>),
    >,
) {
    let player_position = players.single().ok().map(|p| p.0);

    for (position, mut displacement, follows) in enemies.iter_mut() {
        displacement.0 = match (follows, player_position) {
            (true, Some(target)) => chase_step(position.0, target, config.enemy_speed),
            _ => Vec2::ZERO,
        };
    }
}
