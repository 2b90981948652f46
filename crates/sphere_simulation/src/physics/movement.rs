//! Movement системы: Displacement → WorldPosition через collision resolver
//!
//! Порядок в тике: сначала игрок (input), потом враги (AI смотрит на уже
//! сдвинутого игрока). Враги друг друга не блокируют.

use bevy::prelude::*;

use crate::components::{Displacement, Enemy, Facing, Footprint, Obstacles, Player, WorldPosition};
use crate::physics::collision::step_and_resolve;

/// Система: шаг игрока + коллизии
pub fn move_player(
    obstacles: Res<Obstacles>,
    mut players: Query<
        (&mut WorldPosition, &Displacement, &Footprint, &mut Facing),
        With<Player>,
    >,
) {
    for (mut position, displacement, footprint, mut facing) in players.iter_mut() {
        step_and_resolve(&mut position.0, displacement.0, footprint.size, &obstacles.0);
        facing.update(displacement.0);
    }
}

/// Система: шаг всех врагов + коллизии
pub fn move_enemies(
    obstacles: Res<Obstacles>,
    mut enemies: Query<
        (&mut WorldPosition, &Displacement, &Footprint, &mut Facing),
        (With<Enemy>, Without<Player>),
    >,
) {
    for (mut position, displacement, footprint, mut facing) in enemies.iter_mut() {
        step_and_resolve(&mut position.0, displacement.0, footprint.size, &obstacles.0);
        facing.update(displacement.0);
    }
}
