//! Physics module
//!
//! Только AABB коллизии против статических препятствий: без гравитации,
//! без entity-vs-entity блокировки, без склонов.

use bevy::prelude::*;

pub mod collision;
pub mod movement;

// Re-export основных типов
pub use collision::{resolve_horizontal, resolve_vertical, step_and_resolve};
pub use movement::{move_enemies, move_player};

/// Movement Plugin
///
/// - move_player → SimulationSet::PlayerMovement
/// - move_enemies → SimulationSet::EnemyMovement (после chase AI)
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::components::Obstacles>();

        app.add_systems(
            FixedUpdate,
            (
                move_player.in_set(crate::SimulationSet::PlayerMovement),
                move_enemies.in_set(crate::SimulationSet::EnemyMovement),
            ),
        );
    }
}
