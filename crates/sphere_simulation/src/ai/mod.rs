//! AI decision-making module
//!
//! Только прямое преследование (chase): враг с `FollowsPlayer` идёт к игроку
//! по прямой, остальные стоят.

use bevy::prelude::*;

pub mod chase;

// Re-export основных типов
pub use chase::{chase_step, enemy_chase_ai};

/// AI Plugin
///
/// enemy_chase_ai → SimulationSet::EnemyAi (после движения игрока,
/// до движения врагов).
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            enemy_chase_ai.in_set(crate::SimulationSet::EnemyAi),
        );
    }
}
