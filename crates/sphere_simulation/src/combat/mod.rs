//! Combat system module
//!
//! - Attacker + Health: cooldown-gated атака и здоровье (игрок и враги)
//! - Interaction pass: контакт враг↔игрок (враг атакует), клик по врагу (игрок атакует)
//! - Removal: убитые враги удаляются из roster одним проходом в конце тика
//! - Events: PlayerDamaged, PlayerDied, EnemyHit, EnemyEliminated

use bevy::prelude::*;

pub mod attacker;
pub mod damage;
pub mod systems;

// Re-export основных типов
pub use attacker::Attacker;
pub use damage::{Dead, EnemyEliminated, EnemyHit, PlayerDamaged, PlayerDied};
pub use systems::{combat_interaction_pass, remove_defeated_enemies};

/// Враги с 0 HP, найденные в текущем тике (удаляются в Cleanup)
#[derive(Resource, Debug, Clone, Default)]
pub struct PendingRemovals(pub Vec<Entity>);

/// Combat Plugin
///
/// Порядок выполнения:
/// 1. combat_interaction_pass → SimulationSet::Combat
/// 2. remove_defeated_enemies → SimulationSet::Cleanup
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<PlayerDamaged>()
            .add_event::<PlayerDied>()
            .add_event::<EnemyHit>()
            .add_event::<EnemyEliminated>();

        app.init_resource::<PendingRemovals>()
            .init_resource::<crate::components::EnemyRoster>();

        app.add_systems(
            FixedUpdate,
            (
                combat_interaction_pass.in_set(crate::SimulationSet::Combat),
                remove_defeated_enemies.in_set(crate::SimulationSet::Cleanup),
            ),
        );
    }
}
