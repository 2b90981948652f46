//! Удаление убитых врагов в конце тика
//!
//! Roster перестраивается целиком (survivors в исходном порядке), сущности
//! деспавнятся. Воскрешения нет.

use bevy::prelude::*;

use crate::combat::PendingRemovals;
use crate::components::EnemyRoster;

/// Система: PendingRemovals → новый roster + despawn
pub fn remove_defeated_enemies(
    mut commands: Commands,
    mut pending: ResMut<PendingRemovals>,
    mut roster: ResMut<EnemyRoster>,
) {
    if pending.0.is_empty() {
        return;
    }

    let defeated = std::mem::take(&mut pending.0);
    roster.retain_survivors(&defeated);

    for enemy in defeated {
        commands.entity(enemy).despawn();
    }
}
