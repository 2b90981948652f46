//! Item System: зелья лечения
//!
//! Подбор выключен по умолчанию (`SimulationConfig::potion_pickup`): зелья лежат
//! на карте и попадают только в render snapshot. При включённом флаге зелье,
//! footprint которого пересекает игрока, лечит (не выше max) и исчезает.

use bevy::prelude::*;

use crate::components::{Footprint, Health, Player, Potion, WorldPosition};
use crate::config::SimulationConfig;
use crate::geometry::{footprint_rect, overlaps};
use crate::logger;

/// Событие: игрок подобрал зелье
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PotionPickedUp {
    pub potion: Entity,
    pub healed: u32,
    pub health: u32,
}

/// Run condition: подбор зелий включён в конфиге
pub fn potion_pickup_enabled(config: Res<SimulationConfig>) -> bool {
    config.potion_pickup
}

/// Система: подбор зелий при пересечении с игроком
pub fn pickup_potions(
    mut commands: Commands,
    mut players: Query<(&WorldPosition, &Footprint, &mut Health), With<Player>>,
    potions: Query<(Entity, &WorldPosition, &Footprint, &Potion)>,
    mut picked_up: EventWriter<PotionPickedUp>,
) {
    let Ok((player_position, player_footprint, mut health)) = players.single_mut() else {
        return;
    };
    let player_rect = footprint_rect(player_position.0, player_footprint.size);

    for (entity, position, footprint, potion) in potions.iter() {
        if !overlaps(&footprint_rect(position.0, footprint.size), &player_rect) {
            continue;
        }

        let before = health.current;
        health.heal(potion.heal_amount);

        picked_up.write(PotionPickedUp {
            potion: entity,
            healed: health.current - before,
            health: health.current,
        });
        logger::log_info(&format!("Picked up potion! Health: {}", health.current));

        commands.entity(entity).despawn();
    }
}

/// Items Plugin
///
/// pickup_potions → SimulationSet::Items, только при `potion_pickup = true`.
pub struct ItemsPlugin;

impl Plugin for ItemsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PotionPickedUp>();

        app.add_systems(
            FixedUpdate,
            pickup_potions
                .run_if(potion_pickup_enabled)
                .in_set(crate::SimulationSet::Items),
        );
    }
}
