//! Spawn стартовой сцены из `SimulationConfig`
//!
//! Вызывается один раз до первого тика. Кладёт в World tuning config,
//! препятствия, границы карты, viewport, roster врагов и начальный offset камеры.

use bevy::prelude::*;

use crate::camera::{camera_target, ViewCamera};
use crate::combat::Attacker;
use crate::components::{
    EnemyRoster, Enemy, FollowsPlayer, Footprint, Health, MapBounds, Obstacles, Player, Potion,
    Viewport, WorldPosition,
};
use crate::config::{CombatantConfig, SimulationConfig};
use crate::logger;

/// Entity стартовой сцены (для тестов и runner'а)
#[derive(Debug, Clone)]
pub struct SceneEntities {
    pub player: Entity,
    /// В порядке roster
    pub enemies: Vec<Entity>,
    pub potions: Vec<Entity>,
}

/// Spawn игрока
pub fn spawn_player(world: &mut World, position: Vec2, footprint: Footprint, stats: &CombatantConfig) -> Entity {
    world
        .spawn((
            Player,
            WorldPosition(position),
            footprint,
            Health::new(stats.health),
            Attacker::from_config(stats),
        ))
        .id()
}

/// Spawn врага и добавление в конец roster
pub fn spawn_enemy(
    world: &mut World,
    position: Vec2,
    follows_player: bool,
    footprint: Footprint,
    stats: &CombatantConfig,
) -> Entity {
    let mut entity = world.spawn((
        Enemy,
        WorldPosition(position),
        footprint,
        Health::new(stats.health),
        Attacker::from_config(stats),
    ));
    if follows_player {
        entity.insert(FollowsPlayer);
    }
    let id = entity.id();

    world
        .get_resource_or_insert_with(EnemyRoster::default)
        .push(id);
    id
}

/// Spawn зелья
pub fn spawn_potion(world: &mut World, position: Vec2, heal_amount: u32, footprint: Footprint) -> Entity {
    world
        .spawn((Potion { heal_amount }, WorldPosition(position), footprint))
        .id()
}

/// Spawn всей сцены + session resources
pub fn spawn_scene(world: &mut World, config: &SimulationConfig) -> SceneEntities {
    let footprint = Footprint {
        size: config.tile_size,
    };
    let scene = &config.scene;

    world.insert_resource(config.clone());
    world.insert_resource(Obstacles(scene.obstacles.iter().map(|o| o.to_rect()).collect()));
    world.insert_resource(MapBounds::from_tiles(
        scene.map_width_tiles,
        scene.map_height_tiles,
        config.tile_size,
    ));
    world.insert_resource(Viewport {
        size: config.viewport_size(),
    });
    world.insert_resource(EnemyRoster::default());

    let player_position = Vec2::from(scene.player);
    let player = spawn_player(world, player_position, footprint, &config.player);

    let enemies = scene
        .enemies
        .iter()
        .map(|spawn| {
            spawn_enemy(
                world,
                Vec2::from(spawn.position),
                spawn.follows_player,
                footprint,
                &config.enemy,
            )
        })
        .collect();

    let potions = scene
        .potions
        .iter()
        .map(|spawn| spawn_potion(world, Vec2::from(spawn.position), spawn.heal_amount, footprint))
        .collect();

    // Камера сразу на игроке (до первого тика клик уже переводится в world)
    let mut camera = ViewCamera::default();
    camera.follow_target(camera_target(player_position, &footprint), config.viewport_size());
    camera.constrain(config.map_size(), config.viewport_size());
    world.insert_resource(camera);

    logger::log_info(&format!(
        "Scene spawned: player at {:?}, {} enemies, {} potions, {} obstacles",
        player_position,
        scene.enemies.len(),
        scene.potions.len(),
        scene.obstacles.len()
    ));

    SceneEntities {
        player,
        enemies,
        potions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene() {
        let mut world = World::new();
        let scene = spawn_scene(&mut world, &SimulationConfig::default());

        assert_eq!(scene.enemies.len(), 3);
        assert_eq!(scene.potions.len(), 1);
        assert_eq!(world.resource::<EnemyRoster>().0, scene.enemies);
        assert_eq!(world.resource::<Obstacles>().0.len(), 1);

        // Только второй враг преследует игрока
        let follows: Vec<bool> = scene
            .enemies
            .iter()
            .map(|&e| world.get::<FollowsPlayer>(e).is_some())
            .collect();
        assert_eq!(follows, vec![false, true, false]);

        assert_eq!(
            world.get::<WorldPosition>(scene.player).map(|p| p.0),
            Some(Vec2::new(400.0, 350.0))
        );
        assert_eq!(world.resource::<ViewCamera>().offset, Vec2::new(-248.0, -238.0));
    }

    #[test]
    fn test_enemy_stats_from_config() {
        let mut world = World::new();
        let scene = spawn_scene(&mut world, &SimulationConfig::default());

        let attacker = world.get::<Attacker>(scene.enemies[0]).copied();
        assert_eq!(attacker, Some(Attacker::new(1, 30)));

        let player_attacker = world.get::<Attacker>(scene.player).copied();
        assert_eq!(player_attacker, Some(Attacker::new(1, 20)));
    }
}
