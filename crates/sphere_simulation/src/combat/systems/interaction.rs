//! Combat interaction pass (один раз за тик, после всего движения)
//!
//! Для каждого врага в порядке roster:
//! 1. tick cooldown врага
//! 2. footprint врага пересекает игрока и `attack()` прошёл → урон игроку
//! 3. клик в этом тике, курсор строго внутри врага и в радиусе атаки игрока →
//!    урон врагу; 0 HP → в PendingRemovals
//!
//! Порядок важен: roster обходится линейно и здоровье меняется по ходу,
//! поэтому в спорных случаях выигрывает первый в roster.
//! Клик-атака игрока НЕ ограничена его cooldown: интервал игрока тикает,
//! но для урона используется только `attack_power`.

use bevy::prelude::*;

use crate::camera::ViewCamera;
use crate::combat::{Attacker, Dead, EnemyEliminated, EnemyHit, PendingRemovals, PlayerDamaged, PlayerDied};
use crate::components::{Enemy, EnemyRoster, Footprint, Health, Player, WorldPosition};
use crate::config::SimulationConfig;
use crate::geometry::{contains_strict, footprint_rect, overlaps};
use crate::input::FrameInput;
use crate::logger;

/// Screen → world: вычитаем offset камеры, усечённый до целых пикселей
pub fn cursor_to_world(cursor: IVec2, camera_offset: Vec2) -> IVec2 {
    cursor - IVec2::new(camera_offset.x as i32, camera_offset.y as i32)
}

/// Точка отсчёта дальности атаки игрока: позиция минус половина footprint
pub fn reach_origin(player_position: Vec2, footprint: &Footprint) -> Vec2 {
    player_position - Vec2::splat(footprint.half())
}

/// Курсор в радиусе атаки (строго меньше)
pub fn within_reach(cursor_world: IVec2, origin: Vec2, range: f32) -> bool {
    cursor_world.as_vec2().distance(origin) < range
}

/// Система: combat interaction pass
#[allow(clippy::too_many_arguments)]
pub fn combat_interaction_pass(
    mut commands: Commands,
    input: Res<FrameInput>,
    camera: Res<ViewCamera>,
    config: Res<SimulationConfig>,
    roster: Res<EnemyRoster>,
    mut pending: ResMut<PendingRemovals>,
    mut players: Query<
        (Entity, &WorldPosition, &Footprint, &mut Health, &mut Attacker, Has<Dead>),
        (With<Player>, Without<Enemy>),
    >,
    mut enemies: Query<
        (&WorldPosition, &Footprint, &mut Health, &mut Attacker),
        (With<Enemy>, Without<Player>),
    >,
    mut player_damaged: EventWriter<PlayerDamaged>,
    mut player_died: EventWriter<PlayerDied>,
    mut enemy_hit: EventWriter<EnemyHit>,
    mut enemy_eliminated: EventWriter<EnemyEliminated>,
) {
    let Ok((
        player,
        player_position,
        player_footprint,
        mut player_health,
        mut player_attacker,
        already_dead,
    )) = players.single_mut()
    else {
        return;
    };
    let mut marked_dead = already_dead;

    player_attacker.tick_cooldown();

    let player_rect = footprint_rect(player_position.0, player_footprint.size);
    let cursor = cursor_to_world(input.cursor, camera.offset);
    let origin = reach_origin(player_position.0, player_footprint);
    let attack_range = config.attack_range();

    for &enemy in roster.iter() {
        let Ok((position, footprint, mut health, mut attacker)) = enemies.get_mut(enemy) else {
            logger::log_warning(&format!("Roster entity {:?} is not an enemy, skipped", enemy));
            continue;
        };

        attacker.tick_cooldown();
        let enemy_rect = footprint_rect(position.0, footprint.size);

        // Враг бьёт игрока при контакте
        if overlaps(&enemy_rect, &player_rect) && attacker.attack() {
            player_health.take_damage(attacker.attack_power);

            player_damaged.write(PlayerDamaged {
                attacker: enemy,
                damage: attacker.attack_power,
                health_left: player_health.current,
            });
            logger::log_info(&format!("Player damaged, health: {}", player_health.current));

            // Каждый удар, оставивший 0 HP, снова сообщает о смерти
            if !player_health.is_alive() {
                player_died.write(PlayerDied { killer: enemy });
                logger::log_info("Player has died");

                if !marked_dead {
                    commands.entity(player).insert(Dead);
                    marked_dead = true;
                }
            }
        }

        // Игрок кликает по врагу
        if input.clicked
            && contains_strict(&enemy_rect, cursor)
            && within_reach(cursor, origin, attack_range)
        {
            health.take_damage(player_attacker.attack_power);

            enemy_hit.write(EnemyHit {
                enemy,
                damage: player_attacker.attack_power,
                health_left: health.current,
            });
            logger::log(&format!("Enemy {:?} hit, health: {}", enemy, health.current));

            if !health.is_alive() && !pending.0.contains(&enemy) {
                pending.0.push(enemy);
                enemy_eliminated.write(EnemyEliminated { enemy });
                logger::log_info(&format!("Enemy {:?} eliminated", enemy));
            }
        }
    }
}
