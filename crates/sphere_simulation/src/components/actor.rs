//! Роли entity и здоровье: Player, Enemy, FollowsPlayer, Potion, Health
//!
//! Полиморфизм через композицию: общая "sprite" часть (WorldPosition,
//! Displacement, Footprint) + роль-маркер + capability компоненты.

use bevy::prelude::*;

use crate::components::{Displacement, Facing, Footprint, WorldPosition};

/// Marker component для player-controlled entity
///
/// Input systems используют `With<Player>`, AI systems используют `With<Enemy>`.
/// В симуляции ровно один Player.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(WorldPosition, Displacement, Footprint, Facing)]
pub struct Player;

/// Враг (скелет). Порядок обхода задаёт `EnemyRoster`, не Query.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(WorldPosition, Displacement, Footprint, Facing)]
pub struct Enemy;

/// Capability: враг преследует игрока (chase AI)
///
/// Враги без маркера стоят на месте (idle).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct FollowsPlayer;

/// Зелье лечения
///
/// Коллизий у зелий нет. Подбор выключен по умолчанию (`SimulationConfig::potion_pickup`).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(WorldPosition, Footprint)]
pub struct Potion {
    pub heal_amount: u32,
}

/// Здоровье актора
///
/// Инвариант: 0 ≤ current ≤ max (вычитание saturating, отрицательным не бывает)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Урон без брони и модификаторов
    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage() {
        let mut health = Health::new(5);
        assert_eq!(health.current, 5);

        health.take_damage(2);
        assert_eq!(health.current, 3);
        assert!(health.is_alive());

        health.take_damage(10); // Saturating sub
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_damage_is_associative() {
        for start in 0..12 {
            for a in 0..8 {
                for b in 0..8 {
                    let mut split = Health::new(start);
                    split.take_damage(a);
                    split.take_damage(b);

                    let mut combined = Health::new(start);
                    combined.take_damage(a + b);

                    assert_eq!(split, combined, "start={} a={} b={}", start, a, b);
                }
            }
        }
    }

    #[test]
    fn test_health_heal() {
        let mut health = Health::new(3);
        health.take_damage(2);
        assert_eq!(health.current, 1);

        health.heal(1);
        assert_eq!(health.current, 2);

        health.heal(100); // Clamped to max
        assert_eq!(health.current, 3);
    }
}
