//! Attacker component: cooldown-gated атака
//!
//! Единственный ограничитель частоты атак: счётчик тиков с последней атаки.
//! Никакой state machine анимации, только cooldown:
//! Idle → (interval тиков прошло) → Ready → (attack) → Idle.

use bevy::prelude::*;

use crate::config::CombatantConfig;

/// Attacker: боевые характеристики игрока/врага (вместе с `Health`)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Attacker {
    /// Урон за успешную атаку
    pub attack_power: u32,

    /// Минимум тиков между двумя атаками
    pub attack_interval: u32,

    /// Тиков с последней успешной атаки (монотонно растёт, сброс на атаке)
    pub ticks_since_attack: u32,
}

impl Default for Attacker {
    fn default() -> Self {
        Self::new(1, 30)
    }
}

impl Attacker {
    pub fn new(attack_power: u32, attack_interval: u32) -> Self {
        Self {
            attack_power,
            attack_interval,
            ticks_since_attack: 0,
        }
    }

    pub fn from_config(config: &CombatantConfig) -> Self {
        Self::new(config.attack_power, config.attack_interval)
    }

    /// Вызывается ровно один раз за тик, независимо от боя
    pub fn tick_cooldown(&mut self) {
        self.ticks_since_attack = self.ticks_since_attack.saturating_add(1);
    }

    pub fn can_attack(&self) -> bool {
        self.ticks_since_attack >= self.attack_interval
    }

    /// Атака прошла → сброс cooldown и `true`; на cooldown → `false` без побочных эффектов
    pub fn attack(&mut self) -> bool {
        if !self.can_attack() {
            return false;
        }
        self.ticks_since_attack = 0;
        true
    }
}
