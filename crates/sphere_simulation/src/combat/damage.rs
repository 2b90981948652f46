//! Combat события и маркер смерти
//!
//! События пишутся combat pass'ом и дублируются в logger (console-observable).
//! Потребители: UI/звук внешнего клиента, тесты.

use bevy::prelude::*;

/// Событие: враг ударил игрока
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlayerDamaged {
    pub attacker: Entity,
    pub damage: u32,
    pub health_left: u32,
}

/// Событие: удар врага оставил игрока с 0 HP
///
/// Пишется на каждый такой удар, не только на первый. Game over нет:
/// симуляция продолжается, враги продолжают атаковать.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlayerDied {
    pub killer: Entity,
}

/// Событие: клик игрока попал по врагу
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EnemyHit {
    pub enemy: Entity,
    pub damage: u32,
    pub health_left: u32,
}

/// Событие: враг убит, будет удалён из roster в конце тика
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EnemyEliminated {
    pub enemy: Entity,
}

/// Компонент-маркер: игрок мертв (Health == 0)
///
/// Только для внешнего клиента; симуляция на него не реагирует.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Dead;

