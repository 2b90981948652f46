//! Input domain: intent игрока за тик
//!
//! Polling клавиатуры/мыши делает внешний клиент: он пишет `FrameInput` один раз
//! перед тиком, внутри тика resource не меняется.
//!
//! Для headless прогонов есть `Autopilot`: заполняет `FrameInput` из seeded RNG.

use bevy::prelude::*;
use rand::Rng;

use crate::components::{Displacement, Player};
use crate::config::SimulationConfig;
use crate::DeterministicRng;

/// Снимок input за текущий тик
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Позиция курсора в screen space (целые пиксели)
    pub cursor: IVec2,
    /// Клик (edge: кнопка только что нажата)
    pub clicked: bool,
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Клик по точке экрана без движения
    pub fn click_at(cursor: IVec2) -> Self {
        Self {
            cursor,
            clicked: true,
            ..default()
        }
    }
}

/// Конвертирует зажатые направления в смещение за тик
///
/// Left перекрывает Right, Down перекрывает Up (если зажаты обе).
/// Диагональ не нормализуется: ±speed по каждой оси.
pub fn intent_to_displacement(input: &FrameInput, speed: f32) -> Vec2 {
    let mut delta = Vec2::ZERO;

    if input.right {
        delta.x = speed;
    }
    if input.left {
        delta.x = -speed;
    }
    if input.up {
        delta.y = -speed;
    }
    if input.down {
        delta.y = speed;
    }

    delta
}

/// Система: FrameInput → Displacement игрока
pub fn apply_player_input(
    input: Res<FrameInput>,
    config: Res<SimulationConfig>,
    mut players: Query<&mut Displacement, With<Player>>,
) {
    for mut displacement in players.iter_mut() {
        displacement.0 = intent_to_displacement(&input, config.player_speed);
    }
}

/// Autopilot для headless прогонов (детерминированный через DeterministicRng)
#[derive(Resource, Debug, Clone)]
pub struct Autopilot {
    /// Раз в сколько тиков менять направление
    pub hold_ticks: u32,
    /// Вероятность клика за тик
    pub click_chance: f64,
    /// Сколько тиков осталось держать текущие клавиши
    pub remaining: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            hold_ticks: 20,
            click_chance: 0.1,
            remaining: 0,
        }
    }
}

/// Система: Autopilot → FrameInput
///
/// Клавиши держатся `hold_ticks` тиков, курсор и клик генерируются каждый тик.
pub fn drive_autopilot(
    mut autopilot: ResMut<Autopilot>,
    mut rng: ResMut<DeterministicRng>,
    mut input: ResMut<FrameInput>,
    config: Res<SimulationConfig>,
) {
    let rng = &mut rng.rng;

    if autopilot.remaining == 0 {
        input.up = rng.gen_bool(0.3);
        input.down = rng.gen_bool(0.3);
        input.left = rng.gen_bool(0.3);
        input.right = rng.gen_bool(0.3);
        autopilot.remaining = autopilot.hold_ticks;
    }
    autopilot.remaining = autopilot.remaining.saturating_sub(1);

    let viewport = config.viewport_size().as_ivec2();
    input.cursor = IVec2::new(
        rng.gen_range(0..viewport.x.max(1)),
        rng.gen_range(0..viewport.y.max(1)),
    );
    input.clicked = rng.gen_bool(autopilot.click_chance.clamp(0.0, 1.0));
}

/// Input Plugin
///
/// Регистрирует FrameInput и систему intent → displacement.
/// Autopilot работает только если resource вставлен.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameInput>();

        app.add_systems(
            FixedUpdate,
            (
                drive_autopilot.run_if(resource_exists::<Autopilot>),
                apply_player_input,
            )
                .chain()
                .in_set(crate::SimulationSet::Input),
        );
    }
}
