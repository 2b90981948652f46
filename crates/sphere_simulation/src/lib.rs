//! Sphere Simulation Core
//!
//! Tick-based top-down симуляция на Bevy 0.16 ECS (headless).
//! Рендер, ассеты и polling устройств делает внешний клиент:
//! он пишет `FrameInput`, вызывает `run_tick` и читает `FrameSnapshot`.
//!
//! Порядок тика (FixedUpdate, строго последовательно):
//! Input → PlayerMovement → EnemyAi → EnemyMovement → Items → Combat → Cleanup → Camera

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod camera;
pub mod combat;
pub mod components;
pub mod config;
pub mod geometry;
pub mod input;
pub mod item_system;
pub mod logger;
pub mod physics;
pub mod render_snapshot;
pub mod spawn;

// Re-export базовых типов для удобства
pub use ai::AIPlugin;
pub use camera::{CameraPlugin, ViewCamera};
pub use combat::{
    Attacker, CombatPlugin, Dead, EnemyEliminated, EnemyHit, PendingRemovals, PlayerDamaged,
    PlayerDied,
};
pub use components::*;
pub use config::{ConfigError, SimulationConfig, TILE_SIZE};
pub use input::{Autopilot, FrameInput, InputPlugin};
pub use item_system::{ItemsPlugin, PotionPickedUp};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel};
pub use physics::MovementPlugin;
pub use render_snapshot::{build_render_frame, FrameSnapshot};
pub use spawn::{spawn_scene, SceneEntities};

/// Шаги одного тика (chained, порядок меняет наблюдаемое поведение)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    PlayerMovement,
    EnemyAi,
    EnemyMovement,
    Items,
    Combat,
    Cleanup,
    Camera,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Input,
                SimulationSet::PlayerMovement,
                SimulationSet::EnemyAi,
                SimulationSet::EnemyMovement,
                SimulationSet::Items,
                SimulationSet::Combat,
                SimulationSet::Cleanup,
                SimulationSet::Camera,
            )
                .chain(),
        );

        app
            // Fixed timestep 60Hz (tick игры)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .init_resource::<SimulationConfig>()
            // Подсистемы
            .add_plugins((
                InputPlugin,
                MovementPlugin,
                AIPlugin,
                ItemsPlugin,
                CombatPlugin,
                CameraPlugin,
            ));

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Сцену нужно заспавнить отдельно (`spawn_scene`).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins(SimulationPlugin);

    app
}

/// Ровно один тик симуляции
///
/// Запускает FixedUpdate напрямую, без накопления реального времени:
/// N вызовов = N тиков. После тика `Events<E>` содержат только события
/// этого тика (события предыдущего тика отбрасываются).
pub fn run_tick(app: &mut App) {
    let world = app.world_mut();
    world.run_schedule(FixedUpdate);
    rotate_tick_events(world);
}

/// Double-buffer swap всех событий симуляции (вместо `First` schedule)
fn rotate_tick_events(world: &mut World) {
    rotate_events::<PlayerDamaged>(world);
    rotate_events::<PlayerDied>(world);
    rotate_events::<EnemyHit>(world);
    rotate_events::<EnemyEliminated>(world);
    rotate_events::<PotionPickedUp>(world);
}

fn rotate_events<E: Event>(world: &mut World) {
    if let Some(mut events) = world.get_resource_mut::<Events<E>>() {
        events.update();
    }
}

/// Snapshot мира для сравнения детерминизма
///
/// Debug-представление компонентов, отсортированное по Entity index.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
