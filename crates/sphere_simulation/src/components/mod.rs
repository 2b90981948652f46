//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: роли и здоровье (Player, Enemy, FollowsPlayer, Potion, Health)
//! - movement: позиция и перемещение (WorldPosition, Displacement, Footprint, Facing)
//! - world: неизменяемое окружение сессии (Obstacles, MapBounds, Viewport, EnemyRoster)

pub mod actor;
pub mod movement;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
pub use world::*;
