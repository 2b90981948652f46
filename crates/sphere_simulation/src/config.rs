//! Конфигурация симуляции: tuning параметры + стартовая сцена
//!
//! Загружается из JSON (serde) до первого тика. Все ошибки загрузки фатальны:
//! runner выходит до старта симуляции. Defaults повторяют стартовую карту игры.

use std::path::Path;

use bevy::math::{IRect, Vec2};
use bevy::prelude::Resource;
use serde::Deserialize;
use thiserror::Error;

/// Размер тайла в пикселях (footprint любого entity)
pub const TILE_SIZE: f32 = 16.0;

/// Ошибки загрузки конфигурации
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Боевые параметры одной роли (игрок или враг)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CombatantConfig {
    pub health: u32,
    pub attack_power: u32,
    /// Минимум тиков между двумя атаками
    pub attack_interval: u32,
}

/// Tuning параметры симуляции
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub tile_size: f32,
    /// Пикселей за тик на ось (input)
    pub player_speed: f32,
    /// Пикселей за тик на ось (chase AI)
    pub enemy_speed: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Дальность клика-атаки игрока, в тайлах
    pub attack_range_tiles: f32,
    pub player: CombatantConfig,
    pub enemy: CombatantConfig,
    /// Подбор зелий (выключен по умолчанию)
    pub potion_pickup: bool,
    pub scene: SceneConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            player_speed: 2.0,
            enemy_speed: 1.0,
            viewport_width: 320.0,
            viewport_height: 240.0,
            attack_range_tiles: 5.0,
            player: CombatantConfig {
                health: 3,
                attack_power: 1,
                attack_interval: 20,
            },
            enemy: CombatantConfig {
                health: 3,
                attack_power: 1,
                attack_interval: 30,
            },
            potion_pickup: false,
            scene: SceneConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        // Footprint rect считается в целых пикселях
        if self.tile_size.fract() != 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be a whole number of pixels, got {}",
                self.tile_size
            )));
        }
        if self.player.attack_interval == 0 || self.enemy.attack_interval == 0 {
            return Err(ConfigError::Invalid(
                "attack_interval must be at least 1 tick".to_string(),
            ));
        }

        let map = self.map_size();
        let viewport = self.viewport_size();
        if map.x < viewport.x || map.y < viewport.y {
            return Err(ConfigError::Invalid(format!(
                "map {}x{} px is smaller than viewport {}x{}",
                map.x, map.y, viewport.x, viewport.y
            )));
        }

        for obstacle in &self.scene.obstacles {
            if obstacle.min[0] >= obstacle.max[0] || obstacle.min[1] >= obstacle.max[1] {
                return Err(ConfigError::Invalid(format!(
                    "obstacle {:?}..{:?} has no area",
                    obstacle.min, obstacle.max
                )));
            }
        }

        Ok(())
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn map_size(&self) -> Vec2 {
        Vec2::new(
            self.scene.map_width_tiles as f32 * self.tile_size,
            self.scene.map_height_tiles as f32 * self.tile_size,
        )
    }

    /// Дальность атаки игрока в пикселях
    pub fn attack_range(&self) -> f32 {
        self.attack_range_tiles * self.tile_size
    }
}

/// Стартовая сцена: игрок, враги, зелья, препятствия, размер карты
///
/// Если `scene` в JSON не указана целиком, берётся стартовая карта.
/// Внутри указанной сцены пропущенные списки пустые.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    #[serde(default = "default_map_tiles")]
    pub map_width_tiles: u32,
    #[serde(default = "default_map_tiles")]
    pub map_height_tiles: u32,
    #[serde(default = "default_player_spawn")]
    pub player: [f32; 2],
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
    #[serde(default)]
    pub potions: Vec<PotionSpawn>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,
}

fn default_map_tiles() -> u32 {
    50
}

fn default_player_spawn() -> [f32; 2] {
    [400.0, 350.0]
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            map_width_tiles: default_map_tiles(),
            map_height_tiles: default_map_tiles(),
            player: default_player_spawn(),
            enemies: vec![
                EnemySpawn {
                    position: [100.0, 100.0],
                    follows_player: false,
                },
                EnemySpawn {
                    position: [150.0, 150.0],
                    follows_player: true,
                },
                EnemySpawn {
                    position: [75.0, 75.0],
                    follows_player: false,
                },
            ],
            potions: vec![PotionSpawn {
                position: [150.0, 150.0],
                heal_amount: 1,
            }],
            obstacles: vec![ObstacleSpec {
                min: [100, 100],
                max: [116, 116],
            }],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnemySpawn {
    pub position: [f32; 2],
    #[serde(default)]
    pub follows_player: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PotionSpawn {
    pub position: [f32; 2],
    pub heal_amount: u32,
}

/// Прямоугольник препятствия в world pixels: `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObstacleSpec {
    pub min: [i32; 2],
    pub max: [i32; 2],
}

impl ObstacleSpec {
    pub fn to_rect(&self) -> IRect {
        IRect::new(self.min[0], self.min[1], self.max[0], self.max[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.attack_range(), 80.0);
        assert_eq!(config.map_size(), Vec2::new(800.0, 800.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimulationConfig::from_json_str(
            r#"{ "player_speed": 3.0, "enemy": { "health": 5, "attack_power": 2, "attack_interval": 10 } }"#,
        )
        .expect("valid config");

        assert_eq!(config.player_speed, 3.0);
        assert_eq!(config.enemy.health, 5);
        assert_eq!(config.enemy.attack_interval, 10);
        assert_eq!(config.player, SimulationConfig::default().player);
        assert_eq!(config.scene.enemies.len(), 3);
    }

    #[test]
    fn test_scene_from_json() {
        let config = SimulationConfig::from_json_str(
            r#"{
                "scene": {
                    "map_width_tiles": 30,
                    "map_height_tiles": 20,
                    "player": [40.0, 40.0],
                    "enemies": [ { "position": [10.0, 10.0], "follows_player": true } ],
                    "obstacles": [ { "min": [0, 0], "max": [16, 16] } ]
                }
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.scene.enemies.len(), 1);
        assert!(config.scene.enemies[0].follows_player);
        assert!(config.scene.potions.is_empty());
        assert_eq!(config.scene.obstacles[0].to_rect(), IRect::new(0, 0, 16, 16));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SimulationConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = SimulationConfig::from_json_str(r#"{ "gravity": 9.8 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_interval_is_invalid() {
        let err = SimulationConfig::from_json_str(
            r#"{ "enemy": { "health": 3, "attack_power": 1, "attack_interval": 0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_fractional_tile_size_is_invalid() {
        let err = SimulationConfig::from_json_str(r#"{ "tile_size": 16.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = SimulationConfig::from_json_str(r#"{ "tile_size": 20.0 }"#).expect("valid config");
        assert_eq!(config.tile_size, 20.0);
    }

    #[test]
    fn test_map_smaller_than_viewport_is_invalid() {
        let err = SimulationConfig::from_json_str(
            r#"{ "scene": { "map_width_tiles": 10, "map_height_tiles": 10 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimulationConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
