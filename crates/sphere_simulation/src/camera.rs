//! Camera: offset, который внешний рендер прибавляет ко всем world координатам
//!
//! Derived state: пересчитывается каждый тик из позиции игрока, viewport и
//! размеров карты. Собственной "истины" не хранит.

use bevy::prelude::*;

use crate::components::{Footprint, MapBounds, Player, Viewport, WorldPosition};

/// Offset камеры (screen = world + offset)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewCamera {
    pub offset: Vec2,
}

impl ViewCamera {
    /// Центрирует target в viewport: `offset = viewport/2 - target`
    pub fn follow_target(&mut self, target: Vec2, viewport: Vec2) {
        self.offset = viewport / 2.0 - target;
    }

    /// Не даёт viewport выйти за карту: offset ∈ [-(map - viewport), 0]
    ///
    /// Для карты меньше viewport диапазон вырожден: побеждает нижняя граница.
    pub fn constrain(&mut self, map: Vec2, viewport: Vec2) {
        self.offset = self.offset.min(Vec2::ZERO).max(viewport - map);
    }

    /// Видимая область карты в world координатах: `[min, max)`
    pub fn visible_rect(&self, viewport: Vec2) -> Rect {
        let min = -self.offset;
        Rect::from_corners(min, min + viewport)
    }
}

/// Центр footprint игрока (цель камеры)
pub fn camera_target(position: Vec2, footprint: &Footprint) -> Vec2 {
    position + Vec2::splat(footprint.half())
}

/// Система: камера следует за игроком в пределах карты
pub fn camera_follow_player(
    mut camera: ResMut<ViewCamera>,
    viewport: Res<Viewport>,
    bounds: Res<MapBounds>,
    players: Query<(&WorldPosition, &Footprint), With<Player>>,
) {
    let Ok((position, footprint)) = players.single() else {
        return;
    };

    camera.follow_target(camera_target(position.0, footprint), viewport.size);
    camera.constrain(bounds.size, viewport.size);
}

/// Camera Plugin
///
/// camera_follow_player → SimulationSet::Camera (последний шаг тика)
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewCamera>()
            .init_resource::<Viewport>();

        app.add_systems(
            FixedUpdate,
            camera_follow_player
                .run_if(resource_exists::<MapBounds>)
                .in_set(crate::SimulationSet::Camera),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const VIEWPORT: Vec2 = Vec2::new(320.0, 240.0);
    const MAP: Vec2 = Vec2::new(800.0, 640.0);

    #[test]
    fn test_follow_centers_target() {
        let mut camera = ViewCamera::default();
        camera.follow_target(Vec2::new(408.0, 358.0), VIEWPORT);

        assert_eq!(camera.offset, Vec2::new(-248.0, -238.0));
    }

    #[test]
    fn test_constrain_at_top_left_corner() {
        let mut camera = ViewCamera::default();
        camera.follow_target(Vec2::new(10.0, 10.0), VIEWPORT);
        camera.constrain(MAP, VIEWPORT);

        assert_eq!(camera.offset, Vec2::ZERO);
    }

    #[test]
    fn test_constrain_at_bottom_right_corner() {
        let mut camera = ViewCamera::default();
        camera.follow_target(Vec2::new(790.0, 630.0), VIEWPORT);
        camera.constrain(MAP, VIEWPORT);

        assert_eq!(camera.offset, Vec2::new(-480.0, -400.0));
    }

    #[test]
    fn test_viewport_always_inside_map() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let map_rect = Rect::from_corners(Vec2::ZERO, MAP);
        let mut camera = ViewCamera::default();

        for _ in 0..1000 {
            let target = Vec2::new(rng.gen_range(-200.0..1000.0), rng.gen_range(-200.0..900.0));
            camera.follow_target(target, VIEWPORT);
            camera.constrain(MAP, VIEWPORT);

            let visible = camera.visible_rect(VIEWPORT);
            assert!(
                map_rect.contains(visible.min) && map_rect.contains(visible.max),
                "target={:?} visible={:?}",
                target,
                visible
            );
        }
    }
}
