//! Collision resolver против статических препятствий
//!
//! Axis-separated: сначала двигаем по X и выталкиваем по X, затем по Y.
//! Корректируется только проникновение от движения: при нулевом смещении по оси
//! пересечение остаётся как есть.
//!
//! Несколько пересечений за тик: препятствия обходятся по порядку, позиция
//! перезаписывается каждый раз, побеждает последнее (без min-penetration).

use bevy::math::{IRect, Vec2};

use crate::geometry::{footprint_rect, overlaps};

/// Выталкивание по X после горизонтального шага
pub fn resolve_horizontal<'a>(
    position: &mut Vec2,
    dx: f32,
    size: f32,
    obstacles: impl IntoIterator<Item = &'a IRect>,
) {
    for obstacle in obstacles {
        if !overlaps(obstacle, &footprint_rect(*position, size)) {
            continue;
        }

        if dx > 0.0 {
            position.x = obstacle.min.x as f32 - size;
        } else if dx < 0.0 {
            position.x = obstacle.max.x as f32;
        }
    }
}

/// Выталкивание по Y после вертикального шага
pub fn resolve_vertical<'a>(
    position: &mut Vec2,
    dy: f32,
    size: f32,
    obstacles: impl IntoIterator<Item = &'a IRect>,
) {
    for obstacle in obstacles {
        if !overlaps(obstacle, &footprint_rect(*position, size)) {
            continue;
        }

        if dy > 0.0 {
            position.y = obstacle.min.y as f32 - size;
        } else if dy < 0.0 {
            position.y = obstacle.max.y as f32;
        }
    }
}

/// Полный шаг entity: X + resolve, затем Y + resolve
pub fn step_and_resolve(position: &mut Vec2, delta: Vec2, size: f32, obstacles: &[IRect]) {
    position.x += delta.x;
    resolve_horizontal(position, delta.x, size, obstacles);

    position.y += delta.y;
    resolve_vertical(position, delta.y, size, obstacles);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 16.0;

    fn obstacle() -> IRect {
        IRect::new(100, 100, 116, 116)
    }

    #[test]
    fn test_moving_right_snaps_to_left_face() {
        let obstacles = [obstacle()];

        for start_x in 70..=84 {
            let mut position = Vec2::new(start_x as f32, 100.0);
            for _ in 0..20 {
                step_and_resolve(&mut position, Vec2::new(2.0, 0.0), SIZE, &obstacles);
                assert!(
                    position.x + SIZE <= obstacles[0].min.x as f32,
                    "start_x={} penetrated: x={}",
                    start_x,
                    position.x
                );
            }
            assert_eq!(position.x + SIZE, 100.0, "start_x={}", start_x);
        }
    }

    #[test]
    fn test_moving_left_snaps_to_right_face() {
        let obstacles = [obstacle()];

        for start_x in 116..=130 {
            let mut position = Vec2::new(start_x as f32, 105.0);
            for _ in 0..20 {
                step_and_resolve(&mut position, Vec2::new(-2.0, 0.0), SIZE, &obstacles);
            }
            assert_eq!(position.x, 116.0, "start_x={}", start_x);
        }
    }

    #[test]
    fn test_vertical_resolution() {
        let obstacles = [obstacle()];

        let mut falling = Vec2::new(100.0, 80.0);
        for _ in 0..10 {
            step_and_resolve(&mut falling, Vec2::new(0.0, 2.0), SIZE, &obstacles);
        }
        assert_eq!(falling.y, 84.0);

        let mut rising = Vec2::new(100.0, 130.0);
        for _ in 0..10 {
            step_and_resolve(&mut rising, Vec2::new(0.0, -2.0), SIZE, &obstacles);
        }
        assert_eq!(rising.y, 116.0);
    }

    #[test]
    fn test_zero_displacement_keeps_existing_overlap() {
        let obstacles = [obstacle()];
        let mut position = Vec2::new(104.0, 104.0);

        step_and_resolve(&mut position, Vec2::ZERO, SIZE, &obstacles);

        assert_eq!(position, Vec2::new(104.0, 104.0));
    }

    #[test]
    fn test_diagonal_slides_along_wall() {
        let obstacles = [obstacle()];
        // Справа от стены, двигаемся влево-вниз
        let mut position = Vec2::new(117.0, 100.0);

        step_and_resolve(&mut position, Vec2::new(-2.0, 2.0), SIZE, &obstacles);

        assert_eq!(position, Vec2::new(116.0, 102.0));
    }

    #[test]
    fn test_last_overlapping_obstacle_wins() {
        // Два препятствия перекрывают footprint после шага вправо
        let obstacles = [IRect::new(30, 0, 40, 16), IRect::new(20, 0, 25, 16)];
        let mut position = Vec2::new(6.0, 0.0);

        resolve_horizontal(&mut position, 2.0, SIZE, &obstacles);
        // 1) [30..40): footprint 6..22 не пересекается
        // 2) [20..25): пересекается → x = 20 - 16
        assert_eq!(position.x, 4.0);

        let mut position = Vec2::new(18.0, 0.0);
        resolve_horizontal(&mut position, 2.0, SIZE, &obstacles);
        // 1) footprint 18..34 ∩ [30..40) → x = 14
        // 2) footprint 14..30 ∩ [20..25) → x = 4
        assert_eq!(position.x, 4.0);
    }
}
