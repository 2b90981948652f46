//! Геометрия: axis-aligned прямоугольники в world pixels
//!
//! Все overlap проверки (коллизии, melee контакт, клик по врагу) идут через
//! целочисленные `IRect`: позиция entity усекается к нулю до целых пикселей,
//! как это делает tile-map слой.

use bevy::math::{IRect, IVec2, Vec2};

/// Строгое пересечение двух прямоугольников (half-open интервалы)
///
/// Касание рёбер (`a.max.x == b.min.x`) пересечением НЕ считается.
/// Прямоугольник нулевой площади не пересекается ни с чем, включая себя.
pub fn overlaps(a: &IRect, b: &IRect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Footprint прямоугольник entity: `[pos, pos + size)` в целых пикселях
pub fn footprint_rect(position: Vec2, size: f32) -> IRect {
    let x = position.x as i32;
    let y = position.y as i32;
    let size = size as i32;
    IRect {
        min: IVec2::new(x, y),
        max: IVec2::new(x + size, y + size),
    }
}

/// Точка строго внутри прямоугольника (граница не считается)
pub fn contains_strict(rect: &IRect, point: IVec2) -> bool {
    point.x > rect.min.x && point.x < rect.max.x && point.y > rect.min.y && point.y < rect.max.y
}
