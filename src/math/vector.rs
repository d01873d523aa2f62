//! 向量自由函数
//!
//! 全部为纯值运算，零向量归一化返回 (0, 0)，不产生 NaN。

use std::f64::consts::{PI, TAU};

use super::Vector2;

/// a + b
#[inline]
pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    a + b
}

/// a - b
#[inline]
pub fn subtract(a: Vector2, b: Vector2) -> Vector2 {
    a - b
}

/// v * s
#[inline]
pub fn scale(v: Vector2, s: f64) -> Vector2 {
    v * s
}

/// 两点间欧氏距离
#[inline]
pub fn distance(a: Vector2, b: Vector2) -> f64 {
    a.distance(b)
}

/// 单位化，长度为 0 时返回 (0, 0)
#[inline]
pub fn normalize(v: Vector2) -> Vector2 {
    v.normalize_or_zero()
}

/// 方向角 atan2(y, x)
#[inline]
pub fn heading(v: Vector2) -> f64 {
    v.y.atan2(v.x)
}

/// 由角度构造单位方向
#[inline]
pub fn from_angle(angle: f64) -> Vector2 {
    Vector2::new(angle.cos(), angle.sin())
}

/// 角度归一化到 (-π, π]
pub fn wrap_angle(angle: f64) -> f64 {
    let mut r = angle % TAU;
    if r > PI {
        r -= TAU;
    } else if r <= -PI {
        r += TAU;
    }
    r
}
