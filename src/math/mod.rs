//! 二维向量运算

mod vector;

pub use vector::{add, subtract, scale, distance, normalize, heading, from_angle, wrap_angle};

/// 二维向量（f64）
pub type Vector2 = glam::DVec2;
