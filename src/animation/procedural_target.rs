//! 程序化目标 - 原始目标叠加卷曲摆动与确定性噪声
//!
//! 噪声是不可通约频率正弦之和，不是随机数，
//! 相同 time 必然得到相同结果。

use crate::math::Vector2;

use super::params::TentacleParams;

// ============================================================================
// 常量
// ============================================================================

/// 卷曲角频率
const CURL_FREQUENCY: f64 = 2.0;
/// 卷曲幅度（curlines = 1 时的像素偏移）
const CURL_AMPLITUDE: f64 = 50.0;
/// 噪声幅度（randomness = 1 时单项的像素偏移）
const NOISE_AMPLITUDE: f64 = 30.0;

/// 噪声 x 分量：sin(3.7t) + cos(2.3t)
const NOISE_X_FREQUENCIES: (f64, f64) = (3.7, 2.3);
/// 噪声 y 分量：cos(2.9t) + sin(3.1t)
const NOISE_Y_FREQUENCIES: (f64, f64) = (2.9, 3.1);

// ============================================================================
// 目标调制
// ============================================================================

/// 横向卷曲偏移
#[inline]
pub fn curl_offset(time: f64, curlines: f64) -> f64 {
    (time * CURL_FREQUENCY).sin() * CURL_AMPLITUDE * curlines
}

/// 伪噪声偏移
pub fn noise_offset(time: f64, randomness: f64) -> Vector2 {
    let (fx0, fx1) = NOISE_X_FREQUENCIES;
    let (fy0, fy1) = NOISE_Y_FREQUENCIES;
    Vector2::new(
        ((time * fx0).sin() + (time * fx1).cos()) * NOISE_AMPLITUDE * randomness,
        ((time * fy0).cos() + (time * fy1).sin()) * NOISE_AMPLITUDE * randomness,
    )
}

/// 计算有效目标
///
/// 纯函数，不感知运行状态；是否调用由编排器决定。
/// 驱动参数 ≤ 0 的分量直接跳过。
pub fn next_target(raw_target: Vector2, time: f64, params: &TentacleParams) -> Vector2 {
    let mut target = raw_target;

    if params.curlines > 0.0 {
        target.x += curl_offset(time, params.curlines);
    }

    if params.randomness > 0.0 {
        target += noise_offset(time, params.randomness);
    }

    target
}

/// 推进模拟时间：time + dt * speed
#[inline]
pub fn advance_time(time: f64, dt: f64, speed: f64) -> f64 {
    time + dt * speed
}
