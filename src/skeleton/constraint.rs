//! 关节角度约束
//!
//! 求解后一次性松弛：每个内部关节相对前一段的角度偏差
//! 被限制在 angle_constraint * (1 - rigidness) 内，并向后几何传播。
//! 松弛后不再回到求解器。

use crate::math::{self, Vector2};

use super::chain::Chain;

/// 对内部关节（索引 1..=N-2）施加角度约束
///
/// - rigidness = 0：允许完整的 angle_constraint，不修改链条
/// - rigidness = 1：偏差为 0，内部段与前一段同向
/// - rigidness > 1：不再收紧，与 1 等价
///
/// 被限制的段保持自身起点与段长，其后继关节按新角度重新放置，
/// 因此段长不变。
pub fn apply_constraints(chain: &mut Chain, rigidness: f64) {
    let segments = chain.segments_mut();
    let count = segments.len();
    if count < 3 || rigidness <= 0.0 {
        return;
    }

    for i in 1..count - 1 {
        let prev_angle = segments[i - 1].angle;
        let seg = &mut segments[i];

        let max_angle_diff = (seg.angle_constraint * (1.0 - rigidness)).max(0.0);
        // 跨越 ±π 时取最短角差
        let angle_diff = math::wrap_angle(seg.angle - prev_angle)
            .max(-max_angle_diff)
            .min(max_angle_diff);

        seg.angle = prev_angle + angle_diff;
        let next_position: Vector2 = seg.position + math::from_angle(seg.angle) * seg.length;
        segments[i + 1].position = next_position;
    }
}
