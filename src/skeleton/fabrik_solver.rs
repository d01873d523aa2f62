//! FABRIK 求解器（Forward And Backward Reaching IK）
//!
//! 设计原则：
//! - 每次迭代分两阶段：前向到达（末端钉在目标）→ 后向到达（基点钉回锚点）
//! - 每个阶段完整重写所有关节位置，段长严格保持
//! - 目标超出总长时直接沿射线伸直，不进入迭代

use crate::math::{self, Vector2};

use super::chain::Chain;
use super::segment::Segment;

// ============================================================================
// FABRIK 求解器
// ============================================================================

/// FABRIK 求解器
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FabrikSolver {
    /// 收敛容差（末端与目标的距离）
    pub tolerance: f64,
    /// 最大迭代次数
    pub max_iterations: u32,
}

impl Default for FabrikSolver {
    fn default() -> Self {
        Self {
            tolerance: 0.5,
            max_iterations: 2,
        }
    }
}

impl FabrikSolver {
    /// 创建新的求解器
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// 求解，返回末端是否到达目标容差范围内
    ///
    /// - 段数 < 2：不做任何修改，返回 false
    /// - 目标不可达：伸直指向目标，返回 true
    /// - 迭代耗尽仍未收敛：保留最后一次松弛后的姿态，返回 false
    pub fn solve(&self, chain: &mut Chain, target: Vector2) -> bool {
        let segments = chain.segments_mut();
        if segments.len() < 2 {
            return false;
        }

        let anchor = segments[0].position;
        let total_length: f64 = segments.iter().map(|s| s.length).sum();
        let distance_to_target = math::distance(anchor, target);

        if distance_to_target > total_length {
            Self::stretch(segments, anchor, target);
            return true;
        }

        for _ in 0..self.max_iterations {
            Self::forward_reach(segments, target);
            let end_effector = Self::backward_reach(segments, anchor, target);

            if math::distance(end_effector, target) <= self.tolerance {
                return true;
            }
        }

        false
    }

    /// 不可达：所有关节沿 anchor → target 射线按段长排布
    fn stretch(segments: &mut [Segment], anchor: Vector2, target: Vector2) {
        let direction = math::normalize(math::subtract(target, anchor));
        let angle = math::heading(direction);

        let mut position = anchor;
        for seg in segments.iter_mut() {
            seg.position = position;
            seg.angle = angle;
            position = math::add(position, math::scale(direction, seg.length));
        }
    }

    /// 前向到达：末端钉在目标，自尾向头逐个关节沿连线回拉到固定段长
    ///
    /// 此阶段结束后链条暂时脱离锚点。
    fn forward_reach(segments: &mut [Segment], target: Vector2) {
        let mut next = target;
        for seg in segments.iter_mut().rev() {
            let direction = math::normalize(math::subtract(seg.position, next));
            seg.position = math::add(next, math::scale(direction, seg.length));
            next = seg.position;
        }
    }

    /// 后向到达：首关节钉回锚点，自头向尾重建位置并刷新朝向角
    ///
    /// 返回本次重建得到的末端位置。前向阶段把末端钉在了 target，
    /// 所以最后一段朝 target 方向重投影。
    fn backward_reach(segments: &mut [Segment], anchor: Vector2, target: Vector2) -> Vector2 {
        let count = segments.len();
        segments[0].position = anchor;
        let mut end_effector = target;

        for i in 0..count {
            let next = if i + 1 < count {
                segments[i + 1].position
            } else {
                end_effector
            };

            let seg = &mut segments[i];
            let direction = math::normalize(math::subtract(next, seg.position));
            seg.angle = math::heading(direction);
            let reprojected = math::add(seg.position, math::scale(direction, seg.length));

            if i + 1 < count {
                segments[i + 1].position = reprojected;
            } else {
                end_effector = reprojected;
            }
        }

        end_effector
    }
}

/// 便捷入口：`FabrikSolver::new(tolerance, max_iterations).solve(chain, target)`
pub fn solve(chain: &mut Chain, target: Vector2, tolerance: f64, max_iterations: u32) -> bool {
    FabrikSolver::new(tolerance, max_iterations).solve(chain, target)
}
