//! 刚性段
//!
//! Segment 是链条的基本单元：
//! - 静态数据：长度、粗细、角度约束（创建后不变）
//! - 动态数据：起点位置、朝向角（每帧由求解器与约束重写）

use crate::math::{self, Vector2};

/// 刚性段
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    // ========================================
    // 动态数据（每帧更新）
    // ========================================

    /// 段起点（关节）位置
    pub position: Vector2,

    /// 朝向角（弧度），从 position 指向段末端
    pub angle: f64,

    // ========================================
    // 静态数据（初始化后不变）
    // ========================================

    /// 段长度，恒 > 0
    pub(crate) length: f64,

    /// 粗细，仅供渲染
    pub(crate) thickness: f64,

    /// 相对前一段允许的最大角度偏差（弧度）
    pub(crate) angle_constraint: f64,
}

impl Segment {
    /// 创建新段
    ///
    /// # 参数
    /// - `position`: 起点
    /// - `length`: 长度（必须 > 0）
    /// - `thickness`: 粗细
    /// - `angle`: 初始朝向
    /// - `angle_constraint`: 最大角度偏差
    pub fn new(position: Vector2, length: f64, thickness: f64, angle: f64, angle_constraint: f64) -> Self {
        Self {
            position,
            angle,
            length,
            thickness,
            angle_constraint,
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    #[inline]
    pub fn angle_constraint(&self) -> f64 {
        self.angle_constraint
    }

    /// 段末端位置 = position + (cos, sin)(angle) * length
    #[inline]
    pub fn end(&self) -> Vector2 {
        self.position + math::from_angle(self.angle) * self.length
    }
}
