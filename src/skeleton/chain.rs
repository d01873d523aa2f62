//! 链条 - 以基点为锚的有序刚性段序列
//!
//! 段数与段长在链条生命周期内不变，只有位置与角度会被改写。
//! 重置即整体重建。

use crate::math::{self, Vector2};
use crate::{Result, TentacleError};

use super::segment::Segment;

// ============================================================================
// 初始几何
// ============================================================================

/// 链条初始几何（几何衰减）
///
/// 第 i 段：
/// - length = base_length * reduction^i
/// - thickness = base_thickness * reduction^i
/// - angle_constraint 从 angle_constraint_base 线性过渡到 angle_constraint_tip
#[derive(Clone, Debug, PartialEq)]
pub struct ChainGeometry {
    /// 段数
    pub segment_count: usize,
    /// 第一段长度
    pub base_length: f64,
    /// 第一段粗细
    pub base_thickness: f64,
    /// 每段衰减系数，取值 (0, 1]
    pub reduction: f64,
    /// 初始朝向（弧度）
    pub heading: f64,
    /// 基部段角度约束
    pub angle_constraint_base: f64,
    /// 末端段角度约束
    pub angle_constraint_tip: f64,
}

impl ChainGeometry {
    /// 校验几何参数
    pub fn validate(&self) -> Result<()> {
        if self.segment_count == 0 {
            return Err(TentacleError::InvalidConfig("segment_count must be at least 1".into()));
        }
        if !self.base_length.is_finite() || self.base_length <= 0.0 {
            return Err(TentacleError::InvalidConfig(format!(
                "base_length must be positive, got {}", self.base_length
            )));
        }
        if !self.reduction.is_finite() || self.reduction <= 0.0 || self.reduction > 1.0 {
            return Err(TentacleError::InvalidConfig(format!(
                "reduction must lie in (0, 1], got {}", self.reduction
            )));
        }
        // 衰减后末段长度不能下溢为 0
        let tip_length = self.base_length * self.reduction.powi(self.segment_count as i32 - 1);
        if tip_length <= 0.0 {
            return Err(TentacleError::InvalidConfig("tip segment length underflows to zero".into()));
        }
        if !self.heading.is_finite()
            || !self.base_thickness.is_finite()
            || !self.angle_constraint_base.is_finite()
            || !self.angle_constraint_tip.is_finite()
        {
            return Err(TentacleError::InvalidConfig("geometry contains non-finite values".into()));
        }
        Ok(())
    }

    /// 第 i 段的角度约束
    fn angle_constraint_at(&self, index: usize) -> f64 {
        if self.segment_count < 2 {
            return self.angle_constraint_base;
        }
        let t = index as f64 / (self.segment_count - 1) as f64;
        self.angle_constraint_base + (self.angle_constraint_tip - self.angle_constraint_base) * t
    }
}

// ============================================================================
// 链条
// ============================================================================

/// 链条
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    segments: Vec<Segment>,
}

impl Chain {
    /// 按几何衰减公式生成沿 heading 伸直的链条
    ///
    /// 相同输入总是得到相同链条。
    pub fn generate(base: Vector2, geometry: &ChainGeometry) -> Result<Self> {
        geometry.validate()?;

        let direction = math::from_angle(geometry.heading);
        let mut segments = Vec::with_capacity(geometry.segment_count);
        let mut position = base;
        let mut length = geometry.base_length;
        let mut thickness = geometry.base_thickness;

        for i in 0..geometry.segment_count {
            segments.push(Segment::new(
                position,
                length,
                thickness,
                geometry.heading,
                geometry.angle_constraint_at(i),
            ));
            position += direction * length;
            length *= geometry.reduction;
            thickness *= geometry.reduction;
        }

        Ok(Self { segments })
    }

    /// 从显式段列表构造
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self> {
        for (i, seg) in segments.iter().enumerate() {
            if !seg.length.is_finite() || seg.length <= 0.0 {
                return Err(TentacleError::InvalidConfig(format!(
                    "segment {} has non-positive length {}", i, seg.length
                )));
            }
        }
        Ok(Self { segments })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// 可变访问只开放给求解器与约束
    #[inline]
    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    /// 所有段长之和
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(|s| s.length).sum()
    }

    /// 锚点（第一段起点）
    pub fn anchor(&self) -> Option<Vector2> {
        self.segments.first().map(|s| s.position)
    }

    /// 末端执行器 = 最后一段起点 + 朝向 * 段长
    pub fn end_effector(&self) -> Option<Vector2> {
        self.segments.last().map(Segment::end)
    }

    /// 全部关节位置（N 个段起点 + 末端，共 N+1 个点）
    pub fn joint_positions(&self) -> Vec<Vector2> {
        let mut joints: Vec<Vector2> = self.segments.iter().map(|s| s.position).collect();
        if let Some(tip) = self.end_effector() {
            joints.push(tip);
        }
        joints
    }
}
