//! 触手配置
//!
//! 所有参数扁平化，直接在代码中修改默认值即可。
//! 全局实例只保存默认值，不持有任何活动链条。

use std::f64::consts::FRAC_PI_2;

use once_cell::sync::Lazy;
use std::sync::RwLock;

use crate::animation::TentacleParams;
use crate::math::Vector2;
use crate::skeleton::ChainGeometry;
use crate::{Result, TentacleError};

/// 触手配置（扁平化，不嵌套）
#[derive(Debug, Clone, PartialEq)]
pub struct TentacleConfig {
    // ========== 链条几何 ==========
    /// 段数，默认 20
    pub segment_count: usize,
    /// 第一段长度，默认 30.0
    pub base_length: f64,
    /// 第一段粗细，默认 20.0
    pub base_thickness: f64,
    /// 每段衰减系数，默认 0.92
    pub reduction: f64,
    /// 初始朝向（弧度），默认 π/2（屏幕坐标下竖直向下）
    pub initial_heading: f64,
    /// 基部段最大角度偏差，默认 0.3
    pub angle_constraint_base: f64,
    /// 末端段最大角度偏差，默认 0.8
    pub angle_constraint_tip: f64,

    // ========== 位置 ==========
    /// 锚点
    pub base_position: Vector2,
    /// 初始/重置后的目标
    pub rest_target: Vector2,

    // ========== 求解 ==========
    /// 收敛容差，默认 0.5
    pub tolerance: f64,
    /// 每帧迭代次数，默认 2
    /// 收敛分摊到多帧完成，单帧不追求收敛
    pub max_iterations: u32,
    /// 每帧名义时间步长（秒），默认 1/60
    pub time_step: f64,

    // ========== 参数 ==========
    /// 初始调节参数
    pub params: TentacleParams,

    // ========== 调试 ==========
    /// 是否输出每帧调试日志，默认 false
    pub debug_log: bool,
}

impl Default for TentacleConfig {
    fn default() -> Self {
        Self {
            // ====== 链条几何 ======
            // 总长约 304，越靠近末端越细越短
            segment_count: 20,
            base_length: 30.0,
            base_thickness: 20.0,
            reduction: 0.92,
            initial_heading: FRAC_PI_2,

            // 基部关节更紧，末端更灵活
            angle_constraint_base: 0.3,
            angle_constraint_tip: 0.8,

            // ====== 位置 ======
            base_position: Vector2::ZERO,
            rest_target: Vector2::new(0.0, 200.0),

            // ====== 求解 ======
            tolerance: 0.5,
            max_iterations: 2,
            time_step: 1.0 / 60.0,

            // ====== 参数 ======
            params: TentacleParams::default(),

            // ====== 调试 ======
            debug_log: false,
        }
    }
}

impl TentacleConfig {
    /// 链条初始几何
    pub fn geometry(&self) -> ChainGeometry {
        ChainGeometry {
            segment_count: self.segment_count,
            base_length: self.base_length,
            base_thickness: self.base_thickness,
            reduction: self.reduction,
            heading: self.initial_heading,
            angle_constraint_base: self.angle_constraint_base,
            angle_constraint_tip: self.angle_constraint_tip,
        }
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        self.geometry().validate()?;

        if !self.base_position.is_finite() || !self.rest_target.is_finite() {
            return Err(TentacleError::InvalidConfig("positions must be finite".into()));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(TentacleError::InvalidConfig(format!(
                "tolerance must be positive, got {}", self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(TentacleError::InvalidConfig("max_iterations must be at least 1".into()));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(TentacleError::InvalidConfig(format!(
                "time_step must be positive, got {}", self.time_step
            )));
        }

        let p = &self.params;
        if ![p.speed, p.curlines, p.rigidness, p.randomness].iter().all(|v| v.is_finite()) {
            return Err(TentacleError::InvalidConfig("params must be finite".into()));
        }

        Ok(())
    }
}

/// 全局配置实例
static TENTACLE_CONFIG: Lazy<RwLock<TentacleConfig>> = Lazy::new(|| {
    RwLock::new(TentacleConfig::default())
});

/// 获取当前配置（只读）
pub fn get_config() -> TentacleConfig {
    TENTACLE_CONFIG.read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// 设置配置，非法配置被拒绝并保留旧值
pub fn set_config(config: TentacleConfig) -> Result<()> {
    if let Err(e) = config.validate() {
        log::warn!("[Tentacle] 配置被拒绝: {}", e);
        return Err(e);
    }
    *TENTACLE_CONFIG.write().unwrap_or_else(|e| e.into_inner()) = config;
    Ok(())
}

/// 重置为默认配置
pub fn reset_config() {
    *TENTACLE_CONFIG.write().unwrap_or_else(|e| e.into_inner()) = TentacleConfig::default();
}
