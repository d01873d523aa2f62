//! 触手运行时引擎
//!
//! 模块划分：
//! - math: 二维向量运算
//! - skeleton: 链条模型、FABRIK 求解器、关节约束
//! - animation: 参数与程序化目标生成
//! - tentacle: 触手编排器、配置、批量驱动

pub mod math;
pub mod skeleton;
pub mod animation;
pub mod tentacle;

use thiserror::Error;

pub use math::Vector2;
pub use skeleton::{Chain, ChainGeometry, FabrikSolver, Segment};
pub use animation::{Parameter, TentacleParams};
pub use tentacle::{Tentacle, TentacleConfig, TentacleState, SegmentView};

/// 引擎错误类型
#[derive(Debug, Error)]
pub enum TentacleError {
    /// 配置非法（构造链条前校验）
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// 未知参数名
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// 参数值非有限数
    #[error("Invalid value {value} for parameter '{name}'")]
    InvalidParameterValue {
        name: &'static str,
        value: f64,
    },
}

/// `Result<T, TentacleError>` 别名
pub type Result<T> = std::result::Result<T, TentacleError>;
