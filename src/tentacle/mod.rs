//! 触手系统
//!
//! - config: 扁平配置与全局默认实例
//! - orchestrator: 单个触手的状态机与帧流水线
//! - batch: 多触手并行推进

mod config;
mod orchestrator;
mod batch;

pub use config::{TentacleConfig, get_config, set_config, reset_config};
pub use orchestrator::{Tentacle, TentacleState, SegmentView};
pub use batch::{tick_all, tick_all_n};
