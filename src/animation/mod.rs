//! 动画系统
//!
//! - params: 四个连续调节参数与带标签的参数变更
//! - procedural_target: 原始目标 → 有效目标的程序化调制

mod params;
mod procedural_target;

pub use params::{Parameter, TentacleParams, UI_RANGE};
pub use procedural_target::{next_target, advance_time, curl_offset, noise_offset};
