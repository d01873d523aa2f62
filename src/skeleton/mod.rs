//! 链条系统
//!
//! 核心设计思想：
//! - Segment: 单个刚性段，长度固定，位置/角度由求解器改写
//! - Chain: 以基点为锚的有序段序列
//! - FabrikSolver: 前向-后向迭代求解
//! - constraint: 求解后的一次性关节角度松弛

mod segment;
mod chain;
mod fabrik_solver;
mod constraint;

pub use segment::Segment;
pub use chain::{Chain, ChainGeometry};
pub use fabrik_solver::{FabrikSolver, solve};
pub use constraint::apply_constraints;
