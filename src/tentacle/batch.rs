//! 批量驱动 - 多个独立触手并行推进
//!
//! 每个实例在同一帧内只被一个工作线程独占，实例之间不共享状态，
//! 结果与顺序推进完全一致。

use rayon::prelude::*;

use super::orchestrator::Tentacle;

/// 并行推进所有触手一帧
pub fn tick_all(tentacles: &mut [Tentacle]) {
    tentacles.par_iter_mut().for_each(Tentacle::tick);
}

/// 并行推进所有触手 n 帧
pub fn tick_all_n(tentacles: &mut [Tentacle], frames: usize) {
    tentacles.par_iter_mut().for_each(|tentacle| {
        for _ in 0..frames {
            tentacle.tick();
        }
    });
}
