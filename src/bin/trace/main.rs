//! 无窗口追踪器 - 代替外部计时循环驱动触手并输出日志
//!
//! 用法: RUST_LOG=debug cargo run --features trace --bin trace [帧数]

use std::f64::consts::TAU;

use tentacle_engine::animation::Parameter;
use tentacle_engine::math::Vector2;
use tentacle_engine::tentacle::Tentacle;

/// 原始目标绕行半径
const ORBIT_RADIUS: f64 = 140.0;
/// 每多少帧输出一次
const REPORT_INTERVAL: usize = 30;

fn main() -> tentacle_engine::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let frames: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(600);

    let mut tentacle = Tentacle::from_global_config()?;
    let center = tentacle.config().rest_target;
    tentacle.set_parameter(Parameter::Curlines(1.2).clamped_to_ui_range());
    tentacle.start();

    for frame in 0..frames {
        // 原始目标沿圆周移动，模拟指针输入
        let phase = frame as f64 / frames.max(1) as f64 * TAU;
        tentacle.set_target(center + Vector2::new(phase.cos(), phase.sin()) * ORBIT_RADIUS);
        tentacle.tick();

        if frame % REPORT_INTERVAL == 0 {
            let tip = tentacle.end_effector();
            let goal = tentacle.effective_target();
            log::info!(
                "[Trace] frame={:4} time={:6.3} tip=({:8.2}, {:8.2}) target=({:8.2}, {:8.2}) gap={:.3}",
                frame,
                tentacle.time(),
                tip.x,
                tip.y,
                goal.x,
                goal.y,
                tip.distance(goal),
            );
        }
    }

    tentacle.stop();
    log::info!("[Trace] 完成 {} 帧", frames);
    Ok(())
}
