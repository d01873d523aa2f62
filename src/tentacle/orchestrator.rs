//! 触手编排器
//!
//! 持有链条、目标、参数与运行状态。每帧流水线：
//! 推进时间 → 生成有效目标 → FABRIK 求解 → 关节约束松弛。
//! 停止状态下 tick 完全不做事。

use crate::animation::{self, Parameter, TentacleParams};
use crate::math::Vector2;
use crate::skeleton::{self, Chain, FabrikSolver, Segment};
use crate::Result;

use super::config::{self, TentacleConfig};

// ============================================================================
// 状态
// ============================================================================

/// 运行状态，只有两态，没有暂停
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TentacleState {
    #[default]
    Stopped,
    Running,
}

/// 供渲染端读取的段快照
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentView {
    pub position: Vector2,
    pub angle: f64,
    pub length: f64,
    pub thickness: f64,
}

impl From<&Segment> for SegmentView {
    fn from(seg: &Segment) -> Self {
        Self {
            position: seg.position,
            angle: seg.angle,
            length: seg.length(),
            thickness: seg.thickness(),
        }
    }
}

// ============================================================================
// 触手
// ============================================================================

/// 触手编排器
///
/// 每个实例独占自己的链条；多实例并发时各自独立。
#[derive(Clone, Debug)]
pub struct Tentacle {
    /// 构造时的配置
    config: TentacleConfig,
    /// 初始链条（重置时整体恢复）
    initial_chain: Chain,
    /// 当前链条
    chain: Chain,
    /// 求解器（容差与每帧迭代数来自配置）
    solver: FabrikSolver,
    /// 调节参数
    params: TentacleParams,
    /// 外部提供的原始目标
    target: Vector2,
    /// 调制后实际送入求解器的目标
    effective_target: Vector2,
    /// 累计模拟时间（秒）
    time: f64,
    /// 运行状态
    state: TentacleState,
}

impl Tentacle {
    /// 按配置创建触手，初始为停止状态
    pub fn new(config: TentacleConfig) -> Result<Self> {
        config.validate()?;

        let chain = Chain::generate(config.base_position, &config.geometry())?;

        log::info!(
            "[Tentacle] 触手创建: 段数={}, 总长={:.2}, 基点=({:.1}, {:.1})",
            chain.len(),
            chain.total_length(),
            config.base_position.x,
            config.base_position.y,
        );

        Ok(Self {
            solver: FabrikSolver::new(config.tolerance, config.max_iterations),
            params: config.params,
            target: config.rest_target,
            effective_target: config.rest_target,
            time: 0.0,
            state: TentacleState::Stopped,
            initial_chain: chain.clone(),
            chain,
            config,
        })
    }

    /// 使用全局配置创建
    pub fn from_global_config() -> Result<Self> {
        Self::new(config::get_config())
    }

    // ========================================
    // 状态机
    // ========================================

    /// Stopped → Running
    pub fn start(&mut self) {
        if self.state != TentacleState::Running {
            log::info!("[Tentacle] 开始运行 (time={:.3})", self.time);
            self.state = TentacleState::Running;
        }
    }

    /// Running → Stopped
    pub fn stop(&mut self) {
        if self.state != TentacleState::Stopped {
            log::info!("[Tentacle] 停止运行 (time={:.3})", self.time);
            self.state = TentacleState::Stopped;
        }
    }

    /// 重建初始链条，目标回到 rest_target，时间清零，进入停止状态
    ///
    /// 调节参数保持当前值。
    pub fn reset(&mut self) {
        self.chain = self.initial_chain.clone();
        self.target = self.config.rest_target;
        self.effective_target = self.config.rest_target;
        self.time = 0.0;
        self.state = TentacleState::Stopped;
        log::info!("[Tentacle] 重置: 段数={}", self.chain.len());
    }

    // ========================================
    // 输入
    // ========================================

    /// 设置原始目标（指针位置或点击）
    pub fn set_target(&mut self, target: Vector2) {
        self.target = target;
    }

    /// 应用参数变更，数值不做范围检查
    pub fn set_parameter(&mut self, parameter: Parameter) {
        self.params.apply(parameter);
    }

    /// 按名字设置参数
    ///
    /// 未知名字或非有限数值被忽略，返回是否生效。
    pub fn set_parameter_named(&mut self, name: &str, value: f64) -> bool {
        match Parameter::from_name(name, value) {
            Ok(parameter) => {
                self.set_parameter(parameter);
                true
            }
            Err(e) => {
                log::debug!("[Tentacle] 忽略参数: {}", e);
                false
            }
        }
    }

    // ========================================
    // 帧更新
    // ========================================

    /// 推进一帧
    pub fn tick(&mut self) {
        if self.state != TentacleState::Running {
            return;
        }

        self.time = animation::advance_time(self.time, self.config.time_step, self.params.speed);
        self.effective_target = animation::next_target(self.target, self.time, &self.params);

        let reached = self.solver.solve(&mut self.chain, self.effective_target);
        skeleton::apply_constraints(&mut self.chain, self.params.rigidness);

        if self.config.debug_log {
            log::debug!(
                "[Tentacle] tick: time={:.3}, target=({:.2}, {:.2}), reached={}",
                self.time,
                self.effective_target.x,
                self.effective_target.y,
                reached,
            );
        }
    }

    // ========================================
    // 只读访问
    // ========================================

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == TentacleState::Running
    }

    #[inline]
    pub fn state(&self) -> TentacleState {
        self.state
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn target(&self) -> Vector2 {
        self.target
    }

    #[inline]
    pub fn effective_target(&self) -> Vector2 {
        self.effective_target
    }

    #[inline]
    pub fn params(&self) -> &TentacleParams {
        &self.params
    }

    #[inline]
    pub fn config(&self) -> &TentacleConfig {
        &self.config
    }

    #[inline]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        self.chain.segments()
    }

    /// 段快照列表（自基部到末端）
    pub fn segment_views(&self) -> Vec<SegmentView> {
        self.chain.segments().iter().map(SegmentView::from).collect()
    }

    /// 末端执行器；配置保证段数 ≥ 1
    pub fn end_effector(&self) -> Vector2 {
        self.chain.end_effector().unwrap_or(self.config.base_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math;
    use crate::TentacleError;

    fn still_config() -> TentacleConfig {
        TentacleConfig {
            params: TentacleParams {
                speed: 1.0,
                curlines: 0.0,
                rigidness: 0.0,
                randomness: 0.0,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let tentacle = Tentacle::new(TentacleConfig::default()).unwrap();
        assert_eq!(tentacle.state(), TentacleState::Stopped);
        assert!(!tentacle.is_running());
        assert_eq!(tentacle.time(), 0.0);
        assert_eq!(tentacle.segments().len(), 20);
        assert_eq!(tentacle.target(), tentacle.config().rest_target);
        assert_eq!(tentacle.effective_target(), tentacle.config().rest_target);
    }

    #[test]
    fn test_tick_while_stopped_is_noop() {
        let mut tentacle = Tentacle::new(TentacleConfig::default()).unwrap();
        tentacle.set_target(Vector2::new(90.0, 120.0));
        let before = tentacle.chain().clone();
        let effective = tentacle.effective_target();

        for _ in 0..10 {
            tentacle.tick();
        }

        assert_eq!(tentacle.time(), 0.0);
        assert_eq!(tentacle.effective_target(), effective);
        assert_eq!(tentacle.chain(), &before);
    }

    #[test]
    fn test_start_stop() {
        let mut tentacle = Tentacle::new(TentacleConfig::default()).unwrap();
        tentacle.start();
        assert!(tentacle.is_running());
        tentacle.start();
        assert_eq!(tentacle.state(), TentacleState::Running);

        tentacle.tick();
        let time = tentacle.time();
        assert!(time > 0.0);

        tentacle.stop();
        assert_eq!(tentacle.state(), TentacleState::Stopped);
        let chain = tentacle.chain().clone();
        tentacle.tick();
        assert_eq!(tentacle.time(), time);
        assert_eq!(tentacle.chain(), &chain);
    }

    #[test]
    fn test_time_scaled_by_speed() {
        let mut tentacle = Tentacle::new(TentacleConfig::default()).unwrap();
        tentacle.set_parameter(Parameter::Speed(2.0));
        tentacle.start();
        for _ in 0..30 {
            tentacle.tick();
        }
        let expected = 30.0 * 2.0 / 60.0;
        assert!((tentacle.time() - expected).abs() < 1e-9);

        // speed = 0 时时间冻结
        tentacle.set_parameter(Parameter::Speed(0.0));
        tentacle.tick();
        assert!((tentacle.time() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_reaches_static_target_over_ticks() {
        let mut tentacle = Tentacle::new(still_config()).unwrap();
        let target = Vector2::new(120.0, 150.0);
        tentacle.set_target(target);
        tentacle.start();
        for _ in 0..30 {
            tentacle.tick();
        }
        assert_eq!(tentacle.effective_target(), target);
        assert!(math::distance(tentacle.end_effector(), target) <= 0.5);
    }

    #[test]
    fn test_anchor_and_lengths_hold_while_running() {
        let mut tentacle = Tentacle::new(TentacleConfig::default()).unwrap();
        tentacle.set_target(Vector2::new(-150.0, 180.0));
        tentacle.start();
        for _ in 0..120 {
            tentacle.tick();
        }

        let segs = tentacle.segments();
        assert!(math::distance(segs[0].position, tentacle.config().base_position) < 1e-9);
        for i in 0..segs.len() - 1 {
            let d = math::distance(segs[i].position, segs[i + 1].position);
            assert!((d - segs[i].length()).abs() < 1e-6);
        }
        for seg in segs {
            assert!(seg.position.is_finite() && seg.angle.is_finite());
        }
    }

    #[test]
    fn test_unreachable_target_stretches() {
        let mut tentacle = Tentacle::new(still_config()).unwrap();
        let target = Vector2::new(1000.0, 0.0);
        tentacle.set_target(target);
        tentacle.start();
        tentacle.tick();

        let tip = tentacle.end_effector();
        let reach = tentacle.chain().total_length();
        assert!((tip.x - reach).abs() < 1e-6);
        assert!(tip.y.abs() < 1e-6);
    }

    #[test]
    fn test_set_parameter_named() {
        let mut tentacle = Tentacle::new(TentacleConfig::default()).unwrap();
        assert!(tentacle.set_parameter_named("rigidness", 0.8));
        assert_eq!(tentacle.params().rigidness, 0.8);

        let before = *tentacle.params();
        assert!(!tentacle.set_parameter_named("elasticity", 1.0));
        assert!(!tentacle.set_parameter_named("speed", f64::NAN));
        assert_eq!(*tentacle.params(), before);
    }

    #[test]
    fn test_reset() {
        let mut tentacle = Tentacle::new(TentacleConfig::default()).unwrap();
        let initial = tentacle.chain().clone();
        tentacle.set_parameter(Parameter::Curlines(2.0));
        tentacle.set_target(Vector2::new(60.0, 60.0));
        tentacle.start();
        for _ in 0..20 {
            tentacle.tick();
        }
        assert_ne!(tentacle.chain(), &initial);

        tentacle.reset();
        assert_eq!(tentacle.state(), TentacleState::Stopped);
        assert_eq!(tentacle.time(), 0.0);
        assert_eq!(tentacle.chain(), &initial);
        assert_eq!(tentacle.target(), tentacle.config().rest_target);
        assert_eq!(tentacle.params().curlines, 2.0);
    }

    #[test]
    fn test_deterministic() {
        let mut a = Tentacle::new(TentacleConfig::default()).unwrap();
        let mut b = Tentacle::new(TentacleConfig::default()).unwrap();
        for t in [&mut a, &mut b] {
            t.set_target(Vector2::new(40.0, 220.0));
            t.set_parameter(Parameter::Randomness(1.5));
            t.start();
            for _ in 0..90 {
                t.tick();
            }
        }
        assert_eq!(a.chain(), b.chain());
        assert_eq!(a.effective_target(), b.effective_target());
    }

    #[test]
    fn test_segment_views() {
        let tentacle = Tentacle::new(TentacleConfig::default()).unwrap();
        let views = tentacle.segment_views();
        assert_eq!(views.len(), tentacle.segments().len());
        for (view, seg) in views.iter().zip(tentacle.segments()) {
            assert_eq!(view.position, seg.position);
            assert_eq!(view.length, seg.length());
            assert_eq!(view.thickness, seg.thickness());
        }
        let last = views.last().unwrap();
        let tip = last.position + math::from_angle(last.angle) * last.length;
        assert_eq!(tentacle.end_effector(), tip);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TentacleConfig { segment_count: 0, ..Default::default() };
        assert!(matches!(Tentacle::new(config), Err(TentacleError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_global_config() {
        let tentacle = Tentacle::from_global_config().unwrap();
        assert!(!tentacle.is_running());
        assert!(!tentacle.segments().is_empty());
    }
}
