//! 触手调节参数

use crate::{Result, TentacleError};

/// 控件滑条范围，核心本身不强制
pub const UI_RANGE: (f64, f64) = (0.0, 3.0);

/// 四个独立的连续参数
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TentacleParams {
    /// 模拟时间推进倍率（非速度）
    pub speed: f64,
    /// 横向周期偏移幅度
    pub curlines: f64,
    /// 刚性，概念上取 [0, 1]，超过 1 不再收紧
    pub rigidness: f64,
    /// 确定性伪噪声幅度
    pub randomness: f64,
}

impl Default for TentacleParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            curlines: 1.0,
            rigidness: 0.5,
            randomness: 0.5,
        }
    }
}

impl TentacleParams {
    /// 应用一次参数变更
    pub fn apply(&mut self, parameter: Parameter) {
        match parameter {
            Parameter::Speed(v) => self.speed = v,
            Parameter::Curlines(v) => self.curlines = v,
            Parameter::Rigidness(v) => self.rigidness = v,
            Parameter::Randomness(v) => self.randomness = v,
        }
    }
}

/// 参数变更（带数值负载）
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Parameter {
    Speed(f64),
    Curlines(f64),
    Rigidness(f64),
    Randomness(f64),
}

impl Parameter {
    /// 从名字解析，名字不区分大小写
    ///
    /// 未知名字或非有限数值返回错误，由调用方决定是否忽略。
    pub fn from_name(name: &str, value: f64) -> Result<Self> {
        let parameter = match name.trim().to_ascii_lowercase().as_str() {
            "speed" => Parameter::Speed(value),
            "curlines" => Parameter::Curlines(value),
            "rigidness" => Parameter::Rigidness(value),
            "randomness" => Parameter::Randomness(value),
            _ => return Err(TentacleError::UnknownParameter(name.to_string())),
        };

        if !value.is_finite() {
            return Err(TentacleError::InvalidParameterValue {
                name: parameter.name(),
                value,
            });
        }

        Ok(parameter)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Speed(_) => "speed",
            Parameter::Curlines(_) => "curlines",
            Parameter::Rigidness(_) => "rigidness",
            Parameter::Randomness(_) => "randomness",
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Parameter::Speed(v)
            | Parameter::Curlines(v)
            | Parameter::Rigidness(v)
            | Parameter::Randomness(v) => v,
        }
    }

    /// 限制到滑条范围（供输入端使用）
    pub fn clamped_to_ui_range(self) -> Self {
        let (min, max) = UI_RANGE;
        let v = self.value().max(min).min(max);
        match self {
            Parameter::Speed(_) => Parameter::Speed(v),
            Parameter::Curlines(_) => Parameter::Curlines(v),
            Parameter::Rigidness(_) => Parameter::Rigidness(v),
            Parameter::Randomness(_) => Parameter::Randomness(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Parameter::from_name("speed", 2.0).unwrap(), Parameter::Speed(2.0));
        assert_eq!(Parameter::from_name("Curlines", 0.5).unwrap(), Parameter::Curlines(0.5));
        assert_eq!(Parameter::from_name(" rigidness ", 1.0).unwrap(), Parameter::Rigidness(1.0));
        assert_eq!(Parameter::from_name("randomness", 0.0).unwrap(), Parameter::Randomness(0.0));
    }

    #[test]
    fn test_unknown_name() {
        match Parameter::from_name("gravity", 1.0) {
            Err(TentacleError::UnknownParameter(name)) => assert_eq!(name, "gravity"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_value() {
        assert!(matches!(
            Parameter::from_name("speed", f64::NAN),
            Err(TentacleError::InvalidParameterValue { name: "speed", .. })
        ));
        assert!(Parameter::from_name("curlines", f64::INFINITY).is_err());
    }

    #[test]
    fn test_apply() {
        let mut params = TentacleParams::default();
        params.apply(Parameter::Rigidness(0.9));
        params.apply(Parameter::Speed(2.5));
        assert_eq!(params.rigidness, 0.9);
        assert_eq!(params.speed, 2.5);
        assert_eq!(params.curlines, 1.0);
    }

    #[test]
    fn test_clamped_to_ui_range() {
        assert_eq!(Parameter::Speed(7.0).clamped_to_ui_range(), Parameter::Speed(3.0));
        assert_eq!(Parameter::Randomness(-1.0).clamped_to_ui_range(), Parameter::Randomness(0.0));
        assert_eq!(Parameter::Curlines(1.2).clamped_to_ui_range(), Parameter::Curlines(1.2));
    }
}
