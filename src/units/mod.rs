//! 단위 정의 및 변환 테이블 모음.
//!
//! 선형 카테고리는 기준 단위로 보내는 `to_base`/`from_base` 한 쌍만 가지므로
//! 단위 n개에 대해 변환 함수도 n쌍이면 된다. 온도는 쌍별 행렬을 쓴다.

pub mod area;
pub mod density;
pub mod digital;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod volume;

pub use temperature::{TemperatureScale, TemperatureUnit};

/// 단위의 표시 정보. 카테고리 안에서 `code`는 유일하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

/// 변환 함수를 표현하는 산술 연산 종류. 하나의 평가기(`apply`)로 해석한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Identity,
    /// x * k
    Scale(f64),
    /// x / k
    Divide(f64),
    /// scale * x + offset
    Affine { scale: f64, offset: f64 },
}

impl Op {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Op::Identity => value,
            Op::Scale(k) => value * k,
            Op::Divide(k) => value / k,
            Op::Affine { scale, offset } => scale * value + offset,
        }
    }

    /// 대수적 역연산. 검증용으로 쓴다.
    pub fn inverse(self) -> Op {
        match self {
            Op::Identity => Op::Identity,
            Op::Scale(k) => Op::Divide(k),
            Op::Divide(k) => Op::Scale(k),
            Op::Affine { scale, offset } => Op::Affine {
                scale: 1.0 / scale,
                offset: -offset / scale,
            },
        }
    }

    /// `scale * x + offset` 형태의 계수. 모든 연산은 아핀이다.
    pub fn coefficients(self) -> (f64, f64) {
        match self {
            Op::Identity => (1.0, 0.0),
            Op::Scale(k) => (k, 0.0),
            Op::Divide(k) => (1.0 / k, 0.0),
            Op::Affine { scale, offset } => (scale, offset),
        }
    }
}

/// 기준 단위를 거쳐 변환되는 단위.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearUnit {
    pub unit: Unit,
    pub to_base: Op,
    pub from_base: Op,
}

impl LinearUnit {
    /// 카테고리의 기준 단위.
    pub const fn base(code: &'static str, name: &'static str, symbol: &'static str) -> Self {
        Self {
            unit: Unit { code, name, symbol },
            to_base: Op::Identity,
            from_base: Op::Identity,
        }
    }

    /// 1 단위 = `factor` 기준 단위.
    pub const fn scaled(
        code: &'static str,
        name: &'static str,
        symbol: &'static str,
        factor: f64,
    ) -> Self {
        Self {
            unit: Unit { code, name, symbol },
            to_base: Op::Scale(factor),
            from_base: Op::Divide(factor),
        }
    }

    /// 1 기준 단위 = `divisor` 단위.
    pub const fn divided(
        code: &'static str,
        name: &'static str,
        symbol: &'static str,
        divisor: f64,
    ) -> Self {
        Self {
            unit: Unit { code, name, symbol },
            to_base: Op::Divide(divisor),
            from_base: Op::Scale(divisor),
        }
    }

    pub fn to_base(&self, value: f64) -> f64 {
        self.to_base.apply(value)
    }

    pub fn from_base(&self, value: f64) -> f64 {
        self.from_base.apply(value)
    }
}

/// UI 표시용 단위 묶음. 변환 의미는 없다.
#[derive(Debug, Clone, Copy)]
pub struct UnitGroup {
    pub name: &'static str,
    pub units: &'static [LinearUnit],
}

/// 별칭 코드 → 정규 코드.
pub type Alias = (&'static str, &'static str);
