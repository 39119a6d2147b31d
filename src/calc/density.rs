//! 밀도·질량·부피 삼각 관계 계산 모듈.
//!
//! 기본 함수(`density`, `mass`, `volume`)는 단위 없는 수치만 다루며, 분모가 0이면
//! 오류 대신 0을 돌려준다. `solve`는 단위 코드를 받아 kg, m³, kg/m³로 맞춘 뒤 계산한다.

use crate::category::Category;
use crate::conversion::{self, ConversionError};
use crate::format::format_number;
use crate::registry;

/// 질량 계산에 쓰는 기준 단위
const MASS_BASE: &str = "kg";
/// 부피 계산에 쓰는 기준 단위
const VOLUME_BASE: &str = "m3";
/// 밀도 계산에 쓰는 기준 단위
const DENSITY_BASE: &str = "kg_m3";

/// 밀도 = 질량 / 부피. 부피가 0이면 0.
pub fn density(mass: f64, volume: f64) -> f64 {
    if volume == 0.0 {
        return 0.0;
    }
    mass / volume
}

/// 질량 = 밀도 × 부피
pub fn mass(density: f64, volume: f64) -> f64 {
    density * volume
}

/// 부피 = 질량 / 밀도. 밀도가 0이면 0.
pub fn volume(mass: f64, density: f64) -> f64 {
    if density == 0.0 {
        return 0.0;
    }
    mass / density
}

/// 단위가 붙은 값
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub value: f64,
    pub unit: String,
}

impl Measure {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// 구하려는 양과 나머지 두 값을 담는다. `unit`은 결과 단위 코드.
#[derive(Debug, Clone, PartialEq)]
pub enum DensityQuery {
    /// 질량(Weight 단위)과 부피(Volume 단위)로 밀도를 구한다.
    Density {
        mass: Measure,
        volume: Measure,
        unit: String,
    },
    /// 밀도와 부피로 질량을 구한다.
    Mass {
        density: Measure,
        volume: Measure,
        unit: String,
    },
    /// 질량과 밀도로 부피를 구한다.
    Volume {
        mass: Measure,
        density: Measure,
        unit: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DensitySolution {
    /// 요청한 단위로 표현한 결과
    pub value: f64,
    pub unit: String,
    /// `Density = Mass / Volume = 1 kg / 0.001 m³ = 1000 kg/m³` 형태의 풀이식
    pub equation: String,
}

/// 단위가 붙은 두 값으로 나머지 하나를 구한다.
///
/// - 등록되지 않은 단위 코드는 `Err(UnknownUnit)`.
/// - 입력이 유한하지 않으면 `Ok(None)`.
pub fn solve(query: &DensityQuery) -> Result<Option<DensitySolution>, ConversionError> {
    match query {
        DensityQuery::Density { mass: m, volume: v, unit } => {
            let Some(kg) = to_base(Category::Weight, m, MASS_BASE)? else {
                return Ok(None);
            };
            let Some(m3) = to_base(Category::Volume, v, VOLUME_BASE)? else {
                return Ok(None);
            };
            let Some(value) = from_base(Category::Density, density(kg, m3), unit)? else {
                return Ok(None);
            };
            let equation = format!(
                "Density = Mass / Volume = {} / {} = {}",
                render(Category::Weight, m),
                render(Category::Volume, v),
                render_result(Category::Density, value, unit),
            );
            Ok(Some(solution(value, unit, equation)))
        }
        DensityQuery::Mass { density: d, volume: v, unit } => {
            let Some(kg_m3) = to_base(Category::Density, d, DENSITY_BASE)? else {
                return Ok(None);
            };
            let Some(m3) = to_base(Category::Volume, v, VOLUME_BASE)? else {
                return Ok(None);
            };
            let Some(value) = from_base(Category::Weight, mass(kg_m3, m3), unit)? else {
                return Ok(None);
            };
            let equation = format!(
                "Mass = Density × Volume = {} × {} = {}",
                render(Category::Density, d),
                render(Category::Volume, v),
                render_result(Category::Weight, value, unit),
            );
            Ok(Some(solution(value, unit, equation)))
        }
        DensityQuery::Volume { mass: m, density: d, unit } => {
            let Some(kg) = to_base(Category::Weight, m, MASS_BASE)? else {
                return Ok(None);
            };
            let Some(kg_m3) = to_base(Category::Density, d, DENSITY_BASE)? else {
                return Ok(None);
            };
            let Some(value) = from_base(Category::Volume, volume(kg, kg_m3), unit)? else {
                return Ok(None);
            };
            let equation = format!(
                "Volume = Mass / Density = {} / {} = {}",
                render(Category::Weight, m),
                render(Category::Density, d),
                render_result(Category::Volume, value, unit),
            );
            Ok(Some(solution(value, unit, equation)))
        }
    }
}

fn to_base(
    category: Category,
    measure: &Measure,
    base: &str,
) -> Result<Option<f64>, ConversionError> {
    conversion::convert(category, measure.value, &measure.unit, base)
}

fn from_base(category: Category, value: f64, unit: &str) -> Result<Option<f64>, ConversionError> {
    let base = match category {
        Category::Weight => MASS_BASE,
        Category::Volume => VOLUME_BASE,
        _ => DENSITY_BASE,
    };
    conversion::convert(category, value, base, unit)
}

fn render(category: Category, measure: &Measure) -> String {
    format!(
        "{} {}",
        measure.value,
        registry::unit_symbol(category, &measure.unit)
    )
}

fn render_result(category: Category, value: f64, unit: &str) -> String {
    format!(
        "{} {}",
        format_number(value, category),
        registry::unit_symbol(category, unit)
    )
}

fn solution(value: f64, unit: &str, equation: String) -> DensitySolution {
    tracing::debug!(value, unit, %equation, "solved density triangle");
    DensitySolution {
        value,
        unit: unit.to_string(),
        equation,
    }
}
