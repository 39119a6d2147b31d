//! 자주 쓰는 물질의 대표 밀도 테이블을 제공한다.
//! 값은 상온·대기압 기준 참고치이며 온도와 조성에 따라 달라진다.

use crate::category::Category;
use crate::conversion::{self, ConversionError};

#[derive(Debug)]
pub struct MaterialData {
    pub code: &'static str,
    pub name: &'static str,
    /// kg/m³
    pub density_kg_m3: f64,
}

impl MaterialData {
    /// 밀도를 다른 밀도 단위로 표현한다.
    pub fn density_in(&self, unit: &str) -> Result<Option<f64>, ConversionError> {
        conversion::convert(Category::Density, self.density_kg_m3, "kg_m3", unit)
    }
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

/// 코드 또는 이름으로 찾는다. 대소문자는 구분하지 않는다.
pub fn find_material(name: &str) -> Option<&'static MaterialData> {
    let name = name.trim();
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(name) || m.name.eq_ignore_ascii_case(name))
}

const MATERIALS: &[MaterialData] = &[
    md("water", "Water (4°C)", 1000.0),
    md("ice", "Ice", 917.0),
    md("air", "Air (sea level)", 1.225),
    md("aluminum", "Aluminum", 2700.0),
    md("iron", "Iron", 7870.0),
    md("steel", "Steel", 7850.0),
    md("copper", "Copper", 8960.0),
    md("gold", "Gold", 19300.0),
    md("lead", "Lead", 11340.0),
    md("mercury", "Mercury", 13590.0),
    md("silver", "Silver", 10490.0),
    md("titanium", "Titanium", 4500.0),
    md("concrete", "Concrete", 2400.0),
    md("oak", "Wood (Oak)", 750.0),
    md("pine", "Wood (Pine)", 530.0),
    md("brick", "Brick", 1800.0),
    md("gasoline", "Gasoline", 750.0),
    md("milk", "Milk", 1030.0),
    md("seawater", "Seawater", 1025.0),
    md("ethanol", "Ethanol", 789.0),
];

const fn md(code: &'static str, name: &'static str, density_kg_m3: f64) -> MaterialData {
    MaterialData {
        code,
        name,
        density_kg_m3,
    }
}
