use super::{Alias, LinearUnit, UnitGroup};

/// 밀도 단위. 내부 기준은 kg/m³ 이다.
/// SG(비중)는 4°C 물(1000 kg/m³) 기준으로 환산한다.
pub static GROUPS: &[UnitGroup] = &[UnitGroup {
    name: "Density",
    units: &[
        LinearUnit::base("kg_m3", "Kilogram per Cubic Meter", "kg/m³"),
        LinearUnit::scaled("g_cm3", "Gram per Cubic Centimeter", "g/cm³", 1000.0),
        LinearUnit::scaled("g_ml", "Gram per Milliliter", "g/mL", 1000.0),
        LinearUnit::base("g_l", "Gram per Liter", "g/L"),
        LinearUnit::scaled("kg_l", "Kilogram per Liter", "kg/L", 1000.0),
        LinearUnit::scaled("lb_ft3", "Pound per Cubic Foot", "lb/ft³", 16.0185),
        LinearUnit::scaled("lb_in3", "Pound per Cubic Inch", "lb/in³", 27679.9),
        LinearUnit::scaled("lb_gal_us", "Pound per US Gallon", "lb/gal", 119.826),
        LinearUnit::scaled("oz_in3", "Ounce per Cubic Inch", "oz/in³", 1729.99),
        LinearUnit::scaled("oz_gal_us", "Ounce per US Gallon", "oz/gal", 7.48915),
        LinearUnit::scaled("sg", "Specific Gravity (Relative to Water)", "SG", 1000.0),
    ],
}];

pub static ALIASES: &[Alias] = &[];
