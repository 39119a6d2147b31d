use super::{Alias, LinearUnit, UnitGroup};

/// 면적 단위. 내부 기준은 제곱미터이다.
pub static GROUPS: &[UnitGroup] = &[UnitGroup {
    name: "Area",
    units: &[
        LinearUnit::base("m2", "Square Meter", "m²"),
        LinearUnit::scaled("km2", "Square Kilometer", "km²", 1_000_000.0),
        LinearUnit::divided("cm2", "Square Centimeter", "cm²", 10_000.0),
        LinearUnit::divided("mm2", "Square Millimeter", "mm²", 1_000_000.0),
        LinearUnit::scaled("ha", "Hectare", "ha", 10_000.0),
        LinearUnit::scaled("acre", "Acre", "acre", 4046.8564224),
        LinearUnit::scaled("mi2", "Square Mile", "mi²", 2_589_988.110336),
        LinearUnit::scaled("yd2", "Square Yard", "yd²", 0.83612736),
        LinearUnit::scaled("ft2", "Square Foot", "ft²", 0.09290304),
        LinearUnit::scaled("in2", "Square Inch", "in²", 0.00064516),
    ],
}];

pub static ALIASES: &[Alias] = &[("sqm", "m2"), ("sqft", "ft2")];
