use super::{Alias, LinearUnit, UnitGroup};

/// 체적 단위. 내부 기준은 리터이다.
pub static GROUPS: &[UnitGroup] = &[
    UnitGroup {
        name: "Metric",
        units: &[
            LinearUnit::base("l", "Liter", "L"),
            LinearUnit::divided("ml", "Milliliter", "mL", 1000.0),
            LinearUnit::divided("cl", "Centiliter", "cL", 100.0),
            LinearUnit::divided("dl", "Deciliter", "dL", 10.0),
            LinearUnit::scaled("m3", "Cubic Meter", "m³", 1000.0),
            LinearUnit::divided("cm3", "Cubic Centimeter", "cm³", 1000.0),
            LinearUnit::divided("mm3", "Cubic Millimeter", "mm³", 1_000_000.0),
        ],
    },
    UnitGroup {
        name: "US Customary",
        units: &[
            LinearUnit::scaled("gal_us", "US Gallon", "gal (US)", 3.78541),
            LinearUnit::scaled("qt_us", "US Quart", "qt (US)", 0.946353),
            LinearUnit::scaled("pt_us", "US Pint", "pt (US)", 0.473176),
            LinearUnit::scaled("cup_us", "US Cup", "cup (US)", 0.236588),
            LinearUnit::scaled("fl_oz_us", "US Fluid Ounce", "fl oz (US)", 0.0295735),
            LinearUnit::scaled("tbsp_us", "US Tablespoon", "tbsp (US)", 0.0147868),
            LinearUnit::scaled("tsp_us", "US Teaspoon", "tsp (US)", 0.00492892),
            LinearUnit::scaled("ft3", "Cubic Foot", "ft³", 28.3168),
            LinearUnit::scaled("in3", "Cubic Inch", "in³", 0.0163871),
        ],
    },
    UnitGroup {
        name: "Imperial",
        units: &[LinearUnit::scaled("gal_uk", "UK Gallon", "gal (UK)", 4.54609)],
    },
];

// KonverterProff 에서 쓰던 짧은 코드
pub static ALIASES: &[Alias] = &[
    ("gal", "gal_us"),
    ("qt", "qt_us"),
    ("pt", "pt_us"),
    ("cup", "cup_us"),
    ("oz", "fl_oz_us"),
    ("fl_oz", "fl_oz_us"),
    ("tbsp", "tbsp_us"),
    ("tsp", "tsp_us"),
];
