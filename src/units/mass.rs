use super::{Alias, LinearUnit, UnitGroup};

/// 질량(무게) 단위. 내부 기준은 킬로그램이다.
pub static GROUPS: &[UnitGroup] = &[
    UnitGroup {
        name: "Metric",
        units: &[
            LinearUnit::base("kg", "Kilogram", "kg"),
            LinearUnit::divided("g", "Gram", "g", 1000.0),
            LinearUnit::divided("mg", "Milligram", "mg", 1_000_000.0),
            LinearUnit::scaled("ton", "Metric Ton", "t", 1000.0),
            LinearUnit::scaled("ct", "Carat", "ct", 0.0002),
        ],
    },
    UnitGroup {
        name: "Imperial/US",
        units: &[
            LinearUnit::scaled("lb", "Pound", "lb", 0.45359237),
            LinearUnit::scaled("oz", "Ounce", "oz", 0.0283495231),
            LinearUnit::scaled("st", "Stone", "st", 6.35029318),
            LinearUnit::scaled("ton_us", "US Ton", "short ton", 907.18474),
            LinearUnit::scaled("ton_uk", "UK Ton", "long ton", 1016.0469088),
            LinearUnit::scaled("gr", "Grain", "gr", 0.0000647989),
        ],
    },
];

pub static ALIASES: &[Alias] = &[
    ("stone", "st"),
    ("ton_metric", "ton"),
    ("t", "ton"),
    ("uston", "ton_us"),
    ("ukton", "ton_uk"),
    ("lbs", "lb"),
];
