use super::{Op, Unit};

/// 온도 척도를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
    Reaumur,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 5] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
        TemperatureScale::Rankine,
        TemperatureScale::Reaumur,
    ];

    pub fn code(&self) -> &'static str {
        self.unit().unit.code
    }

    pub fn from_code(code: &str) -> Option<Self> {
        UNITS.iter().find(|u| u.unit.code == code).map(|u| u.scale)
    }

    pub fn unit(&self) -> &'static TemperatureUnit {
        &UNITS[self.index()]
    }

    fn index(&self) -> usize {
        match self {
            TemperatureScale::Celsius => 0,
            TemperatureScale::Fahrenheit => 1,
            TemperatureScale::Kelvin => 2,
            TemperatureScale::Rankine => 3,
            TemperatureScale::Reaumur => 4,
        }
    }

    /// 온도를 다른 척도로 변환한다. 같은 척도도 변환표의 항등 항목을 거친다.
    pub fn convert(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
        from.unit().op_to(to).apply(value)
    }
}

/// 온도 단위. 기준 단위 대신 다른 모든 척도(자기 자신 포함)로 가는 변환을 직접 가진다.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureUnit {
    pub unit: Unit,
    pub scale: TemperatureScale,
    /// 목표 척도 코드 → 변환. `TemperatureScale::ALL` 순서와 같다.
    pub convert: [(&'static str, Op); 5],
}

impl TemperatureUnit {
    pub fn op_to(&self, to: TemperatureScale) -> Op {
        // convert 행은 ALL 순서로 채워져 있다
        self.convert[to.index()].1
    }

    pub fn op_to_code(&self, code: &str) -> Option<Op> {
        self.convert
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, op)| *op)
    }
}

const ABS_ZERO_C: f64 = 273.15;
const ABS_ZERO_F: f64 = 459.67;
const FREEZE_R: f64 = 491.67;

pub static UNITS: [TemperatureUnit; 5] = [
    TemperatureUnit {
        unit: Unit { code: "c", name: "Celsius", symbol: "°C" },
        scale: TemperatureScale::Celsius,
        convert: [
            ("c", Op::Identity),
            ("f", Op::Affine { scale: 9.0 / 5.0, offset: 32.0 }),
            ("k", Op::Affine { scale: 1.0, offset: ABS_ZERO_C }),
            ("r", Op::Affine { scale: 9.0 / 5.0, offset: ABS_ZERO_C * 9.0 / 5.0 }),
            ("re", Op::Scale(4.0 / 5.0)),
        ],
    },
    TemperatureUnit {
        unit: Unit { code: "f", name: "Fahrenheit", symbol: "°F" },
        scale: TemperatureScale::Fahrenheit,
        convert: [
            ("c", Op::Affine { scale: 5.0 / 9.0, offset: -32.0 * 5.0 / 9.0 }),
            ("f", Op::Identity),
            ("k", Op::Affine { scale: 5.0 / 9.0, offset: ABS_ZERO_C - 32.0 * 5.0 / 9.0 }),
            ("r", Op::Affine { scale: 1.0, offset: ABS_ZERO_F }),
            ("re", Op::Affine { scale: 4.0 / 9.0, offset: -32.0 * 4.0 / 9.0 }),
        ],
    },
    TemperatureUnit {
        unit: Unit { code: "k", name: "Kelvin", symbol: "K" },
        scale: TemperatureScale::Kelvin,
        convert: [
            ("c", Op::Affine { scale: 1.0, offset: -ABS_ZERO_C }),
            ("f", Op::Affine { scale: 9.0 / 5.0, offset: 32.0 - ABS_ZERO_C * 9.0 / 5.0 }),
            ("k", Op::Identity),
            ("r", Op::Scale(9.0 / 5.0)),
            ("re", Op::Affine { scale: 4.0 / 5.0, offset: -ABS_ZERO_C * 4.0 / 5.0 }),
        ],
    },
    TemperatureUnit {
        unit: Unit { code: "r", name: "Rankine", symbol: "°R" },
        scale: TemperatureScale::Rankine,
        convert: [
            ("c", Op::Affine { scale: 5.0 / 9.0, offset: -FREEZE_R * 5.0 / 9.0 }),
            ("f", Op::Affine { scale: 1.0, offset: -ABS_ZERO_F }),
            ("k", Op::Scale(5.0 / 9.0)),
            ("r", Op::Identity),
            ("re", Op::Affine { scale: 4.0 / 9.0, offset: -FREEZE_R * 4.0 / 9.0 }),
        ],
    },
    TemperatureUnit {
        unit: Unit { code: "re", name: "Réaumur", symbol: "°Ré" },
        scale: TemperatureScale::Reaumur,
        convert: [
            ("c", Op::Scale(5.0 / 4.0)),
            ("f", Op::Affine { scale: 9.0 / 4.0, offset: 32.0 }),
            ("k", Op::Affine { scale: 5.0 / 4.0, offset: ABS_ZERO_C }),
            ("r", Op::Affine { scale: 9.0 / 4.0, offset: FREEZE_R }),
            ("re", Op::Identity),
        ],
    },
];

/// 척도 이름과 기호로도 찾을 수 있게 한다.
pub static ALIASES: &[super::Alias] = &[
    ("celsius", "c"),
    ("°C", "c"),
    ("C", "c"),
    ("fahrenheit", "f"),
    ("°F", "f"),
    ("F", "f"),
    ("kelvin", "k"),
    ("K", "k"),
    ("rankine", "r"),
    ("°R", "r"),
    ("R", "r"),
    ("reaumur", "re"),
    ("réaumur", "re"),
    ("°Ré", "re"),
];
