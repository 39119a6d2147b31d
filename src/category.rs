use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::conversion::ConversionError;

/// 변환기가 다루는 단위 카테고리. 카테고리 목록의 유일한 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Length,
    Area,
    Volume,
    Weight,
    DigitalStorage,
    DigitalTransfer,
    Density,
    Temperature,
}

impl Category {
    /// 선언 순서대로 나열한 전체 카테고리.
    pub const ALL: [Category; 8] = [
        Category::Length,
        Category::Area,
        Category::Volume,
        Category::Weight,
        Category::DigitalStorage,
        Category::DigitalTransfer,
        Category::Density,
        Category::Temperature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Area => "area",
            Category::Volume => "volume",
            Category::Weight => "weight",
            Category::DigitalStorage => "digital-storage",
            Category::DigitalTransfer => "digital-transfer",
            Category::Density => "density",
            Category::Temperature => "temperature",
        }
    }

    /// 카테고리의 기준 단위 코드. 온도는 쌍별 변환표를 쓰므로 기준 단위가 없다.
    pub fn base_unit(&self) -> Option<&'static str> {
        match self {
            Category::Length => Some("m"),
            Category::Area => Some("m2"),
            Category::Volume => Some("l"),
            Category::Weight => Some("kg"),
            Category::DigitalStorage => Some("b"),
            Category::DigitalTransfer => Some("bps"),
            Category::Density => Some("kg_m3"),
            Category::Temperature => None,
        }
    }

    /// 기준 단위를 거치는 선형 변환 카테고리인지 여부.
    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "length" => Ok(Category::Length),
            "area" => Ok(Category::Area),
            "volume" => Ok(Category::Volume),
            "weight" | "mass" => Ok(Category::Weight),
            "digital-storage" | "data-storage" | "storage" => Ok(Category::DigitalStorage),
            "digital-transfer" | "data-transfer" | "transfer" => Ok(Category::DigitalTransfer),
            "density" => Ok(Category::Density),
            "temperature" | "temp" => Ok(Category::Temperature),
            _ => Err(ConversionError::UnknownCategory(s.to_string())),
        }
    }
}
