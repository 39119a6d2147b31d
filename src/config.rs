use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::category::Category;
use crate::conversion::ConversionError;
use crate::history::{FAVORITES_CAPACITY, HISTORY_CAPACITY};
use crate::registry;

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
/// 기록 저장 디렉터리 기본값
pub const DEFAULT_DATA_DIR: &str = "data";

/// 변환 방향(입력 단위 → 결과 단위) 한 쌍
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPair {
    pub from: String,
    pub to: String,
}

impl UnitPair {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// 각 카테고리별 기본 단위 쌍을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub length: UnitPair,
    pub area: UnitPair,
    pub volume: UnitPair,
    pub weight: UnitPair,
    pub digital_storage: UnitPair,
    pub digital_transfer: UnitPair,
    pub density: UnitPair,
    pub temperature: UnitPair,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            length: UnitPair::new("m", "ft"),
            area: UnitPair::new("m2", "ft2"),
            volume: UnitPair::new("l", "gal_us"),
            weight: UnitPair::new("kg", "lb"),
            digital_storage: UnitPair::new("mb", "kb"),
            digital_transfer: UnitPair::new("mbps", "kbps"),
            density: UnitPair::new("kg_m3", "g_cm3"),
            temperature: UnitPair::new("c", "f"),
        }
    }
}

impl DefaultUnits {
    pub fn pair(&self, category: Category) -> &UnitPair {
        match category {
            Category::Length => &self.length,
            Category::Area => &self.area,
            Category::Volume => &self.volume,
            Category::Weight => &self.weight,
            Category::DigitalStorage => &self.digital_storage,
            Category::DigitalTransfer => &self.digital_transfer,
            Category::Density => &self.density,
            Category::Temperature => &self.temperature,
        }
    }

    /// 설정된 모든 코드가 레지스트리에 있는지 확인한다.
    pub fn validate(&self) -> Result<(), ConversionError> {
        for category in Category::ALL {
            let pair = self.pair(category);
            registry::lookup(category, &pair.from)?;
            registry::lookup(category, &pair.to)?;
        }
        Ok(())
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어 (ko, en-us ...). 없으면 시스템 로케일을 따른다.
    pub language: Option<String>,
    /// 히스토리/즐겨찾기 저장 위치
    pub data_dir: Option<PathBuf>,
    pub history_capacity: usize,
    pub favorites_capacity: usize,
    /// false면 변환 기록을 남기지 않는다.
    pub record_history: bool,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            data_dir: None,
            history_capacity: HISTORY_CAPACITY,
            favorites_capacity: FAVORITES_CAPACITY,
            record_history: true,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::debug!(path = %path.display(), "wrote default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// 기록 저장 디렉터리. 설정이 없으면 `data/`.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }
}
