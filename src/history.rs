//! 카테고리별 변환 기록(히스토리)과 즐겨찾기.
//!
//! 두 목록 모두 최신 항목이 앞에 오고, 용량을 넘으면 가장 오래된 항목부터 버린다.
//! 영속화는 `KeyValueStore` 뒤에 숨기며 JSON 문자열 하나를 키 하나에 저장한다.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;

/// 즐겨찾기 기본 용량
pub const FAVORITES_CAPACITY: usize = 10;
/// 히스토리 기본 용량
pub const HISTORY_CAPACITY: usize = 50;

/// 저장소 키
pub const HISTORY_KEY: &str = "history";
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("저장소 입출력 오류: {0}")]
    Io(#[from] io::Error),
    #[error("기록 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 변환 한 건
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub from_value: f64,
    pub from_unit: String,
    pub to_value: f64,
    pub to_unit: String,
    /// UNIX epoch 기준 밀리초
    pub timestamp_ms: u64,
}

impl ConversionRecord {
    /// 현재 시각으로 기록을 만든다.
    pub fn new(
        from_value: f64,
        from_unit: impl Into<String>,
        to_value: f64,
        to_unit: impl Into<String>,
    ) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            from_value,
            from_unit: from_unit.into(),
            to_value,
            to_unit: to_unit.into(),
            timestamp_ms,
        }
    }

    fn same_pair(&self, other: &ConversionRecord) -> bool {
        self.from_unit == other.from_unit && self.to_unit == other.to_unit
    }
}

/// 용량 제한이 있는 카테고리별 기록 목록
#[derive(Debug, Clone, PartialEq)]
pub struct RecordLog {
    capacity: usize,
    entries: BTreeMap<Category, VecDeque<ConversionRecord>>,
}

impl RecordLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: BTreeMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 최신순 목록
    pub fn get(&self, category: Category) -> Vec<&ConversionRecord> {
        self.entries
            .get(&category)
            .map(|list| list.iter().collect())
            .unwrap_or_default()
    }

    /// 맨 앞에 추가하고 용량을 넘는 오래된 항목을 버린다.
    pub fn push(&mut self, category: Category, record: ConversionRecord) {
        let list = self.entries.entry(category).or_default();
        list.push_front(record);
        list.truncate(self.capacity);
    }

    /// 같은 (from, to) 단위 쌍이 이미 있으면 추가하지 않고 `false`를 돌려준다.
    pub fn push_unique(&mut self, category: Category, record: ConversionRecord) -> bool {
        let exists = self
            .entries
            .get(&category)
            .is_some_and(|list| list.iter().any(|r| r.same_pair(&record)));
        if exists {
            return false;
        }
        self.push(category, record);
        true
    }

    pub fn clear(&mut self, category: Category) {
        self.entries.remove(&category);
    }

    /// 저장소에서 읽는다. 값이 없으면 빈 목록, 깨진 값은 경고 후 빈 목록.
    pub fn load(
        store: &dyn KeyValueStore,
        key: &str,
        capacity: usize,
    ) -> Result<Self, StoreError> {
        let mut log = RecordLog::new(capacity);
        let Some(payload) = store.get(key)? else {
            return Ok(log);
        };
        match serde_json::from_str::<BTreeMap<Category, VecDeque<ConversionRecord>>>(&payload) {
            Ok(mut entries) => {
                for list in entries.values_mut() {
                    list.truncate(capacity);
                }
                entries.retain(|_, list| !list.is_empty());
                log.entries = entries;
            }
            Err(err) => {
                tracing::warn!(key, %err, "discarding corrupt record log");
            }
        }
        Ok(log)
    }

    pub fn save(&self, store: &mut dyn KeyValueStore, key: &str) -> Result<(), StoreError> {
        let payload = serde_json::to_string(&self.entries)?;
        store.set(key, &payload)
    }
}

/// 문자열 키-값 저장소
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// 프로세스 메모리에만 두는 저장소
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 디렉터리 안에 키마다 `<key>.json` 파일을 두는 저장소
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
