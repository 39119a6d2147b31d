use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::calc::mixture::Ingredient;
use crate::category::Category;
use crate::config::{self, Config};
use crate::conversion::{self, ConversionError};
use crate::format::format_number;
use crate::formula;
use crate::history::{
    ConversionRecord, JsonFileStore, KeyValueStore, RecordLog, StoreError, FAVORITES_KEY,
    HISTORY_KEY,
};
use crate::i18n::{self, Translator};
use crate::registry;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 기록 저장소 오류
    #[error("기록 저장 오류: {0}")]
    Store(#[from] StoreError),
    /// 명령줄/대화형 입력 형식 오류
    #[error("입력 오류: {0}")]
    InvalidInput(String),
    /// 대화형 입력이 끝났다(EOF).
    #[error("입력이 끝났습니다")]
    EndOfInput,
}

/// 변환 한 건의 결과와 표시 문자열
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub category: Category,
    pub from_value: f64,
    pub from_unit: String,
    pub to_value: f64,
    pub to_unit: String,
    /// `1 m = 3.2808 ft` 형태의 한 줄
    pub line: String,
    pub formula: String,
    pub symbolic: Option<String>,
}

impl ConversionOutcome {
    pub fn formatted_result(&self) -> String {
        format_number(self.to_value, self.category)
    }

    fn to_record(&self) -> ConversionRecord {
        ConversionRecord::new(
            self.from_value,
            self.from_unit.clone(),
            self.to_value,
            self.to_unit.clone(),
        )
    }
}

/// 설정, 기록 저장소, 히스토리/즐겨찾기를 묶은 실행 상태
pub struct Session {
    pub config: Config,
    config_path: Option<PathBuf>,
    store: Box<dyn KeyValueStore>,
    history: RecordLog,
    favorites: RecordLog,
}

impl Session {
    /// 설정 파일을 읽고(없으면 생성) 설정된 데이터 디렉터리의 기록을 연다.
    pub fn open(config_path: &Path) -> Result<Self, AppError> {
        let config = config::load_or_default(config_path)?;
        Self::from_config(config, config_path)
    }

    /// 이미 읽은 설정으로 세션을 연다.
    pub fn from_config(config: Config, config_path: &Path) -> Result<Self, AppError> {
        let store = JsonFileStore::new(config.data_dir());
        let mut session = Self::with_store(config, Box::new(store))?;
        session.config_path = Some(config_path.to_path_buf());
        Ok(session)
    }

    /// 임의의 저장소로 세션을 연다. 설정 파일에는 저장하지 않는다.
    pub fn with_store(config: Config, store: Box<dyn KeyValueStore>) -> Result<Self, AppError> {
        config.default_units.validate()?;
        let history = RecordLog::load(&*store, HISTORY_KEY, config.history_capacity)?;
        let favorites = RecordLog::load(&*store, FAVORITES_KEY, config.favorites_capacity)?;
        Ok(Self {
            config,
            config_path: None,
            store,
            history,
            favorites,
        })
    }

    pub fn history(&self) -> &RecordLog {
        &self.history
    }

    pub fn favorites(&self) -> &RecordLog {
        &self.favorites
    }

    /// 값을 변환하고 표시 문자열을 만든다. 결과가 없으면 `Ok(None)`.
    pub fn convert(
        &self,
        category: Category,
        raw_value: &str,
        from: &str,
        to: &str,
    ) -> Result<Option<ConversionOutcome>, AppError> {
        let Some(from_value) = conversion::parse_value(raw_value) else {
            // 단위 코드는 입력값보다 먼저 검증한다
            registry::lookup(category, from)?;
            registry::lookup(category, to)?;
            return Ok(None);
        };
        let Some(to_value) = conversion::convert(category, from_value, from, to)? else {
            return Ok(None);
        };
        let line = formula::describe(category, from_value, from, to)?.unwrap_or_default();
        let formula = formula::get_formula(category, from, to)?;
        let symbolic = formula::symbolic_formula(category, from, to);
        Ok(Some(ConversionOutcome {
            category,
            from_value,
            from_unit: canonical(category, from),
            to_value,
            to_unit: canonical(category, to),
            line,
            formula,
            symbolic,
        }))
    }

    /// 설정에서 기록을 켠 경우에만 히스토리에 남긴다.
    pub fn record(&mut self, outcome: &ConversionOutcome) -> Result<(), AppError> {
        if !self.config.record_history {
            return Ok(());
        }
        self.history.push(outcome.category, outcome.to_record());
        self.history.save(&mut *self.store, HISTORY_KEY)?;
        Ok(())
    }

    /// 즐겨찾기에 추가한다. 같은 단위 쌍이 있으면 `false`.
    pub fn add_favorite(&mut self, outcome: &ConversionOutcome) -> Result<bool, AppError> {
        let added = self.favorites.push_unique(outcome.category, outcome.to_record());
        if added {
            self.favorites.save(&mut *self.store, FAVORITES_KEY)?;
        }
        Ok(added)
    }

    pub fn clear_history(&mut self, category: Category) -> Result<(), AppError> {
        self.history.clear(category);
        self.history.save(&mut *self.store, HISTORY_KEY)?;
        Ok(())
    }

    /// 설정 파일 경로가 있으면 저장한다.
    pub fn save_config(&self) -> Result<(), AppError> {
        if let Some(path) = &self.config_path {
            self.config.save(path)?;
        }
        Ok(())
    }
}

fn canonical(category: Category, code: &str) -> String {
    registry::canonical_code(category, code)
        .unwrap_or(code)
        .to_string()
}

/// `name=value` 형식의 배합 재료를 해석한다.
pub fn parse_ingredient(raw: &str) -> Result<Ingredient, AppError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| AppError::InvalidInput(format!("name=value 형식이 아닙니다: {raw}")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput(format!("재료 이름이 비었습니다: {raw}")));
    }
    let value = conversion::parse_value(value)
        .ok_or_else(|| AppError::InvalidInput(format!("비율이 숫자가 아닙니다: {raw}")))?;
    Ok(Ingredient::new(name, value))
}

/// 표준 입력으로 대화형 메뉴 루프를 실행한다.
pub fn run(session: &mut Session, tr: &Translator) -> Result<(), AppError> {
    run_with(session, tr, &mut io::stdin().lock())
}

/// 주어진 입력으로 메뉴 루프를 실행한다. 입력이 끝나면 종료 메뉴와 같이 설정을 저장하고 끝낸다.
pub fn run_with<R: BufRead>(
    session: &mut Session,
    tr: &Translator,
    input: &mut R,
) -> Result<(), AppError> {
    loop {
        let step = match ui_cli::main_menu(tr, input)? {
            MenuChoice::Convert => ui_cli::handle_convert(tr, session, input),
            MenuChoice::Units => ui_cli::handle_units(tr, input),
            MenuChoice::Density => ui_cli::handle_density(tr, input),
            MenuChoice::Mixture => ui_cli::handle_mixture(tr, input),
            MenuChoice::History => ui_cli::handle_history(tr, session, false, input),
            MenuChoice::Favorites => ui_cli::handle_history(tr, session, true, input),
            MenuChoice::Settings => ui_cli::handle_settings(tr, &mut session.config, input)
                .and_then(|()| session.save_config()),
            MenuChoice::Exit => break,
        };
        match step {
            Err(AppError::EndOfInput) => break,
            other => other?,
        }
    }
    session.save_config()?;
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}
