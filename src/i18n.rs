use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_UNITS: &str = "main_menu.units";
    pub const MAIN_MENU_DENSITY: &str = "main_menu.density";
    pub const MAIN_MENU_MIXTURE: &str = "main_menu.mixture";
    pub const MAIN_MENU_HISTORY: &str = "main_menu.history";
    pub const MAIN_MENU_FAVORITES: &str = "main_menu.favorites";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_NO_RESULT: &str = "error.no_result";

    pub const CATEGORY_OPTIONS: &str = "category.options";
    pub const PROMPT_CATEGORY: &str = "category.prompt";

    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const CONVERT_PROMPT_VALUE: &str = "convert.prompt_value";
    pub const CONVERT_PROMPT_FROM_UNIT: &str = "convert.prompt_from_unit";
    pub const CONVERT_PROMPT_TO_UNIT: &str = "convert.prompt_to_unit";
    pub const CONVERT_RESULT: &str = "convert.result";
    pub const CONVERT_FORMULA: &str = "convert.formula";
    pub const CONVERT_PROMPT_FAVORITE: &str = "convert.prompt_favorite";
    pub const FAVORITE_ADDED: &str = "convert.favorite_added";
    pub const FAVORITE_EXISTS: &str = "convert.favorite_exists";

    pub const UNITS_HEADING: &str = "units.heading";

    pub const DENSITY_HEADING: &str = "density.heading";
    pub const DENSITY_OPTIONS: &str = "density.options";
    pub const DENSITY_MATERIALS: &str = "density.materials";
    pub const PROMPT_MASS: &str = "density.prompt_mass";
    pub const PROMPT_VOLUME: &str = "density.prompt_volume";
    pub const PROMPT_DENSITY: &str = "density.prompt_density";
    pub const PROMPT_UNIT: &str = "density.prompt_unit";
    pub const PROMPT_RESULT_UNIT: &str = "density.prompt_result_unit";

    pub const MIXTURE_HEADING: &str = "mixture.heading";
    pub const MIXTURE_PROMPT_KIND: &str = "mixture.prompt_kind";
    pub const MIXTURE_PROMPT_TOTAL: &str = "mixture.prompt_total";
    pub const MIXTURE_PROMPT_INGREDIENT: &str = "mixture.prompt_ingredient";
    pub const MIXTURE_RESULT: &str = "mixture.result";
    pub const MIXTURE_NOT_100: &str = "mixture.not_100";

    pub const HISTORY_HEADING: &str = "history.heading";
    pub const FAVORITES_HEADING: &str = "history.favorites_heading";
    pub const HISTORY_EMPTY: &str = "history.empty";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_RECORD_HISTORY: &str = "settings.record_history";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 내장 문자열만 쓰는 번역기를 생성한다.
    /// 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 빌드 시 포함된 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며 영어에 없으면 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|lang| normalize_locale_string(&lang))
}

/// TOML 기반 언어팩을 로드한다. 형식: 테이블을 점(.)으로 이은 키 = "value".
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = dir.join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    lang.split_once(['-', '_'])
        .and_then(|(base, _)| try_load(base))
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = match toml::from_str(src) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(%err, "ignoring malformed language pack");
            return None;
        }
    };
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Unit Converter Toolbox ===",
        MAIN_MENU_CONVERT => "1) 단위 변환",
        MAIN_MENU_UNITS => "2) 단위 목록",
        MAIN_MENU_DENSITY => "3) 밀도·질량·부피 계산",
        MAIN_MENU_MIXTURE => "4) 배합비 계산",
        MAIN_MENU_HISTORY => "5) 변환 기록",
        MAIN_MENU_FAVORITES => "6) 즐겨찾기",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_NO_RESULT => "결과를 계산할 수 없습니다.",
        CATEGORY_OPTIONS => {
            "1) 길이  2) 면적  3) 부피  4) 무게  5) 저장 용량  6) 전송 속도  7) 밀도  8) 온도"
        }
        PROMPT_CATEGORY => "카테고리 번호: ",
        CONVERT_HEADING => "\n-- 단위 변환 --",
        CONVERT_PROMPT_VALUE => "값 입력: ",
        CONVERT_PROMPT_FROM_UNIT => "입력 단위 코드 (엔터 = 기본값): ",
        CONVERT_PROMPT_TO_UNIT => "변환 단위 코드 (엔터 = 기본값): ",
        CONVERT_RESULT => "변환 결과:",
        CONVERT_FORMULA => "환산식:",
        CONVERT_PROMPT_FAVORITE => "즐겨찾기에 추가할까요? (y/N): ",
        FAVORITE_ADDED => "즐겨찾기에 추가했습니다.",
        FAVORITE_EXISTS => "이미 즐겨찾기에 있는 단위 쌍입니다.",
        UNITS_HEADING => "\n-- 단위 목록 --",
        DENSITY_HEADING => "\n-- 밀도·질량·부피 --",
        DENSITY_OPTIONS => "1) 밀도 구하기  2) 질량 구하기  3) 부피 구하기",
        DENSITY_MATERIALS => "참고 물질 밀도 (kg/m³):",
        PROMPT_MASS => "질량 값: ",
        PROMPT_VOLUME => "부피 값: ",
        PROMPT_DENSITY => "밀도 값 (물질 이름도 가능): ",
        PROMPT_UNIT => "단위 코드: ",
        PROMPT_RESULT_UNIT => "결과 단위 코드: ",
        MIXTURE_HEADING => "\n-- 배합비 --",
        MIXTURE_PROMPT_KIND => "비율 방식 (1=부, 2=%): ",
        MIXTURE_PROMPT_TOTAL => "목표 총량: ",
        MIXTURE_PROMPT_INGREDIENT => "재료 (이름=비율, 엔터로 종료): ",
        MIXTURE_RESULT => "재료별 양:",
        MIXTURE_NOT_100 => "비율 합이 100%가 아니므로 100%로 환산했습니다.",
        HISTORY_HEADING => "\n-- 변환 기록 --",
        FAVORITES_HEADING => "\n-- 즐겨찾기 --",
        HISTORY_EMPTY => "기록이 없습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_RECORD_HISTORY => "변환 기록 저장:",
        SETTINGS_OPTIONS => "1) 언어 변경  2) 기록 저장 켜기/끄기",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (ko, en, auto): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Unit Converter Toolbox ===",
        MAIN_MENU_CONVERT => "1) Convert",
        MAIN_MENU_UNITS => "2) Unit list",
        MAIN_MENU_DENSITY => "3) Density / mass / volume",
        MAIN_MENU_MIXTURE => "4) Mixture ratios",
        MAIN_MENU_HISTORY => "5) History",
        MAIN_MENU_FAVORITES => "6) Favorites",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_NO_RESULT => "No result for this input.",
        CATEGORY_OPTIONS => {
            "1) Length  2) Area  3) Volume  4) Weight  5) Storage  6) Transfer  7) Density  8) Temperature"
        }
        PROMPT_CATEGORY => "Category number: ",
        CONVERT_HEADING => "\n-- Convert --",
        CONVERT_PROMPT_VALUE => "Value: ",
        CONVERT_PROMPT_FROM_UNIT => "From unit code (Enter = default): ",
        CONVERT_PROMPT_TO_UNIT => "To unit code (Enter = default): ",
        CONVERT_RESULT => "Result:",
        CONVERT_FORMULA => "Formula:",
        CONVERT_PROMPT_FAVORITE => "Add to favorites? (y/N): ",
        FAVORITE_ADDED => "Added to favorites.",
        FAVORITE_EXISTS => "This unit pair is already a favorite.",
        UNITS_HEADING => "\n-- Units --",
        DENSITY_HEADING => "\n-- Density / mass / volume --",
        DENSITY_OPTIONS => "1) Solve density  2) Solve mass  3) Solve volume",
        DENSITY_MATERIALS => "Reference densities (kg/m³):",
        PROMPT_MASS => "Mass value: ",
        PROMPT_VOLUME => "Volume value: ",
        PROMPT_DENSITY => "Density value (or material name): ",
        PROMPT_UNIT => "Unit code: ",
        PROMPT_RESULT_UNIT => "Result unit code: ",
        MIXTURE_HEADING => "\n-- Mixture --",
        MIXTURE_PROMPT_KIND => "Ratio kind (1=parts, 2=%): ",
        MIXTURE_PROMPT_TOTAL => "Target total: ",
        MIXTURE_PROMPT_INGREDIENT => "Ingredient (name=ratio, Enter to finish): ",
        MIXTURE_RESULT => "Amounts:",
        MIXTURE_NOT_100 => "Percentages did not sum to 100% and were rescaled.",
        HISTORY_HEADING => "\n-- History --",
        FAVORITES_HEADING => "\n-- Favorites --",
        HISTORY_EMPTY => "No records.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_RECORD_HISTORY => "Record history:",
        SETTINGS_OPTIONS => "1) Change language  2) Toggle history recording",
        SETTINGS_PROMPT_LANGUAGE => "Language code (ko, en, auto): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
