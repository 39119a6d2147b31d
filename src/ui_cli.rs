use std::io::{self, BufRead, Write};

use crate::app::{self, AppError, Session};
use crate::calc::density::{self, DensityQuery, Measure};
use crate::calc::mixture::{self, Ingredient, Portion, RatioKind};
use crate::category::Category;
use crate::config::Config;
use crate::conversion;
use crate::format::{format_number, FormatPolicy};
use crate::history::ConversionRecord;
use crate::i18n::{keys, Translator};
use crate::material_db;
use crate::registry;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Units,
    Density,
    Mixture,
    History,
    Favorites,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
/// 입력이 끝나면 종료를 선택한 것으로 본다.
pub fn main_menu<R: BufRead>(tr: &Translator, input: &mut R) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_CONVERT,
        keys::MAIN_MENU_UNITS,
        keys::MAIN_MENU_DENSITY,
        keys::MAIN_MENU_MIXTURE,
        keys::MAIN_MENU_HISTORY,
        keys::MAIN_MENU_FAVORITES,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::EndOfInput) => return Ok(MenuChoice::Exit),
            Err(err) => return Err(err),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Units),
            "3" => return Ok(MenuChoice::Density),
            "4" => return Ok(MenuChoice::Mixture),
            "5" => return Ok(MenuChoice::History),
            "6" => return Ok(MenuChoice::Favorites),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 단위 코드를 비워두면 설정의 기본 단위를 쓴다.
pub fn handle_convert<R: BufRead>(
    tr: &Translator,
    session: &mut Session,
    input: &mut R,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    let category = read_category(tr, input)?;
    print_units(category);
    let defaults = session.config.default_units.pair(category).clone();
    let value = read_line(input, tr.t(keys::CONVERT_PROMPT_VALUE))?;
    let from = read_unit(input, tr.t(keys::CONVERT_PROMPT_FROM_UNIT), &defaults.from)?;
    let to = read_unit(input, tr.t(keys::CONVERT_PROMPT_TO_UNIT), &defaults.to)?;
    let outcome = match session.convert(category, &value, &from, &to) {
        Ok(Some(outcome)) => outcome,
        Ok(None) => {
            println!("{}", tr.t(keys::ERROR_NO_RESULT));
            return Ok(());
        }
        Err(AppError::Conversion(err)) => {
            println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    print_outcome(tr, &outcome);
    session.record(&outcome)?;
    let answer = read_line(input, tr.t(keys::CONVERT_PROMPT_FAVORITE))?;
    if answer.trim().eq_ignore_ascii_case("y") {
        let key = if session.add_favorite(&outcome)? {
            keys::FAVORITE_ADDED
        } else {
            keys::FAVORITE_EXISTS
        };
        println!("{}", tr.t(key));
    }
    Ok(())
}

/// 변환 결과와 환산식을 출력한다.
pub fn print_outcome(tr: &Translator, outcome: &app::ConversionOutcome) {
    println!("{} {}", tr.t(keys::CONVERT_RESULT), outcome.line);
    println!("{} {}", tr.t(keys::CONVERT_FORMULA), outcome.formula);
    if let Some(symbolic) = &outcome.symbolic {
        if symbolic != &outcome.formula {
            println!("  {symbolic}");
        }
    }
}

/// 단위 목록 메뉴를 처리한다.
pub fn handle_units<R: BufRead>(tr: &Translator, input: &mut R) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNITS_HEADING));
    let category = read_category(tr, input)?;
    print_units(category);
    Ok(())
}

/// 카테고리의 단위를 묶음별로 출력한다.
pub fn print_units(category: Category) {
    for (group, units) in registry::grouped_units(category) {
        println!("[{group}]");
        for unit in units {
            println!("  {:<10} {:<8} {}", unit.code, unit.symbol, unit.name);
        }
    }
}

/// 밀도·질량·부피 메뉴를 처리한다.
pub fn handle_density<R: BufRead>(tr: &Translator, input: &mut R) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DENSITY_HEADING));
    println!("{}", tr.t(keys::DENSITY_MATERIALS));
    for m in material_db::materials() {
        println!(
            "  {:<10} {:<16} {}",
            m.code,
            m.name,
            FormatPolicy::General.format(m.density_kg_m3)
        );
    }
    println!("{}", tr.t(keys::DENSITY_OPTIONS));
    let sel = read_line(input, tr.t(keys::PROMPT_SELECT))?;
    let query = match sel.trim() {
        "1" => DensityQuery::Density {
            mass: read_measure(tr, input, keys::PROMPT_MASS, "kg")?,
            volume: read_measure(tr, input, keys::PROMPT_VOLUME, "m3")?,
            unit: read_unit(input, tr.t(keys::PROMPT_RESULT_UNIT), "kg_m3")?,
        },
        "2" => DensityQuery::Mass {
            density: read_density(tr, input)?,
            volume: read_measure(tr, input, keys::PROMPT_VOLUME, "m3")?,
            unit: read_unit(input, tr.t(keys::PROMPT_RESULT_UNIT), "kg")?,
        },
        "3" => DensityQuery::Volume {
            mass: read_measure(tr, input, keys::PROMPT_MASS, "kg")?,
            density: read_density(tr, input)?,
            unit: read_unit(input, tr.t(keys::PROMPT_RESULT_UNIT), "m3")?,
        },
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    match density::solve(&query) {
        Ok(Some(solution)) => println!("{}", solution.equation),
        Ok(None) => println!("{}", tr.t(keys::ERROR_NO_RESULT)),
        Err(err) => println!("{}: {err}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 배합비 메뉴를 처리한다.
pub fn handle_mixture<R: BufRead>(tr: &Translator, input: &mut R) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MIXTURE_HEADING));
    let kind = match read_line(input, tr.t(keys::MIXTURE_PROMPT_KIND))?.trim() {
        "2" => RatioKind::Percentage,
        _ => RatioKind::Parts,
    };
    let total = read_f64(tr, input, tr.t(keys::MIXTURE_PROMPT_TOTAL))?;
    let mut ingredients = Vec::new();
    loop {
        let line = read_line(input, tr.t(keys::MIXTURE_PROMPT_INGREDIENT))?;
        if line.trim().is_empty() {
            break;
        }
        match app::parse_ingredient(&line) {
            Ok(ingredient) => ingredients.push(ingredient),
            Err(err) => println!("{}: {err}", tr.t(keys::ERROR_PREFIX)),
        }
    }
    print_mixture(tr, &ingredients, kind, total);
    Ok(())
}

/// 배합 결과를 출력한다.
pub fn print_mixture(tr: &Translator, ingredients: &[Ingredient], kind: RatioKind, total: f64) {
    let sum = mixture::total(ingredients);
    if kind == RatioKind::Percentage && sum != 0.0 && (sum - 100.0).abs() > 1e-9 {
        println!("{}", tr.t(keys::MIXTURE_NOT_100));
    }
    println!("{}", tr.t(keys::MIXTURE_RESULT));
    for Portion { name, amount } in mixture::mix(ingredients, kind, total) {
        println!("  {name}: {}", FormatPolicy::General.format(amount));
    }
}

/// 히스토리 또는 즐겨찾기 목록을 출력한다.
pub fn handle_history<R: BufRead>(
    tr: &Translator,
    session: &Session,
    favorites: bool,
    input: &mut R,
) -> Result<(), AppError> {
    let (heading, log) = if favorites {
        (keys::FAVORITES_HEADING, session.favorites())
    } else {
        (keys::HISTORY_HEADING, session.history())
    };
    println!("{}", tr.t(heading));
    let category = read_category(tr, input)?;
    print_records(tr, category, &log.get(category));
    Ok(())
}

pub fn print_records(tr: &Translator, category: Category, records: &[&ConversionRecord]) {
    if records.is_empty() {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
        return;
    }
    for (i, r) in records.iter().enumerate() {
        println!(
            "{:>3}. {} {} = {} {}",
            i + 1,
            r.from_value,
            registry::unit_symbol(category, &r.from_unit),
            format_number(r.to_value, category),
            registry::unit_symbol(category, &r.to_unit),
        );
    }
}

/// 설정 메뉴를 처리한다. 언어 변경은 다음 실행부터 적용된다.
pub fn handle_settings<R: BufRead>(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut R,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language.as_deref().unwrap_or("auto")
    );
    println!("{} {}", tr.t(keys::SETTINGS_RECORD_HISTORY), cfg.record_history);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(input, tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let lang = read_line(input, tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            match lang.trim().to_lowercase().as_str() {
                "auto" | "" => cfg.language = None,
                code if code.starts_with("ko") || code.starts_with("en") => {
                    cfg.language = Some(code.to_string())
                }
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "2" => cfg.record_history = !cfg.record_history,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 한 줄을 읽는다. 입력이 끝났으면 `AppError::EndOfInput`.
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        println!();
        return Err(AppError::EndOfInput);
    }
    Ok(buf)
}

fn read_f64<R: BufRead>(tr: &Translator, input: &mut R, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(input, prompt)?;
        match conversion::parse_value(&s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_category<R: BufRead>(tr: &Translator, input: &mut R) -> Result<Category, AppError> {
    println!("{}", tr.t(keys::CATEGORY_OPTIONS));
    loop {
        let sel = read_line(input, tr.t(keys::PROMPT_CATEGORY))?;
        let picked = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Category::ALL.get(i).copied())
            .or_else(|| sel.trim().parse::<Category>().ok());
        match picked {
            Some(category) => return Ok(category),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_unit<R: BufRead>(input: &mut R, prompt: &str, default: &str) -> Result<String, AppError> {
    let s = read_line(input, &format!("{prompt}[{default}] "))?;
    let s = s.trim();
    Ok(if s.is_empty() { default } else { s }.to_string())
}

fn read_measure<R: BufRead>(
    tr: &Translator,
    input: &mut R,
    key: &str,
    default_unit: &str,
) -> Result<Measure, AppError> {
    let value = read_f64(tr, input, tr.t(key))?;
    let unit = read_unit(input, tr.t(keys::PROMPT_UNIT), default_unit)?;
    Ok(Measure::new(value, unit))
}

/// 밀도 값 또는 물질 이름을 받는다. 물질 이름이면 kg/m³ 값을 쓴다.
fn read_density<R: BufRead>(tr: &Translator, input: &mut R) -> Result<Measure, AppError> {
    loop {
        let s = read_line(input, tr.t(keys::PROMPT_DENSITY))?;
        if let Some(m) = material_db::find_material(&s) {
            return Ok(Measure::new(m.density_kg_m3, "kg_m3"));
        }
        if let Some(value) = conversion::parse_value(&s) {
            let unit = read_unit(input, tr.t(keys::PROMPT_UNIT), "kg_m3")?;
            return Ok(Measure::new(value, unit));
        }
        println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
    }
}
