//! 사람이 읽는 환산식 문자열을 만든다.

use crate::category::Category;
use crate::conversion::{self, ConversionError};
use crate::format::{format_number, FormatPolicy};
use crate::registry;

/// 환산식 문자열.
///
/// - 선형 카테고리: `1 {from 이름} = {k} {to 이름}`. k는 `FormatPolicy::Compact`로 표시.
/// - 온도: 미리 정한 기호식 12종, 그 외 조합은 섭씨를 거치라는 설명문.
pub fn get_formula(category: Category, from: &str, to: &str) -> Result<String, ConversionError> {
    if category == Category::Temperature {
        return temperature_formula(from, to);
    }
    let factor = conversion::conversion_factor(category, from, to)?;
    let factor = FormatPolicy::Compact.format(factor.unwrap_or(0.0));
    Ok(format!(
        "1 {} = {} {}",
        registry::unit_name(category, from),
        factor,
        registry::unit_name(category, to)
    ))
}

/// 온도 환산식. 기호식이 없는 조합은 설명문으로 대신한다.
pub fn temperature_formula(from: &str, to: &str) -> Result<String, ConversionError> {
    let from_unit = registry::find_temperature(from)?;
    let to_unit = registry::find_temperature(to)?;
    if let Some(formula) = temperature_symbolic(from_unit.unit.code, to_unit.unit.code) {
        return Ok(formula);
    }
    Ok(format!(
        "To convert from {from_name} to {to_name}, first convert to Celsius, then to {to_name}",
        from_name = from_unit.unit.name,
        to_name = to_unit.unit.name,
    ))
}

fn temperature_symbolic(from: &str, to: &str) -> Option<String> {
    let fs = registry::unit_symbol(Category::Temperature, from);
    let ts = registry::unit_symbol(Category::Temperature, to);
    let formula = match (from, to) {
        ("c", "f") => format!("{ts} = ({fs} × 9/5) + 32"),
        ("f", "c") => format!("{ts} = ({fs} - 32) × 5/9"),
        ("c", "k") => format!("{ts} = {fs} + 273.15"),
        ("k", "c") => format!("{ts} = {fs} - 273.15"),
        ("f", "k") => format!("{ts} = ({fs} - 32) × 5/9 + 273.15"),
        ("k", "f") => format!("{ts} = ({fs} - 273.15) × 9/5 + 32"),
        ("c", "re") => format!("{ts} = {fs} × 4/5"),
        ("re", "c") => format!("{ts} = {fs} × 5/4"),
        ("c", "r") => format!("{ts} = ({fs} + 273.15) × 9/5"),
        ("r", "c") => format!("{ts} = ({fs} - 491.67) × 5/9"),
        ("f", "r") => format!("{ts} = {fs} + 459.67"),
        ("r", "f") => format!("{ts} = {fs} - 459.67"),
        _ => return None,
    };
    Some(formula)
}

/// 단위 쌍에 대한 기호식/정형 문구. 해당 조합이 없으면 `None`.
///
/// 온도 기호식, 밀도 환산표, 디지털 단위의 대표 환산 문구를 다룬다.
pub fn symbolic_formula(category: Category, from: &str, to: &str) -> Option<String> {
    let from = registry::canonical_code(category, from)?;
    let to = registry::canonical_code(category, to)?;
    match category {
        Category::Temperature => temperature_symbolic(from, to),
        Category::Density => density_symbolic(from, to).map(str::to_string),
        Category::DigitalStorage => storage_symbolic(from, to).map(str::to_string),
        Category::DigitalTransfer => transfer_symbolic(from, to).map(str::to_string),
        _ => None,
    }
}

fn density_symbolic(from: &str, to: &str) -> Option<&'static str> {
    Some(match (from, to) {
        ("kg_m3", "g_cm3") => "g/cm³ = kg/m³ ÷ 1,000",
        ("kg_m3", "g_ml") => "g/mL = kg/m³ ÷ 1,000",
        ("kg_m3", "g_l") => "g/L = kg/m³",
        ("kg_m3", "kg_l") => "kg/L = kg/m³ ÷ 1,000",
        ("kg_m3", "lb_ft3") => "lb/ft³ = kg/m³ ÷ 16.0185",
        ("kg_m3", "lb_in3") => "lb/in³ = kg/m³ ÷ 27,679.9",
        ("kg_m3", "lb_gal_us") => "lb/gal = kg/m³ ÷ 119.826",
        ("kg_m3", "oz_in3") => "oz/in³ = kg/m³ ÷ 1,729.99",
        ("kg_m3", "oz_gal_us") => "oz/gal = kg/m³ ÷ 7.48915",
        ("kg_m3", "sg") => "SG = kg/m³ ÷ 1,000",
        ("g_cm3", "kg_m3") => "kg/m³ = g/cm³ × 1,000",
        ("g_cm3", "g_ml") => "g/mL = g/cm³ (equivalent)",
        ("g_cm3", "g_l") => "g/L = g/cm³ × 1,000",
        ("g_cm3", "kg_l") => "kg/L = g/cm³",
        ("g_cm3", "lb_ft3") => "lb/ft³ = g/cm³ × 62.428",
        ("g_cm3", "lb_in3") => "lb/in³ = g/cm³ × 27.68",
        ("g_cm3", "lb_gal_us") => "lb/gal = g/cm³ × 8.345",
        ("g_cm3", "oz_in3") => "oz/in³ = g/cm³ × 442.9",
        ("g_cm3", "oz_gal_us") => "oz/gal = g/cm³ × 133.53",
        ("g_cm3", "sg") => "SG = g/cm³",
        _ => return None,
    })
}

fn storage_symbolic(from: &str, to: &str) -> Option<&'static str> {
    Some(match (from, to) {
        ("kb", "b") => "1 Kilobyte = 1,000 Bytes",
        ("mb", "kb") => "1 Megabyte = 1,000 Kilobytes",
        ("gb", "mb") => "1 Gigabyte = 1,000 Megabytes",
        ("kib", "b") => "1 Kibibyte = 1,024 Bytes",
        ("mib", "kib") => "1 Mebibyte = 1,024 Kibibytes",
        ("gib", "mib") => "1 Gibibyte = 1,024 Mebibytes",
        _ => return None,
    })
}

fn transfer_symbolic(from: &str, to: &str) -> Option<&'static str> {
    Some(match (from, to) {
        ("mbps", "kbps") => "1 Megabit per second = 1,000 Kilobits per second",
        ("Bps", "bps") => "1 Byte per second = 8 Bits per second",
        _ => return None,
    })
}

/// `{값} {from 기호} = {결과} {to 기호}` 한 줄. 온도는 기호를 값에 붙여 쓴다.
///
/// 결과를 계산할 수 없으면 `Ok(None)`.
pub fn describe(
    category: Category,
    value: f64,
    from: &str,
    to: &str,
) -> Result<Option<String>, ConversionError> {
    let Some(result) = conversion::convert(category, value, from, to)? else {
        return Ok(None);
    };
    let from_symbol = registry::unit_symbol(category, from);
    let to_symbol = registry::unit_symbol(category, to);
    let formatted = format_number(result, category);
    let line = if category == Category::Temperature {
        format!("{value}{from_symbol} = {formatted}{to_symbol}")
    } else {
        format!("{value} {from_symbol} = {formatted} {to_symbol}")
    };
    Ok(Some(line))
}
