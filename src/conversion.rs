use thiserror::Error;

use crate::category::Category;
use crate::registry;

/// 단위 변환 시 발생 가능한 오류.
///
/// 숫자가 아닌 입력은 오류가 아니라 `Ok(None)`("결과 없음")으로 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 카테고리에 등록되지 않은 단위 코드
    #[error("알 수 없는 단위: {code} ({category})")]
    UnknownUnit { category: Category, code: String },
    /// 지원하지 않는 카테고리 이름
    #[error("알 수 없는 카테고리: {0}")]
    UnknownCategory(String),
}

/// 같은 카테고리의 두 단위 사이에서 값을 변환한다.
///
/// 선형 카테고리는 `from`의 `to_base`로 기준 단위에 보낸 뒤 `to`의 `from_base`로
/// 되돌린다. 온도는 쌍별 변환표를 직접 조회한다.
///
/// - 단위 코드가 등록되지 않았으면 `Err(UnknownUnit)`.
/// - 값이 NaN/무한대이거나 결과가 유한하지 않으면 `Ok(None)`.
/// - `from == to`이면 입력값을 그대로 돌려준다.
pub fn convert(
    category: Category,
    value: f64,
    from: &str,
    to: &str,
) -> Result<Option<f64>, ConversionError> {
    if category == Category::Temperature {
        return convert_temperature(value, from, to);
    }
    let from_unit = registry::find_linear(category, from)?;
    let to_unit = registry::find_linear(category, to)?;
    if !value.is_finite() {
        tracing::debug!(%category, from, to, "non-finite input, no result");
        return Ok(None);
    }
    // 같은 단위는 입력값을 그대로 돌려준다
    if from_unit.unit.code == to_unit.unit.code {
        return Ok(Some(value));
    }
    let base = from_unit.to_base(value);
    let result = to_unit.from_base(base);
    tracing::debug!(%category, from, to, value, result, "converted");
    Ok(finite(result))
}

/// 온도 변환. 같은 단위도 변환표의 항등 항목을 통해 계산한다.
pub fn convert_temperature(
    value: f64,
    from: &str,
    to: &str,
) -> Result<Option<f64>, ConversionError> {
    let from_unit = registry::find_temperature(from)?;
    let to_unit = registry::find_temperature(to)?;
    if !value.is_finite() {
        return Ok(None);
    }
    let result = from_unit.op_to(to_unit.scale).apply(value);
    tracing::debug!(from, to, value, result, "converted temperature");
    Ok(finite(result))
}

/// 텍스트 입력을 해석해 변환한다. 빈 문자열이나 숫자가 아닌 입력은 `Ok(None)`.
///
/// 단위 코드는 입력값보다 먼저 검증한다.
pub fn convert_input(
    category: Category,
    raw: &str,
    from: &str,
    to: &str,
) -> Result<Option<f64>, ConversionError> {
    registry::lookup(category, from)?;
    registry::lookup(category, to)?;
    match parse_value(raw) {
        Some(value) => convert(category, value, from, to),
        None => Ok(None),
    }
}

/// 1 `from` = k `to` 의 k. 온도는 배율로 표현할 수 없으므로 `None`.
pub fn conversion_factor(
    category: Category,
    from: &str,
    to: &str,
) -> Result<Option<f64>, ConversionError> {
    if category == Category::Temperature {
        registry::find_temperature(from)?;
        registry::find_temperature(to)?;
        return Ok(None);
    }
    convert(category, 1.0, from, to)
}

/// 사용자 입력 문자열을 숫자로 해석한다. 유한한 값만 받아들인다.
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
