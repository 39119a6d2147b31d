//! 카테고리별 단위 레지스트리.
//!
//! 모든 테이블은 `units` 모듈의 정적 정의이며 런타임에 바뀌지 않는다.
//! 변환 경로(`lookup`, `find_*`)는 알 수 없는 코드를 오류로 돌려주고,
//! 표시용 조회(`unit_name`, `unit_symbol`)는 코드 자체로 폴백한다.

use crate::category::Category;
use crate::conversion::ConversionError;
use crate::units::{self, temperature, Alias, LinearUnit, TemperatureUnit, Unit, UnitGroup};

/// 선형 카테고리의 단위 묶음. 온도는 빈 슬라이스를 돌려준다.
pub fn linear_groups(category: Category) -> &'static [UnitGroup] {
    match category {
        Category::Length => units::length::GROUPS,
        Category::Area => units::area::GROUPS,
        Category::Volume => units::volume::GROUPS,
        Category::Weight => units::mass::GROUPS,
        Category::DigitalStorage => units::digital::STORAGE_GROUPS,
        Category::DigitalTransfer => units::digital::TRANSFER_GROUPS,
        Category::Density => units::density::GROUPS,
        Category::Temperature => &[],
    }
}

fn aliases(category: Category) -> &'static [Alias] {
    match category {
        Category::Length => units::length::ALIASES,
        Category::Area => units::area::ALIASES,
        Category::Volume => units::volume::ALIASES,
        Category::Weight => units::mass::ALIASES,
        Category::DigitalStorage => units::digital::STORAGE_ALIASES,
        Category::DigitalTransfer => units::digital::TRANSFER_ALIASES,
        Category::Density => units::density::ALIASES,
        Category::Temperature => temperature::ALIASES,
    }
}

fn resolve_alias(category: Category, code: &str) -> Option<&'static str> {
    aliases(category)
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, canonical)| *canonical)
}

fn find_linear_exact(category: Category, code: &str) -> Option<&'static LinearUnit> {
    linear_groups(category)
        .iter()
        .flat_map(|g| g.units.iter())
        .find(|u| u.unit.code == code)
}

fn find_temperature_exact(code: &str) -> Option<&'static TemperatureUnit> {
    temperature::UNITS.iter().find(|u| u.unit.code == code)
}

fn unknown(category: Category, code: &str) -> ConversionError {
    tracing::warn!(%category, code, "unknown unit code");
    ConversionError::UnknownUnit {
        category,
        code: code.to_string(),
    }
}

/// 선형 카테고리에서 단위를 찾는다. 코드는 대소문자를 구분하며 별칭도 허용한다.
pub fn find_linear(category: Category, code: &str) -> Result<&'static LinearUnit, ConversionError> {
    find_linear_quiet(category, code).ok_or_else(|| unknown(category, code))
}

fn find_linear_quiet(category: Category, code: &str) -> Option<&'static LinearUnit> {
    find_linear_exact(category, code)
        .or_else(|| resolve_alias(category, code).and_then(|c| find_linear_exact(category, c)))
}

/// 온도 단위를 찾는다.
pub fn find_temperature(code: &str) -> Result<&'static TemperatureUnit, ConversionError> {
    find_temperature_quiet(code).ok_or_else(|| unknown(Category::Temperature, code))
}

fn find_temperature_quiet(code: &str) -> Option<&'static TemperatureUnit> {
    find_temperature_exact(code).or_else(|| {
        resolve_alias(Category::Temperature, code).and_then(find_temperature_exact)
    })
}

fn lookup_quiet(category: Category, code: &str) -> Option<&'static Unit> {
    match category {
        Category::Temperature => find_temperature_quiet(code).map(|u| &u.unit),
        _ => find_linear_quiet(category, code).map(|u| &u.unit),
    }
}

/// 코드로 단위를 찾는다. 등록되지 않은 코드는 `UnknownUnit` 오류다.
pub fn lookup(category: Category, code: &str) -> Result<&'static Unit, ConversionError> {
    lookup_quiet(category, code).ok_or_else(|| unknown(category, code))
}

/// 별칭을 풀어 정규 코드를 돌려준다.
pub fn canonical_code(category: Category, code: &str) -> Option<&'static str> {
    lookup_quiet(category, code).map(|u| u.code)
}

/// 선언 순서대로 단위를 나열한다. 별칭은 포함하지 않는다.
pub fn list_units(category: Category) -> Vec<&'static Unit> {
    match category {
        Category::Temperature => temperature::UNITS.iter().map(|u| &u.unit).collect(),
        _ => linear_groups(category)
            .iter()
            .flat_map(|g| g.units.iter().map(|u| &u.unit))
            .collect(),
    }
}

/// 묶음 이름과 함께 단위를 나열한다. 온도는 하나의 묶음이다.
pub fn grouped_units(category: Category) -> Vec<(&'static str, Vec<&'static Unit>)> {
    match category {
        Category::Temperature => vec![("Temperature", list_units(category))],
        _ => linear_groups(category)
            .iter()
            .map(|g| (g.name, g.units.iter().map(|u| &u.unit).collect()))
            .collect(),
    }
}

/// 단위 이름. 등록되지 않은 코드는 그대로 돌려준다.
pub fn unit_name(category: Category, code: &str) -> String {
    lookup_quiet(category, code).map_or_else(|| code.to_string(), |u| u.name.to_string())
}

/// 단위 기호. 등록되지 않은 코드는 그대로 돌려준다.
pub fn unit_symbol(category: Category, code: &str) -> String {
    lookup_quiet(category, code).map_or_else(|| code.to_string(), |u| u.symbol.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_point_at_registered_codes() {
        for category in Category::ALL {
            for (alias, canonical) in aliases(category) {
                let codes: Vec<_> = list_units(category).iter().map(|u| u.code).collect();
                assert!(
                    codes.contains(canonical),
                    "{category}: alias {alias} → {canonical} is dangling"
                );
                assert!(
                    !codes.contains(alias),
                    "{category}: alias {alias} shadows a unit code"
                );
            }
        }
    }

    #[test]
    fn alias_resolves_to_canonical_unit() {
        assert_eq!(canonical_code(Category::Volume, "gal"), Some("gal_us"));
        assert_eq!(canonical_code(Category::Weight, "stone"), Some("st"));
        assert_eq!(canonical_code(Category::Temperature, "°F"), Some("f"));
        assert_eq!(canonical_code(Category::Length, "parsec"), None);
    }
}
