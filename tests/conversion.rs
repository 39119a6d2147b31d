//! 선형/온도 변환 회귀 테스트. 기준값은 단위 정의(국제 야드·파운드 협정 등)에서 가져온다.
use approx::assert_relative_eq;
use proptest::prelude::*;
use unit_converter_toolbox::category::Category;
use unit_converter_toolbox::conversion::{
    convert, convert_input, convert_temperature, conversion_factor, parse_value, ConversionError,
};
use unit_converter_toolbox::registry;
use unit_converter_toolbox::units::{TemperatureScale, TemperatureUnit};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

fn conv(category: Category, value: f64, from: &str, to: &str) -> f64 {
    convert(category, value, from, to)
        .expect("known units")
        .expect("finite result")
}

#[test]
fn linear_reference_values() {
    let cases = [
        (Category::Length, 1.0, "m", "ft", 3.280_839_895_013_123),
        (Category::Length, 1.0, "mi", "km", 1.609_344),
        (Category::Length, 1.0, "nmi", "m", 1852.0),
        (Category::Area, 1.0, "acre", "m2", 4046.856_422_4),
        (Category::Area, 1.0, "ha", "m2", 10_000.0),
        (Category::Volume, 1.0, "gal_us", "l", 3.785_41),
        (Category::Volume, 1.0, "m3", "l", 1000.0),
        (Category::Weight, 1.0, "lb", "kg", 0.453_592_37),
        (Category::Weight, 1.0, "ton", "kg", 1000.0),
        (Category::DigitalStorage, 1.0, "kib", "b", 1024.0),
        (Category::DigitalStorage, 1.0, "mb", "kb", 1000.0),
        (Category::DigitalStorage, 1.0, "b", "bit", 8.0),
        (Category::DigitalTransfer, 1.0, "Bps", "bps", 8.0),
        (Category::DigitalTransfer, 1.0, "MBps", "mbps", 8.0),
        (Category::Density, 1.0, "g_cm3", "kg_m3", 1000.0),
        (Category::Density, 1.0, "sg", "g_l", 1000.0),
    ];
    for (category, value, from, to, expected) in cases {
        let label = format!("{category} {from}->{to}");
        assert_close(&label, conv(category, value, from, to), expected, 1e-12);
    }
}

#[test]
fn exact_factor_fixtures() {
    assert_eq!(convert(Category::Length, 1.0, "mi", "m"), Ok(Some(1609.344)));
    assert_eq!(convert(Category::DigitalStorage, 1.0, "kb", "b"), Ok(Some(1000.0)));
    assert_eq!(convert(Category::Length, 1.0, "m", "m"), Ok(Some(1.0)));
}

#[test]
fn codes_are_case_sensitive() {
    let bits = conv(Category::DigitalTransfer, 1.0, "mbps", "bps");
    let bytes = conv(Category::DigitalTransfer, 1.0, "MBps", "bps");
    assert_relative_eq!(bits, 1_000_000.0);
    assert_relative_eq!(bytes, 8_000_000.0);
    assert!(matches!(
        convert(Category::Length, 1.0, "M", "ft"),
        Err(ConversionError::UnknownUnit { .. })
    ));
}

#[test]
fn unknown_unit_is_an_error() {
    let err = convert(Category::Length, 1.0, "m", "parsec").unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownUnit {
            category: Category::Length,
            code: "parsec".into()
        }
    );
    // 온도 코드는 다른 카테고리에서 쓸 수 없다
    assert!(convert(Category::Weight, 1.0, "c", "kg").is_err());
    assert!(convert_temperature(1.0, "c", "x").is_err());
}

#[test]
fn non_numeric_input_has_no_result() {
    assert_eq!(convert(Category::Length, f64::NAN, "m", "ft"), Ok(None));
    assert_eq!(convert(Category::Length, f64::INFINITY, "m", "ft"), Ok(None));
    assert_eq!(convert_temperature(f64::NAN, "c", "f"), Ok(None));
    assert_eq!(convert_input(Category::Length, "abc", "m", "ft"), Ok(None));
    assert_eq!(convert_input(Category::Length, "", "m", "ft"), Ok(None));
    assert_eq!(parse_value(" 2.5 "), Some(2.5));
    assert_eq!(parse_value("inf"), None);
    // 단위 오류가 입력 오류보다 우선한다
    assert!(convert_input(Category::Length, "abc", "m", "zz").is_err());
}

#[test]
fn parsed_input_converts() {
    let got = convert_input(Category::Weight, "2", "kg", "g").unwrap().unwrap();
    assert_relative_eq!(got, 2000.0);
}

#[test]
fn same_unit_returns_input_unchanged() {
    for category in Category::ALL {
        for unit in registry::list_units(category) {
            let v = 123.456_789;
            assert_eq!(
                convert(category, v, unit.code, unit.code),
                Ok(Some(v)),
                "{category} {}",
                unit.code
            );
        }
    }
}

#[test]
fn aliases_convert_like_canonical_codes() {
    assert_eq!(
        convert(Category::Volume, 2.0, "gal", "l"),
        convert(Category::Volume, 2.0, "gal_us", "l")
    );
    assert_eq!(
        convert(Category::Weight, 1.0, "stone", "lb"),
        convert(Category::Weight, 1.0, "st", "lb")
    );
    assert_eq!(
        convert(Category::Temperature, 100.0, "celsius", "°F"),
        convert(Category::Temperature, 100.0, "c", "f")
    );
}

#[test]
fn temperature_reference_values() {
    let cases = [
        ("c", "f", 0.0, 32.0),
        ("c", "f", 100.0, 212.0),
        ("c", "f", -40.0, -40.0),
        ("f", "c", 98.6, 37.0),
        ("k", "c", 0.0, -273.15),
        ("c", "k", 25.0, 298.15),
        ("c", "r", 0.0, 491.67),
        ("f", "r", 0.0, 459.67),
        ("r", "k", 491.67, 273.15),
        ("re", "c", 80.0, 100.0),
        ("f", "re", 212.0, 80.0),
        ("re", "f", 0.0, 32.0),
        ("k", "f", 0.0, -459.67),
    ];
    for (from, to, value, expected) in cases {
        let got = convert_temperature(value, from, to).unwrap().unwrap();
        assert_close(&format!("{value} {from}->{to}"), got, expected, 1e-9);
    }
}

#[test]
fn temperature_matrix_rows_are_mutual_inverses() {
    for from in TemperatureScale::ALL {
        for to in TemperatureScale::ALL {
            let forward = from.unit().op_to(to).inverse().coefficients();
            let backward = to.unit().op_to(from).coefficients();
            assert_relative_eq!(forward.0, backward.0, max_relative = 1e-12);
            assert_relative_eq!(forward.1, backward.1, epsilon = 1e-9);
        }
    }
}

#[test]
fn temperature_rows_follow_declaration_order() {
    for unit in registry::list_units(Category::Temperature) {
        let row: &TemperatureUnit = registry::find_temperature(unit.code).unwrap();
        for scale in TemperatureScale::ALL {
            assert_eq!(row.op_to_code(scale.code()), Some(row.op_to(scale)));
        }
        assert_eq!(TemperatureScale::from_code(unit.code), Some(row.scale));
    }
}

#[test]
fn conversion_factor_is_value_of_one() {
    assert_eq!(
        conversion_factor(Category::Length, "km", "m"),
        Ok(Some(1000.0))
    );
    assert_eq!(conversion_factor(Category::Temperature, "c", "f"), Ok(None));
    assert!(conversion_factor(Category::Temperature, "c", "q").is_err());
}

#[test]
fn base_units_are_identities() {
    for category in Category::ALL {
        match category.base_unit() {
            Some(code) => {
                assert!(category.is_linear());
                let unit = registry::find_linear(category, code).unwrap();
                assert_eq!(unit.to_base(7.5), 7.5);
                assert_eq!(unit.from_base(7.5), 7.5);
            }
            None => assert_eq!(category, Category::Temperature),
        }
    }
}

fn unit_codes(category: Category) -> Vec<&'static str> {
    registry::list_units(category).iter().map(|u| u.code).collect()
}

fn linear_category() -> impl Strategy<Value = Category> {
    prop::sample::select(
        Category::ALL
            .iter()
            .copied()
            .filter(|c| c.is_linear())
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn linear_round_trip(
        category in linear_category(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
        value in -1.0e6_f64..1.0e6_f64,
    ) {
        let codes = unit_codes(category);
        let from = codes[a.index(codes.len())];
        let to = codes[b.index(codes.len())];
        let there = convert(category, value, from, to).unwrap().unwrap();
        let back = convert(category, there, to, from).unwrap().unwrap();
        prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0),
            "{category} {from}->{to}: {value} -> {there} -> {back}");
    }

    #[test]
    fn temperature_matches_path_through_celsius(
        from in prop::sample::select(TemperatureScale::ALL.to_vec()),
        to in prop::sample::select(TemperatureScale::ALL.to_vec()),
        value in -500.0_f64..5000.0_f64,
    ) {
        let direct = TemperatureScale::convert(value, from, to);
        let celsius = TemperatureScale::convert(value, from, TemperatureScale::Celsius);
        let via = TemperatureScale::convert(celsius, TemperatureScale::Celsius, to);
        prop_assert!((direct - via).abs() <= 1e-9 * direct.abs().max(1.0));

        let back = TemperatureScale::convert(direct, to, from);
        prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
    }
}
