//! 숫자 표시 정책과 환산식 문자열 회귀 테스트.
use unit_converter_toolbox::category::Category;
use unit_converter_toolbox::conversion::{convert_temperature, ConversionError};
use unit_converter_toolbox::format::{format_number, magnitude_decimals, FormatPolicy};
use unit_converter_toolbox::formula::{describe, get_formula, symbolic_formula};

#[test]
fn magnitude_picks_decimal_places() {
    assert_eq!(format_number(1500.0, Category::Area), "1500");
    assert_eq!(format_number(12.3456, Category::Length), "12.346");
    assert_eq!(format_number(-12.3456, Category::Weight), "-12.346");
    assert_eq!(format_number(0.000_000_123, Category::Volume), "1.230000e-7");
    assert_eq!(magnitude_decimals(0.05), 6);
    assert_eq!(magnitude_decimals(2.0), 4);
}

#[test]
fn policies_differ_per_category() {
    assert_eq!(FormatPolicy::for_category(Category::Length), FormatPolicy::Compact);
    assert_eq!(FormatPolicy::for_category(Category::Density), FormatPolicy::General);
    assert_eq!(
        FormatPolicy::for_category(Category::DigitalTransfer),
        FormatPolicy::Digital
    );
    // 1.5e-7은 General에서는 과학적 표기, Compact에서는 고정 소수 6자리
    assert_eq!(FormatPolicy::General.format(1.5e-7), "1.500000e-7");
    assert_eq!(FormatPolicy::Compact.format(1.5e-11), "1.500000e-11");
    assert_eq!(format_number(1.0e10, Category::Length), "1.000000e+10");
    assert_eq!(format_number(9_999_999_999.0, Category::Volume), "9999999999");
}

#[test]
fn exact_ties_round_half_up() {
    assert_eq!(format_number(100.125, Category::Length), "100.13");
    assert_eq!(format_number(10.0625, Category::Volume), "10.063");
    assert_eq!(format_number(0.125, Category::Temperature), "0.13");
    assert_eq!(format_number(-0.125, Category::Temperature), "-0.13");
    assert_eq!(format_number(0.0078125, Category::DigitalStorage), "0.007813");
    assert_eq!(format_number(1024.0078125, Category::DigitalTransfer), "1,024.007813");
    let f = convert_temperature(0.625, "c", "f").unwrap().unwrap();
    assert_eq!(f, 33.125);
    assert_eq!(format_number(f, Category::Temperature), "33.13");
}

#[test]
fn non_ties_round_to_nearest() {
    // 1.005는 이진수로 1.00499...이므로 내림
    assert_eq!(format_number(1.005, Category::Temperature), "1");
    assert_eq!(format_number(2.675, Category::Temperature), "2.67");
    assert_eq!(format_number(99.996, Category::Temperature), "100");
}

#[test]
fn digital_groups_thousands() {
    assert_eq!(format_number(1024.0, Category::DigitalStorage), "1,024");
    assert_eq!(format_number(1536.5, Category::DigitalStorage), "1,536.5");
    assert_eq!(format_number(0.123_456_7, Category::DigitalTransfer), "0.123457");
    assert_eq!(
        format_number(1.0e21, Category::DigitalStorage),
        "1,000,000,000,000,000,000,000"
    );
    assert_eq!(format_number(1.0e22, Category::DigitalStorage), "1.000000e+22");
}

#[test]
fn temperature_never_goes_scientific() {
    assert_eq!(format_number(37.777_777, Category::Temperature), "37.78");
    assert_eq!(format_number(-0.001, Category::Temperature), "0");
    assert_eq!(format_number(1.0e12, Category::Temperature), "1000000000000");
}

#[test]
fn non_finite_and_negative_zero_render_zero() {
    assert_eq!(FormatPolicy::General.format(f64::NAN), "0");
    assert_eq!(FormatPolicy::Digital.format(f64::INFINITY), "0");
    assert_eq!(format_number(-0.0, Category::Length), "0");
}

#[test]
fn linear_formula_shows_factor() {
    assert_eq!(
        get_formula(Category::Length, "km", "m").unwrap(),
        "1 Kilometer = 1000 Meter"
    );
    assert_eq!(
        get_formula(Category::Weight, "kg", "lb").unwrap(),
        "1 Kilogram = 2.2046 Pound"
    );
    assert_eq!(
        get_formula(Category::Volume, "l", "gal_us").unwrap(),
        "1 Liter = 0.26417 US Gallon"
    );
    assert_eq!(
        get_formula(Category::Length, "m", "ly").unwrap(),
        "1 Meter = 1.056971e-16 Light Year"
    );
    assert_eq!(
        get_formula(Category::DigitalStorage, "yb", "b").unwrap(),
        "1 Yottabyte = 1.000000e+24 Byte"
    );
}

#[test]
fn formula_rejects_unknown_units() {
    assert!(matches!(
        get_formula(Category::Length, "parsec", "m"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert!(get_formula(Category::Temperature, "c", "x").is_err());
}

#[test]
fn temperature_formula_is_symbolic_or_prose() {
    assert_eq!(
        get_formula(Category::Temperature, "c", "f").unwrap(),
        "°F = (°C × 9/5) + 32"
    );
    assert_eq!(
        get_formula(Category::Temperature, "°C", "°F").unwrap(),
        "°F = (°C × 9/5) + 32"
    );
    assert_eq!(
        get_formula(Category::Temperature, "r", "c").unwrap(),
        "°C = (°R - 491.67) × 5/9"
    );
    assert_eq!(
        get_formula(Category::Temperature, "k", "re").unwrap(),
        "To convert from Kelvin to Réaumur, first convert to Celsius, then to Réaumur"
    );
}

#[test]
fn symbolic_formulas_for_known_pairs() {
    assert_eq!(
        symbolic_formula(Category::Temperature, "c", "k").as_deref(),
        Some("K = °C + 273.15")
    );
    assert_eq!(
        symbolic_formula(Category::Density, "kg_m3", "g_cm3").as_deref(),
        Some("g/cm³ = kg/m³ ÷ 1,000")
    );
    assert_eq!(
        symbolic_formula(Category::DigitalStorage, "kib", "b").as_deref(),
        Some("1 Kibibyte = 1,024 Bytes")
    );
    assert_eq!(
        symbolic_formula(Category::DigitalTransfer, "B/s", "b/s").as_deref(),
        Some("1 Byte per second = 8 Bits per second")
    );
    assert_eq!(symbolic_formula(Category::DigitalTransfer, "bps", "Bps"), None);
    assert_eq!(symbolic_formula(Category::Density, "g_l", "kg_m3"), None);
    assert_eq!(symbolic_formula(Category::Length, "m", "ft"), None);
    assert_eq!(symbolic_formula(Category::Length, "parsec", "ft"), None);
}

#[test]
fn describe_renders_one_line() {
    assert_eq!(
        describe(Category::Length, 1.0, "m", "ft").unwrap().as_deref(),
        Some("1 m = 3.2808 ft")
    );
    assert_eq!(
        describe(Category::Temperature, 100.0, "c", "f").unwrap().as_deref(),
        Some("100°C = 212°F")
    );
    assert_eq!(
        describe(Category::DigitalStorage, 1.0, "mib", "kib").unwrap().as_deref(),
        Some("1 MiB = 1,024 KiB")
    );
    assert_eq!(describe(Category::Length, f64::NAN, "m", "ft"), Ok(None));
}
