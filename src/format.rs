//! 표시용 숫자 포맷터.
//!
//! 카테고리마다 과학적 표기 임계값이 다르므로 정책을 하나로 합치지 않는다.

use crate::category::Category;

/// 과학적 표기에서 쓰는 소수 자릿수.
pub const EXPONENT_DIGITS: usize = 6;

/// f64의 10진 전개가 끝나는 최대 소수 자릿수(최소 비정규수 2^-1074).
const EXACT_FRACTION_DIGITS: usize = 1074;

/// 숫자 표시 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPolicy {
    /// |v| ≥ 1e10 또는 0 < |v| < 1e-6 이면 과학적 표기.
    General,
    /// |v| ≥ 1e10 또는 0 < |v| < 1e-10 이면 과학적 표기. 환산식(formula)에도 쓴다.
    Compact,
    /// |v| > 1e21 또는 0 < |v| < 1e-6 이면 과학적 표기, 그 외에는 천 단위 구분 기호와
    /// 최대 6자리 소수.
    Digital,
    /// 과학적 표기 없이 최대 소수 2자리.
    Temperature,
}

impl FormatPolicy {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Length | Category::Weight => FormatPolicy::Compact,
            Category::Area | Category::Volume | Category::Density => FormatPolicy::General,
            Category::DigitalStorage | Category::DigitalTransfer => FormatPolicy::Digital,
            Category::Temperature => FormatPolicy::Temperature,
        }
    }

    /// 값을 표시 문자열로 만든다. 유한하지 않은 값은 "0"으로 표시한다.
    pub fn format(self, value: f64) -> String {
        if !value.is_finite() {
            return "0".to_string();
        }
        match self {
            FormatPolicy::General => adaptive(value, 1e10, 1e-6),
            FormatPolicy::Compact => adaptive(value, 1e10, 1e-10),
            FormatPolicy::Digital => digital(value),
            FormatPolicy::Temperature => trim_fraction(&fixed(value, 2)),
        }
    }
}

/// 카테고리 정책에 따라 숫자를 표시 문자열로 만든다.
pub fn format_number(value: f64, category: Category) -> String {
    FormatPolicy::for_category(category).format(value)
}

/// 크기에 따른 최대 소수 자릿수.
pub fn magnitude_decimals(abs: f64) -> usize {
    if abs >= 100.0 {
        2
    } else if abs >= 10.0 {
        3
    } else if abs >= 1.0 {
        4
    } else if abs >= 0.1 {
        5
    } else {
        6
    }
}

fn adaptive(value: f64, upper: f64, lower: f64) -> String {
    let abs = value.abs();
    if abs >= upper || (abs > 0.0 && abs < lower) {
        return exponential(value);
    }
    let decimals = magnitude_decimals(abs);
    trim_fraction(&fixed(value, decimals))
}

fn digital(value: f64) -> String {
    let abs = value.abs();
    if abs > 1e21 || (abs > 0.0 && abs < 1e-6) {
        return exponential(value);
    }
    group_thousands(&trim_fraction(&fixed(value, 6)))
}

/// 소수 `decimals`자리 고정 표기. 정확한 10진 전개에서 반올림하며 절반은 0에서 먼 쪽으로 올린다.
pub fn fixed(value: f64, decimals: usize) -> String {
    let (int_part, frac_part) = exact_digits(value.abs());
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    if frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        increment(&mut digits);
    }
    let (int_digits, frac_digits) = digits.split_at(digits.len() - decimals);
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(int_digits.iter().map(|&d| char::from(d)));
    if !frac_digits.is_empty() {
        out.push('.');
        out.extend(frac_digits.iter().map(|&d| char::from(d)));
    }
    out
}

/// `1.230000e-7`, `1.234568e+10` 형태. 지수 부호는 항상 표시한다.
pub fn exponential(value: f64) -> String {
    let (int_part, frac_part) = exact_digits(value.abs());
    let all: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let Some(first) = all.iter().position(|&d| d != b'0') else {
        return format!("{sign}0.{}e+0", "0".repeat(EXPONENT_DIGITS));
    };
    let mut exponent = int_part.len() as i64 - 1 - first as i64;
    let end = (first + EXPONENT_DIGITS + 1).min(all.len());
    let mut mantissa = all[first..end].to_vec();
    mantissa.resize(EXPONENT_DIGITS + 1, b'0');
    if all.get(end).is_some_and(|&d| d >= b'5') && increment(&mut mantissa) {
        mantissa.pop();
        exponent += 1;
    }
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    let lead = char::from(mantissa[0]);
    let rest: String = mantissa[1..].iter().map(|&d| char::from(d)).collect();
    format!("{sign}{lead}.{rest}e{exp_sign}{}", exponent.abs())
}

/// 절댓값의 정확한 10진 전개를 정수부와 소수부 숫자열로 나눈다.
fn exact_digits(abs: f64) -> (String, String) {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, abs);
    match exact.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (exact, String::new()),
    }
}

/// ASCII 숫자열에 1을 더한다. 자리 올림으로 길이가 늘면 `true`.
fn increment(digits: &mut Vec<u8>) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    digits.insert(0, b'1');
    true
}

/// 소수부의 끝 0과 남는 소수점을 지운다. "-0"은 "0"으로 바꾼다.
fn trim_fraction(s: &str) -> String {
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros_and_point() {
        assert_eq!(trim_fraction("12.3400"), "12.34");
        assert_eq!(trim_fraction("1500.00"), "1500");
        assert_eq!(trim_fraction("-0.00"), "0");
        assert_eq!(trim_fraction("100"), "100");
    }

    #[test]
    fn groups_integer_part_only() {
        assert_eq!(group_thousands("1024"), "1,024");
        assert_eq!(group_thousands("1000000.125"), "1,000,000.125");
        assert_eq!(group_thousands("-12345"), "-12,345");
        assert_eq!(group_thousands("999"), "999");
    }

    #[test]
    fn exponent_sign_is_explicit() {
        assert_eq!(exponential(1.23e-7), "1.230000e-7");
        assert_eq!(exponential(12_345_678_901.0), "1.234568e+10");
        assert_eq!(exponential(-2.5e-8), "-2.500000e-8");
    }

    #[test]
    fn exponent_ties_round_up() {
        assert_eq!(exponential(12_345_665_000.0), "1.234567e+10");
        assert_eq!(exponential(99_999_995_000.0), "1.000000e+11");
    }

    #[test]
    fn fixed_carries_into_integer_part() {
        assert_eq!(fixed(9.995, 2), "9.99");
        assert_eq!(fixed(99.5, 0), "100");
        assert_eq!(fixed(0.5, 0), "1");
        assert_eq!(fixed(-0.125, 2), "-0.13");
        assert_eq!(fixed(1.0, 3), "1.000");
    }
}
