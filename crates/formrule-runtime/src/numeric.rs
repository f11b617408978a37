//! Numeric parsing for comparisons

/// Plain decimal: optional sign, digits, at most one `.`, at least one
/// digit. Surrounding whitespace is ignored.
pub fn is_decimal(s: &str) -> bool {
    let s = s.trim();
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);

    let mut seen_digit = false;
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Parse a plain decimal (see [`is_decimal`])
pub fn parse_decimal(s: &str) -> Option<f64> {
    if is_decimal(s) {
        s.trim().parse().ok()
    } else {
        None
    }
}

/// Lenient number parse used by `==`: anything `f64` accepts (including
/// exponents), provided it is non-empty and finite
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Numeric equality, retried with the digit-group symbol removed when the
/// raw values are not equal numbers
pub fn numbers_equal(left: &str, right: &str, digit_group_symbol: Option<&str>) -> bool {
    if matches!((parse_number(left), parse_number(right)), (Some(l), Some(r)) if l == r) {
        return true;
    }

    match digit_group_symbol {
        Some(symbol) if !symbol.is_empty() => {
            let left = left.replace(symbol, "");
            let right = right.replace(symbol, "");
            matches!((parse_number(&left), parse_number(&right)), (Some(l), Some(r)) if l == r)
        }
        _ => false,
    }
}
