//! Display formatting for product cards.
//!
//! Number parsing follows the browser's `parseFloat`: the longest numeric
//! prefix wins and anything unparsable is NaN.

pub const NO_DESCRIPTION: &str = "No description";
pub const INVALID_DATE: &str = "Invalid Date";

pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < len && bytes[end] == b'.' {
        let mut cursor = end + 1;
        while cursor < len && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        frac_digits = cursor - end - 1;
        if int_digits + frac_digits > 0 {
            end = cursor;
        }
    }
    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < len && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exp_start = cursor;
        while cursor < len && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exp_start {
            end = cursor;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// `Number.prototype.toFixed(2)` as evaluated by the page's JS engine.
#[cfg(target_arch = "wasm32")]
pub fn to_fixed_2(value: f64) -> String {
    js_sys::Number::from(value)
        .to_fixed(2)
        .map(String::from)
        .unwrap_or_else(|_| format!("{value:.2}"))
}

/// `Number.prototype.toFixed(2)`: ties round away from zero and values of
/// 1e21 or more switch to exponent form.
#[cfg(not(target_arch = "wasm32"))]
pub fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= 1e21 {
        return format!("{value:e}").replacen('e', "e+", 1);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // every f64 fraction terminates within 1074 decimal places
    let exact = format!("{:.1074}", value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), "00"));
    let (cents, rest) = fraction.split_at(2);

    let mut digits: Vec<u8> = whole.bytes().chain(cents.bytes()).collect();
    if rest.as_bytes().first().is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let (whole, cents) = digits.split_at(digits.len() - 2);
    format!(
        "{sign}{}.{}",
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(cents)
    )
}

pub fn price_label(value: f64) -> String {
    format!("${}", to_fixed_2(value))
}

pub fn description_label(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NO_DESCRIPTION.to_string(),
    }
}

/// Calendar date of `raw` in the viewer's locale.
#[cfg(target_arch = "wasm32")]
pub fn locale_date(raw: &str) -> String {
    use wasm_bindgen::JsValue;

    let date = js_sys::Date::new(&JsValue::from_str(raw));
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}

/// Calendar date of `raw`, rendered the way an en-US browser does.
#[cfg(not(target_arch = "wasm32"))]
pub fn locale_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Timestamps with an offset are shifted to local time; naive ones are already local.
#[cfg(not(target_arch = "wasm32"))]
fn parse_timestamp(raw: &str) -> Option<chrono::NaiveDate> {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}
