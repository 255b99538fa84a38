use crate::models::{CatalogEntry, ResolvedUnit};
use crate::pricing::constants::*;

/// Parse a free-form unit size such as `"1 kg"`, `"500 gr"` or `"900 ml"` into grams.
///
/// The string is split on its first run of whitespace. The first token's
/// leading number is the magnitude (1 if it has none). The lowercased second token picks the
/// scale: anything containing `kg` multiplies by 1000; `gr`, `g` or `ml` keep
/// the magnitude as is. A missing or unknown token yields 1.
///
/// Zero and negative magnitudes are passed through unclamped.
pub fn parse_unit(raw: &str) -> f64 {
    let lowered = raw.trim().to_lowercase();
    let (magnitude_token, unit_token) = match lowered.split_once(char::is_whitespace) {
        Some((m, u)) => (m, Some(u.trim_start())),
        None => (lowered.as_str(), None),
    };

    let magnitude = parse_leading_float(magnitude_token).unwrap_or(DEFAULT_MAGNITUDE);

    let Some(unit) = unit_token.filter(|u| !u.is_empty()) else {
        return FALLBACK_GRAMS_PER_UNIT;
    };

    if KILO_TOKENS.iter().any(|t| unit.contains(t)) {
        magnitude * GRAMS_PER_KG
    } else if GRAM_TOKENS.iter().any(|t| unit.contains(t)) {
        magnitude
    } else {
        FALLBACK_GRAMS_PER_UNIT
    }
}

/// Parse a catalog price such as `"$2000"`.
///
/// The leading number after the currency marker is taken, so `"$2000 c/u"`
/// is 2000 and `"$1,100"` is 1. Input without a leading number yields 0.
pub fn parse_price(raw: &str) -> f64 {
    parse_leading_float(&raw.replacen(CURRENCY_MARKER, "", 1)).unwrap_or(0.0)
}

/// Resolve both fields of a catalog entry.
pub fn resolve_entry(entry: &CatalogEntry) -> ResolvedUnit {
    ResolvedUnit {
        grams_per_unit: parse_unit(&entry.unit),
        unit_price: parse_price(&entry.price),
    }
}

/// Parse the longest decimal number at the start of `text`, after leading
/// whitespace. Trailing text is ignored.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Returns `None` when no digits lead the text or the value is not
/// finite.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_start = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
