//! Duration literal parsing.

/// Nanoseconds per unit, longest unit spellings first so `ms` wins
/// over `m`.
const UNITS: [(&str, i64); 7] = [
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 3_600 * 1_000_000_000),
];

/// Parses a duration lexeme into signed nanoseconds.
///
/// Accepts an optional sign followed by one or more groups of a decimal
/// value and a unit, e.g. `150ms`, `-1.5h`, `1h30m`. Returns `None` on
/// unknown units, malformed values, or overflow.
pub(crate) fn parse_duration(s: &str) -> Option<i64> {
    let (negative, mut rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if rest.is_empty() {
        return None;
    }

    let mut total: i64 = 0;

    while !rest.is_empty() {
        // Integer part
        let int_len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if int_len == 0 && !rest.starts_with('.') {
            return None;
        }
        let int_part: i64 = if int_len > 0 {
            rest[..int_len].parse().ok()?
        } else {
            0
        };
        rest = &rest[int_len..];

        // Fractional part
        let mut fraction = 0.0f64;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            if frac_len == 0 {
                return None;
            }
            fraction = format!("0.{}", &after_dot[..frac_len]).parse().ok()?;
            rest = &after_dot[frac_len..];
        }

        // Unit
        let mut unit = None;
        for (spelling, nanos) in UNITS {
            if let Some(after_unit) = rest.strip_prefix(spelling) {
                unit = Some(nanos);
                rest = after_unit;
                break;
            }
        }
        let unit = unit?;

        let int_nanos = int_part.checked_mul(unit)?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let frac_nanos = (fraction * unit as f64).round() as i64;
        total = total.checked_add(int_nanos)?.checked_add(frac_nanos)?;
    }

    Some(if negative { -total } else { total })
}
