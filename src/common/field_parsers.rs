//! Field parsing utilities shared by the three parsers
//!
//! Strict numeric coercion, filename handling and line splitting. Every
//! helper trims its input first; nothing here reports errors directly, the
//! caller decides whether a failure is fatal or a warning.

/// Parse a number the way the site's forms always have: the whole trimmed
/// field must be a finite number, otherwise `None`.
///
/// Accepts decimal and exponent notation (`12`, `-0.5`, `.5`, `1.`, `1e-3`)
/// and unsigned `0x`/`0o`/`0b` integer literals. Rejects empty text,
/// trailing garbage, `NaN` and infinities.
pub fn parse_number_strict(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(parsed) = parse_radix_literal(trimmed) {
        return Some(parsed);
    }

    // Rust accepts these spellings, the field format does not
    let lowered = trimmed.trim_start_matches(['+', '-']).to_ascii_lowercase();
    if lowered.starts_with("inf") || lowered.starts_with("nan") {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

/// Unsigned integer literal with a `0x`, `0o` or `0b` prefix.
///
/// Digits accumulate in `f64`, so literals wider than 64 bits still parse
/// (with the usual loss of precision); overflow to infinity is rejected.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let lowered = text.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lowered.strip_prefix("0x") {
        (rest.to_string(), 16)
    } else if let Some(rest) = lowered.strip_prefix("0o") {
        (rest.to_string(), 8)
    } else if let Some(rest) = lowered.strip_prefix("0b") {
        (rest.to_string(), 2)
    } else {
        return None;
    };

    if digits.is_empty() {
        return None;
    }

    digits
        .chars()
        .try_fold(0f64, |acc, c| {
            c.to_digit(radix)
                .map(|digit| acc * f64::from(radix) + f64::from(digit))
        })
        .filter(|value| value.is_finite())
}

/// Trimmed copy of an optional raw value (`None` reads as empty)
pub fn trimmed_or_empty(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// File name with directories and the last extension removed.
///
/// Both `/` and `\` count as separators. A leading dot is part of the name
/// (`.hidden` stays `.hidden`).
pub fn base_filename(original_filename: &str) -> String {
    let trimmed = original_filename.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let short_name = match trimmed.rfind(['/', '\\']) {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    };

    match short_name.rfind('.') {
        Some(index) if index > 0 => short_name[..index].to_string(),
        _ => short_name.to_string(),
    }
}

/// Split text into lines, treating `\r\n`, `\r` and `\n` alike
pub fn split_lines(source_text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = source_text;

    while let Some(index) = rest.find(['\r', '\n']) {
        lines.push(&rest[..index]);
        let skip = if rest[index..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[index + skip..];
    }
    lines.push(rest);

    lines
}

/// Whitespace-delimited tokens of a line
pub fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_strict_accepts() {
        assert_eq!(parse_number_strict("12"), Some(12.0));
        assert_eq!(parse_number_strict("  -0.5 "), Some(-0.5));
        assert_eq!(parse_number_strict(".5"), Some(0.5));
        assert_eq!(parse_number_strict("1."), Some(1.0));
        assert_eq!(parse_number_strict("+3"), Some(3.0));
        assert_eq!(parse_number_strict("1e-3"), Some(0.001));
        assert_eq!(parse_number_strict("1.2E3"), Some(1200.0));
        assert_eq!(parse_number_strict("0x1A"), Some(26.0));
        assert_eq!(
            parse_number_strict("0x10000000000000000"),
            Some(18446744073709551616.0)
        );
        assert_eq!(parse_number_strict("0b101"), Some(5.0));
        assert_eq!(parse_number_strict("0b101"), Some(5.0));
    }

    #[test]
    fn test_parse_number_strict_rejects() {
        assert_eq!(parse_number_strict(""), None);
        assert_eq!(parse_number_strict("   "), None);
        assert_eq!(parse_number_strict("12abc"), None);
        assert_eq!(parse_number_strict("1,5"), None);
        assert_eq!(parse_number_strict("NaN"), None);
        assert_eq!(parse_number_strict("Infinity"), None);
        assert_eq!(parse_number_strict("-inf"), None);
        assert_eq!(parse_number_strict("1e400"), None);
        assert_eq!(parse_number_strict("0x"), None);
        assert_eq!(parse_number_strict("P"), None);
    }

    #[test]
    fn test_base_filename() {
        assert_eq!(base_filename("H128W.bsx"), "H128W");
        assert_eq!(base_filename("/tmp/motors/H128W.bsx"), "H128W");
        assert_eq!(base_filename("C:\\motors\\K550.eng"), "K550");
        assert_eq!(base_filename("archive.tar.gz"), "archive.tar");
        assert_eq!(base_filename(".hidden"), ".hidden");
        assert_eq!(base_filename("noext"), "noext");
        assert_eq!(base_filename("   "), "");
    }

    #[test]
    fn test_split_lines_mixed_endings() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_trimmed_or_empty() {
        assert_eq!(trimmed_or_empty(Some("  x ")), "x");
        assert_eq!(trimmed_or_empty(None), "");
    }
}
