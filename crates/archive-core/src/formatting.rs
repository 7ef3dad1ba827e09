//! Presentation helpers shared by the report and the console output.

/// Separator used when a sequence field is flattened into one cell.
pub const LIST_SEPARATOR: &str = ", ";

/// Calculate `(part / whole) * 100` without rounding.
///
/// Returns `0.0` if `whole` is zero to avoid division by zero.
///
/// # Examples
///
/// ```
/// use archive_core::formatting::percentage;
///
/// assert!((percentage(1, 4) - 25.0).abs() < 1e-9);
/// assert_eq!(percentage(3, 0), 0.0);
/// ```
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64) * 100.0
}

/// Render a percentage with exactly two decimal digits and a `%` suffix.
///
/// Exact half-hundredths round away from zero, so 0.125 renders as `0.13%`.
///
/// # Examples
///
/// ```
/// use archive_core::formatting::format_percentage;
///
/// assert_eq!(format_percentage(100.0), "100.00%");
/// assert_eq!(format_percentage(100.0 / 3.0), "33.33%");
/// ```
pub fn format_percentage(value: f64) -> String {
    if is_exact_half_hundredth(value) {
        let hundredths = (value * 100.0).round();
        return format!("{:.2}%", hundredths / 100.0);
    }
    format!("{:.2}%", value)
}

/// A binary float sits exactly halfway between two hundredths only when it is
/// an odd multiple of 1/8.
fn is_exact_half_hundredth(value: f64) -> bool {
    let eighths = value * 8.0;
    eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0
}

/// Join a sequence field for display in a single cell.
///
/// # Examples
///
/// ```
/// use archive_core::formatting::join_list;
///
/// assert_eq!(join_list(&["@a".to_string(), "@b".to_string()]), "@a, @b");
/// assert_eq!(join_list(&[]), "");
/// ```
pub fn join_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

/// `"Yes"` / `"No"` rendering of a flag.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Format a signed count with thousands separators.
///
/// # Examples
///
/// ```
/// use archive_core::formatting::format_count;
///
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// assert_eq!(format_count(-4_200), "-4,200");
/// ```
pub fn format_count(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// File size in whole kilobytes, rounded to nearest.
pub fn size_in_kb(bytes: u64) -> u64 {
    (bytes as f64 / 1024.0).round() as u64
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
