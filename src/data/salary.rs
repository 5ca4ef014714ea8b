use super::model::CellValue;

// ---------------------------------------------------------------------------
// Salary extraction – free text → numeric
// ---------------------------------------------------------------------------

/// Numeric salary for a single cell.
///
/// Numeric cells convert directly. Text cells go through [`parse_salary`].
/// Anything else (including `Null`) is a missing value.
pub fn salary_value(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::String(s) => parse_salary(s),
        other => other.as_f64(),
    }
}

/// Extract the first numeric amount from free-text salary strings like
/// `"$45,000 - $55,000"` (→ `45000`) or `"₹8.5 LPA"` (→ `8.5`).
///
/// Thousands separators are stripped, then the first run of digits with an
/// optional single decimal part is taken. Text with no digits, such as
/// `"Not Disclosed"`, yields `None`.
pub fn parse_salary(text: &str) -> Option<f64> {
    let cleaned = text.replace(',', "");
    let number = first_number_run(&cleaned)?;
    number.parse::<f64>().ok()
}

/// The first `digits[.digits]` substring, or `None` when there is none.
fn first_number_run(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    // A decimal part counts only when a digit follows the dot.
    if end < bytes.len()
        && bytes[end] == b'.'
        && bytes.get(end + 1).is_some_and(|b| b.is_ascii_digit())
    {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    Some(&s[start..end])
}
