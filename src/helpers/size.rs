//! Human readable file sizes

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count, e.g. `1536` -> `"1.5 KB"`.
///
/// Values are rounded to two decimals; missing or zero sizes are unknown.
pub fn format_file_size(bytes: Option<f64>) -> String {
    let bytes = match bytes {
        Some(b) if b > 0.0 => b,
        _ => return "Unknown size".to_string(),
    };

    let exp = ((bytes.ln() / 1024f64.ln()).floor().max(0.0) as usize).min(UNITS.len() - 1);
    let scaled = bytes / 1024f64.powi(exp as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exp])
}
