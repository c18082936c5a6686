/// Format a rial amount with thousands separators, rounded to whole units
pub fn format_amount(value: f64) -> String {
    let units = value.abs().round() as i64;

    // Add thousands separators
    let digits = units.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();

    if value < 0.0 && units != 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount in compact form (e.g. 2.1T, 450M, 50K)
pub fn format_compact_amount(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000_000_000.0 {
        format!("{}{:.1}T", sign, abs_value / 1_000_000_000_000.0)
    } else if abs_value >= 1_000_000_000.0 {
        format!("{}{:.1}B", sign, abs_value / 1_000_000_000.0)
    } else if abs_value >= 1_000_000.0 {
        format!("{}{:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}{:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}{:.0}", sign, abs_value)
    }
}

/// Format a fraction as a whole percentage (0.7 becomes "70%")
pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}
