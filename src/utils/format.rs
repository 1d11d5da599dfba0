/// Číslo s oddělovači tisíců
/// Příklad: 1234567 -> "1 234 567"
pub fn format_count(num: u64) -> String {
    let digits = num.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Příklad: (2, 3) -> "2/3 (67%)"
pub fn format_ratio(part: u64, whole: u64) -> String {
    if whole == 0 {
        return format!("{}/{}", part, whole);
    }
    let percent = (part as f64 / whole as f64 * 100.0).round() as u64;
    format!("{}/{} ({}%)", part, whole, percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(123), "123");
        assert_eq!(format_count(1234), "1 234");
        assert_eq!(format_count(1234567), "1 234 567");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(2, 3), "2/3 (67%)");
        assert_eq!(format_ratio(7, 10), "7/10 (70%)");
        assert_eq!(format_ratio(0, 0), "0/0");
    }
}
