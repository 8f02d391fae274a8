/// Formats a fee with Indian digit grouping: the last three digits, then
/// groups of two (`150000` -> `1,50,000`).
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    let mut formatted = if negative { format!("-{}", grouped) } else { grouped };
    if fraction > 0 {
        let decimals = format!("{:02}", fraction);
        formatted.push('.');
        formatted.push_str(decimals.trim_end_matches('0'));
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_like_en_in() {
        assert_eq!(format_inr(0.0), "0");
        assert_eq!(format_inr(999.0), "999");
        assert_eq!(format_inr(1000.0), "1,000");
        assert_eq!(format_inr(15000.0), "15,000");
        assert_eq!(format_inr(150000.0), "1,50,000");
        assert_eq!(format_inr(12345678.0), "1,23,45,678");
    }

    #[test]
    fn keeps_up_to_two_decimals() {
        assert_eq!(format_inr(1499.5), "1,499.5");
        assert_eq!(format_inr(1499.25), "1,499.25");
    }
}
