use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Two decimals with thousands separators, e.g. `$12,500.00`
pub fn format_money(value: Decimal, currency_symbol: &str) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{rounded:.2}");
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole),
    };
    format!("{sign}{currency_symbol}{}.{frac}", group_thousands(digits))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Day-first, as on the printed statements
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_gets_grouped() {
        assert_eq!(format_money(Decimal::from(5000), "$"), "$5,000.00");
        assert_eq!(format_money(Decimal::from(1234567), "$"), "$1,234,567.00");
        assert_eq!(format_money(Decimal::ZERO, "$"), "$0.00");
        assert_eq!(format_money(Decimal::new(99, 2), "€"), "€0.99");
    }

    #[test]
    fn money_rounds_to_cents() {
        assert_eq!(format_money(Decimal::new(12345, 3), "$"), "$12.35");
    }

    #[test]
    fn negative_sign_leads() {
        assert_eq!(format_money(Decimal::new(-150050, 2), "$"), "-$1,500.50");
    }

    #[test]
    fn dates_are_day_first() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        assert_eq!(format_date(date), "15/03/2023");
    }
}
