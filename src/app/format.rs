use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

use crate::app::config::Settings;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[day].[month].[year]");

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("'{0}' ist keine gültige Zahl")]
    NotANumber(String),

    #[error("'{0}' ist kein gültiges Datum (TT.MM.JJJJ)")]
    InvalidDate(String),
}

/// Display and input format for amounts, taken from the user settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub currency: String,
}

impl From<&Settings> for NumberFormat {
    fn from(settings: &Settings) -> Self {
        Self {
            thousands_separator: settings.thousands_separator,
            decimal_separator: settings.decimal_separator,
            currency: settings.currency.clone(),
        }
    }
}

impl NumberFormat {
    pub fn parse_input(&self, input: &str) -> Result<Decimal, FormatError> {
        let mut text = input.trim().to_owned();
        if !self.currency.is_empty() {
            text = text.replace(self.currency.as_str(), "");
        }

        let normalized: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '%' && *c != self.thousands_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();

        Decimal::from_str(&normalized).map_err(|_| FormatError::NotANumber(input.to_owned()))
    }

    pub fn format_currency(&self, value: Decimal) -> String {
        format!("{} {}", self.currency, self.format_amount(value))
    }

    pub fn format_percent(&self, value: Decimal) -> String {
        format!("{}%", self.format_amount(value))
    }

    pub fn format_integer(&self, value: i64) -> String {
        let digits = group(&value.unsigned_abs().to_string(), self.thousands_separator);
        if value < 0 {
            format!("-{digits}")
        } else {
            digits
        }
    }

    /// Text put back into an input field: no grouping, trailing zeros dropped.
    pub fn format_plain(&self, value: Decimal) -> String {
        value
            .normalize()
            .to_string()
            .replace('.', &self.decimal_separator.to_string())
    }

    fn format_amount(&self, value: Decimal) -> String {
        let rounded = value.round_dp(2);
        let text = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!(
            "{sign}{}{}{frac_part}",
            group(int_part, self.thousands_separator),
            self.decimal_separator
        )
    }
}

fn group(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

pub fn parse_date(input: &str) -> Result<Date, FormatError> {
    Date::parse(input.trim(), DATE_FORMAT).map_err(|_| FormatError::InvalidDate(input.to_owned()))
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use time::macros::date;

    use super::*;

    fn swiss() -> NumberFormat {
        NumberFormat::from(&Settings::default())
    }

    fn english() -> NumberFormat {
        NumberFormat {
            thousands_separator: ',',
            decimal_separator: '.',
            currency: "USD".to_owned(),
        }
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(swiss().format_currency(dec!(1234.5)), "CHF 1'234.50");
        assert_eq!(swiss().format_currency(dec!(100000)), "CHF 100'000.00");
        assert_eq!(swiss().format_currency(dec!(12.345)), "CHF 12.34");
        assert_eq!(english().format_currency(dec!(1234567.891)), "USD 1,234,567.89");
        assert_eq!(swiss().format_currency(dec!(-1234.5)), "CHF -1'234.50");
        assert_eq!(swiss().format_currency(Decimal::ZERO), "CHF 0.00");
    }

    #[test]
    fn comma_decimal_separator() {
        let fmt = NumberFormat {
            thousands_separator: '.',
            decimal_separator: ',',
            currency: "EUR".to_owned(),
        };
        assert_eq!(fmt.format_currency(dec!(1234.5)), "EUR 1.234,50");
        assert_eq!(fmt.parse_input("EUR 1.234,50"), Ok(dec!(1234.50)));
        assert_eq!(fmt.format_plain(dec!(2.50)), "2,5");
    }

    #[test]
    fn percent_and_integer() {
        assert_eq!(swiss().format_percent(dec!(2.5)), "2.50%");
        assert_eq!(swiss().format_integer(1234567), "1'234'567");
        assert_eq!(swiss().format_integer(-1234), "-1'234");
        assert_eq!(swiss().format_integer(15), "15");
    }

    #[test]
    fn parse_accepts_own_output() {
        let fmt = swiss();
        assert_eq!(fmt.parse_input(&fmt.format_currency(dec!(98765.43))), Ok(dec!(98765.43)));
        assert_eq!(fmt.parse_input("2.5%"), Ok(dec!(2.5)));
        assert_eq!(fmt.parse_input(" 1'000 "), Ok(dec!(1000)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            swiss().parse_input("abc"),
            Err(FormatError::NotANumber("abc".to_owned()))
        );
        assert!(swiss().parse_input("").is_err());
    }

    #[test]
    fn dates_use_day_month_year() {
        assert_eq!(parse_date("15.03.2024"), Ok(date!(2024 - 03 - 15)));
        assert_eq!(format_date(date!(2024 - 03 - 05)), "05.03.2024");
        assert!(matches!(parse_date("2024-03-15"), Err(FormatError::InvalidDate(_))));
        assert!(parse_date("31.02.2024").is_err());
    }
}
