use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use time::macros::date;
use time::{Date, Month, OffsetDateTime};

pub const CAPITAL_LABEL: &str = "Sparkapital";
pub const NORMAL_RATE_LABEL: &str = "Normaler Zinssatz";
pub const BONUS_RATE_LABEL: &str = "Bonus Zinssatz";
pub const TAX_RATE_LABEL: &str = "Steuersatz";

const EARLIEST_DATE: Date = date!(1900 - 01 - 01);
const MAX_YEARS_AHEAD: i32 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} ist erforderlich")]
    Required { field: String },

    #[error("Ungültiges Zahlenformat")]
    InvalidNumber,

    #[error("{field} muss grösser als 0 sein")]
    NotPositive { field: String },

    #[error("{field} ist zu gross")]
    TooLarge { field: String },

    #[error("{field} darf nicht negativ sein")]
    Negative { field: String },

    #[error("{field} darf nicht grösser als 100% sein")]
    AboveHundred { field: String },

    #[error("Datum ist zu weit in der Vergangenheit")]
    DateTooEarly,

    #[error("Datum ist zu weit in der Zukunft")]
    DateTooLate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
}

impl ValidationOutcome {
    pub fn success() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for ValidationOutcome {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Raw form contents as typed by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormInput {
    pub customer: String,
    pub capital: String,
    pub normal_rate: String,
    pub bonus_rate: String,
    pub tax_rate: String,
    pub birth_date: Date,
    pub calculation_date: Date,
}

/// Normalizes `'`/space thousands separators and a `,` decimal separator,
/// then parses culture-invariant. More than one decimal point is rejected.
pub fn parse_decimal(text: &str) -> Result<Decimal, ValidationError> {
    let normalized: String = text
        .chars()
        .filter(|c| *c != '\'' && *c != ' ')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    // Decimal::from_str skips '_' digit separators
    if normalized.contains('_') || normalized.matches('.').count() > 1 {
        return Err(ValidationError::InvalidNumber);
    }

    Decimal::from_str(normalized.trim()).map_err(|_| ValidationError::InvalidNumber)
}

fn required<'a>(text: &'a str, field: &str) -> Result<&'a str, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_owned(),
        });
    }
    Ok(text)
}

pub fn check_capital(text: &str) -> Result<Decimal, ValidationError> {
    let value = parse_decimal(required(text, CAPITAL_LABEL)?)?;

    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive {
            field: CAPITAL_LABEL.to_owned(),
        });
    }
    if value > Decimal::new(10_000_000_000, 0) {
        return Err(ValidationError::TooLarge {
            field: CAPITAL_LABEL.to_owned(),
        });
    }

    Ok(value)
}

pub fn check_rate(text: &str, field: &str) -> Result<Decimal, ValidationError> {
    let value = parse_decimal(required(text, field)?)?;

    if value < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: field.to_owned(),
        });
    }
    if value > Decimal::ONE_HUNDRED {
        return Err(ValidationError::AboveHundred {
            field: field.to_owned(),
        });
    }

    Ok(value)
}

pub fn check_date_at(date: Date, today: Date) -> Result<Date, ValidationError> {
    if date < EARLIEST_DATE {
        return Err(ValidationError::DateTooEarly);
    }
    if date > add_years(today, MAX_YEARS_AHEAD) {
        return Err(ValidationError::DateTooLate);
    }
    Ok(date)
}

pub fn validate_capital(text: &str) -> ValidationOutcome {
    check_capital(text).into()
}

pub fn validate_rate(text: &str, field: &str) -> ValidationOutcome {
    check_rate(text, field).into()
}

pub fn validate_tax_rate(text: &str) -> ValidationOutcome {
    validate_rate(text, TAX_RATE_LABEL)
}

pub fn validate_date(date: Date) -> ValidationOutcome {
    validate_date_at(date, today())
}

pub fn validate_date_at(date: Date, today: Date) -> ValidationOutcome {
    check_date_at(date, today).into()
}

/// First failing check of the form, in display order.
pub fn first_failure(form: &FormInput, today: Date) -> Option<ValidationOutcome> {
    [
        validate_capital(&form.capital),
        validate_rate(&form.normal_rate, NORMAL_RATE_LABEL),
        validate_rate(&form.bonus_rate, BONUS_RATE_LABEL),
        validate_tax_rate(&form.tax_rate),
        validate_date_at(form.birth_date, today),
    ]
    .into_iter()
    .find(|outcome| !outcome.valid)
}

pub fn is_valid_for_calculation(form: Option<&FormInput>) -> bool {
    let Some(form) = form else {
        return false;
    };

    validate_capital(&form.capital).valid
        && validate_rate(&form.normal_rate, NORMAL_RATE_LABEL).valid
        && validate_rate(&form.bonus_rate, BONUS_RATE_LABEL).valid
        && validate_tax_rate(&form.tax_rate).valid
        && validate_date(form.birth_date).valid
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

// Feb 29 falls back to Feb 28 in non-leap target years
pub fn add_years(date: Date, years: i32) -> Date {
    let year = date.year() + years;
    date.replace_year(year)
        .or_else(|_| Date::from_calendar_date(year, Month::February, 28))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn form() -> FormInput {
        FormInput {
            customer: String::new(),
            capital: "10000".to_owned(),
            normal_rate: "2.0".to_owned(),
            bonus_rate: "4.0".to_owned(),
            tax_rate: "35".to_owned(),
            birth_date: today(),
            calculation_date: today(),
        }
    }

    #[test]
    fn thousands_separators_normalize_to_same_value() {
        for text in ["1'000.50", "1 000.50", "1000,50", "1000.50"] {
            assert_eq!(validate_capital(text), ValidationOutcome::success(), "{text}");
            assert_eq!(parse_decimal(text), Ok(dec!(1000.50)), "{text}");
        }
    }

    #[test]
    fn capital_required() {
        for text in ["", "   "] {
            let outcome = validate_capital(text);
            assert!(!outcome.valid);
            assert_eq!(outcome.message, "Sparkapital ist erforderlich");
        }
    }

    #[test]
    fn capital_format_errors() {
        for text in ["abc", "1.000.50", "1,000.50", "12a", "1_000", "_5"] {
            let outcome = validate_capital(text);
            assert!(!outcome.valid, "{text}");
            assert_eq!(outcome.message, "Ungültiges Zahlenformat");
        }
    }

    #[test]
    fn capital_must_be_positive() {
        for text in ["0", "-100"] {
            let outcome = validate_capital(text);
            assert!(!outcome.valid);
            assert_eq!(outcome.message, "Sparkapital muss grösser als 0 sein");
        }
    }

    #[test]
    fn capital_upper_bound() {
        let outcome = validate_capital("20000000000");
        assert!(!outcome.valid);
        assert_eq!(outcome.message, "Sparkapital ist zu gross");
        assert!(validate_capital("10000000000").valid);
    }

    #[test]
    fn rate_bounds_are_inclusive() {
        assert!(validate_rate("0", NORMAL_RATE_LABEL).valid);
        assert!(validate_rate("100", NORMAL_RATE_LABEL).valid);

        let outcome = validate_rate("101", BONUS_RATE_LABEL);
        assert!(!outcome.valid);
        assert_eq!(outcome.message, "Bonus Zinssatz darf nicht grösser als 100% sein");

        let outcome = validate_rate("-1", BONUS_RATE_LABEL);
        assert!(!outcome.valid);
        assert_eq!(outcome.message, "Bonus Zinssatz darf nicht negativ sein");
    }

    #[test]
    fn rate_messages_use_field_label() {
        assert_eq!(
            validate_rate("", NORMAL_RATE_LABEL).message,
            "Normaler Zinssatz ist erforderlich"
        );
        assert_eq!(validate_rate("x", NORMAL_RATE_LABEL).message, "Ungültiges Zahlenformat");
    }

    #[test]
    fn tax_rate_uses_fixed_label() {
        assert_eq!(validate_tax_rate("").message, "Steuersatz ist erforderlich");
        assert_eq!(
            validate_tax_rate("150").message,
            "Steuersatz darf nicht grösser als 100% sein"
        );
        assert!(validate_tax_rate("35").valid);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let today = date!(2026 - 10 - 18);

        assert!(validate_date_at(date!(1900 - 01 - 01), today).valid);
        assert!(validate_date_at(date!(2036 - 10 - 18), today).valid);

        let outcome = validate_date_at(date!(1850 - 01 - 01), today);
        assert_eq!(outcome.message, "Datum ist zu weit in der Vergangenheit");
        let outcome = validate_date_at(date!(2041 - 10 - 18), today);
        assert_eq!(outcome.message, "Datum ist zu weit in der Zukunft");
        assert!(!validate_date_at(date!(2036 - 10 - 19), today).valid);
    }

    #[test]
    fn date_against_real_clock() {
        let now = today();
        assert!(validate_date(add_years(now, 10)).valid);
        assert!(!validate_date(add_years(now, 15)).valid);
        assert!(validate_date(date!(1900 - 01 - 01)).valid);
        assert!(!validate_date(date!(1850 - 01 - 01)).valid);
    }

    #[test]
    fn leap_day_adds_years_onto_feb_28() {
        assert_eq!(add_years(date!(2024 - 02 - 29), 10), date!(2034 - 02 - 28));
        assert_eq!(add_years(date!(2024 - 02 - 29), 4), date!(2028 - 02 - 29));
    }

    #[test]
    fn repeated_validation_is_stable() {
        for text in ["1'000.50", "abc", "-5", ""] {
            assert_eq!(validate_capital(text), validate_capital(text));
            assert_eq!(validate_tax_rate(text), validate_tax_rate(text));
        }
    }

    #[test]
    fn whole_form_gate() {
        assert!(!is_valid_for_calculation(None));
        assert!(is_valid_for_calculation(Some(&form())));

        let bad = FormInput {
            bonus_rate: "abc".to_owned(),
            ..form()
        };
        assert!(!is_valid_for_calculation(Some(&bad)));

        let old = FormInput {
            birth_date: date!(1850 - 01 - 01),
            ..form()
        };
        assert!(!is_valid_for_calculation(Some(&old)));
    }

    #[test]
    fn first_failure_reports_in_form_order() {
        assert_eq!(first_failure(&form(), today()), None);

        let bad = FormInput {
            capital: "0".to_owned(),
            tax_rate: "200".to_owned(),
            ..form()
        };
        let outcome = first_failure(&bad, today()).unwrap();
        assert_eq!(outcome.message, "Sparkapital muss grösser als 0 sein");
    }
}
