use std::cmp::min;

use rust_decimal::Decimal;
use time::Date;

/// Placeholder shown when no customer name was entered.
pub const UNKNOWN_CUSTOMER: &str = "Unbekannt";

const YEAR_DAYS: i64 = 365;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculationInput {
    pub capital: Decimal,
    pub birth_date: Date,
    pub normal_rate: Decimal,
    pub bonus_rate: Decimal,
    pub tax_rate: Decimal,
    pub calculation_date: Date,
    pub customer: Option<String>,
}

/// Everything the result view shows. Money fields are rounded to cents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculationResult {
    pub capital: Decimal,
    pub customer: String,
    pub birth_date: Date,
    pub calculation_date: Date,
    pub normal_rate: Decimal,
    pub bonus_rate: Decimal,
    pub tax_rate: Decimal,
    pub bonus_days: u8,
    pub days_in_month: u8,
    pub normal_days: u8,
    pub gross_interest_normal: Decimal,
    pub gross_interest_bonus: Decimal,
    pub gross_interest_total: Decimal,
    pub tax_deduction: Decimal,
    pub net_interest: Decimal,
}

/// Marchzins for one account and one month.
///
/// The bonus rate applies from the 1st of the calculation month up to and
/// including the birthday, the normal rate for the rest of the month. Input
/// is expected to be validated already; nothing here rejects values.
pub struct Calculator {
    input: CalculationInput,
}

impl Calculator {
    pub fn new(input: CalculationInput) -> Self {
        Self { input }
    }

    pub fn days_in_month(&self) -> u8 {
        let date = self.input.calculation_date;
        date.month().length(date.year())
    }

    pub fn bonus_period_days(&self) -> u8 {
        let CalculationInput {
            birth_date,
            calculation_date,
            ..
        } = &self.input;

        if birth_date.month() != calculation_date.month()
            || birth_date.year() != calculation_date.year()
        {
            return 0;
        }

        // 1st of the month through the birthday, inclusive
        min(birth_date.day(), self.days_in_month())
    }

    pub fn normal_period_days(&self) -> u8 {
        self.days_in_month().saturating_sub(self.bonus_period_days())
    }

    pub fn gross_interest_normal(&self) -> Decimal {
        let days = self.normal_period_days();
        if days == 0 {
            return Decimal::ZERO;
        }
        calc_interest(self.input.capital, self.input.normal_rate, days).unwrap_or_default()
    }

    pub fn gross_interest_bonus(&self) -> Decimal {
        let days = self.bonus_period_days();
        if days == 0 {
            return Decimal::ZERO;
        }
        calc_interest(self.input.capital, self.input.bonus_rate, days).unwrap_or_default()
    }

    pub fn gross_interest_total(&self) -> Decimal {
        self.gross_interest_normal()
            .checked_add(self.gross_interest_bonus())
            .unwrap_or_default()
    }

    pub fn tax_deduction(&self) -> Decimal {
        self.gross_interest_total()
            .checked_mul(self.input.tax_rate)
            .and_then(|d| d.checked_div(Decimal::ONE_HUNDRED))
            .unwrap_or_default()
    }

    pub fn net_interest(&self) -> Decimal {
        self.gross_interest_total()
            .checked_sub(self.tax_deduction())
            .unwrap_or_default()
    }

    pub fn all_results(&self) -> CalculationResult {
        let input = &self.input;

        // Math.Round semantics: two places, midpoint to even
        CalculationResult {
            capital: input.capital,
            customer: input
                .customer
                .clone()
                .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_owned()),
            birth_date: input.birth_date,
            calculation_date: input.calculation_date,
            normal_rate: input.normal_rate,
            bonus_rate: input.bonus_rate,
            tax_rate: input.tax_rate,
            bonus_days: self.bonus_period_days(),
            days_in_month: self.days_in_month(),
            normal_days: self.normal_period_days(),
            gross_interest_normal: self.gross_interest_normal().round_dp(2),
            gross_interest_bonus: self.gross_interest_bonus().round_dp(2),
            gross_interest_total: self.gross_interest_total().round_dp(2),
            tax_deduction: self.tax_deduction().round_dp(2),
            net_interest: self.net_interest().round_dp(2),
        }
    }
}

// capital * rate / 100 * days / 365, overflow yields None
fn calc_interest(principal: Decimal, rate: Decimal, days: u8) -> Option<Decimal> {
    principal
        .checked_mul(rate)
        .and_then(|d| d.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|d| d.checked_mul(Decimal::from(days)))
        .and_then(|d| d.checked_div(Decimal::from(YEAR_DAYS)))
}
