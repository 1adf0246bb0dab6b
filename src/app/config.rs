use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DEFAULT_THOUSANDS_SEPARATOR: char = '\'';
const DEFAULT_DECIMAL_SEPARATOR: char = '.';
const DEFAULT_CURRENCY: &str = "CHF";

/// User settings, persisted through eframe storage.
///
/// Values are never changed in place: `Settings::default()` is the reset and
/// [`Settings::validated`] hands back a corrected copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub currency: String,
    pub defaults: Defaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            currency: DEFAULT_CURRENCY.to_owned(),
            defaults: Defaults::default(),
        }
    }
}

impl Settings {
    pub fn validated(self) -> Self {
        let (thousands_separator, decimal_separator) =
            if self.thousands_separator == self.decimal_separator {
                log::warn!(
                    "thousands and decimal separator are both '{}', restoring defaults",
                    self.decimal_separator
                );
                (DEFAULT_THOUSANDS_SEPARATOR, DEFAULT_DECIMAL_SEPARATOR)
            } else {
                (self.thousands_separator, self.decimal_separator)
            };

        let currency = match self.currency.trim() {
            "" => DEFAULT_CURRENCY.to_owned(),
            c => c.to_owned(),
        };

        Self {
            thousands_separator,
            decimal_separator,
            currency,
            ..self
        }
    }
}

/// Values loaded into the form by "reset".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub capital: Decimal,
    pub normal_rate: Decimal,
    pub bonus_rate: Decimal,
    pub tax_rate: Decimal,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            capital: Decimal::new(100_000, 0),
            normal_rate: Decimal::new(25, 1),
            bonus_rate: Decimal::new(50, 1),
            tax_rate: Decimal::new(35, 0),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    #[default]
    German,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::German, Language::English];
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::German => write!(f, "DE"),
            Language::English => write!(f, "EN"),
        }
    }
}
