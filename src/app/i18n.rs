use crate::app::config::Language;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Text {
    Title,
    Settings,
    CustomerData,
    RatesParameters,
    Instructions,
    CustomerName,
    CustomerNamePlaceholder,
    BirthDate,
    CurrentDate,
    SavingsCapital,
    NormalRate,
    BonusRate,
    WithholdingTax,
    Calculate,
    Reset,
    NewCalculation,
    CopySummary,
    Instruction1,
    Instruction2,
    Instruction3,
    Instruction4,
    Instruction5,
    InstructionNote,
    CalculationSuccessful,
    DetailedResult,
    Customer,
    Capital,
    Birthday,
    InterestRates,
    NormalPeriod,
    BonusPeriod,
    GrossInterestTotal,
    WithholdingTaxAmount,
    NetInterest,
    Days,
    CalculatedOn,
    Language,
    DefaultCurrency,
    NumberFormat,
    ThousandsSeparator,
    DecimalSeparator,
    DefaultValues,
    NormalPercent,
    BonusPercent,
    TaxPercent,
    ResetToDefaults,
    Save,
    Cancel,
}

/// Looks up the label for `text` in `language`.
pub fn tr(language: Language, text: Text) -> &'static str {
    use Language::{English as En, German as De};

    match (text, language) {
        (Text::Title, De) => "Marchzins-Bonus Tool",
        (Text::Title, En) => "March Interest Bonus Tool",
        (Text::Settings, De) => "Einstellungen",
        (Text::Settings, En) => "Settings",
        (Text::CustomerData, De) => "Kundendaten",
        (Text::CustomerData, En) => "Customer Data",
        (Text::RatesParameters, De) => "Zinssätze & Parameter",
        (Text::RatesParameters, En) => "Interest Rates & Parameters",
        (Text::Instructions, De) => "Anleitung",
        (Text::Instructions, En) => "Instructions",
        (Text::CustomerName, De) => "Kundenname (optional)",
        (Text::CustomerName, En) => "Customer Name (optional)",
        (Text::CustomerNamePlaceholder, De) => "Max Mustermann",
        (Text::CustomerNamePlaceholder, En) => "John Doe",
        (Text::BirthDate, De) => "Geburtsdatum",
        (Text::BirthDate, En) => "Date of Birth",
        (Text::CurrentDate, De) => "Aktuelles Datum",
        (Text::CurrentDate, En) => "Current Date",
        (Text::SavingsCapital, De) => "Sparkapital",
        (Text::SavingsCapital, En) => "Savings Capital",
        (Text::NormalRate, De) => "Normaler Zinssatz (%)",
        (Text::NormalRate, En) => "Normal Interest Rate (%)",
        (Text::BonusRate, De) => "Erhöhter Zinssatz (%)",
        (Text::BonusRate, En) => "Increased Interest Rate (%)",
        (Text::WithholdingTax, De) => "Verrechnungssteuer (%)",
        (Text::WithholdingTax, En) => "Withholding Tax (%)",
        (Text::Calculate, De) => "Berechnen",
        (Text::Calculate, En) => "Calculate",
        (Text::Reset, De) => "Zurücksetzen",
        (Text::Reset, En) => "Reset",
        (Text::NewCalculation, De) => "Neue Berechnung",
        (Text::NewCalculation, En) => "New Calculation",
        (Text::CopySummary, De) => "Zusammenfassung kopieren",
        (Text::CopySummary, En) => "Copy summary",
        (Text::Instruction1, De) => "Kundendaten eingeben",
        (Text::Instruction1, En) => "Enter customer data",
        (Text::Instruction2, De) => "Geburtsdatum im aktuellen Monat wählen",
        (Text::Instruction2, En) => "Select birth date in current month",
        (Text::Instruction3, De) => "Sparkapital eingeben",
        (Text::Instruction3, En) => "Enter savings capital",
        (Text::Instruction4, De) => "Zinssätze überprüfen",
        (Text::Instruction4, En) => "Check interest rates",
        (Text::Instruction5, De) => "Berechnen klicken",
        (Text::Instruction5, En) => "Click Calculate",
        (Text::InstructionNote, De) => {
            "Der Marchzins-Bonus gilt vom 1. des Monats bis zum Geburtstag."
        }
        (Text::InstructionNote, En) => {
            "The March interest bonus applies from the 1st of the month until the birthday."
        }
        (Text::CalculationSuccessful, De) => "Berechnung erfolgreich abgeschlossen!",
        (Text::CalculationSuccessful, En) => "Calculation completed successfully!",
        (Text::DetailedResult, De) => "Detailliertes Ergebnis",
        (Text::DetailedResult, En) => "Detailed Result",
        (Text::Customer, De) => "Kunde:",
        (Text::Customer, En) => "Customer:",
        (Text::Capital, De) => "Kapital:",
        (Text::Capital, En) => "Capital:",
        (Text::Birthday, De) => "Geburtstag:",
        (Text::Birthday, En) => "Birthday:",
        (Text::InterestRates, De) => "Zinssätze:",
        (Text::InterestRates, En) => "Interest Rates:",
        (Text::NormalPeriod, De) => "Normal-Periode:",
        (Text::NormalPeriod, En) => "Normal Period:",
        (Text::BonusPeriod, De) => "Bonus-Periode:",
        (Text::BonusPeriod, En) => "Bonus Period:",
        (Text::GrossInterestTotal, De) => "Brutto-Zinsen gesamt:",
        (Text::GrossInterestTotal, En) => "Gross Interest Total:",
        (Text::WithholdingTaxAmount, De) => "Verrechnungssteuer:",
        (Text::WithholdingTaxAmount, En) => "Withholding Tax:",
        (Text::NetInterest, De) => "NETTO-ZINSEN:",
        (Text::NetInterest, En) => "NET INTEREST:",
        (Text::Days, De) => "Tage",
        (Text::Days, En) => "Days",
        (Text::CalculatedOn, De) => "Berechnet am {date}",
        (Text::CalculatedOn, En) => "Calculated on {date}",
        (Text::Language, De) => "Sprache",
        (Text::Language, En) => "Language",
        (Text::DefaultCurrency, De) => "Standard-Währung",
        (Text::DefaultCurrency, En) => "Default Currency",
        (Text::NumberFormat, De) => "Zahlenformat",
        (Text::NumberFormat, En) => "Number Format",
        (Text::ThousandsSeparator, De) => "Tausendertrennzeichen",
        (Text::ThousandsSeparator, En) => "Thousands Separator",
        (Text::DecimalSeparator, De) => "Dezimaltrennzeichen",
        (Text::DecimalSeparator, En) => "Decimal Separator",
        (Text::DefaultValues, De) => "Voreinstellungen",
        (Text::DefaultValues, En) => "Default Values",
        (Text::NormalPercent, _) => "Normal %",
        (Text::BonusPercent, _) => "Bonus %",
        (Text::TaxPercent, De) => "Steuer %",
        (Text::TaxPercent, En) => "Tax %",
        (Text::ResetToDefaults, De) => "Zurücksetzen",
        (Text::ResetToDefaults, En) => "Reset to Defaults",
        (Text::Save, De) => "Speichern",
        (Text::Save, En) => "Save",
        (Text::Cancel, De) => "Abbrechen",
        (Text::Cancel, En) => "Cancel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_differs_per_language() {
        let de = tr(Language::German, Text::Title);
        let en = tr(Language::English, Text::Title);
        assert_ne!(de, en);
        assert!(de.contains("Marchzins"));
        assert!(en.contains("March"));
    }

    #[test]
    fn shared_labels() {
        assert_eq!(tr(Language::German, Text::BonusPercent), "Bonus %");
        assert_eq!(tr(Language::English, Text::BonusPercent), "Bonus %");
        assert_eq!(tr(Language::English, Text::Calculate), "Calculate");
    }
}
