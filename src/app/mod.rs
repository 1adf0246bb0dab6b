use anyhow::{anyhow, bail, Context, Result};
use eframe::egui::{Button, Color32, ComboBox, RichText, TextEdit};
use eframe::{egui, Frame, Storage};
use egui_extras::{Column, TableBuilder};
use rust_decimal::Decimal;
use time::Date;

use calculator::{CalculationInput, CalculationResult, Calculator};
use config::{Language, Settings};
use format::NumberFormat;
use i18n::{tr, Text};
use validator::{FormInput, ValidationOutcome};

mod calculator;
mod config;
mod format;
mod i18n;
mod validator;

pub struct App {
    settings: Settings,
    form: FormInput,
    birth_date_text: String,
    calculation_date_text: String,
    result: Option<CalculationResult>,
    warn: Result<()>,
    settings_draft: Option<SettingsDraft>,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if let Err(e) = &self.warn {
            egui::TopBottomPanel::top("warn_panel").show(ctx, |ui| {
                let warn = RichText::from(format!("{e:#}")).color(Color32::RED);
                ui.label(warn);
            });
        }

        egui::TopBottomPanel::bottom("bottom").show(ctx, |ui| {
            ui.horizontal(|ui| {
                egui::widgets::global_dark_light_mode_switch(ui);
                ui.separator();
                for language in Language::ALL {
                    let selected = self.settings.language == language;
                    if ui.selectable_label(selected, language.to_string()).clicked() {
                        self.settings = Settings {
                            language,
                            ..self.settings.clone()
                        };
                    }
                }
                ui.separator();
                if ui.button(tr(self.settings.language, Text::Settings)).clicked() {
                    self.settings_draft = Some(SettingsDraft::from(&self.settings));
                }
            });
        });

        self.settings_window(ctx);

        egui::SidePanel::right("instructions").show(ctx, |ui| {
            let lang = self.settings.language;
            ui.heading(tr(lang, Text::Instructions));
            for (i, step) in [
                Text::Instruction1,
                Text::Instruction2,
                Text::Instruction3,
                Text::Instruction4,
                Text::Instruction5,
            ]
            .into_iter()
            .enumerate()
            {
                ui.label(format!("{}. {}", i + 1, tr(lang, step)));
            }
            ui.separator();
            ui.label(RichText::new(tr(lang, Text::InstructionNote)).italics());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(tr(self.settings.language, Text::Title));
            ui.separator();
            self.input_form(ui);
            ui.separator();
            self.commands(ui);

            if let Some(result) = &self.result {
                ui.separator();
                result_table(ui, result, &self.settings);
            }
        });
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
        log::debug!("settings stored");
    }
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
            .map(Settings::validated)
            .unwrap_or_default();
        log::info!("loaded settings: {settings:?}");

        let form = load_defaults(&settings, validator::today());
        Self {
            birth_date_text: format::format_date(form.birth_date),
            calculation_date_text: format::format_date(form.calculation_date),
            settings,
            form,
            result: None,
            warn: Ok(()),
            settings_draft: None,
        }
    }

    fn set_form(&mut self, form: FormInput) {
        self.birth_date_text = format::format_date(form.birth_date);
        self.calculation_date_text = format::format_date(form.calculation_date);
        self.form = form;
        self.result = None;
        self.warn = Ok(());
    }

    fn input_form(&mut self, ui: &mut egui::Ui) {
        let lang = self.settings.language;

        ui.strong(tr(lang, Text::CustomerData));
        egui::Grid::new("customer_grid")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr(lang, Text::CustomerName));
                TextEdit::singleline(&mut self.form.customer)
                    .hint_text(tr(lang, Text::CustomerNamePlaceholder))
                    .show(ui);
                ui.end_row();

                ui.label(tr(lang, Text::BirthDate));
                if ui.text_edit_singleline(&mut self.birth_date_text).changed() {
                    if let Ok(v) = format::parse_date(&self.birth_date_text) {
                        self.form.birth_date = v;
                        self.warn = field_warning(validator::validate_date(v));
                    }
                }
                ui.end_row();

                ui.label(tr(lang, Text::CurrentDate));
                if ui.text_edit_singleline(&mut self.calculation_date_text).changed() {
                    if let Ok(v) = format::parse_date(&self.calculation_date_text) {
                        self.form.calculation_date = v;
                    }
                }
                ui.end_row();

                ui.label(tr(lang, Text::SavingsCapital));
                if ui.text_edit_singleline(&mut self.form.capital).changed() {
                    self.warn = field_warning(validator::validate_capital(&self.form.capital));
                }
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.strong(tr(lang, Text::RatesParameters));
        egui::Grid::new("rates_grid")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr(lang, Text::NormalRate));
                if ui.text_edit_singleline(&mut self.form.normal_rate).changed() {
                    self.warn = field_warning(validator::validate_rate(
                        &self.form.normal_rate,
                        validator::NORMAL_RATE_LABEL,
                    ));
                }
                ui.end_row();

                ui.label(tr(lang, Text::BonusRate));
                if ui.text_edit_singleline(&mut self.form.bonus_rate).changed() {
                    self.warn = field_warning(validator::validate_rate(
                        &self.form.bonus_rate,
                        validator::BONUS_RATE_LABEL,
                    ));
                }
                ui.end_row();

                ui.label(tr(lang, Text::WithholdingTax));
                if ui.text_edit_singleline(&mut self.form.tax_rate).changed() {
                    self.warn = field_warning(validator::validate_tax_rate(&self.form.tax_rate));
                }
                ui.end_row();
            });
    }

    fn commands(&mut self, ui: &mut egui::Ui) {
        let lang = self.settings.language;

        ui.horizontal(|ui| {
            let ready = validator::is_valid_for_calculation(Some(&self.form));
            if ui
                .add_enabled(ready, Button::new(tr(lang, Text::Calculate)))
                .clicked()
            {
                self.run_calculation();
            }
            if ui.button(tr(lang, Text::Reset)).clicked() {
                self.set_form(load_defaults(&self.settings, validator::today()));
            }
            if ui.button(tr(lang, Text::NewCalculation)).clicked() {
                self.set_form(empty_form(validator::today()));
            }
            if let Some(result) = &self.result {
                if ui.button(tr(lang, Text::CopySummary)).clicked() {
                    let text = summary(result, &self.settings);
                    ui.output_mut(|o| o.copied_text = text);
                }
            }
        });
    }

    fn run_calculation(&mut self) {
        let outcome = self
            .sync_dates()
            .and_then(|_| calculate(&self.form, &self.settings, validator::today()));

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.warn = Ok(());
            }
            Err(e) => {
                log::warn!("calculation rejected: {e:#}");
                self.result = None;
                self.warn = Err(e);
            }
        }
    }

    // The date fields only update the form while their text parses.
    fn sync_dates(&mut self) -> Result<()> {
        self.form.birth_date = format::parse_date(&self.birth_date_text)
            .with_context(|| tr(self.settings.language, Text::BirthDate))?;
        self.form.calculation_date = format::parse_date(&self.calculation_date_text)
            .with_context(|| tr(self.settings.language, Text::CurrentDate))?;
        Ok(())
    }

    fn settings_window(&mut self, ctx: &egui::Context) {
        let lang = self.settings.language;
        let Some(draft) = &mut self.settings_draft else {
            return;
        };

        let mut action = None;
        egui::Window::new(tr(lang, Text::Settings))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(tr(lang, Text::Language));
                        ComboBox::from_id_source("settings_language")
                            .selected_text(draft.language.to_string())
                            .show_ui(ui, |ui| {
                                for language in Language::ALL {
                                    ui.selectable_value(
                                        &mut draft.language,
                                        language,
                                        language.to_string(),
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label(tr(lang, Text::DefaultCurrency));
                        ui.text_edit_singleline(&mut draft.currency);
                        ui.end_row();

                        ui.strong(tr(lang, Text::NumberFormat));
                        ui.end_row();
                        ui.label(tr(lang, Text::ThousandsSeparator));
                        TextEdit::singleline(&mut draft.thousands_separator)
                            .char_limit(1)
                            .desired_width(24.0)
                            .show(ui);
                        ui.end_row();
                        ui.label(tr(lang, Text::DecimalSeparator));
                        TextEdit::singleline(&mut draft.decimal_separator)
                            .char_limit(1)
                            .desired_width(24.0)
                            .show(ui);
                        ui.end_row();

                        ui.strong(tr(lang, Text::DefaultValues));
                        ui.end_row();
                        ui.label(tr(lang, Text::SavingsCapital));
                        ui.text_edit_singleline(&mut draft.capital);
                        ui.end_row();
                        ui.label(tr(lang, Text::NormalPercent));
                        ui.text_edit_singleline(&mut draft.normal_rate);
                        ui.end_row();
                        ui.label(tr(lang, Text::BonusPercent));
                        ui.text_edit_singleline(&mut draft.bonus_rate);
                        ui.end_row();
                        ui.label(tr(lang, Text::TaxPercent));
                        ui.text_edit_singleline(&mut draft.tax_rate);
                        ui.end_row();
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(tr(lang, Text::Save)).clicked() {
                        action = Some(SettingsAction::Save);
                    }
                    if ui.button(tr(lang, Text::ResetToDefaults)).clicked() {
                        action = Some(SettingsAction::Reset);
                    }
                    if ui.button(tr(lang, Text::Cancel)).clicked() {
                        action = Some(SettingsAction::Cancel);
                    }
                });
            });

        match action {
            Some(SettingsAction::Save) => {
                if let Some(draft) = self.settings_draft.take() {
                    self.settings = draft.apply(&self.settings);
                    log::info!("settings updated: {:?}", self.settings);
                }
            }
            Some(SettingsAction::Reset) => {
                self.settings_draft = Some(SettingsDraft::from(&Settings::default()));
            }
            Some(SettingsAction::Cancel) => {
                self.settings_draft = None;
            }
            None => {}
        }
    }
}

enum SettingsAction {
    Save,
    Reset,
    Cancel,
}

/// Text buffers behind the settings window.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SettingsDraft {
    language: Language,
    thousands_separator: String,
    decimal_separator: String,
    currency: String,
    capital: String,
    normal_rate: String,
    bonus_rate: String,
    tax_rate: String,
}

impl From<&Settings> for SettingsDraft {
    fn from(settings: &Settings) -> Self {
        let fmt = NumberFormat::from(settings);
        Self {
            language: settings.language,
            thousands_separator: settings.thousands_separator.to_string(),
            decimal_separator: settings.decimal_separator.to_string(),
            currency: settings.currency.clone(),
            capital: fmt.format_plain(settings.defaults.capital),
            normal_rate: fmt.format_plain(settings.defaults.normal_rate),
            bonus_rate: fmt.format_plain(settings.defaults.bonus_rate),
            tax_rate: fmt.format_plain(settings.defaults.tax_rate),
        }
    }
}

impl SettingsDraft {
    /// Unparseable fields keep the value from `current`.
    fn apply(&self, current: &Settings) -> Settings {
        let number = |text: &str, old| validator::parse_decimal(text).unwrap_or(old);
        let defaults = &current.defaults;

        Settings {
            language: self.language,
            thousands_separator: self
                .thousands_separator
                .chars()
                .next()
                .unwrap_or(current.thousands_separator),
            decimal_separator: self
                .decimal_separator
                .chars()
                .next()
                .unwrap_or(current.decimal_separator),
            currency: self.currency.trim().to_owned(),
            defaults: config::Defaults {
                capital: number(&self.capital, defaults.capital),
                normal_rate: number(&self.normal_rate, defaults.normal_rate),
                bonus_rate: number(&self.bonus_rate, defaults.bonus_rate),
                tax_rate: number(&self.tax_rate, defaults.tax_rate),
            },
        }
        .validated()
    }
}

fn field_warning(outcome: ValidationOutcome) -> Result<()> {
    if outcome.valid {
        Ok(())
    } else {
        Err(anyhow!(outcome.message))
    }
}

fn empty_form(today: Date) -> FormInput {
    FormInput {
        customer: String::new(),
        capital: String::new(),
        normal_rate: String::new(),
        bonus_rate: String::new(),
        tax_rate: String::new(),
        birth_date: today,
        calculation_date: today,
    }
}

/// Form prefilled from the settings, birthday on the 15th of this month.
fn load_defaults(settings: &Settings, today: Date) -> FormInput {
    let fmt = NumberFormat::from(settings);
    let defaults = &settings.defaults;

    FormInput {
        capital: fmt.format_plain(defaults.capital),
        normal_rate: fmt.format_plain(defaults.normal_rate),
        bonus_rate: fmt.format_plain(defaults.bonus_rate),
        tax_rate: fmt.format_plain(defaults.tax_rate),
        birth_date: today.replace_day(15).unwrap_or(today),
        ..empty_form(today)
    }
}

const CALCULATION_FAILED: &str = "Berechnung fehlgeschlagen";

fn calculate(form: &FormInput, settings: &Settings, today: Date) -> Result<CalculationResult> {
    if let Some(outcome) = validator::first_failure(form, today) {
        bail!(outcome.message)
    }

    let fmt = NumberFormat::from(settings);
    // The configured format must read the same number the validator accepted.
    let parse = |text: &str, checked: Decimal| -> Result<Decimal> {
        let value = fmt.parse_input(text).context(CALCULATION_FAILED)?;
        if value != checked {
            return Err(anyhow!("'{text}' geprüft als {checked}, gelesen als {value}")
                .context(CALCULATION_FAILED));
        }
        Ok(value)
    };

    let customer = match form.customer.trim() {
        "" => None,
        name => Some(name.to_owned()),
    };
    let calculator = Calculator::new(CalculationInput {
        capital: parse(&form.capital, validator::check_capital(&form.capital)?)?,
        birth_date: form.birth_date,
        normal_rate: parse(
            &form.normal_rate,
            validator::check_rate(&form.normal_rate, validator::NORMAL_RATE_LABEL)?,
        )?,
        bonus_rate: parse(
            &form.bonus_rate,
            validator::check_rate(&form.bonus_rate, validator::BONUS_RATE_LABEL)?,
        )?,
        tax_rate: parse(
            &form.tax_rate,
            validator::check_rate(&form.tax_rate, validator::TAX_RATE_LABEL)?,
        )?,
        calculation_date: form.calculation_date,
        customer,
    });

    let result = calculator.all_results();
    log::info!(
        "marchzins for {}: {} bonus days, gross {}, net {}",
        result.customer,
        result.bonus_days,
        result.gross_interest_total,
        result.net_interest
    );
    Ok(result)
}

fn result_rows(result: &CalculationResult, settings: &Settings) -> Vec<(&'static str, String)> {
    let lang = settings.language;
    let fmt = NumberFormat::from(settings);
    let days = |n: u8| format!("{} {}", fmt.format_integer(n.into()), tr(lang, Text::Days));

    vec![
        (tr(lang, Text::Customer), result.customer.clone()),
        (tr(lang, Text::Capital), fmt.format_currency(result.capital)),
        (tr(lang, Text::Birthday), format::format_date(result.birth_date)),
        (
            tr(lang, Text::InterestRates),
            format!(
                "{} / {}",
                fmt.format_percent(result.normal_rate),
                fmt.format_percent(result.bonus_rate)
            ),
        ),
        (
            tr(lang, Text::NormalPeriod),
            format!(
                "{} = {}",
                days(result.normal_days),
                fmt.format_currency(result.gross_interest_normal)
            ),
        ),
        (
            tr(lang, Text::BonusPeriod),
            format!(
                "{} = {}",
                days(result.bonus_days),
                fmt.format_currency(result.gross_interest_bonus)
            ),
        ),
        (
            tr(lang, Text::GrossInterestTotal),
            fmt.format_currency(result.gross_interest_total),
        ),
        (
            tr(lang, Text::WithholdingTaxAmount),
            format!(
                "({}) -{}",
                fmt.format_percent(result.tax_rate),
                fmt.format_currency(result.tax_deduction)
            ),
        ),
        (tr(lang, Text::NetInterest), fmt.format_currency(result.net_interest)),
    ]
}

/// Plain-text copy of the result for archiving.
fn summary(result: &CalculationResult, settings: &Settings) -> String {
    let mut lines: Vec<String> = result_rows(result, settings)
        .into_iter()
        .map(|(label, value)| format!("{label} {value}"))
        .collect();
    lines.push(
        tr(settings.language, Text::CalculatedOn)
            .replace("{date}", &format::format_date(result.calculation_date)),
    );
    lines.join("\n")
}

fn result_table(ui: &mut egui::Ui, result: &CalculationResult, settings: &Settings) {
    let lang = settings.language;
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.6;

    ui.label(RichText::new(tr(lang, Text::CalculationSuccessful)).color(Color32::DARK_GREEN));
    ui.heading(tr(lang, Text::DetailedResult));

    let rows = result_rows(result, settings);
    let last = rows.len() - 1;
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(180.0))
        .column(Column::remainder())
        .body(|mut body| {
            for (i, (label, value)) in rows.into_iter().enumerate() {
                body.row(text_height, |mut row| {
                    row.col(|ui| {
                        ui.label(label);
                    });
                    row.col(|ui| {
                        if i == last {
                            ui.strong(value);
                        } else {
                            ui.label(value);
                        }
                    });
                });
            }
        });
}
