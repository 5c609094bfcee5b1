use std::env;

use thiserror::Error;
use tripsettle_application::{SettlementSettings, ValidationMode};
use tripsettle_domain::{EmptyParticipantsPolicy, EngineOptions, ParticipantId};
use tripsettle_presentation::{AmountFormatter, DigitGrouping};

const OUTPUT: &str = "TRIPSETTLE_OUTPUT";
const GROUPING: &str = "TRIPSETTLE_GROUPING";
const CURRENCY_SYMBOL: &str = "TRIPSETTLE_CURRENCY_SYMBOL";
const EMPTY_PARTICIPANTS: &str = "TRIPSETTLE_EMPTY_PARTICIPANTS";
const VALIDATION: &str = "TRIPSETTLE_VALIDATION";
const VIEWER: &str = "TRIPSETTLE_VIEWER";

const DEFAULT_SYMBOL: &str = "₹";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{variable}={value} is not supported; expected one of: {expected}")]
    InvalidValue {
        variable: &'static str,
        value: String,
        expected: String,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from the environment (and `.env`) at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub output: OutputFormat,
    pub formatter: AmountFormatter,
    pub settings: SettlementSettings,
    pub viewer: Option<ParticipantId>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let output = choice(
            OUTPUT,
            read(OUTPUT),
            &[("text", OutputFormat::Text), ("json", OutputFormat::Json)],
        )?;
        let grouping = choice(
            GROUPING,
            read(GROUPING),
            &[
                ("indian", DigitGrouping::Indian),
                ("western", DigitGrouping::Western),
            ],
        )?;
        let empty_participants = choice(
            EMPTY_PARTICIPANTS,
            read(EMPTY_PARTICIPANTS),
            &[
                ("split-among-none", EmptyParticipantsPolicy::SplitAmongNone),
                ("payer-only", EmptyParticipantsPolicy::PayerOnly),
            ],
        )?;
        let validation = choice(
            VALIDATION,
            read(VALIDATION),
            &[
                ("lenient", ValidationMode::Lenient),
                ("strict", ValidationMode::Strict),
            ],
        )?;
        let symbol = read(CURRENCY_SYMBOL).unwrap_or_else(|| DEFAULT_SYMBOL.to_owned());

        Ok(Self {
            output,
            formatter: AmountFormatter::new(symbol, grouping),
            settings: SettlementSettings {
                engine: EngineOptions { empty_participants },
                validation,
            },
            viewer: read(VIEWER).map(ParticipantId::from),
        })
    }
}

/// Case-insensitive match of `value` against `options`; unset picks the default.
fn choice<T: Copy + Default>(
    variable: &'static str,
    value: Option<String>,
    options: &[(&str, T)],
) -> Result<T, ConfigError> {
    let Some(value) = value else {
        return Ok(T::default());
    };
    options
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&value))
        .map(|&(_, option)| option)
        .ok_or_else(|| ConfigError::InvalidValue {
            variable,
            expected: options
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", "),
            value,
        })
}
