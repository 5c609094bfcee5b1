use std::{borrow::Cow, io};

use tracing_subscriber::EnvFilter;
use tripsettle_application::{SettlementService, TripId, TripInfo, TripSettlement};
use tripsettle_infrastructure::{JsonTripStore, ReportDocument, TripSummaryDocument};
use tripsettle_presentation::{SettlementPresenter, TripListPresenter};

use crate::config::{AppConfig, OutputFormat};

pub type CliResult<T> = Result<T, Cow<'static, str>>;

const USAGE: &str = "Usage: tripsettle <snapshot.json> [trip-id]";

/// Logs go to stderr so stdout stays clean for the report. `RUST_LOG` overrides the `warn` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

pub fn run(args: impl IntoIterator<Item = String>) -> CliResult<String> {
    let mut args = args.into_iter();
    let Some(path) = args.next() else {
        return Err(USAGE.into());
    };
    let trip_id = args.next().map(|id| TripId::from(id.as_str()));

    let config = AppConfig::from_env().map_err(|err| err.to_string())?;
    let store = JsonTripStore::from_path(&path).map_err(|err| err.to_string())?;
    tracing::debug!(
        path = %path,
        trip_id = trip_id.as_ref().map(TripId::as_str),
        output = ?config.output,
        "Configuration loaded"
    );

    execute(&store, trip_id.as_ref(), &config)
}

pub fn execute(store: &JsonTripStore, trip_id: Option<&TripId>, config: &AppConfig) -> CliResult<String> {
    let service = SettlementService::new(store, store, config.settings);

    match trip_id {
        Some(trip_id) => {
            let settlement = service
                .settle_trip(trip_id)
                .map_err(|err| err.to_string())?;
            render_settlement(&settlement, config)
        }
        None => {
            let trips = service
                .trips_for(config.viewer.as_ref())
                .map_err(|err| err.to_string())?;
            render_trips(&trips, config)
        }
    }
}

fn render_settlement(settlement: &TripSettlement, config: &AppConfig) -> CliResult<String> {
    match config.output {
        OutputFormat::Text => Ok(SettlementPresenter::new(&config.formatter)
            .with_viewer(config.viewer.as_ref())
            .render(settlement)
            .to_string()),
        OutputFormat::Json => ReportDocument::from_settlement(settlement)
            .to_json_pretty()
            .map_err(|err| format!("Failed to serialize report: {err}").into()),
    }
}

fn render_trips(trips: &[TripInfo], config: &AppConfig) -> CliResult<String> {
    match config.output {
        OutputFormat::Text => Ok(TripListPresenter::render(trips)),
        OutputFormat::Json => TripSummaryDocument::list_to_json_pretty(trips)
            .map_err(|err| format!("Failed to serialize trip list: {err}").into()),
    }
}
