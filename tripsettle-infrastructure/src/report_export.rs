use serde::Serialize;
use tripsettle_application::{TripInfo, TripSettlement};

/// JSON shape of a settled trip, using the store's field naming.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument<'a> {
    trip_id: &'a str,
    trip_name: &'a str,
    persons: Vec<PersonDocument<'a>>,
    transactions: Vec<TransactionDocument<'a>>,
    unsettled: Vec<ResidualDocument<'a>>,
    trip_total: f64,
    expense_count: usize,
}

#[derive(Debug, Serialize)]
struct PersonDocument<'a> {
    id: &'a str,
    name: &'a str,
    paid: f64,
    share: f64,
    net: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionDocument<'a> {
    from: &'a str,
    to: &'a str,
    from_id: &'a str,
    to_id: &'a str,
    amount: f64,
}

#[derive(Debug, Serialize)]
struct ResidualDocument<'a> {
    id: &'a str,
    name: &'a str,
    amount: f64,
}

impl<'a> ReportDocument<'a> {
    pub fn from_settlement(settlement: &'a TripSettlement) -> Self {
        let report = &settlement.report;
        Self {
            trip_id: settlement.trip.id.as_str(),
            trip_name: &settlement.trip.name,
            persons: report
                .balances
                .iter()
                .map(|balance| PersonDocument {
                    id: balance.id.as_str(),
                    name: &balance.name,
                    paid: balance.paid,
                    share: balance.share,
                    net: balance.net,
                })
                .collect(),
            transactions: report
                .transfers
                .iter()
                .map(|transfer| TransactionDocument {
                    from: &transfer.from_name,
                    to: &transfer.to_name,
                    from_id: transfer.from.as_str(),
                    to_id: transfer.to.as_str(),
                    amount: transfer.amount,
                })
                .collect(),
            unsettled: report
                .residuals
                .iter()
                .map(|residual| ResidualDocument {
                    id: residual.id.as_str(),
                    name: &residual.name,
                    amount: residual.amount,
                })
                .collect(),
            trip_total: report.trip_total,
            expense_count: report.expense_count,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Trip listing entry: the trip and its participants' display names.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummaryDocument<'a> {
    id: &'a str,
    trip_name: &'a str,
    participants: Vec<&'a str>,
    participant_usernames: Vec<&'a str>,
}

impl<'a> TripSummaryDocument<'a> {
    pub fn from_trip(trip: &'a TripInfo) -> Self {
        Self {
            id: trip.id.as_str(),
            trip_name: &trip.name,
            participants: trip.roster.participants().map(|id| id.as_str()).collect(),
            participant_usernames: trip.roster.names().collect(),
        }
    }

    pub fn list_to_json_pretty(trips: &'a [TripInfo]) -> Result<String, serde_json::Error> {
        let documents: Vec<Self> = trips.iter().map(Self::from_trip).collect();
        serde_json::to_string_pretty(&documents)
    }
}
