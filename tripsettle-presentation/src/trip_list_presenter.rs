use std::fmt::Write;
use tripsettle_application::TripInfo;
use tripsettle_i18n as i18n;

pub struct TripListPresenter;

impl TripListPresenter {
    pub fn render(trips: &[TripInfo]) -> String {
        if trips.is_empty() {
            return format!("{}\n", i18n::NO_TRIPS);
        }

        let mut out = String::with_capacity(64 * trips.len());
        let _ = writeln!(out, "{}", i18n::TRIPS);
        for trip in trips {
            let names: Vec<&str> = trip.roster.names().collect();
            let _ = writeln!(out, "  {} [{}]", trip.name, trip.id);
            let _ = writeln!(out, "    {}", i18n::participants(names.join(", ")));
        }
        out
    }
}
