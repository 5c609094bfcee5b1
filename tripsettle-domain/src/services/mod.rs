pub mod balance_aggregator;
pub mod greedy_settlement;
pub mod net_calculator;
pub mod settlement_engine;
pub mod settlement_rounding;

pub use balance_aggregator::{BalanceAggregator, EmptyParticipantsPolicy};
pub use greedy_settlement::GreedySettler;
pub use net_calculator::NetCalculator;
pub use settlement_engine::{EngineOptions, SettlementEngine};
pub use settlement_rounding::{SETTLED_THRESHOLD, is_settled, round2};
