#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const TOTAL: &str = "合計";
    pub const PERSON: &str = "メンバー";
    pub const PAID: &str = "支払額";
    pub const SHARE: &str = "負担額";
    pub const NET: &str = "差引";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const OWED: &str = "(受取)";
    pub const OWES: &str = "(支払)";
    pub const YOU: &str = "あなた";
    pub const YOU_MARKER: &str = "(あなた)";
    pub const PER_PERSON_SUMMARY: &str = "メンバー別集計";
    pub const SUGGESTED_SETTLEMENTS: &str = "精算案";
    pub const EXPENSE_BREAKDOWN: &str = "支出の内訳";
    pub const UNSETTLED_BALANCES: &str = "未精算の残高";
    pub const ALL_SETTLED: &str = "精算は不要です。すべて清算済みです!";
    pub const NO_EXPENSES_FOR_TRIP: &str =
        "この旅行には支出がありません。支出を追加すると精算結果が表示されます。";
    pub const NO_TRIPS: &str = "旅行が見つかりません。まず旅行を作成してください。";
    pub const TRIPS: &str = "旅行一覧";
    pub const UNTITLED_EXPENSE: &str = "(無題)";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const TOTAL: &str = "Total";
    pub const PERSON: &str = "Person";
    pub const PAID: &str = "Paid";
    pub const SHARE: &str = "Share";
    pub const NET: &str = "Net";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const OWED: &str = "(owed)";
    pub const OWES: &str = "(owes)";
    pub const YOU: &str = "You";
    pub const YOU_MARKER: &str = "(You)";
    pub const PER_PERSON_SUMMARY: &str = "Per-Person Summary";
    pub const SUGGESTED_SETTLEMENTS: &str = "Suggested Settlements";
    pub const EXPENSE_BREAKDOWN: &str = "Expense Breakdown";
    pub const UNSETTLED_BALANCES: &str = "Unsettled Balances";
    pub const ALL_SETTLED: &str = "No transactions needed, everything is settled!";
    pub const NO_EXPENSES_FOR_TRIP: &str =
        "No expenses found for this trip. Add some expenses to see calculations.";
    pub const NO_TRIPS: &str = "No trips found. Create a trip first!";
    pub const TRIPS: &str = "Trips";
    pub const UNTITLED_EXPENSE: &str = "(untitled)";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn trip_stats(expense_count: usize, participant_count: usize) -> String {
    format!("支出 {expense_count} 件 • メンバー {participant_count} 人")
}

#[cfg(feature = "ja")]
pub fn paid_by(name: impl std::fmt::Display) -> String {
    format!("支払者: {name}")
}

#[cfg(feature = "ja")]
pub fn split_between(count: usize) -> String {
    format!("{count} 人で割り勘")
}

#[cfg(feature = "ja")]
pub fn participants(names: impl std::fmt::Display) -> String {
    format!("メンバー: {names}")
}

#[cfg(not(feature = "ja"))]
pub fn trip_stats(expense_count: usize, participant_count: usize) -> String {
    format!("{expense_count} expenses • {participant_count} participants")
}

#[cfg(not(feature = "ja"))]
pub fn paid_by(name: impl std::fmt::Display) -> String {
    format!("Paid by: {name}")
}

#[cfg(not(feature = "ja"))]
pub fn split_between(count: usize) -> String {
    format!("Split between: {count} people")
}

#[cfg(not(feature = "ja"))]
pub fn participants(names: impl std::fmt::Display) -> String {
    format!("Participants: {names}")
}
