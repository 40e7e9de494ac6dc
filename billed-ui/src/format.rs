//! Display formatting for bill rows.

use billed_types::{parse_bill_date, BillStatus};
use chrono::Datelike;

/// French short month names, capitalised and cut to three letters
const MONTHS_FR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// `2022-01-25` -> `25 Jan. 22`. Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let Some(date) = parse_bill_date(raw) else {
        return raw.to_string();
    };
    let month = MONTHS_FR[date.month0() as usize];
    format!("{} {}. {:02}", date.day(), month, date.year().rem_euclid(100))
}

pub fn format_amount(amount: f64) -> String {
    format!("{amount} €")
}

pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refusé",
    }
}
