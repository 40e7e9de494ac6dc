//! Shared types between the Billed client and its API
//!
//! These types are used by both:
//! - the browser client (WASM)
//! - the bills API that persists them
//!
//! Serializable with serde for JSON over HTTP and local storage

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Date format used on the wire and by the date picker
pub const BILL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Percentage applied when the form leaves `pct` empty
pub const DEFAULT_PCT: f64 = 20.0;

// ============================================================================
// Session
// ============================================================================

/// Kind of account stored in the session record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../billed-ui/src/types/generated.ts")]
pub enum UserType {
    Employee,
    Admin,
}

/// The `user` entry of local storage, written at login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../billed-ui/src/types/generated.ts")]
pub struct Session {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }
}

// ============================================================================
// Bills
// ============================================================================

/// Review status of a bill
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../billed-ui/src/types/generated.ts")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

/// A persisted expense claim
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../billed-ui/src/types/generated.ts")]
pub struct BillRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: String,
    /// Expense category ("Transports", "Hôtel et logement", ...)
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    /// ISO-8601 date (`YYYY-MM-DD`)
    pub date: String,
    #[serde(default)]
    pub vat: String,
    #[serde(default)]
    pub pct: f64,
    #[serde(default)]
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub status: BillStatus,
}

impl BillRecord {
    /// Calendar date of the bill, `None` when the stored string is not ISO-8601
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_bill_date(&self.date)
    }
}

/// Parse a bill date, accepting a full ISO timestamp by keeping its date part
pub fn parse_bill_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, BILL_DATE_FORMAT).ok()
}

/// Bill metadata sent alongside the receipt file when creating a bill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../billed-ui/src/types/generated.ts")]
pub struct NewBill {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: String,
    pub pct: f64,
    pub commentary: String,
    pub file_name: String,
    pub status: BillStatus,
}

impl NewBill {
    /// Combine the submitted payload with the store's reply
    pub fn into_record(self, created: CreatedBill) -> BillRecord {
        BillRecord {
            id: Some(created.id),
            email: self.email,
            expense_type: self.expense_type,
            name: self.name,
            amount: self.amount,
            date: self.date,
            vat: self.vat,
            pct: self.pct,
            commentary: self.commentary,
            file_url: Some(created.file_url),
            file_name: self.file_name,
            status: self.status,
        }
    }
}

/// Reply to a successful create: the new id and where the receipt was stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../billed-ui/src/types/generated.ts")]
pub struct CreatedBill {
    pub id: String,
    pub file_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_parses_without_email() {
        let session: Session = serde_json::from_str(r#"{"type":"Employee"}"#).unwrap();
        assert_eq!(session.user_type, UserType::Employee);
        assert_eq!(session.email, "");
        assert!(!session.is_admin());
    }

    #[test]
    fn test_session_ignores_login_fields() {
        let raw = r#"{"type":"Admin","email":"a@a","password":"x","status":"connected"}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert!(session.is_admin());
        assert_eq!(session.email, "a@a");
    }

    #[test]
    fn test_bill_record_wire_format() {
        let raw = serde_json::json!({
            "id": "47qAXb6fIm2zOKkLzMro",
            "vat": "80",
            "fileUrl": "https://example.test/receipt.jpg",
            "status": "accepted",
            "type": "Hôtel et logement",
            "commentary": "séminaire billed",
            "name": "encore",
            "fileName": "receipt.jpg",
            "date": "2004-04-04",
            "amount": 400,
            "email": "a@a",
            "pct": 20
        });

        let bill: BillRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(bill.expense_type, "Hôtel et logement");
        assert_eq!(bill.status, BillStatus::Accepted);
        assert_eq!(bill.amount, 400.0);
        assert_eq!(bill.file_url.as_deref(), Some("https://example.test/receipt.jpg"));

        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["type"], "Hôtel et logement");
        assert_eq!(json["fileName"], "receipt.jpg");
        assert_eq!(json["status"], "accepted");
    }

    #[test]
    fn test_bill_record_defaults_missing_fields() {
        let raw = r#"{"type":"Transports","name":"vol","amount":12.5,"date":"2022-01-25"}"#;
        let bill: BillRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(bill.id, None);
        assert_eq!(bill.file_url, None);
        assert_eq!(bill.status, BillStatus::Pending);
    }

    #[test]
    fn test_parse_bill_date() {
        assert_eq!(
            parse_bill_date("2022-03-10"),
            NaiveDate::from_ymd_opt(2022, 3, 10)
        );
        assert_eq!(
            parse_bill_date("2022-03-10T08:00:00.000Z"),
            NaiveDate::from_ymd_opt(2022, 3, 10)
        );
        assert_eq!(parse_bill_date("10/03/2022"), None);
        assert_eq!(parse_bill_date(""), None);
    }

    #[test]
    fn test_new_bill_into_record() {
        let payload = NewBill {
            email: "employee@test.tld".to_string(),
            expense_type: "Transports".to_string(),
            name: "Vol Toulouse Paris".to_string(),
            amount: 120.0,
            date: "2022-01-25".to_string(),
            vat: "70".to_string(),
            pct: 20.0,
            commentary: "Diner professionnel".to_string(),
            file_name: "image.png".to_string(),
            status: BillStatus::Pending,
        };
        let record = payload.into_record(CreatedBill {
            id: "1234".to_string(),
            file_url: "https://localhost:3456/images/test.jpg".to_string(),
        });

        assert_eq!(record.id.as_deref(), Some("1234"));
        assert_eq!(record.email, "employee@test.tld");
        assert_eq!(
            record.file_url.as_deref(),
            Some("https://localhost:3456/images/test.jpg")
        );
        assert_eq!(record.status, BillStatus::Pending);
    }
}
