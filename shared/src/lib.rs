use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A delivery period. Shifts partition customers, entries, payments and
/// reminder settings: every list the client fetches is scoped to one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Night,
}

impl Shift {
    pub const ALL: [Shift; 2] = [Shift::Morning, Shift::Night];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Night => "Night",
        }
    }
}

impl Default for Shift {
    fn default() -> Self {
        Shift::Morning
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morning" => Ok(Shift::Morning),
            "Night" => Ok(Shift::Night),
            _ => Err(()),
        }
    }
}

/// A customer record, scoped to one shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Default rate applied when recording deliveries for this customer.
    #[serde(default)]
    pub price_per_litre: Option<f64>,
    pub shift: Shift,
}

impl Customer {
    /// Name shown in tables and selectors: full name, nickname as fallback.
    pub fn display_name(&self) -> &str {
        if !self.full_name.trim().is_empty() {
            &self.full_name
        } else {
            self.nickname.as_deref().unwrap_or("")
        }
    }

    pub fn rate(&self) -> f64 {
        self.price_per_litre.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub full_name: String,
    pub nickname: Option<String>,
    pub price_per_litre: Option<f64>,
    pub shift: Shift,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub full_name: String,
    pub nickname: Option<String>,
    pub price_per_litre: Option<f64>,
    pub shift: Shift,
}

/// One recorded delivery. Entries are keyed to customers by id; the name
/// travels along purely for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkEntry {
    pub id: i64,
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub shift: Shift,
    /// ISO date (YYYY-MM-DD).
    pub date: String,
    pub litres: f64,
    pub rate: f64,
    /// litres × rate, computed client-side at submit time.
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub customer_id: i64,
    pub customer_name: String,
    pub shift: Shift,
    pub date: String,
    pub litres: f64,
    pub rate: f64,
    pub amount: f64,
    pub user_id: i64,
}

/* ---------------- auth ---------------- */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Shape shared by the forgot/reset endpoints: the server reports either a
/// `message` or an `error`, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MessageResponse {
    /// Server text to surface verbatim, whichever field carries it.
    pub fn text(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("")
    }
}

/* ---------------- payments ---------------- */

/// Paid/unpaid flag for one customer in the current period. Rows written by
/// older servers carry only a display name; newer rows also carry the
/// customer id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub shift: Shift,
    pub paid: bool,
    #[serde(default)]
    pub date: Option<String>,
}

impl Payment {
    /// Id-keyed match, falling back to trimmed case-insensitive name
    /// comparison for rows that predate customer ids.
    pub fn matches(&self, customer: &Customer) -> bool {
        match self.customer_id {
            Some(id) => id == customer.id,
            None => name_key(&self.customer_name) == name_key(customer.display_name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListResponse {
    pub success: bool,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TogglePaymentRequest {
    pub customer_id: i64,
    pub customer_name: String,
    pub shift: Shift,
    pub paid: bool,
    pub user_id: i64,
}

/// One line of the unpaid-customers report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnpaidRow {
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub litres: f64,
    pub rate: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnpaidResponse {
    pub success: bool,
    #[serde(default)]
    pub rows: Vec<UnpaidRow>,
    #[serde(default)]
    pub error: Option<String>,
}

/* ---------------- reminders & notifications ---------------- */

/// Per-shift email reminder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderConfig {
    pub enabled: bool,
    /// HH:MM, 24-hour clock.
    pub time: String,
    pub repeat_days: u32,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            time: "08:00".to_string(),
            repeat_days: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReminderRequest {
    pub user_id: i64,
    pub shift: Shift,
    pub enabled: bool,
    pub time: String,
    pub repeat_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Read-only log entry for a sent reminder or report email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub subject: String,
    pub date_sent: String,
}

/* ---------------- overview matrix ---------------- */

/// Litres delivered in one (day, customer) cell of the overview matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DayCell {
    pub litres: f64,
}

/// Server-aggregated month view: per-day litres per customer plus totals.
/// The client never mutates this; edits create entries and re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OverviewData {
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub month: u32,
    pub days_in_month: u32,
    #[serde(default)]
    pub customers: Vec<Customer>,
    /// day-of-month → customer id → cell.
    #[serde(default)]
    pub matrix: HashMap<u32, HashMap<i64, DayCell>>,
    #[serde(default)]
    pub total_litres_per_customer: HashMap<i64, f64>,
    #[serde(default)]
    pub total_amount_per_customer: HashMap<i64, f64>,
    #[serde(default)]
    pub total_per_day: HashMap<u32, f64>,
    #[serde(default)]
    pub grand_total_amount: f64,
    /// customer id → paid flag for the current day.
    #[serde(default)]
    pub payments_today: HashMap<i64, bool>,
}

impl OverviewData {
    pub fn day_numbers(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.days_in_month
    }

    pub fn litres_at(&self, day: u32, customer_id: i64) -> f64 {
        self.matrix
            .get(&day)
            .and_then(|row| row.get(&customer_id))
            .map(|cell| cell.litres)
            .unwrap_or(0.0)
    }

    pub fn total_litres(&self, customer_id: i64) -> f64 {
        self.total_litres_per_customer
            .get(&customer_id)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn total_amount(&self, customer_id: i64) -> f64 {
        self.total_amount_per_customer
            .get(&customer_id)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn paid_today(&self, customer_id: i64) -> bool {
        self.payments_today
            .get(&customer_id)
            .copied()
            .unwrap_or(false)
    }
}

/* ---------------- domain helpers ---------------- */

/// Normalized join key for matching display names: trimmed and lowercased,
/// so "Ravi " and "ravi" resolve to the same record.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Increments offered by the litre quick-add stepper.
pub const LITRE_STEPS: [f64; 5] = [0.25, 0.5, 0.75, 1.0, 2.0];

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Litres after pressing a stepper increment: round(baseline + step, 2).
pub fn step_litres(baseline: f64, step: f64) -> f64 {
    round2(baseline + step)
}

/// Amount sent with an entry. Not re-derived server-side, so it must be
/// exactly litres × rate at submit time.
pub fn entry_amount(litres: f64, rate: f64) -> f64 {
    litres * rate
}

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("January")
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 30,
    }
}

/// ISO date string for a (year, month, day) triple, zero-padded.
pub fn entry_date(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_round_trips_through_its_wire_name() {
        for shift in Shift::ALL {
            let json = serde_json::to_string(&shift).unwrap();
            assert_eq!(json, format!("\"{}\"", shift.as_str()));
            let back: Shift = serde_json::from_str(&json).unwrap();
            assert_eq!(back, shift);
            assert_eq!(shift.as_str().parse::<Shift>().unwrap(), shift);
        }
        assert!("Evening".parse::<Shift>().is_err());
    }

    #[test]
    fn name_key_trims_and_lowercases() {
        assert_eq!(name_key("Ravi "), "ravi");
        assert_eq!(name_key("  RAVI"), "ravi");
        assert_eq!(name_key("ravi"), "ravi");
        assert_ne!(name_key("Ravi K"), name_key("Ravi"));
    }

    #[test]
    fn stepper_rounds_to_two_decimals() {
        assert_eq!(step_litres(0.0, 0.25), 0.25);
        assert_eq!(step_litres(0.25, 0.5), 0.75);
        assert_eq!(step_litres(1.75, 2.0), 3.75);
        // accumulated float noise must not leak into the submitted value
        assert_eq!(step_litres(0.1 + 0.2, 0.25), 0.55);
    }

    #[test]
    fn entry_amount_is_litres_times_rate() {
        assert_eq!(entry_amount(2.0, 50.0), 100.0);
        assert_eq!(entry_amount(0.0, 50.0), 0.0);
        assert_eq!(entry_amount(1.5, 42.5), 63.75);
    }

    #[test]
    fn days_in_month_handles_lengths_and_leap_years() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn entry_date_is_zero_padded() {
        assert_eq!(entry_date(2025, 6, 3), "2025-06-03");
        assert_eq!(entry_date(2025, 11, 21), "2025-11-21");
    }

    #[test]
    fn customer_display_name_prefers_full_name() {
        let mut c = Customer {
            id: 1,
            full_name: "Ravi Kumar".to_string(),
            nickname: Some("Ravi".to_string()),
            price_per_litre: Some(50.0),
            shift: Shift::Morning,
        };
        assert_eq!(c.display_name(), "Ravi Kumar");
        c.full_name = "  ".to_string();
        assert_eq!(c.display_name(), "Ravi");
        assert_eq!(c.rate(), 50.0);
        c.price_per_litre = None;
        assert_eq!(c.rate(), 0.0);
    }

    #[test]
    fn payment_matches_by_id_then_by_normalized_name() {
        let customer = Customer {
            id: 7,
            full_name: "Ravi".to_string(),
            nickname: None,
            price_per_litre: None,
            shift: Shift::Morning,
        };
        let by_id = Payment {
            id: Some(1),
            customer_id: Some(7),
            customer_name: "renamed".to_string(),
            shift: Shift::Morning,
            paid: true,
            date: None,
        };
        assert!(by_id.matches(&customer));

        let legacy = Payment {
            id: Some(2),
            customer_id: None,
            customer_name: "Ravi ".to_string(),
            shift: Shift::Morning,
            paid: false,
            date: None,
        };
        assert!(legacy.matches(&customer));

        let other = Payment {
            customer_id: Some(8),
            ..by_id
        };
        assert!(!other.matches(&customer));
    }

    #[test]
    fn customer_wire_shape_is_camel_case() {
        let json = r#"{
            "id": 3,
            "fullName": "Ravi",
            "nickname": null,
            "pricePerLitre": 50.0,
            "shift": "Morning"
        }"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(c.price_per_litre, Some(50.0));

        let req = CreateEntryRequest {
            customer_id: 3,
            customer_name: "Ravi".to_string(),
            shift: Shift::Night,
            date: "2025-06-03".to_string(),
            litres: 2.0,
            rate: 50.0,
            amount: 100.0,
            user_id: 7,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["customerId"], 3);
        assert_eq!(value["customerName"], "Ravi");
        assert_eq!(value["userId"], 7);
        assert_eq!(value["amount"], 100.0);
    }

    #[test]
    fn overview_accessors_read_the_server_matrix() {
        let json = r#"{
            "year": 2025,
            "month": 6,
            "daysInMonth": 30,
            "customers": [
                {"id": 1, "fullName": "Ravi", "shift": "Morning", "pricePerLitre": 50.0},
                {"id": 2, "fullName": "Meena", "shift": "Morning"}
            ],
            "matrix": {
                "1": {"1": {"litres": 2.0}},
                "15": {"1": {"litres": 1.5}, "2": {"litres": 0.5}}
            },
            "totalLitresPerCustomer": {"1": 3.5, "2": 0.5},
            "totalAmountPerCustomer": {"1": 175.0, "2": 0.0},
            "totalPerDay": {"1": 100.0, "15": 75.0},
            "grandTotalAmount": 175.0,
            "paymentsToday": {"1": true}
        }"#;
        let data: OverviewData = serde_json::from_str(json).unwrap();
        assert_eq!(data.day_numbers().count(), 30);
        assert_eq!(data.litres_at(1, 1), 2.0);
        assert_eq!(data.litres_at(15, 2), 0.5);
        assert_eq!(data.litres_at(2, 1), 0.0);
        assert_eq!(data.total_litres(1), 3.5);
        assert_eq!(data.total_amount(2), 0.0);
        assert!(data.paid_today(1));
        assert!(!data.paid_today(2));
    }

    #[test]
    fn overview_with_no_customers_still_has_day_columns() {
        let json = r#"{"daysInMonth": 30}"#;
        let data: OverviewData = serde_json::from_str(json).unwrap();
        assert_eq!(data.day_numbers().count(), 30);
        assert!(data.customers.is_empty());
        assert_eq!(data.litres_at(12, 99), 0.0);
    }

    #[test]
    fn message_response_surfaces_whichever_field_is_set() {
        let ok: MessageResponse =
            serde_json::from_str(r#"{"success": true, "message": "OTP sent"}"#).unwrap();
        assert_eq!(ok.text(), "OTP sent");
        let err: MessageResponse =
            serde_json::from_str(r#"{"success": false, "error": "Invalid OTP"}"#).unwrap();
        assert_eq!(err.text(), "Invalid OTP");
        let silent: MessageResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(silent.text(), "");
    }

    #[test]
    fn reminder_config_defaults_match_the_form() {
        let config = ReminderConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.time, "08:00");
        assert_eq!(config.repeat_days, 1);
    }
}
