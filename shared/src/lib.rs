use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub mod calendar_grid;
pub mod daily_statistics;
pub mod date_format;
pub mod spending_tier;

pub use calendar_grid::{CalendarCell, CalendarFocusDate, CalendarGrid, CalendarWeek, DayTotals};
pub use daily_statistics::{filter_by_date, DailyStatisticsState, FetchCompletion, FetchTicket, PanelView};
pub use date_format::{parse_canonical_date, ToCanonicalDate};
pub use spending_tier::{classify_spending, LegendEntry, SpendingTier, TierThresholds, SPENDING_LEGEND};

/// One card-spending statistic for a single day.
///
/// The backend reports the same record under two naming schemes (the card
/// approval feed and the daily target feed) and often sends both at once, so
/// every key is read on its own and then merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawDailyStatisticRecord")]
pub struct DailyStatisticRecord {
    /// Usage date, usually `YYYYMMDD` or `YYYY-MM-DD`
    pub date: String,
    /// Amount spent
    pub amount: f64,
    /// Daily budget ceiling, 0 when the user has no target for the day
    pub target_amount: f64,
    /// Approval number, unique per record
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_image_url: Option<String>,
}

/// Wire shape of a record with every known key kept apart.
///
/// Approval-feed names win over daily-target names, which win over the
/// canonical ones.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawDailyStatisticRecord {
    res_used_date: Option<String>,
    daily_date: Option<String>,
    date: Option<String>,
    #[serde(deserialize_with = "lenient_amount")]
    res_used_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_amount")]
    amount: Option<f64>,
    #[serde(deserialize_with = "lenient_amount")]
    daily_target: Option<f64>,
    #[serde(deserialize_with = "lenient_amount")]
    target_amount: Option<f64>,
    res_approval_no: Option<String>,
    identifier: Option<String>,
    res_member_store_name: Option<String>,
    merchant_name: Option<String>,
    card_name: Option<String>,
    card_img: Option<String>,
    card_image_url: Option<String>,
}

impl From<RawDailyStatisticRecord> for DailyStatisticRecord {
    fn from(raw: RawDailyStatisticRecord) -> Self {
        Self {
            date: raw.res_used_date.or(raw.daily_date).or(raw.date).unwrap_or_default(),
            amount: raw.res_used_amount.or(raw.amount).unwrap_or_default(),
            target_amount: raw.daily_target.or(raw.target_amount).unwrap_or_default(),
            identifier: raw.res_approval_no.or(raw.identifier).unwrap_or_default(),
            merchant_name: raw.res_member_store_name.or(raw.merchant_name),
            card_name: raw.card_name,
            card_image_url: raw.card_img.or(raw.card_image_url),
        }
    }
}

/// Envelope returned by `GET /api/daily-statistics/{userNum}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStatisticsResponse {
    #[serde(default)]
    pub data: Option<Vec<DailyStatisticRecord>>,
}

/// Why daily statistics could not be loaded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatisticsFetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse daily statistics: {0}")]
    Parse(String),
    /// The backend answered with a bare message instead of data
    #[error("Daily statistics request rejected: {0}")]
    Rejected(String),
}

impl From<serde_json::Error> for StatisticsFetchError {
    fn from(error: serde_json::Error) -> Self {
        StatisticsFetchError::Parse(error.to_string())
    }
}

/// Decode a daily statistics response body.
///
/// Accepts the `{"data": [...]}` envelope, a bare list, or a JSON string; the
/// string form is how the backend reports failures and becomes
/// [`StatisticsFetchError::Rejected`]. The first token picks the shape, so a
/// malformed record is reported with serde's own message.
pub fn decode_daily_statistics(body: &str) -> Result<Vec<DailyStatisticRecord>, StatisticsFetchError> {
    match body.trim_start().chars().next() {
        Some('[') => Ok(serde_json::from_str(body)?),
        Some('"') => Err(StatisticsFetchError::Rejected(serde_json::from_str(body)?)),
        _ => {
            let response: DailyStatisticsResponse = serde_json::from_str(body)?;
            Ok(response.data.unwrap_or_default())
        }
    }
}

/// Card feeds send amounts either as numbers or as numeric strings; null and
/// blank strings count as absent.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
        Missing(Option<()>),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(value) => Ok(Some(value)),
        Amount::Text(text) => {
            let cleaned: String = text.chars().filter(|c| *c != ',').collect();
            let trimmed = cleaned.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid amount: {}", text)))
        }
        Amount::Missing(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let body = r#"{"data":[{"date":"20240105","amount":5000,"targetAmount":20000,"identifier":"A1"}]}"#;
        let records = decode_daily_statistics(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "20240105");
        assert_eq!(records[0].amount, 5000.0);
        assert_eq!(records[0].target_amount, 20000.0);
        assert_eq!(records[0].identifier, "A1");
    }

    #[test]
    fn test_decode_legacy_field_names() {
        let body = r#"[{
            "resUsedDate": "20240105",
            "resUsedAmount": "12,500",
            "dailyTarget": 30000,
            "resApprovalNo": "00012345",
            "resMemberStoreName": "Corner Cafe",
            "cardImg": "/images/card.png"
        }]"#;
        let records = decode_daily_statistics(body).unwrap();
        let record = &records[0];
        assert_eq!(record.amount, 12500.0);
        assert_eq!(record.target_amount, 30000.0);
        assert_eq!(record.identifier, "00012345");
        assert_eq!(record.merchant_name.as_deref(), Some("Corner Cafe"));
        assert_eq!(record.card_image_url.as_deref(), Some("/images/card.png"));
    }

    #[test]
    fn test_decode_missing_or_null_data_is_empty() {
        assert_eq!(decode_daily_statistics(r#"{"data":null}"#).unwrap(), Vec::new());
        assert_eq!(decode_daily_statistics("{}").unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_string_payload_is_rejected() {
        let result = decode_daily_statistics(r#""error""#);
        assert_eq!(result, Err(StatisticsFetchError::Rejected("error".to_string())));
    }

    #[test]
    fn test_decode_garbage_is_parse_error() {
        assert!(matches!(
            decode_daily_statistics("<html>"),
            Err(StatisticsFetchError::Parse(_))
        ));
        assert!(matches!(
            decode_daily_statistics(r#"[{"date":"20240105","amount":"lots"}]"#),
            Err(StatisticsFetchError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let records = decode_daily_statistics(r#"[{"date":"2024-01-05","amount":null}]"#).unwrap();
        assert_eq!(records[0].amount, 0.0);
        assert_eq!(records[0].target_amount, 0.0);
        assert_eq!(records[0].identifier, "");
    }

    #[test]
    fn test_decode_record_carrying_both_naming_schemes() {
        let body = r#"[{"resUsedDate":"20240105","dailyDate":"2024-01-05","amount":5000,"dailyTarget":20000}]"#;
        let records = decode_daily_statistics(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "20240105");
        assert_eq!(records[0].amount, 5000.0);
        assert_eq!(records[0].target_amount, 20000.0);
    }

    #[test]
    fn test_decode_envelope_with_duplicate_amount_keys() {
        let body = r#"{"data":[{
            "resUsedDate": "20240105",
            "dailyDate": "2024-01-05",
            "resUsedAmount": "7,000",
            "amount": 5000,
            "targetAmount": 10000,
            "dailyTarget": 20000,
            "resApprovalNo": "A1",
            "identifier": "ignored"
        }]}"#;
        let records = decode_daily_statistics(body).unwrap();
        let record = &records[0];
        assert_eq!(record.date, "20240105");
        assert_eq!(record.amount, 7000.0);
        assert_eq!(record.target_amount, 20000.0);
        assert_eq!(record.identifier, "A1");
    }

    #[test]
    fn test_daily_date_used_when_approval_date_missing() {
        let records = decode_daily_statistics(r#"[{"dailyDate":"2024-01-05","amount":1000}]"#).unwrap();
        assert_eq!(records[0].date, "2024-01-05");
        assert_eq!(records[0].amount, 1000.0);
    }

    #[test]
    fn test_parse_error_names_the_bad_value() {
        for body in [
            r#"[{"date":"20240105","amount":"lots"}]"#,
            r#"{"data":[{"date":"20240105","amount":"lots"}]}"#,
        ] {
            match decode_daily_statistics(body) {
                Err(StatisticsFetchError::Parse(message)) => {
                    assert!(message.contains("invalid amount: lots"), "unexpected message: {}", message);
                }
                other => panic!("expected parse error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_serialize_uses_canonical_names() {
        let records = decode_daily_statistics(r#"[{"resUsedDate":"20240105","resUsedAmount":5000}]"#).unwrap();
        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["date"], "20240105");
        assert_eq!(json["amount"], 5000.0);
        assert_eq!(json["targetAmount"], 0.0);
        assert!(json.get("merchantName").is_none());
    }

    #[test]
    fn test_error_display() {
        let error = StatisticsFetchError::Status { status: 500, message: "boom".to_string() };
        assert_eq!(error.to_string(), "Server error 500: boom");
    }
}
