use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreate {
        pub description: String,
        pub amount: f64,
        pub category: String,
        /// Calendar date in `YYYY-MM-DD` form.
        pub date: String,
    }

    /// Partial update. An omitted field leaves the record untouched; a
    /// supplied field must pass the same validation as on create.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        pub description: Option<String>,
        pub amount: Option<f64>,
        pub category: Option<String>,
        pub date: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: u64,
        pub description: String,
        pub amount: f64,
        pub category: String,
        /// Serialized as `YYYY-MM-DD`.
        pub date: NaiveDate,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }
}

pub mod response {
    use super::*;

    /// The envelope every endpoint answers with, success or failure.
    ///
    /// `status_code` mirrors the HTTP status; `data` carries the payload on
    /// success and is `null` on failure (and for responses with no payload).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ApiResponse<T> {
        #[serde(rename = "statusCode")]
        pub status_code: u16,
        pub message: String,
        pub data: Option<T>,
    }

    impl<T> ApiResponse<T> {
        pub fn ok(message: &str, data: T) -> Self {
            Self {
                status_code: 200,
                message: message.to_string(),
                data: Some(data),
            }
        }

        pub fn error(status_code: u16, message: String) -> Self {
            Self {
                status_code,
                message,
                data: None,
            }
        }
    }
}

pub mod health {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HealthStatus {
        pub status: String,
    }
}

#[cfg(test)]
mod tests {
    use super::expense::ExpenseView;
    use super::response::ApiResponse;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn envelope_uses_wire_field_names() {
        let body = serde_json::to_value(ApiResponse::ok("done", 7u64)).unwrap();
        assert_eq!(body["statusCode"], 200);
        assert_eq!(body["message"], "done");
        assert_eq!(body["data"], 7);

        let body = serde_json::to_value(ApiResponse::<u64>::error(404, "missing".to_string()))
            .unwrap();
        assert_eq!(body["statusCode"], 404);
        assert!(body["data"].is_null());
    }

    #[test]
    fn expense_view_date_serializes_as_calendar_day() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let view = ExpenseView {
            id: 1,
            description: "Coffee".to_string(),
            amount: 4.5,
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            created_at: timestamp,
            updated_at: timestamp,
        };

        let body = serde_json::to_value(&view).unwrap();
        assert_eq!(body["date"], "2024-01-15");

        let back: ExpenseView = serde_json::from_value(body).unwrap();
        assert_eq!(back, view);
    }
}
