use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::ValidationError;

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page, floored at 1
    pub page: Option<i64>,
    /// Page size, default 10, capped at 50
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 50;

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub total: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

impl PaginationMeta {
    pub fn new(params: &PaginationParams, total: i64) -> Self {
        let limit = params.limit();
        Self {
            total,
            current_page: params.page(),
            total_pages: (total + limit - 1) / limit,
            has_more: total > params.offset().saturating_add(limit),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// Timestamps arrive either as RFC 3339 or as a bare `YYYY-MM-DD`, which is
/// read as midnight UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
}

pub mod flexible_datetime {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
    }

    pub fn option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse_datetime(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'"))),
        }
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")))
    } else {
        Ok(())
    }
}

pub(crate) fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(ValidationError::new("negative").with_message(Cow::Borrowed("must not be negative")))
    } else {
        Ok(())
    }
}

pub(crate) fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("not_positive").with_message(Cow::Borrowed("must be positive")))
    }
}

/// NUMERIC columns travel as JSON numbers.
pub(crate) fn to_f64(value: Decimal) -> f64 {
    use rust_decimal::prelude::ToPrimitive;
    value.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn pagination_defaults_and_bounds() {
        let params = PaginationParams::default();
        assert_eq!((params.page(), params.limit(), params.offset()), (1, 10, 0));

        let params = PaginationParams {
            page: Some(0),
            limit: Some(500),
        };
        assert_eq!((params.page(), params.limit()), (1, 50));

        let params = PaginationParams {
            page: Some(3),
            limit: Some(-4),
        };
        assert_eq!((params.page(), params.limit(), params.offset()), (3, 1, 2));
    }

    #[test]
    fn pagination_meta_reports_has_more() {
        let params = PaginationParams {
            page: Some(2),
            limit: Some(10),
        };
        let meta = PaginationMeta::new(&params, 25);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_more);

        let meta = PaginationMeta::new(&params, 20);
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_more);

        let meta = PaginationMeta::new(&PaginationParams::default(), 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_more);
    }

    #[test]
    fn dates_accept_rfc3339_and_plain_days() {
        assert_eq!(
            parse_datetime("2026-10-16"),
            Some(Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_datetime("2026-10-16T08:30:00+02:00"),
            Some(Utc.with_ymd_and_hms(2026, 10, 16, 6, 30, 0).unwrap())
        );
        assert_eq!(parse_datetime("yesterday"), None);
    }

    #[test]
    fn decimal_validators() {
        assert!(non_negative(&Decimal::ZERO).is_ok());
        assert!(non_negative(&Decimal::NEGATIVE_ONE).is_err());
        assert!(positive(&Decimal::ZERO).is_err());
        assert!(positive(&Decimal::new(1001, 1)).is_ok());
    }
}
