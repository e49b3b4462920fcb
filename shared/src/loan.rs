use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category choices offered by the admin form.
pub const LOAN_CATEGORIES: &[&str] =
    &["Business", "Education", "Home Improvement", "Personal", "Medical", "Agriculture"];

/// Text shown in place of an empty amount, rate or tenure.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Server-assigned loan identifier (`_id` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanId(String);

impl LoanId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LoanId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LoanId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Everything about a loan product except its id.
///
/// This is also the request body for `POST /loans` and for a full
/// `PATCH /loans/{id}`. Missing fields default so older records still decode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanFields {
    #[serde(rename = "loanTitle", default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    /// Currency-prefixed amount, e.g. `$25000`.
    #[serde(rename = "maxLoan", default)]
    pub max_loan_amount: String,
    #[serde(default)]
    pub interest_rate: String,
    #[serde(default)]
    pub tenure: String,
    #[serde(default)]
    pub emi_plans: Vec<String>,
    /// Remote URL or inline `data:` URL; empty when there is no image.
    #[serde(rename = "image", default)]
    pub image_data: String,
    #[serde(rename = "showOnHome", default)]
    pub visible_on_home: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One loan product as stored by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    #[serde(rename = "_id")]
    pub id: LoanId,
    #[serde(flatten)]
    pub fields: LoanFields,
}

impl LoanRecord {
    /// Attach a server id to a set of fields.
    pub fn new(id: LoanId, fields: LoanFields) -> Self {
        Self {
            id,
            fields,
        }
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn category(&self) -> &str {
        &self.fields.category
    }

    pub fn visible_on_home(&self) -> bool {
        self.fields.visible_on_home
    }

    /// True when the image was uploaded inline rather than linked.
    pub fn has_inline_image(&self) -> bool {
        self.fields.image_data.starts_with("data:")
    }

    pub fn max_loan_display(&self) -> &str {
        display_or_unspecified(&self.fields.max_loan_amount)
    }

    pub fn interest_rate_display(&self) -> &str {
        display_or_unspecified(&self.fields.interest_rate)
    }

    pub fn tenure_display(&self) -> &str {
        display_or_unspecified(&self.fields.tenure)
    }

    /// Long description, falling back to the short one.
    pub fn description_display(&self) -> &str {
        if self.fields.description.trim().is_empty() {
            &self.fields.short_description
        } else {
            &self.fields.description
        }
    }
}

/// Return `value`, or [`NOT_SPECIFIED`] when it is blank.
pub fn display_or_unspecified(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

/// Prefix a raw amount with the currency symbol.
pub fn format_currency(amount: &str) -> String {
    format!("${}", amount.trim())
}

/// Keep only the digits of a stored amount (`"$25,000"` -> `"25000"`).
pub fn amount_digits(formatted: &str) -> String {
    formatted.chars().filter(char::is_ascii_digit).collect()
}

/// Split a comma-separated EMI plan list, trimming entries and dropping
/// empty ones.
pub fn split_emi_plans(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|plan| !plan.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn record_decodes_wire_shape() {
        let value = json!({
            "_id": "665f1c2a9b1e",
            "loanTitle": "Small Business Boost",
            "category": "Business",
            "shortDescription": "Working capital",
            "description": "Inventory and equipment financing",
            "maxLoan": "$25000",
            "interestRate": "8% - 15%",
            "tenure": "3 - 36 months",
            "emiPlans": ["3 months", "6 months"],
            "image": "https://img.example/loan.jpg",
            "showOnHome": true,
            "createdAt": "2025-01-02T03:04:05Z",
            "updatedAt": "2025-01-03T03:04:05.123Z"
        });

        let record: LoanRecord = serde_json::from_value(value).expect("decode record");
        assert_eq!(record.id.as_str(), "665f1c2a9b1e");
        assert_eq!(record.title(), "Small Business Boost");
        assert_eq!(record.fields.max_loan_amount, "$25000");
        assert_eq!(record.fields.emi_plans, vec!["3 months", "6 months"]);
        assert!(record.visible_on_home());
        assert!(record.fields.created_at.is_some());
        assert!(record.fields.updated_at > record.fields.created_at);
    }

    #[test]
    fn legacy_record_without_optional_fields_decodes() {
        let record: LoanRecord =
            serde_json::from_value(json!({ "_id": "a1", "loanTitle": "Old", "category": "Personal" }))
                .expect("decode legacy record");
        assert!(record.fields.emi_plans.is_empty());
        assert!(!record.visible_on_home());
        assert_eq!(record.fields.created_at, None);
        assert_eq!(record.interest_rate_display(), NOT_SPECIFIED);
    }

    #[test]
    fn fields_serialize_with_wire_names_and_no_id() {
        let fields = LoanFields {
            title: "Edu".into(),
            category: "Education".into(),
            max_loan_amount: "$15000".into(),
            visible_on_home: false,
            ..LoanFields::default()
        };
        let value = serde_json::to_value(&fields).expect("encode fields");
        assert_eq!(value["loanTitle"], "Edu");
        assert_eq!(value["maxLoan"], "$15000");
        assert_eq!(value["showOnHome"], false);
        assert!(value.get("_id").is_none());
        assert!(value.get("createdAt").is_none());
    }

    #[test]
    fn emi_plans_are_trimmed_and_empty_entries_dropped() {
        assert_eq!(split_emi_plans(" 3 months,6 months ,, 12 months"), vec![
            "3 months",
            "6 months",
            "12 months"
        ]);
        assert!(split_emi_plans("  ").is_empty());
    }

    #[test]
    fn amount_helpers_round_trip_display_value() {
        assert_eq!(format_currency(" 25000 "), "$25000");
        assert_eq!(amount_digits("$25,000"), "25000");
        assert_eq!(amount_digits(""), "");
    }

    #[test]
    fn description_falls_back_to_short_description() {
        let record = LoanRecord::new(LoanId::new("x"), LoanFields {
            short_description: "short".into(),
            ..LoanFields::default()
        });
        assert_eq!(record.description_display(), "short");
        assert!(!record.has_inline_image());
    }
}
