//! Add/edit form state for the admin dashboard.
//!
//! The page keeps at most one [`FormSession`] (`Option<FormSession>`), so only
//! one modal can be open. [`FormSession::validate`] is the only way to obtain a
//! [`ValidatedLoanForm`], which is what the coordinator accepts.

use thiserror::Error;

use crate::loan::{amount_digits, format_currency, split_emi_plans, LoanId, LoanRecord};

/// Raw field values as typed by the admin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanFormInput {
    pub title: String,
    pub category: String,
    pub short_description: String,
    pub description: String,
    /// Digits only; the currency symbol is added on submit.
    pub max_loan: String,
    pub interest_rate: String,
    pub tenure: String,
    /// Comma-separated list.
    pub emi_plans: String,
    /// Image URL or `data:` URL from a local upload.
    pub image: String,
}

/// Whether the session creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(LoanRecord),
}

/// Transient state of the add/edit modal.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    pub mode: FormMode,
    pub input: LoanFormInput,
    /// Set while the create/update request is in flight.
    pub submitting: bool,
}

impl FormSession {
    /// Empty session for a new loan.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            input: LoanFormInput::default(),
            submitting: false,
        }
    }

    /// Session pre-filled from an existing record.
    pub fn edit(record: &LoanRecord) -> Self {
        let fields = &record.fields;
        let input = LoanFormInput {
            title: fields.title.clone(),
            category: fields.category.clone(),
            short_description: fields.short_description.clone(),
            description: fields.description.clone(),
            max_loan: amount_digits(&fields.max_loan_amount),
            interest_rate: fields.interest_rate.clone(),
            tenure: fields.tenure.clone(),
            emi_plans: fields.emi_plans.join(", "),
            image: fields.image_data.clone(),
        };
        Self {
            mode: FormMode::Edit(record.clone()),
            input,
            submitting: false,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Id of the record being edited, if any.
    pub fn editing_id(&self) -> Option<&LoanId> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Edit(record) => Some(&record.id),
        }
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.input.image = image.into();
    }

    pub fn validate(&self) -> Result<ValidatedLoanForm, FormError> {
        self.input.validate()
    }
}

/// A required field left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Title,
    Category,
    ShortDescription,
    MaxLoan,
    InterestRate,
    Tenure,
}

impl RequiredField {
    pub fn message(self) -> &'static str {
        match self {
            Self::Title => "Title is required",
            Self::Category => "Category is required",
            Self::ShortDescription => "Description is required",
            Self::MaxLoan => "Max loan is required",
            Self::InterestRate => "Interest rate is required",
            Self::Tenure => "Tenure is required",
        }
    }
}

/// Local validation failure; never reaches the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .missing.iter().map(|field| field.message()).collect::<Vec<_>>().join(", "))]
pub struct FormError {
    pub missing: Vec<RequiredField>,
}

impl FormError {
    pub fn is_missing(&self, field: RequiredField) -> bool {
        self.missing.contains(&field)
    }
}

impl LoanFormInput {
    pub fn validate(&self) -> Result<ValidatedLoanForm, FormError> {
        let checks = [
            (RequiredField::Title, &self.title),
            (RequiredField::Category, &self.category),
            (RequiredField::ShortDescription, &self.short_description),
            (RequiredField::MaxLoan, &self.max_loan),
            (RequiredField::InterestRate, &self.interest_rate),
            (RequiredField::Tenure, &self.tenure),
        ];
        let missing: Vec<RequiredField> = checks
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(FormError {
                missing,
            });
        }

        Ok(ValidatedLoanForm {
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            short_description: self.short_description.trim().to_string(),
            description: self.description.trim().to_string(),
            max_loan_amount: format_currency(&self.max_loan),
            interest_rate: self.interest_rate.trim().to_string(),
            tenure: self.tenure.trim().to_string(),
            emi_plans: split_emi_plans(&self.emi_plans),
            image_data: self.image.clone(),
        })
    }
}

/// Form values that passed validation, already normalized for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLoanForm {
    pub(crate) title: String,
    pub(crate) category: String,
    pub(crate) short_description: String,
    pub(crate) description: String,
    pub(crate) max_loan_amount: String,
    pub(crate) interest_rate: String,
    pub(crate) tenure: String,
    pub(crate) emi_plans: Vec<String>,
    pub(crate) image_data: String,
}

impl ValidatedLoanForm {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn max_loan_amount(&self) -> &str {
        &self.max_loan_amount
    }

    pub fn emi_plans(&self) -> &[String] {
        &self.emi_plans
    }
}
