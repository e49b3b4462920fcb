//! Shared loan-market core used by the web frontend and the admin CLI.
//!
//! The crate is target-agnostic: it compiles for `wasm32` (Yew frontend) and
//! for native targets (CLI). All I/O goes through the [`api::LoanApi`] trait.

pub mod api;
pub mod coordinator;
pub mod filter;
pub mod form;
pub mod loan;
pub mod store;
pub mod theme;

pub use api::{ApiError, LoanApi, LoanEndpoints, LoanPatch};
pub use coordinator::{MutationCoordinator, MutationError};
pub use filter::{category_options, filter_loans, CategoryFilter, LoanFilter, ALL_CATEGORIES};
pub use form::{
    FormError, FormMode, FormSession, LoanFormInput, RequiredField, ValidatedLoanForm,
};
pub use loan::{LoanFields, LoanId, LoanRecord, LOAN_CATEGORIES};
pub use store::{LoanStats, RecordStore, SharedStore};
pub use theme::Theme;
