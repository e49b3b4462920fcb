pub mod admin_loans;
pub mod apply_loan;
pub mod all_loans;
pub mod home;
pub mod loan_detail;
pub mod not_found;
