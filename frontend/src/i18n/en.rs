pub mod common {
    pub const BRAND_NAME: &str = "LoanLink";
    pub const LOADING: &str = "Loading...";
    pub const ARROW_RIGHT: &str = "→";
}

pub mod theme_toggle {
    pub const SWITCH_TO_LIGHT: &str = "Switch to light mode";
    pub const SWITCH_TO_DARK: &str = "Switch to dark mode";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Loading";
}

pub mod banner {
    pub const ERROR_TITLE: &str = "Something went wrong";
    pub const SUCCESS_TITLE: &str = "Done";
    pub const CLOSE_ARIA: &str = "Dismiss message";
}

pub mod header {
    pub const NAV_HOME: &str = "Home";
    pub const NAV_ALL_LOANS: &str = "All Loans";
    pub const NAV_DASHBOARD: &str = "Dashboard";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
}

pub mod footer {
    pub const TAGLINE: &str = "Microloans for small businesses, students and families.";
    pub const COPYRIGHT: &str = "© 2025 LoanLink. All rights reserved.";
}

pub mod home {
    pub const HERO_TITLE: &str = "Fast, fair microloans";
    pub const HERO_SUBTITLE: &str =
        "Compare loan products, pick an EMI plan and apply in minutes.";
    pub const HERO_CTA: &str = "Browse all loans";
    pub const SHOWCASE_TITLE: &str = "Loan categories";
    pub const FEATURED_TITLE: &str = "Featured loans";
    pub const FEATURED_EMPTY: &str = "No featured loans yet.";
    pub const MAX_AMOUNT: &str = "Max amount";
    pub const INTEREST: &str = "Interest";
    pub const TENURE: &str = "Tenure";
}

pub mod all_loans {
    pub const TITLE: &str = "All loans";
    pub const SUBTITLE: &str = "Every loan product currently offered.";
    pub const SEARCH_PLACEHOLDER: &str = "Search by title or category...";
    pub const EMPTY: &str = "No loans match your filters.";
    pub const LOAD_FAILED: &str = "Failed to load loans";
}

pub mod loan_card {
    pub const MAX_LOAN: &str = "Max loan";
    pub const INTEREST: &str = "Interest";
    pub const VIEW_DETAILS: &str = "View details";
}

pub mod loan_detail {
    pub const BACK: &str = "Back to All Loans";
    pub const NOT_FOUND: &str = "Loan not found.";
    pub const MAX_LOAN: &str = "Max loan";
    pub const INTEREST: &str = "Interest rate";
    pub const TENURE: &str = "Tenure";
    pub const CATEGORY: &str = "Category";
    pub const EMI_PLANS: &str = "EMI plans";
    pub const ABOUT: &str = "About this loan";
    pub const APPLY: &str = "Apply now";
    pub const LOAD_FAILED: &str = "Failed to load loan";
}

pub mod apply_loan {
    pub const HEADING_TEMPLATE: &str = "Apply for {}";
    pub const INTRO: &str = "Review the terms below before starting your application.";
    pub const NEXT_STEPS: &str = "A loan officer will contact you to collect your documents and \
                                  confirm the amount and EMI plan.";
    pub const BACK: &str = "Back to loan details";
    pub const BROWSE: &str = "Browse all loans";
    pub const NOT_FOUND: &str = "This loan is no longer available.";
    pub const LOAD_FAILED: &str = "Failed to load loan";
}

pub mod admin {
    pub const TITLE: &str = "All loans";
    pub const SUBTITLE: &str = "Manage the loan catalogue and the homepage selection.";
    pub const ADD_LOAN: &str = "Add loan";
    pub const STAT_TOTAL: &str = "Total Loans";
    pub const STAT_ON_HOME: &str = "On Homepage";
    pub const STAT_CATEGORIES: &str = "Categories";
    pub const STAT_HIDDEN: &str = "Hidden";
    pub const SEARCH_PLACEHOLDER: &str = "Search loans...";
    pub const COL_IMAGE: &str = "Image";
    pub const COL_TITLE: &str = "Title";
    pub const COL_CATEGORY: &str = "Category";
    pub const COL_INTEREST: &str = "Interest";
    pub const COL_MAX_LOAN: &str = "Max loan";
    pub const COL_HOME: &str = "Show on home";
    pub const COL_ACTIONS: &str = "Actions";
    pub const EDIT: &str = "Edit";
    pub const DELETE: &str = "Delete";
    pub const EMPTY: &str = "No loans found.";
    pub const CONFIRM_DELETE_TEMPLATE: &str = "Are you sure you want to delete \"{}\"?";
    pub const CREATED: &str = "Created!";
    pub const UPDATED: &str = "Updated!";
    pub const DELETED: &str = "Deleted!";
    pub const ADDED_TO_HOME: &str = "Added to Home";
    pub const REMOVED_FROM_HOME: &str = "Removed from Home";
    pub const LOAD_FAILED: &str = "Failed to load loans";
    pub const SAVE_FAILED: &str = "Failed to save loan";
    pub const DELETE_FAILED: &str = "Could not delete loan";
    pub const VISIBILITY_FAILED: &str = "Could not update loan visibility";
    pub const IMAGE_FAILED: &str = "Could not read image";
}

pub mod loan_form {
    pub const CREATE_TITLE: &str = "Add new loan";
    pub const EDIT_TITLE: &str = "Edit loan";
    pub const TITLE: &str = "Title";
    pub const CATEGORY: &str = "Category";
    pub const CATEGORY_PLACEHOLDER: &str = "Select a category";
    pub const SHORT_DESCRIPTION: &str = "Short description";
    pub const DESCRIPTION: &str = "Description";
    pub const MAX_LOAN: &str = "Max loan amount";
    pub const INTEREST_RATE: &str = "Interest rate";
    pub const TENURE: &str = "Tenure";
    pub const EMI_PLANS: &str = "EMI plans (comma separated)";
    pub const IMAGE: &str = "Image";
    pub const CANCEL: &str = "Cancel";
    pub const SAVE: &str = "Save";
    pub const CREATE: &str = "Create";
    pub const SAVING: &str = "Saving...";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "Sorry, the page you are looking for does not exist.";
    pub const HOME_LINK: &str = "Go home";
}
