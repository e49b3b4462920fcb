#[cfg(feature = "mock")]
use std::cell::{Cell, RefCell};

#[cfg(feature = "mock")]
use loan_market_shared::{LoanFields, LoanId, LoanRecord};

/// A static product tile on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanProduct {
    pub name: &'static str,
    pub blurb: &'static str,
    pub icon: &'static str,
    pub max_amount: &'static str,
    pub interest_rate: &'static str,
    pub tenure: &'static str,
}

/// Loan-category showcase rendered on the landing page.
pub const LOAN_PRODUCTS: [LoanProduct; 6] = [
    LoanProduct {
        name: "Business Loan",
        blurb: "Grow your small business with flexible working capital.",
        icon: "fa-briefcase",
        max_amount: "$25,000",
        interest_rate: "8% - 15%",
        tenure: "3 - 36 months",
    },
    LoanProduct {
        name: "Education Loan",
        blurb: "Cover tuition, books and living costs while you study.",
        icon: "fa-graduation-cap",
        max_amount: "$15,000",
        interest_rate: "6% - 12%",
        tenure: "12 - 60 months",
    },
    LoanProduct {
        name: "Home Improvement",
        blurb: "Renovate, repair or extend the place you live in.",
        icon: "fa-house",
        max_amount: "$20,000",
        interest_rate: "9% - 16%",
        tenure: "6 - 48 months",
    },
    LoanProduct {
        name: "Personal Loan",
        blurb: "For life's planned and unplanned expenses.",
        icon: "fa-user",
        max_amount: "$10,000",
        interest_rate: "10% - 18%",
        tenure: "3 - 24 months",
    },
    LoanProduct {
        name: "Medical Emergency",
        blurb: "Fast funds for treatment and hospital bills.",
        icon: "fa-kit-medical",
        max_amount: "$12,000",
        interest_rate: "7% - 14%",
        tenure: "6 - 36 months",
    },
    LoanProduct {
        name: "Quick Cash Loan",
        blurb: "Small amounts, approved and paid out quickly.",
        icon: "fa-bolt",
        max_amount: "$5,000",
        interest_rate: "12% - 20%",
        tenure: "1 - 12 months",
    },
];

// =============== Mock 数据 ===============

#[cfg(feature = "mock")]
thread_local! {
    static MOCK_LOANS: RefCell<Vec<LoanRecord>> = RefCell::new(mock_loans());
    static NEXT_MOCK_ID: Cell<usize> = const { Cell::new(100) };
}

/// Run `f` against the in-memory loan list backing the `mock` build.
#[cfg(feature = "mock")]
pub fn with_mock_loans<R>(f: impl FnOnce(&mut Vec<LoanRecord>) -> R) -> R {
    MOCK_LOANS.with(|loans| f(&mut loans.borrow_mut()))
}

#[cfg(feature = "mock")]
pub fn next_mock_id() -> LoanId {
    NEXT_MOCK_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        LoanId::new(format!("mock-{id}"))
    })
}

#[cfg(feature = "mock")]
fn mock_loans() -> Vec<LoanRecord> {
    let seed = [
        ("Small Business Boost", "Business", "25000", "8% - 15%", "3 - 36 months", true),
        ("Semester Fees", "Education", "15000", "6% - 12%", "12 - 60 months", true),
        ("Kitchen Remodel", "Home Improvement", "20000", "9% - 16%", "6 - 48 months", false),
        ("Clinic Bills", "Medical", "12000", "7% - 14%", "6 - 36 months", true),
        ("Harvest Advance", "Agriculture", "18000", "7% - 13%", "6 - 24 months", false),
    ];

    seed.into_iter()
        .enumerate()
        .map(|(index, (title, category, amount, rate, tenure, on_home))| {
            LoanRecord::new(LoanId::new(format!("mock-{}", index + 1)), LoanFields {
                title: title.to_string(),
                category: category.to_string(),
                short_description: format!("{category} financing made simple."),
                description: format!(
                    "{title} is a sample {category} loan served by the mock build."
                ),
                max_loan_amount: format!("${amount}"),
                interest_rate: rate.to_string(),
                tenure: tenure.to_string(),
                emi_plans: vec!["3 months".to_string(), "6 months".to_string()],
                visible_on_home: on_home,
                ..LoanFields::default()
            })
        })
        .collect()
}
