use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use loan_market_shared::api::{DEFAULT_API_BASE, DEFAULT_LOANS_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Vertical,
    Json,
}

#[derive(Parser)]
#[command(name = "loan-admin", version, about = "Loan marketplace admin CLI")]
pub struct Cli {
    /// API origin, e.g. `http://localhost:3000`.
    #[arg(long, global = true, env = "LOANMARKET_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    /// Loan collection path under the API origin.
    #[arg(long, global = true, env = "LOANMARKET_LOANS_PATH", default_value = DEFAULT_LOANS_PATH)]
    pub loans_path: String,
    /// Per-request timeout in seconds.
    #[arg(long, global = true, default_value_t = 15)]
    pub timeout_secs: u64,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// GET /loans, then filter locally like the admin dashboard.
    List {
        /// Exact category, or `All`.
        #[arg(long, default_value = "All")]
        category: String,
        /// Case-insensitive substring of title or category.
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// GET /loans/:id
    Show {
        /// Loan id.
        id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Vertical)]
        format: OutputFormat,
    },
    /// Category chips derived from the current list.
    Categories,
    /// Dashboard counters (total, on homepage, categories, hidden).
    Stats,
    /// POST /loans
    Create {
        #[command(flatten)]
        fields: LoanArgs,
    },
    /// PATCH /loans/:id with the full field set; omitted flags keep current
    /// values.
    Update {
        /// Loan id.
        id: String,
        #[command(flatten)]
        fields: LoanArgs,
    },
    /// DELETE /loans/:id (requires --yes).
    Delete {
        /// Loan id.
        id: String,
        /// Confirm destructive operation.
        #[arg(long)]
        yes: bool,
    },
    /// PATCH /loans/:id with only the homepage flag.
    ShowOnHome {
        /// Loan id.
        id: String,
        /// `true` to feature on the homepage, `false` to hide.
        #[arg(long, action = ArgAction::Set)]
        visible: bool,
    },
}

/// Loan form fields as flags. Required ones are checked by the form
/// validator, not by clap, so `update` can leave them out.
#[derive(Debug, Clone, Default, Args)]
pub struct LoanArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub short_description: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Numeric amount; the `$` prefix is added automatically.
    #[arg(long)]
    pub max_loan: Option<String>,
    #[arg(long)]
    pub interest_rate: Option<String>,
    #[arg(long)]
    pub tenure: Option<String>,
    /// Comma-separated EMI plans.
    #[arg(long)]
    pub emi_plans: Option<String>,
    /// Remote image URL.
    #[arg(long, conflicts_with = "image_file")]
    pub image_url: Option<String>,
    /// Local image, embedded as a base64 `data:` URL.
    #[arg(long)]
    pub image_file: Option<PathBuf>,
}
