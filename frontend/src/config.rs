/// Configuration for the frontend application
use loan_market_shared::{
    api::{DEFAULT_API_BASE, DEFAULT_LOANS_PATH},
    LoanEndpoints,
};

// API base URL - 编译时从环境变量读取，默认本地开发地址
// 生产环境通过 workflow 设置 LOANMARKET_API_BASE 环境变量
pub const API_BASE: &str = match option_env!("LOANMARKET_API_BASE") {
    Some(url) => url,
    None => DEFAULT_API_BASE,
};

/// Collection path under [`API_BASE`].
pub const LOANS_PATH: &str = match option_env!("LOANMARKET_LOANS_PATH") {
    Some(path) => path,
    None => DEFAULT_LOANS_PATH,
};

pub fn loan_endpoints() -> LoanEndpoints {
    LoanEndpoints::new(API_BASE, LOANS_PATH)
}
