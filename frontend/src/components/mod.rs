// Reusable components live here.

pub mod banner;
pub mod category_chips;
pub mod footer;
pub mod header;
pub mod loading_spinner;
pub mod loan_card;
pub mod stats_card;
pub mod theme_toggle;
