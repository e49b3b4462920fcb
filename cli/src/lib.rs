//! Admin CLI for the loan marketplace.
//!
//! Drives the shared [`loan_market_shared::MutationCoordinator`] through a
//! `reqwest` implementation of the loan API.

pub mod cli;
pub mod client;
pub mod commands;
pub mod output;
pub mod utils;
