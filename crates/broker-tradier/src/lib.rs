//! Tradier brokerage integration for options-desk.
//!
//! This crate provides:
//! - REST client for the Tradier account API (balances, positions)
//! - Bearer-token authentication sourced from environment variables
//! - Typed errors that collapse every non-success response into one
//!   status-plus-body error path
//!
//! # Authentication
//!
//! Set the following environment variables:
//!
//! - `TRADIER_ACCOUNT_ID`: Your Tradier account identifier
//! - `TRADIER_ACCESS_TOKEN`: Your API access token
//!
//! For the sandbox environment, use `TRADIER_SANDBOX_ACCOUNT_ID` and
//! `TRADIER_SANDBOX_ACCESS_TOKEN`.
//!
//! # API Endpoints
//!
//! - `GET /accounts/{account_id}/balances` - Account balances
//! - `GET /accounts/{account_id}/positions` - Open positions

pub mod auth;
pub mod client;
pub mod error;

pub use auth::{TradierAuth, TradierAuthConfig};
pub use client::{
    Balances, TradierClient, TradierClientConfig, TRADIER_PROD_URL, TRADIER_SANDBOX_URL,
};
pub use error::{Result, TradierError};
