//! Bodies of the `/session` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::AccountId;

/// Kind of IG trading account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Contract for difference account
    Cfd,
    /// Share dealing account
    Physical,
    /// Spread betting account
    Spreadbet,
}

/// Balances of the current account, returned on login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// Account balance
    pub balance: Decimal,
    /// Deposit
    pub deposit: Decimal,
    /// Running profit and loss
    pub profit_loss: Decimal,
    /// Funds available for trading
    pub available: Decimal,
}

/// One of the accounts the client has access to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Account identifier
    pub account_id: AccountId,
    /// Account name
    pub account_name: String,
    /// Whether this is the preferred (default) account
    #[serde(default)]
    pub preferred: bool,
    /// Account type
    pub account_type: AccountType,
}

/// Response body of `POST /session` (version 2).
///
/// Only `currentAccountId` is required; everything else is read leniently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Type of the current account
    #[serde(default)]
    pub account_type: Option<AccountType>,
    /// Balances of the current account
    #[serde(default)]
    pub account_info: Option<AccountInfo>,
    /// Account currency ISO code
    #[serde(default)]
    pub currency_iso_code: Option<String>,
    /// Account currency symbol
    #[serde(default)]
    pub currency_symbol: Option<String>,
    /// Account the session is currently bound to
    pub current_account_id: AccountId,
    /// Streaming endpoint
    #[serde(default)]
    pub lightstreamer_endpoint: Option<String>,
    /// Accounts the client can switch to
    #[serde(default)]
    pub accounts: Vec<AccountSummary>,
    /// Client identifier
    #[serde(default)]
    pub client_id: Option<String>,
    /// Offset from UTC in hours, possibly fractional
    #[serde(default)]
    pub timezone_offset: Option<Decimal>,
    /// Whether the client has active demo accounts
    #[serde(default)]
    pub has_active_demo_accounts: bool,
    /// Whether the client has active live accounts
    #[serde(default)]
    pub has_active_live_accounts: bool,
    /// Whether trailing stops are enabled
    #[serde(default)]
    pub trailing_stops_enabled: bool,
    /// Whether dealing is enabled
    #[serde(default)]
    pub dealing_enabled: bool,
    /// Environment the client was rerouted to, if any
    #[serde(default)]
    pub rerouting_environment: Option<String>,
}

/// Response body of `GET /session` (version 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetails {
    /// Client identifier
    #[serde(default)]
    pub client_id: String,
    /// Account the session is bound to
    pub account_id: AccountId,
    /// Offset from UTC in hours, possibly fractional
    #[serde(default)]
    pub timezone_offset: Option<Decimal>,
    /// Locale, e.g. `en_GB`
    #[serde(default)]
    pub locale: String,
    /// Account currency
    #[serde(default)]
    pub currency: String,
    /// Streaming endpoint
    #[serde(default)]
    pub lightstreamer_endpoint: String,
}

/// Request body of `PUT /session` (version 1).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchAccountRequest<'a> {
    /// Account to switch to
    pub account_id: &'a AccountId,
    /// Whether to make it the default account
    pub default_account: bool,
}

/// Response body of `PUT /session` (version 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchAccountResponse {
    /// Whether trailing stops are enabled
    #[serde(default)]
    pub trailing_stops_enabled: bool,
    /// Whether dealing is enabled
    #[serde(default)]
    pub dealing_enabled: bool,
    /// Whether the client has active demo accounts
    #[serde(default)]
    pub has_active_demo_accounts: bool,
    /// Whether the client has active live accounts
    #[serde(default)]
    pub has_active_live_accounts: bool,
}
