//! Account entity.

use serde::{Deserialize, Serialize};

/// Bank account as exposed by the account service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Account {
    /// Account identifier
    #[cfg_attr(feature = "openapi", schema(example = "ACC-1001"))]
    pub account_id: String,
    /// Current balance
    #[cfg_attr(feature = "openapi", schema(example = 2500.0))]
    pub balance: f64,
    /// ISO currency code
    #[cfg_attr(feature = "openapi", schema(example = "USD"))]
    pub currency: String,
}

impl Account {
    pub fn new(account_id: impl Into<String>, balance: f64, currency: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            balance,
            currency: currency.into(),
        }
    }
}
