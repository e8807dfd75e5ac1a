//! Transaction entity.

use serde::{Deserialize, Serialize};

/// Money movement recorded by the transaction service.
///
/// Fields are only type-checked; amounts and account ids are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Transaction {
    /// Transaction identifier
    #[cfg_attr(feature = "openapi", schema(example = "TX-0001"))]
    pub transaction_id: String,
    /// Account the transaction is booked against
    #[cfg_attr(feature = "openapi", schema(example = "ACC-1001"))]
    pub account_id: String,
    /// Amount moved
    #[cfg_attr(feature = "openapi", schema(example = 125.5))]
    pub amount: f64,
    /// ISO currency code
    #[cfg_attr(feature = "openapi", schema(example = "USD"))]
    pub currency: String,
}
