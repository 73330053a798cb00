//! The typed record produced from a validated model reply.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Product information decoded from the model's JSON reply.
///
/// A value of this type exists only if all three fields were present and
/// type-matched in the source JSON; there is no partial or default-filled
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProductInfo {
    pub product_name: String,
    pub product_details: String,
    /// Conventionally non-negative; the schema does not enforce a floor.
    pub tentative_price_inr: i64,
}
