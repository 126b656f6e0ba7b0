use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckoutType {
    Break,
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BreakType {
    Lunch,
}

/// JSON body of `POST /attendance/checkout`.
///
/// Resuming from a break sends no body at all; the server infers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub checkout_type: CheckoutType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_type: Option<BreakType>,
}

impl CheckoutRequest {
    pub fn lunch_break() -> Self {
        Self {
            checkout_type: CheckoutType::Break,
            break_type: Some(BreakType::Lunch),
        }
    }

    pub fn final_checkout() -> Self {
        Self {
            checkout_type: CheckoutType::Final,
            break_type: None,
        }
    }
}
