//! Aggregated shopping list line.

/// One line of the aggregated shopping list: an ingredient identity and
/// the amount summed over every recipe in the user's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub name: String,
    pub measurement_unit: String,
    pub total_amount: i64,
}

impl ShoppingListItem {
    pub fn new(name: impl Into<String>, measurement_unit: impl Into<String>, total_amount: i64) -> Self {
        Self {
            name: name.into(),
            measurement_unit: measurement_unit.into(),
            total_amount,
        }
    }
}
