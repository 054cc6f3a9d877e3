//! Recipe entity.

/// Compact recipe representation.
///
/// Recipe authoring lives outside this service; cart and favorite
/// operations only ever need the existence check and this summary, which
/// is also what the add endpoints return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    pub cooking_time: i32,
}
