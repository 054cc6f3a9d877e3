//! Shopping list aggregation and rendering.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::ShoppingListItem;
use crate::domain::repositories::ShoppingListRepository;
use crate::error::AppError;

/// Trailing line of the rendered shopping list.
const DOCUMENT_FOOTER: &str = "Recipegram";

/// Service computing the deduplicated, summed ingredient list over a
/// user's shopping cart.
///
/// Stateless: every call is a fresh read of the store. The aggregation
/// itself happens in the repository as a grouped-sum query; this service
/// adds the empty-cart boundary and the textual rendering.
pub struct ShoppingListService<R: ShoppingListRepository> {
    repository: Arc<R>,
}

impl<R: ShoppingListRepository> ShoppingListService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Aggregates the user's cart into `(name, unit, total)` lines.
    ///
    /// An empty cart yields an empty vector, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn aggregate(&self, user_id: i64) -> Result<Vec<ShoppingListItem>, AppError> {
        self.repository.aggregate_ingredients(user_id).await
    }

    /// Renders the user's shopping list as a plain-text document.
    ///
    /// Returns `Ok(None)` when the cart is empty: the empty cart is a
    /// distinct signal, not an error, and the renderer is never invoked
    /// for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn render(&self, user_id: i64) -> Result<Option<String>, AppError> {
        if !self.repository.has_entries(user_id).await? {
            return Ok(None);
        }

        let items = self.aggregate(user_id).await?;
        let today = chrono::Local::now().date_naive();

        metrics::counter!("shopping_lists_rendered_total").increment(1);
        Ok(Some(render_document(today, &items)))
    }
}

/// Renders the aggregate into the downloadable document: a dated header,
/// one `"name - amount unit"` line per ingredient, and a footer.
///
/// Split out of the service so the format is testable with a fixed date.
pub fn render_document(date: NaiveDate, items: &[ShoppingListItem]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(format!("Shopping list for: {}\n", date.format("%d-%m-%Y")));

    for item in items {
        lines.push(format!(
            "{} - {} {}",
            item.name, item.total_amount, item.measurement_unit
        ));
    }

    lines.push(format!("\n\n{DOCUMENT_FOOTER}"));
    lines.join("\n")
}
