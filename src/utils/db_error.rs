//! Classification of sqlx database errors.

/// Returns the violated constraint name when `e` is a unique-constraint
/// violation, `None` otherwise.
pub fn unique_violation_constraint(e: &sqlx::Error) -> Option<&str> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    db_err.constraint()
}
