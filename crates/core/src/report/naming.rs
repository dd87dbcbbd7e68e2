//! Default names for report records.

use chrono::NaiveDate;

/// Placeholder name before a report has one of its own.
pub const NEW_NAME: &str = "New";

/// Builds "Employee - Project - Date" from whichever parts are known.
///
/// Falls back to [`NEW_NAME`] when no part is known.
#[must_use]
pub fn build_default_name(
    employee: Option<&str>,
    project: Option<&str>,
    date: Option<NaiveDate>,
) -> String {
    let date = date.map(|d| d.to_string());
    let parts: Vec<&str> = [employee, project, date.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        NEW_NAME.to_string()
    } else {
        parts.join(" - ")
    }
}

/// Name shown in lists and breadcrumbs.
#[must_use]
pub fn display_name(
    name: &str,
    employee: Option<&str>,
    project: Option<&str>,
    date: NaiveDate,
) -> String {
    if !name.is_empty() && name != NEW_NAME {
        return name.to_string();
    }
    format!(
        "{} - {} - {date}",
        employee.unwrap_or("Employee"),
        project.unwrap_or("Project"),
    )
}
