//! Field-level validation helpers shared by the content services.

/// Require a string field to be non-empty after trimming.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(())
}

/// Require a tag set to contain at least one non-blank tag.
///
/// Applies both at creation and when an update supplies a replacement set:
/// an update may change tags but may not clear them to empty.
pub fn require_tags(tags: &[String]) -> Result<(), String> {
    if tags.iter().filter(|t| !t.trim().is_empty()).count() == 0 {
        return Err("At least one tag is required".to_string());
    }
    Ok(())
}
