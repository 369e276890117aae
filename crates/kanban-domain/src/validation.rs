use kanban_core::{KanbanError, KanbanResult};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trimmed, non-empty title.
pub fn require_title(title: &str) -> KanbanResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(KanbanError::Validation(
            "Title must not be empty.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Rough shape check: one `@`, something before it, a dotted domain after it.
pub fn validate_email(email: &str) -> KanbanResult<()> {
    let invalid = || KanbanError::Validation("Please enter a valid email address.".to_string());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.contains('@')
        || email.chars().any(char::is_whitespace)
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_login_password(password: &str) -> KanbanResult<()> {
    if password.is_empty() {
        return Err(KanbanError::Validation(
            "Password must not be empty.".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_new_password(password: &str) -> KanbanResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(KanbanError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    Ok(())
}
