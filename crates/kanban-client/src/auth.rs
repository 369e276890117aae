//! Sign-in and sign-up. Input is checked locally before any request is made.

use kanban_api::{AuthApi, Credentials, Session};
use kanban_core::KanbanResult;
use kanban_domain::validation::{validate_email, validate_login_password, validate_new_password};

pub async fn login(api: &dyn AuthApi, email: &str, password: &str) -> KanbanResult<Session> {
    let email = email.trim();
    validate_email(email)?;
    validate_login_password(password)?;

    let session = api.login(&Credentials::new(email, password)).await?;
    tracing::info!("Logged in as {}", email);
    Ok(session)
}

pub async fn register(api: &dyn AuthApi, email: &str, password: &str) -> KanbanResult<Session> {
    let email = email.trim();
    validate_email(email)?;
    validate_new_password(password)?;

    let session = api.register(&Credentials::new(email, password)).await?;
    tracing::info!("Registered {}", email);
    Ok(session)
}
