//! Login page: credential form backed by the mounted auth context.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use askama::Template;
use axum::Form;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::auth::{Auth, AuthContext};
use crate::error::AppError;
use crate::gate::HOME_PATH;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Login form state. Only `email` and `password` come from the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(skip)]
    pub error: Option<String>,
    #[serde(skip)]
    pub submitting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Signed in; go to the given path.
    Navigate(&'static str),
    /// Stay on the form; `error` says why.
    Stay,
}

impl LoginForm {
    /// Run one login attempt. `submitting` is cleared again on every path.
    pub async fn submit(&mut self, auth: &AuthContext) -> SubmitOutcome {
        self.error = None;
        self.submitting = true;

        let outcome = match auth.login(&self.email, &self.password).await {
            Ok(true) => SubmitOutcome::Navigate(HOME_PATH),
            Ok(false) => {
                self.error = Some(INVALID_CREDENTIALS_MESSAGE.to_owned());
                SubmitOutcome::Stay
            }
            Err(e) => {
                tracing::error!(error = %e, "login failed");
                self.error = Some(GENERIC_ERROR_MESSAGE.to_owned());
                SubmitOutcome::Stay
            }
        };

        self.submitting = false;
        outcome
    }
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate<'a> {
    email: &'a str,
    error: Option<&'a str>,
    submitting: bool,
}

fn render(form: &LoginForm) -> Result<Html<String>, AppError> {
    let template = LoginTemplate { email: &form.email, error: form.error.as_deref(), submitting: form.submitting };
    Ok(Html(template.render()?))
}

/// `GET /login`
pub async fn page() -> Result<Html<String>, AppError> {
    render(&LoginForm::default())
}

/// `POST /login`
pub async fn submit(Auth(auth): Auth, Form(mut form): Form<LoginForm>) -> Result<Response, AppError> {
    match form.submit(&auth).await {
        SubmitOutcome::Navigate(target) => Ok(Redirect::to(target).into_response()),
        SubmitOutcome::Stay => Ok(render(&form)?.into_response()),
    }
}
