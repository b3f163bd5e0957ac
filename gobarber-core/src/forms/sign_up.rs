use tracing::warn;

use super::{
    MIN_PASSWORD_LEN, NAME_REQUIRED, PASSWORD_MIN, SIGN_UP_ERROR, SIGN_UP_SUCCESS, SubmitOutcome,
    email_field,
};
use crate::app::App;
use crate::route::Route;
use crate::toast::ToastKind;
use crate::user::UserData;
use crate::validation::{Field, FormData, Schema};

/// Schema shared by sign-up and profile edit.
pub(crate) fn user_schema() -> Schema {
    Schema::new()
        .field(Field::new("name").required(NAME_REQUIRED))
        .field(email_field())
        .field(Field::new("password").min(MIN_PASSWORD_LEN, PASSWORD_MIN))
}

fn user_data(data: &FormData) -> UserData {
    UserData {
        name: data.value("name"),
        email: data.value("email"),
        password: data.value("password"),
    }
}

/// Validate, `POST /users`, and on success go back to sign-in with a
/// success toast.
pub(crate) async fn submit_user(app: &mut App, data: &FormData) -> SubmitOutcome {
    if let Err(errors) = user_schema().validate(data) {
        return SubmitOutcome::invalid(errors);
    }

    match app.api.create_user(&user_data(data)).await {
        Ok(_) => {
            let (title, description) = SIGN_UP_SUCCESS;
            app.toasts.add(ToastKind::Success, title, Some(description));
            SubmitOutcome::navigate(Route::SignIn)
        }
        Err(e) => {
            warn!(error = %e, "Creating user failed");
            let (title, description) = SIGN_UP_ERROR;
            app.toasts.add(ToastKind::Error, title, Some(description));
            SubmitOutcome::failed()
        }
    }
}

pub struct SignUpForm;

impl SignUpForm {
    pub fn schema() -> Schema {
        user_schema()
    }

    pub async fn submit(app: &mut App, data: &FormData) -> SubmitOutcome {
        submit_user(app, data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_all_fields() {
        let data = FormData::new()
            .with("name", "")
            .with("email", "not-an-email")
            .with("password", "123");
        let errors = SignUpForm::schema().validate(&data).unwrap_err();

        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
        assert_eq!(errors.get("email"), Some(crate::forms::EMAIL_INVALID));
        assert_eq!(errors.get("password"), Some(PASSWORD_MIN));
    }
}
