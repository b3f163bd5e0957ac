use tracing::warn;

use super::{PASSWORD_REQUIRED, SubmitOutcome, email_field};
use crate::app::App;
use crate::route::Route;
use crate::toast::ToastKind;
use crate::user::SignInCredentials;
use crate::validation::{Field, FormData, Schema};

pub struct SignInForm;

impl SignInForm {
    pub fn schema() -> Schema {
        Schema::new()
            .field(email_field())
            .field(Field::new("password").required(PASSWORD_REQUIRED))
    }

    pub async fn submit(app: &mut App, data: &FormData) -> SubmitOutcome {
        if let Err(errors) = Self::schema().validate(data) {
            return SubmitOutcome::invalid(errors);
        }

        let credentials = SignInCredentials {
            email: data.value("email"),
            password: data.value("password"),
        };

        match app.auth.sign_in(&mut app.api, &credentials).await {
            Ok(_) => SubmitOutcome::navigate(Route::Dashboard),
            Err(e) => {
                warn!(error = %e, "Sign-in failed");
                app.toasts.add(
                    ToastKind::Error,
                    "Erro na autenticação",
                    Some("Ocorreu um erro ao fazer login, cheque as credenciais."),
                );
                SubmitOutcome::failed()
            }
        }
    }
}
