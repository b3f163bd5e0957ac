//! Submit handlers for the sign-in, sign-up and profile forms.
//!
//! Every handler clears the previous errors, validates the whole form and
//! only then talks to the API. Validation failures stay inline on the form;
//! API failures become a single error toast.

mod profile;
mod sign_in;
mod sign_up;

pub use profile::ProfileForm;
pub use sign_in::SignInForm;
pub use sign_up::SignUpForm;

use crate::route::Route;
use crate::validation::{Field, FieldErrors};

pub(crate) const EMAIL_REQUIRED: &str = "E-mail obrigatório";
pub(crate) const EMAIL_INVALID: &str = "Digite um e-mail válido";
pub(crate) const NAME_REQUIRED: &str = "Nome obrigatório";
pub(crate) const PASSWORD_REQUIRED: &str = "Senha obrigatória";
pub(crate) const PASSWORD_MIN: &str = "No mínimo 6 dígitos";

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

pub(crate) const SIGN_UP_SUCCESS: (&str, &str) = (
    "Cadastro realizado!",
    "Você já pode fazer seu logon no GoBarber!",
);
pub(crate) const SIGN_UP_ERROR: (&str, &str) = (
    "Erro no cadastro",
    "Ocorreu um erro ao fazer o cadastro, tente novamente.",
);

fn email_field() -> Field {
    Field::new("email").required(EMAIL_REQUIRED).email(EMAIL_INVALID)
}

/// Result of one submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Per-field validation errors; empty when validation passed.
    pub errors: FieldErrors,
    /// Route to move to after a successful submit.
    pub navigate_to: Option<Route>,
}

impl SubmitOutcome {
    fn invalid(errors: FieldErrors) -> Self {
        SubmitOutcome {
            errors,
            navigate_to: None,
        }
    }

    fn navigate(route: Route) -> Self {
        SubmitOutcome {
            errors: FieldErrors::new(),
            navigate_to: Some(route),
        }
    }

    fn failed() -> Self {
        SubmitOutcome::default()
    }

    pub fn is_success(&self) -> bool {
        self.navigate_to.is_some()
    }
}
