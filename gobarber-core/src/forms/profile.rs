use super::SubmitOutcome;
use super::sign_up::{submit_user, user_schema};
use crate::app::App;
use crate::user::User;
use crate::validation::{FormData, Schema};

pub struct ProfileForm;

impl ProfileForm {
    pub fn schema() -> Schema {
        user_schema()
    }

    /// Form prefilled with the signed-in user's name and e-mail.
    pub fn initial_data(user: &User) -> FormData {
        FormData::new()
            .with("name", user.name.as_str())
            .with("email", user.email.as_str())
    }

    /// Submits through `POST /users`, like sign-up.
    pub async fn submit(app: &mut App, data: &FormData) -> SubmitOutcome {
        submit_user(app, data).await
    }
}
