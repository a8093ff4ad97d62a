use axum::{
    extract::{rejection::FormRejection, State},
    response::Redirect,
    Form,
};
use axum_extra::extract::cookie::PrivateCookieJar;

use crate::{
    config::AppState,
    middleware::error_handling::AppError,
    models::ContactForm,
    services::ContactService,
    utils::flash::Flash,
};

pub const MISSING_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos obrigatórios.";
pub const SUBMISSION_SAVED_MESSAGE: &str =
    "Sua mensagem foi enviada com sucesso! Entraremos em contato em breve.";
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Erro ao enviar mensagem. Tente novamente ou entre em contato por telefone.";

/// The form lives on the homepage; a plain GET just goes back there.
pub async fn contact_redirect() -> Redirect {
    Redirect::to("/")
}

/// Handle a contact form post. Every outcome redirects to the homepage with
/// a flash message.
pub async fn submit_contact(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    form: Result<Form<ContactForm>, FormRejection>,
) -> (PrivateCookieJar, Redirect) {
    let flash = match form {
        Ok(Form(form)) => {
            let service = ContactService::new(state.database_pool.clone());
            match service.submit(form).await {
                Ok(_) => Flash::success(SUBMISSION_SAVED_MESSAGE),
                Err(AppError::Validation(_)) => Flash::error(MISSING_FIELDS_MESSAGE),
                Err(_) => Flash::error(SUBMISSION_FAILED_MESSAGE),
            }
        }
        Err(rejection) => {
            tracing::info!("Unreadable contact form body: {}", rejection);
            Flash::error(MISSING_FIELDS_MESSAGE)
        }
    };

    (flash.set(jar), Redirect::to("/"))
}
