use axum::{
    extract::{Form, FromRequest, Multipart, Request, State, rejection::FormRejection},
    http::{StatusCode, header},
    response::Response,
};
use homeservice_contact::{Error, SubmitFormInput};
use validator::ValidationErrors;

use crate::{
    error::{AppError, text_reply},
    routes::AppState,
};

/// Accepts urlencoded and multipart bodies. A POST whose body yields no
/// fields at all is refused like any other method.
pub async fn action(
    State(app_state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let locale = app_state.config.contact.locale.as_str();

    let fields = read_fields(request, &app_state)
        .await
        .map_err(|err| AppError::new(err, locale))?;

    if fields.is_empty() {
        return Err(AppError::new(Error::Forbidden, locale));
    }

    app_state
        .contact_command
        .submit_form(&submit_input(fields))
        .await
        .map_err(|err| AppError::new(err, locale))?;

    Ok(text_reply(
        StatusCode::OK,
        rust_i18n::t!("contact.sent", locale = locale).to_string(),
    ))
}

/// Any method other than POST.
pub async fn denied(State(app_state): State<AppState>) -> AppError {
    AppError::new(Error::Forbidden, app_state.config.contact.locale.as_str())
}

/// Decodes the posted name/value pairs. Bodies in any other encoding carry no
/// form fields. File parts are skipped.
async fn read_fields(
    request: Request,
    state: &AppState,
) -> Result<Vec<(String, String)>, Error> {
    let multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"));

    if multipart {
        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|rejection| undecodable(&rejection))?;

        let mut fields = vec![];
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| undecodable(&err))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            if field.file_name().is_some() {
                continue;
            }

            let value = field.text().await.map_err(|err| undecodable(&err))?;
            fields.push((name, value));
        }

        return Ok(fields);
    }

    match Form::<Vec<(String, String)>>::from_request(request, state).await {
        Ok(Form(fields)) => Ok(fields),
        Err(FormRejection::InvalidFormContentType(_)) => Ok(vec![]),
        Err(rejection) => Err(undecodable(&rejection)),
    }
}

fn undecodable(err: &dyn std::fmt::Display) -> Error {
    tracing::info!(error = %err, "Undecodable contact form body");

    Error::Validate(ValidationErrors::new())
}

/// Maps posted pairs onto the submission. Unknown names are ignored and a
/// repeated name keeps its last value.
fn submit_input(fields: Vec<(String, String)>) -> SubmitFormInput {
    let mut input = SubmitFormInput::default();

    for (name, value) in fields {
        let slot = match name.as_str() {
            "name" => &mut input.name,
            "phone" => &mut input.phone,
            "email" => &mut input.email,
            "message" => &mut input.message,
            _ => continue,
        };
        *slot = value;
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(fields: &[(&str, &str)]) -> Vec<(String, String)> {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_submit_input_maps_known_fields() {
        let input = submit_input(pairs(&[
            ("name", "Ivan"),
            ("consent", "on"),
            ("phone", "+7 999 123-45-67"),
            ("name", "Petr"),
        ]));

        assert_eq!(input.name, "Petr");
        assert_eq!(input.phone, "+7 999 123-45-67");
        assert_eq!(input.email, "");
        assert_eq!(input.message, "");
    }
}
