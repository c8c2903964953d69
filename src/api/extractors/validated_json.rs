//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// JSON body that has been deserialized and passed `Validate`.
///
/// Both failure kinds surface as `AppError::Validation`. Handlers that need an
/// operation-specific message take `Result<ValidatedJson<T>, AppError>` and
/// map the error themselves.
///
/// ```rust,ignore
/// async fn add(payload: Result<ValidatedJson<NewRecord>, AppError>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(describe(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten field errors into `field: message` pairs, sorted by field name
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: invalid", field),
            })
        })
        .collect();
    parts.sort();
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewRecord;

    #[test]
    fn test_describe_lists_every_empty_field() {
        let record = NewRecord {
            name: String::new(),
            state: "a".to_string(),
            phone: String::new(),
            email: "e".to_string(),
            address: "x".to_string(),
        };
        let errors = record.validate().unwrap_err();
        assert_eq!(describe(&errors), "name: name is required, phone: phone is required");
    }
}
