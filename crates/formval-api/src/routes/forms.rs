//! # Form Validation API
//!
//! `POST /v1/forms/{form_id}/validate` runs one submission through the
//! validation engine and returns the verdict.
//!
//! | Outcome                         | Status |
//! |---------------------------------|--------|
//! | verdict (valid or invalid)      | 200    |
//! | malformed JSON body             | 400    |
//! | unknown form                    | 404    |
//! | blank form id                   | 422    |
//! | provider failure or unreachable | 502    |
//! | submitted data cannot be copied | 500    |
//!
//! The `X-B3-TraceId` header is read from the request (or generated) and
//! echoed on every response.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use formval_core::{FormData, FormId, FormProvider, RequestContext, TRACE_ID_HEADER};
use formval_engine::ValidationError;

use crate::error::AppError;
use crate::extractors::{extract_json, trace_id};
use crate::state::AppState;

/// Build the forms router.
pub fn router<P: FormProvider + 'static>() -> Router<AppState<P>> {
    Router::new().route("/v1/forms/{form_id}/validate", post(validate_form::<P>))
}

async fn validate_form<P: FormProvider + 'static>(
    State(state): State<AppState<P>>,
    Path(form_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<FormData>, JsonRejection>,
) -> Response {
    let ctx = RequestContext::new(trace_id(&headers));
    let result = run(&state, &ctx, form_id, body).await;

    let mut response = match result {
        Ok(verdict) => Json(verdict).into_response(),
        Err(err) => err.into_response(),
    };
    if let Ok(value) = HeaderValue::from_str(ctx.trace_id.as_str()) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }
    response
}

async fn run<P: FormProvider>(
    state: &AppState<P>,
    ctx: &RequestContext,
    form_id: String,
    body: Result<Json<FormData>, JsonRejection>,
) -> Result<formval_core::ValidationVerdict, AppError> {
    let form_id = FormId::new(form_id).map_err(ValidationError::from)?;
    let form_data = extract_json(body)?;
    let verdict = state
        .validator
        .validate_form(ctx, &form_id, &form_data)
        .await?;
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use formval_core::{Component, ErrorDetail, FormSchema};
    use formval_engine::stub::StubProvider;
    use formval_engine::FormValidator;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::state::AppConfig;

    fn schema() -> FormSchema {
        FormSchema {
            components: vec![
                Component::new("name", "textfield"),
                Component::new("dob", "day").with_day_first(true),
                Component::new("fileName", "file").with_validate(true, "Upload a file"),
            ],
        }
    }

    fn forms_app(provider: StubProvider) -> Router {
        let state = AppState::new(FormValidator::new(provider), AppConfig::default());
        router().with_state(state)
    }

    fn validate_request(form_id: &str, body: &str, trace: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(format!("/v1/forms/{form_id}/validate"))
            .header("content-type", "application/json");
        if let Some(trace) = trace {
            builder = builder.header(TRACE_ID_HEADER, trace);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_submission_returns_valid_verdict() {
        let app = forms_app(StubProvider::new().with_form("kyc", schema()));
        let body = json!({"data": {
            "dob": "2020-01-02",
            "fileName": [{"id": "a", "checksum": "b"}]
        }});

        let response = app
            .oneshot(validate_request("kyc", &body.to_string(), Some("abc")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[TRACE_ID_HEADER], "abc");
        assert_eq!(body_json(response).await, json!({"valid": true, "error": null}));
    }

    #[tokio::test]
    async fn rejection_is_a_200_with_reconciled_details() {
        let provider = StubProvider::new().with_form("kyc", schema()).rejecting(vec![
            ErrorDetail::for_field("Name is required", "name", None),
            ErrorDetail::for_field("File is required", "fileName", None),
        ]);
        let app = forms_app(provider);

        let response = app
            .oneshot(validate_request("kyc", r#"{"data": {"fileName": []}}"#, Some("t-9")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["valid"], false);
        assert_eq!(body["error"]["traceId"], "t-9");
        assert_eq!(body["error"]["code"], "FORM_VALIDATION_ERROR");
        assert_eq!(
            body["error"]["details"],
            json!([
                {"message": "Name is required", "field": "name", "value": null},
                {"message": "Upload a file", "field": "fileName", "value": "[]"}
            ])
        );
    }

    #[tokio::test]
    async fn generates_trace_id_when_absent() {
        let app = forms_app(StubProvider::new().with_form("kyc", FormSchema::default()));
        let response = app
            .oneshot(validate_request("kyc", r#"{"data": null}"#, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let trace = response.headers()[TRACE_ID_HEADER].to_str().unwrap();
        assert_eq!(trace.len(), 32);
    }

    #[tokio::test]
    async fn unknown_form_is_404() {
        let app = forms_app(StubProvider::new());
        let response = app
            .oneshot(validate_request("missing", r#"{"data": {}}"#, Some("t")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[TRACE_ID_HEADER], "t");
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn transport_failure_is_502() {
        let provider = StubProvider::new().with_form("kyc", schema()).failing_transport();
        let app = forms_app(provider);
        let response = app
            .oneshot(validate_request("kyc", r#"{"data": {}}"#, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"]["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let app = forms_app(StubProvider::new().with_form("kyc", schema()));
        let response = app
            .oneshot(validate_request("kyc", "{not json", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn blank_form_id_is_422() {
        let app = forms_app(StubProvider::new());
        let response = app
            .oneshot(validate_request("%20", r#"{"data": {}}"#, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "validation error: invalid form id: form id must not be empty"
        );
    }
}
