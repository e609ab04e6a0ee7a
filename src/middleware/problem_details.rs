use actix_web::{
    body::{BodySize, MessageBody},
    dev::ServiceResponse,
    http::header,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    Result,
};
use tracing::error;

use crate::error::{ProblemDetails, PROBLEM_JSON};

/// Response extension for 5xx bodies a handler produced on purpose, such as
/// an unhealthy readiness report; the exception handler passes them through.
#[derive(Debug, Clone, Copy)]
pub struct PreserveBody;

/// Gives body-less 4xx/5xx responses (unknown routes, rejected methods,
/// extractor failures without a payload) a problem-details body.
pub fn status_code_pages<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(fill_empty_error_body)
}

/// Replaces every 5xx body with a generic problem document so internal
/// details never reach clients. Installed outside Development only.
pub fn exception_handler<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler_server(rewrite_server_error)
}

fn fill_empty_error_body<B: MessageBody>(
    res: ServiceResponse<B>,
) -> Result<ErrorHandlerResponse<B>> {
    let has_body = res.headers().contains_key(header::CONTENT_TYPE)
        && !matches!(res.response().body().size(), BodySize::None | BodySize::Sized(0));

    if has_body {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    Ok(ErrorHandlerResponse::Response(replace_with_problem(
        res,
        None,
    )))
}

fn rewrite_server_error<B: MessageBody>(
    res: ServiceResponse<B>,
) -> Result<ErrorHandlerResponse<B>> {
    // Application errors already render sanitized problem details.
    let is_problem = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(PROBLEM_JSON));
    let preserved = res.response().extensions().contains::<PreserveBody>();
    if is_problem || preserved {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    error!(
        status = res.status().as_u16(),
        method = %res.request().method(),
        path = %res.request().path(),
        "unhandled server error"
    );

    Ok(ErrorHandlerResponse::Response(replace_with_problem(
        res,
        Some("An unexpected error occurred."),
    )))
}

fn replace_with_problem<B>(
    res: ServiceResponse<B>,
    detail: Option<&str>,
) -> ServiceResponse<actix_web::body::EitherBody<B>> {
    let mut problem = ProblemDetails::for_status(res.status());
    if let Some(detail) = detail {
        problem = problem.with_detail(detail);
    }

    let (req, original) = res.into_parts();
    let mut response = problem.to_response();

    for (name, value) in original.headers() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            response.headers_mut().append(name.clone(), value.clone());
        }
    }

    ServiceResponse::new(req, response).map_into_right_body()
}
