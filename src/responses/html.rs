use crate::errors::{ResultResp, ServerError};
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(200, markup)
}

pub fn html_response_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .header("Cache-Control", "no-store")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Static plain-text response; used where the body must not depend on
/// templates (e.g. "Domain not configured").
pub fn text_response(status: u16, body: &'static str) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Empty 204; htmx leaves the page untouched.
pub fn no_content() -> Response {
    ResponseBuilder::new()
        .status(204)
        .body(Body::empty())
        .unwrap_or_else(|_| Response::new(Body::empty()))
}
