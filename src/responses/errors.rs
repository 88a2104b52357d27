use crate::errors::ServerError;
use crate::responses::html::{html_response_with_status, text_response};
use crate::templates::{agent_not_found_page, error_page};
use astra::Response;

/// Convert a ServerError into the response the visitor sees.
/// Internal details are logged, never rendered.
pub fn error_to_response(err: ServerError) -> Response {
    let rendered = match &err {
        ServerError::NotFound => html_response_with_status(404, error_page(404, "Not Found")),
        ServerError::DomainNotConfigured => return text_response(404, "Domain not configured"),
        ServerError::AccountNotFound => html_response_with_status(404, agent_not_found_page()),
        ServerError::BadRequest(msg) => html_response_with_status(400, error_page(400, msg)),
        ServerError::Lookup(_) | ServerError::Cache(_) | ServerError::InternalError => {
            tracing::error!(error = %err, "request failed");
            return text_response(500, "Internal Server Error");
        }
    };

    rendered.unwrap_or_else(|_| text_response(500, "Internal Server Error"))
}
