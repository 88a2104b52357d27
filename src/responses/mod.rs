pub mod errors;
pub mod html;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;
pub use html::{html_response, html_response_with_status, no_content, text_response};
