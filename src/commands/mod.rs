//! Server Commands
//!
//! Bindings to the companion server's HTTP endpoints, organized by domain.
//! Every command returns `Result`; callers decide whether a failure is
//! shown to the operator or only logged.

mod request;
mod image;
mod led;

use gloo_net::http::{Request, Response};

use crate::error::ApiError;

pub use request::{LedRequest, Method};
pub use image::*;
pub use led::*;

/// Perform a request, treating anything outside 2xx as an error.
async fn send(request: LedRequest) -> Result<Response, ApiError> {
    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    };
    let response = match request.body.into_form_data()? {
        Some(form) => builder.body(form)?.send().await?,
        None => builder.send().await?,
    };
    check_status(response.status(), response.status_text())?;
    Ok(response)
}

fn check_status(status: u16, status_text: String) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status, status_text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_2xx_is_success() {
        assert!(check_status(200, "OK".into()).is_ok());
        assert!(check_status(204, "No Content".into()).is_ok());
    }

    #[test]
    fn test_non_2xx_is_status_error() {
        assert_eq!(
            check_status(404, "NOT FOUND".into()),
            Err(ApiError::Status { status: 404, status_text: "NOT FOUND".into() })
        );
        assert!(check_status(302, "FOUND".into()).is_err());
        assert!(check_status(500, "".into()).is_err());
    }
}
