//! REST Bindings
//!
//! `BookApi` over the browser's fetch, talking JSON to `/api/libri`.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};

use libreria_core::api::BookApi;
use libreria_core::{ApiConfig, ApiError, Book, BookId, NewBook};

/// HTTP client for the books endpoint
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    config: ApiConfig,
}

impl HttpBookApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

// ========================
// Helpers
// ========================

fn transport_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

/// Non-2xx statuses are failures even when a body came back
fn check_status(status: u16, url: String) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status, url })
    }
}

/// Sets `Content-Type: application/json`
fn with_json(builder: RequestBuilder, book: &NewBook) -> Result<Request, ApiError> {
    builder.json(book).map_err(|e| ApiError::Encode(e.to_string()))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(transport_error)?;
    check_status(response.status(), response.url())?;
    Ok(response)
}

async fn send_for_book(request: Request) -> Result<Book, ApiError> {
    let response = send(request).await?;
    response.json().await.map_err(transport_error)
}

// ========================
// Requests
// ========================

impl HttpBookApi {
    fn list_request(&self) -> Result<Request, ApiError> {
        Request::get(self.config.collection_url())
            .build()
            .map_err(transport_error)
    }

    fn create_request(&self, book: &NewBook) -> Result<Request, ApiError> {
        with_json(Request::post(self.config.collection_url()), book)
    }

    fn update_request(&self, id: BookId, book: &NewBook) -> Result<Request, ApiError> {
        with_json(Request::put(&self.config.book_url(id)), book)
    }

    fn delete_request(&self, id: BookId) -> Result<Request, ApiError> {
        Request::delete(&self.config.book_url(id))
            .build()
            .map_err(transport_error)
    }

    fn delete_all_request(&self) -> Result<Request, ApiError> {
        Request::delete(self.config.collection_url())
            .build()
            .map_err(transport_error)
    }
}

// ========================
// BookApi
// ========================

#[async_trait(?Send)]
impl BookApi for HttpBookApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        log::debug!("[API] GET {}", self.config.collection_url());
        let response = send(self.list_request()?).await?;
        response.json().await.map_err(transport_error)
    }

    async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        log::debug!("[API] POST {}", self.config.collection_url());
        send_for_book(self.create_request(book)?).await
    }

    async fn update_book(&self, id: BookId, book: &NewBook) -> Result<Book, ApiError> {
        log::debug!("[API] PUT {}", self.config.book_url(id));
        send_for_book(self.update_request(id, book)?).await
    }

    async fn delete_book(&self, id: BookId) -> Result<(), ApiError> {
        log::debug!("[API] DELETE {}", self.config.book_url(id));
        send(self.delete_request(id)?).await?;
        Ok(())
    }

    async fn delete_all_books(&self) -> Result<(), ApiError> {
        log::debug!("[API] DELETE {}", self.config.collection_url());
        send(self.delete_all_request()?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_pass() {
        assert_eq!(check_status(200, "/api/libri".to_string()), Ok(()));
        assert_eq!(check_status(201, "/api/libri".to_string()), Ok(()));
        assert_eq!(check_status(204, "/api/libri/3".to_string()), Ok(()));
    }

    #[test]
    fn test_error_statuses_keep_code_and_url() {
        assert_eq!(
            check_status(404, "http://localhost:5000/api/libri/9".to_string()),
            Err(ApiError::Status {
                status: 404,
                url: "http://localhost:5000/api/libri/9".to_string(),
            })
        );
        assert!(matches!(
            check_status(500, "/api/libri".to_string()),
            Err(ApiError::Status { status: 500, .. })
        ));
        assert!(matches!(
            check_status(302, "/api/libri".to_string()),
            Err(ApiError::Status { status: 302, .. })
        ));
    }

    #[test]
    fn test_serde_failure_is_decode_error() {
        let err = serde_json::from_str::<Book>("<html>").unwrap_err();
        let mapped = transport_error(gloo_net::Error::SerdeError(err));
        assert!(matches!(mapped, ApiError::Decode(_)));
    }

    #[test]
    fn test_other_failures_are_network_errors() {
        let mapped = transport_error(gloo_net::Error::GlooError("fetch aborted".to_string()));
        assert_eq!(mapped, ApiError::Network("fetch aborted".to_string()));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn client() -> HttpBookApi {
        HttpBookApi::new(ApiConfig::new("http://localhost:5000/api/libri/"))
    }

    fn payload() -> NewBook {
        NewBook {
            title: "Il barone rampante".to_string(),
            author: "Calvino".to_string(),
            year: 1957,
            genre: "Romanzo".to_string(),
        }
    }

    fn is_json(request: &Request) -> bool {
        request
            .headers()
            .get("Content-Type")
            .is_some_and(|value| value.contains("application/json"))
    }

    #[wasm_bindgen_test]
    fn test_list_request_targets_collection() {
        let request = client().list_request().unwrap();
        assert_eq!(request.method().to_string(), "GET");
        assert_eq!(request.url(), "http://localhost:5000/api/libri");
    }

    #[wasm_bindgen_test]
    fn test_create_request_posts_json() {
        let request = client().create_request(&payload()).unwrap();
        assert_eq!(request.method().to_string(), "POST");
        assert_eq!(request.url(), "http://localhost:5000/api/libri");
        assert!(is_json(&request));
    }

    #[wasm_bindgen_test]
    fn test_update_request_puts_json_to_record() {
        let request = client().update_request(12, &payload()).unwrap();
        assert_eq!(request.method().to_string(), "PUT");
        assert_eq!(request.url(), "http://localhost:5000/api/libri/12");
        assert!(is_json(&request));
    }

    #[wasm_bindgen_test]
    fn test_delete_requests_target_record_or_collection() {
        let one = client().delete_request(7).unwrap();
        assert_eq!(one.method().to_string(), "DELETE");
        assert_eq!(one.url(), "http://localhost:5000/api/libri/7");

        let all = client().delete_all_request().unwrap();
        assert_eq!(all.method().to_string(), "DELETE");
        assert_eq!(all.url(), "http://localhost:5000/api/libri");
    }
}
