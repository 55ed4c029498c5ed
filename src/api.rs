//! Types and calls for the two remote sources this app talks to: the
//! dummyjson product catalog and its mock auth endpoint.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const PRODUCTS_URL: &str = "https://dummyjson.com/products";
const LOGIN_URL: &str = "https://dummyjson.com/auth/login";

/// Shown when the auth endpoint rejects a login without a usable message.
const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please check your credentials.";

/// A catalog item as returned by the remote source. Extra fields in the
/// response are ignored; identity is `id`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub thumbnail: String,
}

#[derive(Deserialize)]
struct Catalog {
    products: Vec<Product>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
}

#[derive(Deserialize)]
struct AuthFailure {
    message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The products endpoint answered with a non-2xx status.
    #[error("Failed to fetch products")]
    Catalog,
    /// The auth endpoint rejected the credentials; carries the
    /// remote-provided message.
    #[error("{0}")]
    Auth(String),
    /// Transport-level failure (DNS, TLS, connection reset, bad body).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Fetches the full product list. Called once per listing mount; the
/// listing paginates the result client-side, so no query parameters.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let response = reqwest::get(PRODUCTS_URL).await?;
    if !response.status().is_success() {
        warn!("products endpoint returned {}", response.status());
        return Err(ApiError::Catalog);
    }
    let catalog: Catalog = response.json().await?;
    debug!("fetched {} products", catalog.products.len());
    Ok(catalog.products)
}

/// Exchanges credentials for an access token. The token is only ever held
/// in view-local state; nothing else in the app makes authenticated calls.
pub async fn login(username: &str, password: &str) -> Result<String, ApiError> {
    let response = reqwest::Client::new()
        .post(LOGIN_URL)
        .json(&LoginRequest { username, password })
        .send()
        .await?;

    if response.status().is_success() {
        let body: LoginResponse = response.json().await?;
        Ok(body.access_token)
    } else {
        let status = response.status();
        let message = response
            .json::<AuthFailure>()
            .await
            .ok()
            .and_then(|failure| failure.message)
            .unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_string());
        warn!("login rejected ({status}): {message}");
        Err(ApiError::Auth(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn product_parses_and_ignores_extra_fields() {
        let payload = r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "A popular mascara",
            "category": "beauty",
            "price": 9.99,
            "rating": 2.56,
            "stock": 99,
            "thumbnail": "https://cdn.dummyjson.com/product-images/1/thumbnail.jpg"
        }"#;

        let product: Product = serde_json::from_str(payload).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Essence Mascara Lash Princess");
        assert_eq!(product.price, 9.99);
        assert_eq!(
            product.thumbnail,
            "https://cdn.dummyjson.com/product-images/1/thumbnail.jpg"
        );
    }

    #[test]
    fn catalog_parses_the_products_envelope() {
        let payload = r#"{
            "products": [
                { "id": 1, "title": "a", "price": 1.0, "description": "x", "thumbnail": "t" },
                { "id": 2, "title": "b", "price": 2.0, "description": "y", "thumbnail": "u" }
            ],
            "total": 194,
            "skip": 0,
            "limit": 30
        }"#;

        let catalog: Catalog = serde_json::from_str(payload).unwrap();
        assert_eq!(catalog.products.len(), 2);
        assert_eq!(catalog.products[1].id, 2);
    }

    #[test]
    fn login_response_reads_the_access_token() {
        let body: LoginResponse =
            serde_json::from_str(r#"{ "accessToken": "T1", "refreshToken": "R1" }"#).unwrap();
        assert_eq!(body.access_token, "T1");
    }

    #[test]
    fn auth_failure_message_is_optional() {
        let with: AuthFailure = serde_json::from_str(r#"{ "message": "Invalid credentials" }"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("Invalid credentials"));

        let without: AuthFailure = serde_json::from_str("{}").unwrap();
        assert!(without.message.is_none());
    }

    #[test]
    fn api_error_display_matches_what_views_render() {
        assert_eq!(ApiError::Catalog.to_string(), "Failed to fetch products");
        assert_eq!(
            ApiError::Auth("Invalid credentials".to_string()).to_string(),
            "Invalid credentials"
        );
    }
}
