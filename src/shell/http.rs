// HTTP inbound adapter: the consumer surface over the cart manager.
//
// Responsibilities
// - Expose the read-only cart view and the three mutation operations.
// - Map application errors to status codes; rejections never become 5xx
//   unless the store itself failed.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::application::errors::CartError;
use crate::core::ports::{CartStore, CatalogService};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateAmountBody {
    pub amount: u32,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn reject(err: CartError) -> Response {
    let status = match &err {
        CartError::OutOfStock { .. } => StatusCode::CONFLICT,
        CartError::ProductNotFound { .. } | CartError::ItemNotInCart { .. } => {
            StatusCode::NOT_FOUND
        }
        CartError::ServiceUnavailable(_) => StatusCode::BAD_GATEWAY,
        CartError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorBody { error: err.to_string() })).into_response()
}

async fn get_cart<TCatalog, TStore>(State(state): State<AppState<TCatalog, TStore>>) -> Response
where
    TCatalog: CatalogService + 'static,
    TStore: CartStore + 'static,
{
    Json(state.cart.items().await).into_response()
}

async fn add_product<TCatalog, TStore>(
    State(state): State<AppState<TCatalog, TStore>>,
    Path(product_id): Path<u64>,
) -> Response
where
    TCatalog: CatalogService + 'static,
    TStore: CartStore + 'static,
{
    match state.cart.add_product(product_id).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(err) => reject(err),
    }
}

async fn remove_product<TCatalog, TStore>(
    State(state): State<AppState<TCatalog, TStore>>,
    Path(product_id): Path<u64>,
) -> Response
where
    TCatalog: CatalogService + 'static,
    TStore: CartStore + 'static,
{
    match state.cart.remove_product(product_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => reject(err),
    }
}

async fn update_product_amount<TCatalog, TStore>(
    State(state): State<AppState<TCatalog, TStore>>,
    Path(product_id): Path<u64>,
    body: Result<Json<UpdateAmountBody>, JsonRejection>,
) -> Response
where
    TCatalog: CatalogService + 'static,
    TStore: CartStore + 'static,
{
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state
        .cart
        .update_product_amount(product_id, body.amount)
        .await
    {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => reject(err),
    }
}

pub fn app<TCatalog, TStore>(state: AppState<TCatalog, TStore>) -> Router
where
    TCatalog: CatalogService + 'static,
    TStore: CartStore + 'static,
{
    Router::new()
        .route("/cart", get(get_cart::<TCatalog, TStore>))
        .route(
            "/cart/products/{id}",
            axum::routing::post(add_product::<TCatalog, TStore>)
                .delete(remove_product::<TCatalog, TStore>)
                .put(update_product_amount::<TCatalog, TStore>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod cart_http_tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::adapters::in_memory::in_memory_cart_store::InMemoryCartStore;
    use crate::adapters::in_memory::in_memory_catalog::InMemoryCatalog;
    use crate::application::cart_manager::CartManager;
    use crate::core::cart::Product;

    type TestState = AppState<InMemoryCatalog, InMemoryCartStore>;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Sneaker {id}"),
            price: 99.9,
            image: format!("https://cdn.example/sneaker-{id}.jpg"),
        }
    }

    async fn make_test_state() -> (TestState, Arc<InMemoryCatalog>) {
        let catalog = Arc::new(InMemoryCatalog::with_products([
            (product(1), 5),
            (product(2), 1),
        ]));
        let store = Arc::new(InMemoryCartStore::new());
        let cart = Arc::new(CartManager::hydrate(catalog.clone(), store).await);
        (AppState { cart }, catalog)
    }

    #[tokio::test]
    async fn it_should_return_an_empty_cart_initially() {
        let (state, _) = make_test_state().await;
        let response = app(state)
            .oneshot(Request::get("/cart").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn it_should_add_a_product_and_expose_it_on_the_cart_view() {
        let (state, _) = make_test_state().await;
        let app = app(state);

        let response = app
            .clone()
            .oneshot(
                Request::post("/cart/products/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(Request::get("/cart").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let items: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[0]["amount"], 1);
    }

    #[tokio::test]
    async fn it_should_return_404_when_adding_an_unknown_product() {
        let (state, _) = make_test_state().await;
        let response = app(state)
            .oneshot(
                Request::post("/cart/products/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_409_when_the_increment_is_out_of_stock() {
        let (state, _) = make_test_state().await;
        let app = app(state);
        app.clone()
            .oneshot(
                Request::post("/cart/products/2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::post("/cart/products/2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(body["error"].as_str().unwrap().contains("out of stock"));
    }

    #[tokio::test]
    async fn it_should_return_502_while_the_catalog_is_offline() {
        let (state, catalog) = make_test_state().await;
        catalog.toggle_offline();
        let response = app(state)
            .oneshot(
                Request::post("/cart/products/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn it_should_remove_a_product_with_204_and_404_when_absent() {
        let (state, _) = make_test_state().await;
        let app = app(state);
        app.clone()
            .oneshot(
                Request::post("/cart/products/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::delete("/cart/products/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::delete("/cart/products/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_update_the_amount_and_treat_zero_as_a_noop() {
        let (state, _) = make_test_state().await;
        let app = app(state);
        app.clone()
            .oneshot(
                Request::post("/cart/products/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::put("/cart/products/1")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"amount":3}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(
                Request::put("/cart/products/1")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"amount":0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/cart").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let items: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(items[0]["amount"], 3);
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_malformed_update_body() {
        let (state, _) = make_test_state().await;
        let response = app(state)
            .oneshot(
                Request::put("/cart/products/1")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"amount":"three"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
