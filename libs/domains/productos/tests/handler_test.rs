//! HTTP-level tests for the producto routes, running the real router over
//! the in-memory unit of work.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use domain_productos::{
    router, InMemoryProductoRepository, InMemoryUnitOfWork, Producto, ProductoService,
};

async fn seeded_app() -> Router {
    let repo = InMemoryProductoRepository::with_seed(vec![
        Producto {
            id: 1,
            nombre: "Laptop".to_string(),
            descripcion: "Laptop de alta gama".to_string(),
            precio: dec!(1200.00),
        },
        Producto {
            id: 2,
            nombre: "Mouse".to_string(),
            descripcion: "Mouse inalámbrico".to_string(),
            precio: dec!(25.99),
        },
        Producto {
            id: 3,
            nombre: "Teclado".to_string(),
            descripcion: "Teclado mecánico".to_string(),
            precio: dec!(89.99),
        },
    ])
    .await;

    let service = ProductoService::new(InMemoryUnitOfWork::with_repository(repo));
    Router::new().nest("/producto", router(service))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn get_all_returns_seeded_productos() {
    let app = seeded_app().await;
    let (status, body) = send(&app, get("/producto")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Productos obtenidos exitosamente"));
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["errors"], json!([]));
}

#[tokio::test]
async fn get_by_id_returns_the_producto() {
    let app = seeded_app().await;
    let (status, body) = send(&app, get("/producto/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Producto encontrado"));
    assert_eq!(body["data"]["nombre"], json!("Laptop"));
    assert_eq!(body["data"]["precio"], json!(1200.0));
}

#[tokio::test]
async fn get_by_unknown_id_is_404_envelope() {
    let app = seeded_app().await;
    let (status, body) = send(&app, get("/producto/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Producto con ID 999 no encontrado"));
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn get_with_non_numeric_id_is_400() {
    let app = seeded_app().await;
    let (status, body) = send(&app, get("/producto/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("ID inválido: abc"));
}

#[tokio::test]
async fn create_returns_201_with_location() {
    let app = seeded_app().await;
    let request = json_request(
        "POST",
        "/producto",
        json!({
            "nombre": "Impresora",
            "descripcion": "Impresora láser",
            "precio": 4500.0
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/producto/4"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], json!("Producto creado exitosamente"));
    assert_eq!(body["data"]["id"], json!(4));
    assert_eq!(body["data"]["precio"], json!(4500.0));

    let (_, all) = send(&app, get("/producto")).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn create_with_invalid_payload_is_400_with_field_errors() {
    let app = seeded_app().await;
    let request = json_request(
        "POST",
        "/producto",
        json!({
            "nombre": "",
            "descripcion": "Algo",
            "precio": 0.0
        }),
    );

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Datos inválidos"));

    let errors: Vec<String> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap().to_string())
        .collect();
    assert!(errors.iter().any(|e| e == "El nombre es requerido"));
    assert!(errors
        .iter()
        .any(|e| e == "El precio debe estar entre 0.01 y 999999.99"));
}

#[tokio::test]
async fn update_replaces_the_producto() {
    let app = seeded_app().await;
    let request = json_request(
        "PUT",
        "/producto/2",
        json!({
            "nombre": "Mouse Gamer",
            "descripcion": "Mouse inalámbrico RGB",
            "precio": 49.99
        }),
    );

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Producto actualizado exitosamente"));
    assert_eq!(body["data"]["id"], json!(2));
    assert_eq!(body["data"]["nombre"], json!("Mouse Gamer"));

    let (_, fetched) = send(&app, get("/producto/2")).await;
    assert_eq!(fetched["data"]["precio"], json!(49.99));
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let app = seeded_app().await;
    let request = json_request(
        "PUT",
        "/producto/999",
        json!({
            "nombre": "Fantasma",
            "descripcion": "No existe",
            "precio": 10.0
        }),
    );

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Producto con ID 999 no encontrado"));
}

#[tokio::test]
async fn update_with_invalid_payload_is_400() {
    let app = seeded_app().await;
    let request = json_request(
        "PUT",
        "/producto/1",
        json!({
            "nombre": "Laptop",
            "descripcion": "",
            "precio": 1200.0
        }),
    );

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Datos inválidos"));
}

#[tokio::test]
async fn delete_twice_is_404_the_second_time() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/producto/3")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Producto eliminado exitosamente"));
    assert_eq!(body["data"], json!(true));

    let (status, body) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/producto/3")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Producto con ID 3 no encontrado"));
}

#[tokio::test]
async fn search_matches_case_insensitively() {
    let app = seeded_app().await;
    let (status, body) = send(&app, get("/producto/search?nombre=lap")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Se encontraron 1 productos"));
    assert_eq!(body["data"][0]["nombre"], json!("Laptop"));
}

#[tokio::test]
async fn search_without_nombre_param_is_400_envelope() {
    let app = seeded_app().await;
    let (status, body) = send(&app, get("/producto/search")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["data"].is_null());
    assert!(body["message"].as_str().unwrap().contains("nombre"));
}

#[tokio::test]
async fn create_accepts_integer_precio_literal() {
    let app = seeded_app().await;
    let request = json_request(
        "POST",
        "/producto",
        json!({
            "nombre": "Impresora",
            "descripcion": "Impresora láser HP",
            "precio": 4500
        }),
    );

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["precio"], json!(4500.0));

    let (_, fetched) = send(&app, get("/producto/4")).await;
    assert_eq!(fetched["data"]["precio"], json!(4500.0));
}

#[tokio::test]
async fn search_without_matches_returns_empty_list() {
    let app = seeded_app().await;
    let (status, body) = send(&app, get("/producto/search?nombre=impresora")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Se encontraron 0 productos"));
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn precio_range_is_inclusive_and_sorted() {
    let app = seeded_app().await;
    let (status, body) = send(
        &app,
        get("/producto/precio-range?minPrecio=25.99&maxPrecio=89.99"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Se encontraron 2 productos en el rango"));
    assert_eq!(body["data"][0]["nombre"], json!("Mouse"));
    assert_eq!(body["data"][1]["nombre"], json!("Teclado"));
}

#[tokio::test]
async fn inverted_precio_range_is_400() {
    let app = seeded_app().await;
    let (status, body) = send(
        &app,
        get("/producto/precio-range?minPrecio=5000&maxPrecio=1000"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Rango de precios inválido"));
}

#[tokio::test]
async fn negative_precio_range_is_400() {
    let app = seeded_app().await;
    let (status, body) = send(
        &app,
        get("/producto/precio-range?minPrecio=-5&maxPrecio=100"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Rango de precios inválido"));
}
