use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{ApiQuery, ApiResponse, IdPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::{ProductoError, ProductoResult};
use crate::models::{
    BusquedaParams, CreateProducto, ProductoDto, RangoPrecioParams, UpdateProducto,
};
use crate::service::ProductoService;
use crate::unit_of_work::UnitOfWork;

pub const PRECIO_RANGE_INVALID: &str = "Rango de precios inválido";

/// OpenAPI documentation for the productos API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_all_productos,
        create_producto,
        get_producto_by_id,
        update_producto,
        delete_producto,
        search_productos,
        get_productos_by_precio_range,
    ),
    components(schemas(
        ProductoDto,
        CreateProducto,
        UpdateProducto,
        ApiResponse<ProductoDto>,
        ApiResponse<Vec<ProductoDto>>,
        ApiResponse<bool>,
    )),
    tags(
        (name = entity::Model::TAG, description = "Gestión de productos")
    )
)]
pub struct ApiDoc;

/// Create the producto router with all HTTP endpoints
pub fn router<U: UnitOfWork + 'static>(service: ProductoService<U>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_all_productos).post(create_producto))
        .route("/search", get(search_productos))
        .route("/precio-range", get(get_productos_by_precio_range))
        .route(
            "/{id}",
            get(get_producto_by_id)
                .put(update_producto)
                .delete(delete_producto),
        )
        .with_state(shared_service)
}

/// List all productos
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "Productos obtenidos", body = ApiResponse<Vec<ProductoDto>>),
        (status = 500, description = "Error interno")
    )
)]
async fn get_all_productos<U: UnitOfWork>(
    State(service): State<Arc<ProductoService<U>>>,
) -> ProductoResult<Json<ApiResponse<Vec<ProductoDto>>>> {
    let productos = service.get_all().await?;
    Ok(Json(ApiResponse::ok(
        productos,
        "Productos obtenidos exitosamente",
    )))
}

/// Create a producto
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateProducto,
    responses(
        (status = 201, description = "Producto creado", body = ApiResponse<ProductoDto>),
        (status = 400, description = "Datos inválidos"),
        (status = 500, description = "Error interno")
    )
)]
async fn create_producto<U: UnitOfWork>(
    State(service): State<Arc<ProductoService<U>>>,
    ValidatedJson(input): ValidatedJson<CreateProducto>,
) -> ProductoResult<impl IntoResponse> {
    let producto = service.create(input).await?;
    let location = format!("/producto/{}", producto.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::ok(producto, "Producto creado exitosamente")),
    ))
}

/// Get a producto by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Producto ID")
    ),
    responses(
        (status = 200, description = "Producto encontrado", body = ApiResponse<ProductoDto>),
        (status = 400, description = "ID inválido"),
        (status = 404, description = "Producto no encontrado"),
        (status = 500, description = "Error interno")
    )
)]
async fn get_producto_by_id<U: UnitOfWork>(
    State(service): State<Arc<ProductoService<U>>>,
    IdPath(id): IdPath,
) -> ProductoResult<Json<ApiResponse<ProductoDto>>> {
    match service.get_by_id(id).await? {
        Some(producto) => Ok(Json(ApiResponse::ok(producto, "Producto encontrado"))),
        None => Err(ProductoError::NotFound(id)),
    }
}

/// Replace a producto
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Producto ID")
    ),
    request_body = UpdateProducto,
    responses(
        (status = 200, description = "Producto actualizado", body = ApiResponse<ProductoDto>),
        (status = 400, description = "Datos inválidos"),
        (status = 404, description = "Producto no encontrado"),
        (status = 500, description = "Error interno")
    )
)]
async fn update_producto<U: UnitOfWork>(
    State(service): State<Arc<ProductoService<U>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProducto>,
) -> ProductoResult<Json<ApiResponse<ProductoDto>>> {
    let producto = service.update(id, input).await?;
    Ok(Json(ApiResponse::ok(
        producto,
        "Producto actualizado exitosamente",
    )))
}

/// Delete a producto
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Producto ID")
    ),
    responses(
        (status = 200, description = "Producto eliminado", body = ApiResponse<bool>),
        (status = 400, description = "ID inválido"),
        (status = 404, description = "Producto no encontrado"),
        (status = 500, description = "Error interno")
    )
)]
async fn delete_producto<U: UnitOfWork>(
    State(service): State<Arc<ProductoService<U>>>,
    IdPath(id): IdPath,
) -> ProductoResult<Json<ApiResponse<bool>>> {
    if !service.delete(id).await? {
        return Err(ProductoError::NotFound(id));
    }
    Ok(Json(ApiResponse::ok(
        true,
        "Producto eliminado exitosamente",
    )))
}

/// Search productos by nombre substring
#[utoipa::path(
    get,
    path = "/search",
    tag = entity::Model::TAG,
    params(BusquedaParams),
    responses(
        (status = 200, description = "Resultado de la búsqueda", body = ApiResponse<Vec<ProductoDto>>),
        (status = 500, description = "Error interno")
    )
)]
async fn search_productos<U: UnitOfWork>(
    State(service): State<Arc<ProductoService<U>>>,
    ApiQuery(params): ApiQuery<BusquedaParams>,
) -> ProductoResult<Json<ApiResponse<Vec<ProductoDto>>>> {
    let productos = service.search_by_nombre(&params.nombre).await?;
    let message = format!("Se encontraron {} productos", productos.len());
    Ok(Json(ApiResponse::ok(productos, message)))
}

/// Filter productos by an inclusive precio range
#[utoipa::path(
    get,
    path = "/precio-range",
    tag = entity::Model::TAG,
    params(RangoPrecioParams),
    responses(
        (status = 200, description = "Productos en el rango", body = ApiResponse<Vec<ProductoDto>>),
        (status = 400, description = "Rango inválido"),
        (status = 500, description = "Error interno")
    )
)]
async fn get_productos_by_precio_range<U: UnitOfWork>(
    State(service): State<Arc<ProductoService<U>>>,
    ApiQuery(params): ApiQuery<RangoPrecioParams>,
) -> ProductoResult<Json<ApiResponse<Vec<ProductoDto>>>> {
    if !params.is_valid() {
        return Err(ProductoError::InvalidArgument(
            PRECIO_RANGE_INVALID.to_string(),
        ));
    }

    let productos = service
        .get_by_precio_range(params.min_precio, params.max_precio)
        .await?;
    let message = format!("Se encontraron {} productos en el rango", productos.len());
    Ok(Json(ApiResponse::ok(productos, message)))
}
