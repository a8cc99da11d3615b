use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

pub const NOMBRE_MAX_LEN: usize = 100;
pub const DESCRIPCION_MAX_LEN: usize = 500;
pub const PRECIO_MIN: Decimal = dec!(0.01);
pub const PRECIO_MAX: Decimal = dec!(999999.99);

/// Un producto del catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Producto {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub precio: Decimal,
}

impl Producto {
    /// Applies an update payload, keeping the identity of the producto.
    ///
    /// All three mutable fields are replaced wholesale; the id never changes.
    pub fn apply_update(&self, update: UpdateProducto) -> Producto {
        Producto {
            id: self.id,
            nombre: update.nombre,
            descripcion: update.descripcion,
            precio: update.precio.round_dp(2),
        }
    }
}

/// Payload para crear un producto.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateProducto {
    #[validate(custom(function = "validate_nombre"))]
    pub nombre: String,

    #[validate(custom(function = "validate_descripcion"))]
    pub descripcion: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_precio"))]
    #[schema(value_type = f64, example = 25.99)]
    pub precio: Decimal,
}

/// Payload para reemplazar un producto existente.
///
/// Same shape and same validation rules as [`CreateProducto`]; a PUT always
/// carries the full representation.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateProducto {
    #[validate(custom(function = "validate_nombre"))]
    pub nombre: String,

    #[validate(custom(function = "validate_descripcion"))]
    pub descripcion: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_precio"))]
    #[schema(value_type = f64, example = 25.99)]
    pub precio: Decimal,
}

/// Representación de un producto en las respuestas de la API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductoDto {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 1200.00)]
    pub precio: Decimal,
}

impl From<Producto> for ProductoDto {
    fn from(producto: Producto) -> Self {
        Self {
            id: producto.id,
            nombre: producto.nombre,
            descripcion: producto.descripcion,
            precio: producto.precio,
        }
    }
}

/// Query string para la búsqueda por nombre.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct BusquedaParams {
    /// Substring to match against producto names (case-insensitive)
    pub nombre: String,
}

/// Query string para el filtro por rango de precios.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RangoPrecioParams {
    /// Lower bound, inclusive
    #[param(value_type = f64)]
    pub min_precio: Decimal,
    /// Upper bound, inclusive
    #[param(value_type = f64)]
    pub max_precio: Decimal,
}

impl RangoPrecioParams {
    /// A range is usable when both bounds are non-negative and ordered.
    pub fn is_valid(&self) -> bool {
        !(self.min_precio < Decimal::ZERO
            || self.max_precio < Decimal::ZERO
            || self.min_precio > self.max_precio)
    }
}

fn validate_nombre(nombre: &str) -> Result<(), ValidationError> {
    if nombre.trim().is_empty() {
        return Err(validation_error("nombre_requerido", "El nombre es requerido"));
    }
    if nombre.chars().count() > NOMBRE_MAX_LEN {
        return Err(validation_error(
            "nombre_demasiado_largo",
            "El nombre no puede exceder 100 caracteres",
        ));
    }
    Ok(())
}

fn validate_descripcion(descripcion: &str) -> Result<(), ValidationError> {
    if descripcion.trim().is_empty() {
        return Err(validation_error(
            "descripcion_requerida",
            "La descripción es requerida",
        ));
    }
    if descripcion.chars().count() > DESCRIPCION_MAX_LEN {
        return Err(validation_error(
            "descripcion_demasiado_larga",
            "La descripción no puede exceder 500 caracteres",
        ));
    }
    Ok(())
}

fn validate_precio(precio: &Decimal) -> Result<(), ValidationError> {
    if *precio < PRECIO_MIN || *precio > PRECIO_MAX {
        return Err(validation_error(
            "precio_fuera_de_rango",
            "El precio debe estar entre 0.01 y 999999.99",
        ));
    }
    Ok(())
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}
