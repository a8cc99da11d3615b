//! SeaORM entity for the `productos` table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{CreateProducto, Producto};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "productos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub nombre: String,
    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub descripcion: String,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub precio: Decimal,
}

impl Model {
    pub const TAG: &'static str = "productos";
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Producto {
    fn from(model: Model) -> Self {
        Producto {
            id: model.id,
            nombre: model.nombre,
            descripcion: model.descripcion,
            precio: model.precio,
        }
    }
}

impl From<CreateProducto> for ActiveModel {
    fn from(input: CreateProducto) -> Self {
        ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            nombre: sea_orm::ActiveValue::Set(input.nombre),
            descripcion: sea_orm::ActiveValue::Set(input.descripcion),
            precio: sea_orm::ActiveValue::Set(input.precio.round_dp(2)),
        }
    }
}

impl From<Producto> for ActiveModel {
    fn from(producto: Producto) -> Self {
        ActiveModel {
            id: sea_orm::ActiveValue::Set(producto.id),
            nombre: sea_orm::ActiveValue::Set(producto.nombre),
            descripcion: sea_orm::ActiveValue::Set(producto.descripcion),
            precio: sea_orm::ActiveValue::Set(producto.precio.round_dp(2)),
        }
    }
}
