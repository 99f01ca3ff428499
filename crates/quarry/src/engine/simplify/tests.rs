use crate::engine::ExprFactory;
use quarry_core::{
    schema::Property,
    stmt::{Expr, Type},
    Flavor, TypeMappingSource,
};

mod expr_and;
mod expr_is_null;
mod expr_or;

pub fn test_factory() -> ExprFactory {
    ExprFactory::new(TypeMappingSource::new(Flavor::Sqlite))
}

/// A mapped column of table `t`.
pub fn column(factory: &ExprFactory, name: &str, ty: Type, nullable: bool) -> Expr {
    let property = Property::new(name, ty);
    let property = if nullable { property.nullable() } else { property };
    factory
        .column("t", &property)
        .expect("test column should map")
}

pub fn flag(factory: &ExprFactory, name: &str) -> Expr {
    column(factory, name, Type::Bool, false)
}
