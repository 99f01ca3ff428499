use quarry_core::{
    mapping::{TypeMapping, TypeMappingSource},
    schema::Property,
    stmt::{BinaryOp, Expr, ExprColumn, Type, Value},
    Capability, Error, Flavor, Result,
};
use std::sync::Arc;

/// Builds SQL expressions with their type mappings assigned.
///
/// Translation builds trees bottom-up from unmapped leaves and maps them with
/// [`apply`](ExprFactory::apply) once the operands are known, so constants
/// and parameters pick up the mapping of the column they meet. The boolean
/// helpers (`and`, `not`, `is_null`, ..) expect operands that are already
/// mapped and only assign the node's own mapping; rewrite passes use them.
#[derive(Debug, Clone)]
pub struct ExprFactory {
    mappings: TypeMappingSource,
}

impl ExprFactory {
    pub fn new(mappings: TypeMappingSource) -> ExprFactory {
        ExprFactory { mappings }
    }

    pub fn flavor(&self) -> Flavor {
        self.mappings.flavor()
    }

    pub fn capability(&self) -> &'static Capability {
        self.flavor().capability()
    }

    pub fn mappings(&self) -> &TypeMappingSource {
        &self.mappings
    }

    /// Maps `expr` and any unmapped children, inferring operand mappings
    /// from their siblings.
    pub fn apply(&self, expr: Expr) -> Result<Expr> {
        self.mappings.apply_default_mapping(expr)
    }

    pub fn apply_with(&self, expr: Expr, mapping: Option<&Arc<TypeMapping>>) -> Result<Expr> {
        self.mappings.apply_mapping(expr, mapping)
    }

    /// A column reading `property` through the table aliased `table`.
    pub fn column(&self, table: &str, property: &Property) -> Result<Expr> {
        let Some(mapping) = self.mappings.find_for_property(property) else {
            return Err(Error::translation_unsupported(format!(
                "property `{}` of type {} has no type mapping",
                property.name, property.ty
            )));
        };

        Ok(ExprColumn {
            table: table.to_string(),
            name: property.column.clone(),
            ty: property.ty.clone(),
            nullable: property.nullable,
            mapping: Some(mapping),
        }
        .into())
    }

    /// A function call whose arguments are mapped before the call itself.
    pub fn func(&self, name: &str, args: Vec<Expr>, ty: Type) -> Result<Expr> {
        let args = args
            .into_iter()
            .map(|arg| self.apply(arg))
            .collect::<Result<Vec<_>>>()?;
        self.apply(Expr::func(name, args, ty))
    }

    /// `CAST(operand AS ty)`.
    pub fn convert(&self, operand: Expr, ty: Type) -> Result<Expr> {
        let operand = self.apply(operand)?;
        self.apply(Expr::convert(operand, ty))
    }

    pub fn bool_mapping(&self) -> Arc<TypeMapping> {
        self.mappings.bool_mapping()
    }

    pub fn bool(&self, value: bool) -> Expr {
        Expr::constant(value).with_type_mapping(Some(self.bool_mapping()))
    }

    /// A constant typed `ty`, sharing `mapping`.
    pub fn constant(&self, value: impl Into<Value>, ty: Type, mapping: Option<Arc<TypeMapping>>) -> Expr {
        Expr::typed_constant(value, ty).with_type_mapping(mapping)
    }

    pub fn not(&self, operand: Expr) -> Expr {
        Expr::not(operand).with_type_mapping(Some(self.bool_mapping()))
    }

    pub fn and(&self, lhs: Expr, rhs: Expr) -> Expr {
        Expr::and(lhs, rhs).with_type_mapping(Some(self.bool_mapping()))
    }

    pub fn or(&self, lhs: Expr, rhs: Expr) -> Expr {
        Expr::or(lhs, rhs).with_type_mapping(Some(self.bool_mapping()))
    }

    pub fn logical(&self, op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(op, lhs, rhs).with_type_mapping(Some(self.bool_mapping()))
    }

    /// A comparison between two mapped operands.
    pub fn compare(&self, op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::typed_binary(op, lhs, rhs, Type::Bool).with_type_mapping(Some(self.bool_mapping()))
    }

    pub fn is_null(&self, operand: Expr) -> Expr {
        Expr::is_null(operand).with_type_mapping(Some(self.bool_mapping()))
    }

    pub fn is_not_null(&self, operand: Expr) -> Expr {
        Expr::is_not_null(operand).with_type_mapping(Some(self.bool_mapping()))
    }
}
