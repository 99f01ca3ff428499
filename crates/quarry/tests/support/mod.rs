#![allow(dead_code)]

use quarry::{
    query::{self, Lambda, QueryExpr},
    schema::{Entity, Property},
    stmt::{Expr, ExprColumn, ExprParameter, Input, Type, Value},
    CompiledQuery, Compiler, Flavor,
};
use std::collections::HashMap;

pub fn schema() -> quarry::Schema {
    quarry::Schema::new([Entity::new(
        "Customer",
        "Customers",
        [
            Property::new("Id", Type::I32),
            Property::new("Name", Type::String),
            Property::new("City", Type::String).nullable(),
            Property::new("Region", Type::String).nullable(),
            Property::new("Age", Type::I32).nullable(),
            Property::new("IsActive", Type::Bool),
            Property::new("IsVip", Type::Bool).nullable(),
            Property::new("IsLocal", Type::Bool).nullable(),
            Property::new("Score", Type::F32),
        ],
    )])
}

/// Routes the compiler's pipeline events to the test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn compiler(flavor: Flavor) -> Compiler {
    init_tracing();
    Compiler::builder().flavor(flavor).build(schema()).unwrap()
}

pub fn compile(flavor: Flavor, query: QueryExpr) -> CompiledQuery {
    compiler(flavor).compile(&query).unwrap()
}

pub fn sql(flavor: Flavor, query: QueryExpr) -> String {
    compile(flavor, query).sql
}

pub fn customers() -> QueryExpr {
    QueryExpr::new("Customer")
}

/// `c.<member>`
pub fn c(member: &str) -> query::Expr {
    query::Expr::var("c").member(member)
}

pub fn lambda(body: query::Expr) -> Lambda {
    Lambda::new("c", body)
}

/// The single projected expression of a lowered scalar projection.
pub fn lowered_value(compiler: &Compiler, body: query::Expr) -> Expr {
    let shaped = compiler.lower(&customers().project(lambda(body))).unwrap();
    assert_eq!(shaped.select.projection.len(), 1);
    shaped.select.projection[0].expr.clone()
}

/// The predicate of a lowered filter, if any survived.
pub fn lowered_predicate(compiler: &Compiler, body: query::Expr) -> Option<Expr> {
    let shaped = compiler.lower(&customers().filter(lambda(body))).unwrap();
    shaped.select.predicate
}

/// Column and parameter values by name, for evaluating lowered trees.
#[derive(Debug, Default, Clone)]
pub struct Row {
    values: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Row {
        self.values.insert(name.to_string(), value.into());
        self
    }
}

impl Input for Row {
    fn column(&mut self, column: &ExprColumn) -> Option<Value> {
        self.values.get(&column.name).cloned()
    }

    fn parameter(&mut self, parameter: &ExprParameter) -> Option<Value> {
        self.values.get(&parameter.name).cloned()
    }
}

/// `true`, `false` and missing.
pub fn three_valued() -> [Option<bool>; 3] {
    [Some(true), Some(false), None]
}

pub fn bool_value(value: Option<bool>) -> Value {
    value.map(Value::Bool).unwrap_or(Value::Null)
}
