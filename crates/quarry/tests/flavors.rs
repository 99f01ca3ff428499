mod support;

use pretty_assertions::assert_eq;
use quarry::{
    query::{self, QueryExpr},
    schema::{Entity, Property, ValueConverter},
    stmt::{Type, Value},
    Compiler, Flavor, Result, Schema,
};
use support::*;

fn paged() -> QueryExpr {
    customers()
        .filter(lambda(c("Age").gt(query::Expr::param("p0", Type::I32))))
        .project(lambda(query::Expr::new_object([("Id", c("Id")), ("Name", c("Name"))])))
        .order_by(lambda(c("Name")))
        .take(3)
}

// ----- quoting, placeholders and paging -----

#[test]
fn sql_server() {
    assert_eq!(
        sql(Flavor::SqlServer, paged()),
        "SELECT TOP(3) [c].[Id], [c].[Name] FROM [Customers] AS [c] \
         WHERE [c].[Age] > @p0 ORDER BY [c].[Name]"
    );
}

#[test]
fn sqlite() {
    assert_eq!(
        sql(Flavor::Sqlite, paged()),
        r#"SELECT "c"."Id", "c"."Name" FROM "Customers" AS "c" WHERE "c"."Age" > @p0 ORDER BY "c"."Name" LIMIT 3"#
    );
}

#[test]
fn postgresql() {
    assert_eq!(
        sql(Flavor::Postgresql, paged()),
        r#"SELECT "c"."Id", "c"."Name" FROM "Customers" AS "c" WHERE "c"."Age" > $1 ORDER BY "c"."Name" LIMIT 3"#
    );
}

#[test]
fn postgres_reuses_a_repeated_parameter() {
    let p = || query::Expr::param("p", Type::I32);
    let compiled = compile(
        Flavor::Postgresql,
        customers()
            .filter(lambda(c("Age").gt(p())))
            .filter(lambda(c("Id").lt(p())))
            .project(lambda(c("Id"))),
    );

    assert_eq!(
        compiled.sql,
        r#"SELECT "c"."Id" FROM "Customers" AS "c" WHERE ("c"."Age" > $1) AND ("c"."Id" < $1)"#
    );
    assert_eq!(compiled.parameters.len(), 1);
}

// ----- booleans -----

#[test]
fn predicate_in_value_position() {
    let query = || customers().project(lambda(c("Id").gt(5)));

    assert_eq!(
        sql(Flavor::SqlServer, query()),
        "SELECT CASE WHEN [c].[Id] > 5 THEN CAST(1 AS bit) ELSE CAST(0 AS bit) END FROM [Customers] AS [c]"
    );
    assert_eq!(
        sql(Flavor::Postgresql, query()),
        r#"SELECT "c"."Id" > 5 FROM "Customers" AS "c""#
    );
}

#[test]
fn boolean_literals() {
    let query = || customers().project(lambda(query::Expr::constant(true)));

    assert_eq!(sql(Flavor::SqlServer, query()), "SELECT CAST(1 AS bit) FROM [Customers] AS [c]");
    assert_eq!(sql(Flavor::Sqlite, query()), r#"SELECT 1 FROM "Customers" AS "c""#);
    assert_eq!(sql(Flavor::Postgresql, query()), r#"SELECT TRUE FROM "Customers" AS "c""#);
}

// ----- schema mapping -----

fn yes_no_to_provider(value: &Value) -> Result<Value> {
    Ok(Value::from(if value.as_bool() == Some(true) { "Y" } else { "N" }))
}

fn yes_no_from_provider(value: &Value) -> Result<Value> {
    Ok(Value::Bool(value.as_str() == Some("Y")))
}

fn orders() -> Compiler {
    let yes_no = ValueConverter::new(
        "yes-no",
        Type::String,
        yes_no_to_provider,
        yes_no_from_provider,
    );

    let schema = Schema::new([Entity::new(
        "Order",
        "Orders",
        [
            Property::new("Id", Type::I32),
            Property::new("Active", Type::Bool)
                .column("active_flag")
                .converter(yes_no),
        ],
    )
    .with_schema("sales")]);

    Compiler::builder()
        .flavor(Flavor::Postgresql)
        .build(schema)
        .unwrap()
}

fn o(member: &str) -> query::Expr {
    query::Expr::var("o").member(member)
}

#[test]
fn schema_and_column_names_come_from_the_model() {
    let query = QueryExpr::new("Order").project(query::Lambda::new("o", o("Id")));
    let compiled = orders().compile(&query).unwrap();

    assert_eq!(compiled.sql, r#"SELECT "o"."Id" FROM "sales"."Orders" AS "o""#);
}

#[test]
fn converted_constants_render_in_provider_form() {
    let query = QueryExpr::new("Order")
        .filter(query::Lambda::new("o", o("Active").eq(true)))
        .project(query::Lambda::new("o", o("Id")));
    let compiled = orders().compile(&query).unwrap();

    assert_eq!(
        compiled.sql,
        r#"SELECT "o"."Id" FROM "sales"."Orders" AS "o" WHERE "o"."active_flag" = 'Y'"#
    );
}

#[test]
fn converted_columns_materialize_in_host_form() {
    let query = QueryExpr::new("Order").project(query::Lambda::new("o", o("Active")));
    let compiled = orders().compile(&query).unwrap();

    let rows = vec![vec![Value::from("Y")], vec![Value::from("N")]];
    assert_eq!(
        compiled.shape.materialize_rows(&rows).unwrap(),
        Value::List(vec![Value::Bool(true), Value::Bool(false)])
    );
}
