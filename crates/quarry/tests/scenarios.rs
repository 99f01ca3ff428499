mod support;

use pretty_assertions::assert_eq;
use quarry::{
    query::{self, Method, Operator},
    stmt::{Type, Value},
    Flavor,
};
use support::*;

// ----- filter then project -----

#[test]
fn filter_then_project_binds_parameter() {
    let compiled = compile(
        Flavor::SqlServer,
        customers()
            .filter(lambda(c("Age").gt(query::Expr::param("p0", Type::I32))))
            .project(lambda(c("Name"))),
    );

    assert_eq!(
        compiled.sql,
        "SELECT [c].[Name] FROM [Customers] AS [c] WHERE [c].[Age] > @p0"
    );
    assert_eq!(compiled.parameters.len(), 1);
    assert_eq!(compiled.parameters[0].name, "p0");
    assert_eq!(compiled.parameters[0].ty, Type::I32);
    assert!(compiled.cacheable);
}

// ----- distinct, order, take -----

#[test]
fn ordering_a_distinct_select_pushes_it_down() {
    let sql = sql(
        Flavor::SqlServer,
        customers()
            .project(lambda(query::Expr::new_object([
                ("Id", c("Id")),
                ("Name", c("Name")),
            ])))
            .distinct()
            .order_by(lambda(c("Id")))
            .take(5),
    );

    assert_eq!(
        sql,
        "SELECT TOP(5) [t].[Id], [t].[Name] \
         FROM (SELECT DISTINCT [c].[Id], [c].[Name] FROM [Customers] AS [c]) AS [t] \
         ORDER BY [t].[Id]"
    );
    assert!(!sql.contains("DISTINCT [c].[Id], [c].[Name] FROM [Customers] AS [c] ORDER BY"));
}

// ----- contains over a literal list -----

#[test]
fn contains_over_list_with_null_splits_the_null() {
    let ages = query::Expr::Constant {
        value: Value::list([Value::from(1), Value::from(2), Value::Null]),
        ty: Type::list(Type::nullable(Type::I32)),
    };
    let contains = query::Expr::call_static(Method::new("Enumerable", "Contains"), vec![ages, c("Age")]);

    let sql = sql(
        Flavor::SqlServer,
        customers()
            .filter(lambda(contains))
            .project(lambda(c("Name"))),
    );

    assert_eq!(
        sql,
        "SELECT [c].[Name] FROM [Customers] AS [c] \
         WHERE ([c].[Age] IN (1, 2) OR [c].[Age] IS NULL)"
    );
}

// ----- nullable equality -----

#[test]
fn nullable_equality_with_both_sides_missing_is_true() {
    let compiler = compiler(Flavor::SqlServer);
    let expr = lowered_value(&compiler, c("City").eq(c("Region")));

    let row = Row::new().with("City", Value::Null).with("Region", Value::Null);
    assert_eq!(expr.eval(row).unwrap(), Value::Bool(true));

    // Plain SQL `=` would have said NULL
    let row = Row::new().with("City", "Berlin").with("Region", Value::Null);
    assert_eq!(expr.eval(row).unwrap(), Value::Bool(false));
}

// ----- count after take -----

#[test]
fn count_after_take_counts_the_limited_rows() {
    let sql = sql(
        Flavor::SqlServer,
        customers()
            .project(lambda(c("Id")))
            .take(10)
            .then(Operator::Count(None)),
    );

    assert_eq!(
        sql,
        "SELECT COUNT(*) FROM (SELECT TOP(10) [c].[Id] FROM [Customers] AS [c]) AS [t]"
    );
}

#[test]
fn count_after_take_over_entity() {
    let sql = sql(Flavor::SqlServer, customers().take(10).then(Operator::Count(None)));

    assert!(sql.starts_with("SELECT COUNT(*) FROM (SELECT TOP(10) [c].[Id], [c].[Name]"), "{sql}");
    assert!(sql.ends_with("FROM [Customers] AS [c]) AS [t]"), "{sql}");
}

// ----- any -----

#[test]
fn any_becomes_a_boolean_projection_over_exists() {
    let sql = sql(
        Flavor::SqlServer,
        customers().then(Operator::Any(Some(lambda(c("Age").gt(30))))),
    );

    assert_eq!(
        sql,
        "SELECT CASE WHEN EXISTS (SELECT 1 FROM [Customers] AS [c] WHERE [c].[Age] > 30) \
         THEN CAST(1 AS bit) ELSE CAST(0 AS bit) END"
    );
}
