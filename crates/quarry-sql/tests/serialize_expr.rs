use pretty_assertions::assert_eq;
use quarry_core::{
    mapping::TypeMappingSource,
    query::ParameterValues,
    shape::ProjectionMember,
    stmt::{BinaryOp, Expr, ExprParameter, OrderByExpr, Select, Table, Type, Value},
    Flavor,
};
use quarry_sql::{ParameterList, Serializer};

fn mapped(flavor: Flavor, expr: Expr) -> Expr {
    TypeMappingSource::new(flavor)
        .apply_default_mapping(expr)
        .unwrap()
}

fn column(name: &str, ty: Type) -> Expr {
    Expr::column("c", name, ty, false)
}

fn nullable_column(name: &str, ty: Type) -> Expr {
    Expr::column("c", name, ty, true)
}

fn negated(expr: Expr) -> Expr {
    match expr {
        Expr::In(mut e) => {
            e.negated = true;
            e.into()
        }
        expr => panic!("expected IN; expr={expr:#?}"),
    }
}

/// `SELECT <expr> AS [Value] FROM [Customers] AS [c]`, returning the part
/// between `SELECT ` and ` AS `.
fn project(flavor: Flavor, expr: Expr) -> String {
    let mut select = Select::from_table(Table::new("Customers", "c"));
    select.replace_projection_mapping([(ProjectionMember::from_path(["Value"]), mapped(flavor, expr))]);
    select.apply_projection();

    let sql = Serializer::new(flavor)
        .serialize(&select.freeze(), &mut ParameterList::new())
        .unwrap();

    let quote = |s: &str| match flavor {
        Flavor::SqlServer => format!("[{s}]"),
        _ => format!("\"{s}\""),
    };
    let suffix = format!(" AS {} FROM {} AS {}", quote("Value"), quote("Customers"), quote("c"));

    sql.strip_prefix("SELECT ")
        .and_then(|sql| sql.strip_suffix(&suffix))
        .unwrap_or_else(|| panic!("unexpected shape; sql={sql}"))
        .to_string()
}

/// The `WHERE` clause produced for `predicate`.
fn filter(flavor: Flavor, predicate: Expr) -> String {
    filter_with(flavor, predicate, &ParameterValues::new()).unwrap().0
}

fn filter_with(
    flavor: Flavor,
    predicate: Expr,
    values: &ParameterValues,
) -> quarry_core::Result<(String, ParameterList)> {
    let mut select = Select::from_table(Table::new("Customers", "c"));
    select.predicate = Some(mapped(flavor, predicate));

    let mut params = ParameterList::new();
    let sql = Serializer::new(flavor)
        .with_parameter_values(values)
        .serialize(&select.freeze(), &mut params)?;

    let clause = sql
        .split_once(" WHERE ")
        .map(|(_, clause)| clause.to_string())
        .unwrap_or_default();
    Ok((clause, params))
}

// ---------------------------------------------------------------------------
// Booleans in value and condition position
// ---------------------------------------------------------------------------

#[test]
fn sql_server_predicate_in_projection_becomes_case() {
    assert_eq!(
        project(Flavor::SqlServer, Expr::gt(column("Age", Type::I32), Expr::constant(30))),
        "CASE WHEN [c].[Age] > 30 THEN CAST(1 AS bit) ELSE CAST(0 AS bit) END"
    );
}

#[test]
fn native_bool_predicate_in_projection_is_inline() {
    assert_eq!(
        project(Flavor::Sqlite, Expr::gt(column("Age", Type::I32), Expr::constant(30))),
        r#""c"."Age" > 30"#
    );
}

#[test]
fn sql_server_bool_column_in_where_compares_to_true() {
    assert_eq!(
        filter(Flavor::SqlServer, column("IsActive", Type::Bool)),
        "[c].[IsActive] = CAST(1 AS bit)"
    );
    assert_eq!(
        filter(Flavor::SqlServer, Expr::not(column("IsActive", Type::Bool))),
        "NOT [c].[IsActive] = CAST(1 AS bit)"
    );
    assert_eq!(
        filter(Flavor::Postgresql, Expr::not(column("IsActive", Type::Bool))),
        r#"NOT "c"."IsActive""#
    );
}

#[test]
fn constant_conditions() {
    assert_eq!(filter(Flavor::SqlServer, Expr::constant(false)), "1 = 0");
    assert_eq!(filter(Flavor::SqlServer, Expr::constant(true)), "1 = 1");
    assert_eq!(filter(Flavor::Postgresql, Expr::constant(false)), "FALSE");
}

#[test]
fn bool_literal_per_flavor() {
    assert_eq!(project(Flavor::SqlServer, Expr::constant(true)), "CAST(1 AS bit)");
    assert_eq!(project(Flavor::Sqlite, Expr::constant(true)), "1");
    assert_eq!(project(Flavor::Postgresql, Expr::constant(true)), "TRUE");
}

#[test]
fn not_wraps_compound_operands() {
    let age = || column("Age", Type::I32);
    assert_eq!(
        filter(
            Flavor::SqlServer,
            Expr::not(Expr::and(
                Expr::gt(age(), Expr::constant(1)),
                Expr::lt(age(), Expr::constant(9)),
            )),
        ),
        "NOT (([c].[Age] > 1) AND ([c].[Age] < 9))"
    );
}

#[test]
fn case_tests_are_conditions() {
    let expr = Expr::case_when(
        column("IsActive", Type::Bool),
        Expr::constant("yes"),
        Expr::constant("no"),
    );
    assert_eq!(
        project(Flavor::SqlServer, expr),
        "CASE WHEN [c].[IsActive] = CAST(1 AS bit) THEN N'yes' ELSE N'no' END"
    );
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

#[test]
fn string_concatenation_per_flavor() {
    let full_name = || {
        Expr::binary(
            BinaryOp::Add,
            column("First", Type::String),
            column("Last", Type::String),
        )
    };
    assert_eq!(project(Flavor::SqlServer, full_name()), "[c].[First] + [c].[Last]");
    assert_eq!(project(Flavor::Postgresql, full_name()), r#""c"."First" || "c"."Last""#);
}

#[test]
fn nested_binary_operands_are_parenthesized() {
    let expr = Expr::binary(
        BinaryOp::Multiply,
        Expr::binary(BinaryOp::Add, column("A", Type::I32), column("B", Type::I32)),
        column("C", Type::I32),
    );
    assert_eq!(project(Flavor::SqlServer, expr), "([c].[A] + [c].[B]) * [c].[C]");
}

#[test]
fn coalesce_is_a_call_and_never_parenthesized() {
    let expr = Expr::eq(
        Expr::coalesce(nullable_column("City", Type::String), Expr::constant("")),
        Expr::constant("London"),
    );
    assert_eq!(
        filter(Flavor::SqlServer, expr),
        "COALESCE([c].[City], N'') = N'London'"
    );
}

#[test]
fn convert_uses_the_target_store_type() {
    assert_eq!(
        project(Flavor::SqlServer, Expr::convert(column("Age", Type::I32), Type::F64)),
        "CAST([c].[Age] AS float)"
    );
    assert_eq!(
        project(Flavor::Postgresql, Expr::convert(column("Age", Type::I32), Type::F64)),
        r#"CAST("c"."Age" AS double precision)"#
    );
}

#[test]
fn negate_and_null_tests() {
    assert_eq!(
        project(Flavor::Sqlite, Expr::negate(column("Age", Type::I32))),
        r#"-"c"."Age""#
    );
    assert_eq!(
        filter(Flavor::SqlServer, Expr::is_null(nullable_column("City", Type::String))),
        "[c].[City] IS NULL"
    );
    assert_eq!(
        filter(
            Flavor::SqlServer,
            Expr::is_not_null(Expr::binary(
                BinaryOp::Add,
                nullable_column("City", Type::String),
                column("Name", Type::String),
            )),
        ),
        "([c].[City] + [c].[Name]) IS NOT NULL"
    );
}

#[test]
fn like_with_escape() {
    let expr = Expr::like(
        column("Name", Type::String),
        Expr::constant("a\\%%"),
        Some(Expr::constant("\\")),
    );
    assert_eq!(
        filter(Flavor::SqlServer, expr),
        r"[c].[Name] LIKE N'a\%%' ESCAPE N'\'"
    );
}

#[test]
fn string_literals_double_their_quotes() {
    assert_eq!(
        filter(Flavor::Sqlite, Expr::eq(column("Name", Type::String), Expr::constant("O'Brien"))),
        r#""c"."Name" = 'O''Brien'"#
    );
}

#[test]
fn exists_subquery() {
    let flavor = Flavor::SqlServer;
    let mut orders = Select::from_table(Table::new("Orders", "o"));
    orders.apply_predicate(mapped(
        flavor,
        Expr::eq(
            Expr::column("o", "CustomerId", Type::I32, false),
            column("Id", Type::I32),
        ),
    ));

    assert_eq!(
        filter(flavor, Expr::exists(orders)),
        "EXISTS (SELECT 1 FROM [Orders] AS [o] WHERE [o].[CustomerId] = [c].[Id])"
    );
}

#[test]
fn scalar_exists_select_has_no_from() {
    let flavor = Flavor::SqlServer;
    let mut customers = Select::from_table(Table::new("Customers", "c"));
    customers.apply_predicate(mapped(
        flavor,
        Expr::gt(column("Age", Type::I32), Expr::constant(30)),
    ));

    let mut select = Select::scalar(mapped(flavor, Expr::exists(customers)));
    select.apply_projection();

    let sql = Serializer::sql_server()
        .serialize(&select.freeze(), &mut ParameterList::new())
        .unwrap();
    assert_eq!(
        sql,
        "SELECT CASE WHEN EXISTS (SELECT 1 FROM [Customers] AS [c] WHERE [c].[Age] > 30) \
         THEN CAST(1 AS bit) ELSE CAST(0 AS bit) END"
    );
}

// ---------------------------------------------------------------------------
// IN lists
// ---------------------------------------------------------------------------

fn ids(values: Vec<Expr>) -> Expr {
    Expr::in_list(column("Id", Type::I32), values)
}

#[test]
fn null_entries_are_split_out() {
    let list = || vec![Expr::constant(1), Expr::constant(2), Expr::null(Type::I32)];

    assert_eq!(
        filter(Flavor::SqlServer, ids(list())),
        "([c].[Id] IN (1, 2) OR [c].[Id] IS NULL)"
    );
    assert_eq!(
        filter(Flavor::SqlServer, negated(ids(list()))),
        "([c].[Id] NOT IN (1, 2) AND [c].[Id] IS NOT NULL)"
    );
}

#[test]
fn negated_list_over_nullable_operand_keeps_nulls() {
    let expr = Expr::in_list(
        nullable_column("Rank", Type::I32),
        vec![Expr::constant(1), Expr::constant(2)],
    );
    assert_eq!(
        filter(Flavor::SqlServer, negated(expr)),
        "([c].[Rank] NOT IN (1, 2) OR [c].[Rank] IS NULL)"
    );

    assert_eq!(
        filter(Flavor::SqlServer, negated(ids(vec![Expr::constant(1)]))),
        "[c].[Id] NOT IN (1)"
    );
}

#[test]
fn empty_and_null_only_lists() {
    assert_eq!(filter(Flavor::SqlServer, ids(vec![])), "1 = 0");
    assert_eq!(filter(Flavor::SqlServer, negated(ids(vec![]))), "1 = 1");
    assert_eq!(
        filter(Flavor::SqlServer, ids(vec![Expr::null(Type::I32)])),
        "[c].[Id] IS NULL"
    );
    assert_eq!(
        filter(Flavor::SqlServer, negated(ids(vec![Expr::null(Type::I32)]))),
        "[c].[Id] IS NOT NULL"
    );
}

fn ids_parameter() -> Expr {
    Expr::in_parameter(
        column("Id", Type::I32),
        ExprParameter {
            name: "ids".to_string(),
            ty: Type::list(Type::I32),
            mapping: None,
        },
    )
}

#[test]
fn list_parameters_expand_from_runtime_values() {
    let values = ParameterValues::new().with(
        "ids",
        Value::List(vec![Value::I32(3), Value::Null, Value::I32(5)]),
    );

    let (clause, params) = filter_with(Flavor::SqlServer, ids_parameter(), &values).unwrap();
    assert_eq!(clause, "([c].[Id] IN (3, 5) OR [c].[Id] IS NULL)");
    assert!(params.is_empty());
    assert_eq!(params.expanded, ["ids"]);
}

#[test]
fn list_parameter_without_value_is_missing() {
    let err = filter_with(Flavor::SqlServer, ids_parameter(), &ParameterValues::new()).unwrap_err();
    assert!(err.is_missing_parameter());
}

#[test]
fn in_subquery() {
    let flavor = Flavor::SqlServer;
    let mut orders = Select::from_table(Table::new("Orders", "o"));
    orders.replace_projection_mapping([(
        ProjectionMember::from_path(["CustomerId"]),
        mapped(flavor, Expr::column("o", "CustomerId", Type::I32, false)),
    )]);

    assert_eq!(
        filter(flavor, Expr::in_subquery(column("Id", Type::I32), orders)),
        "[c].[Id] IN (SELECT [o].[CustomerId] FROM [Orders] AS [o])"
    );
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

fn paged(flavor: Flavor, ordered: bool, offset: Option<i32>, limit: Option<i32>) -> String {
    let mut select = Select::from_table(Table::new("Customers", "c"));
    select.replace_projection_mapping([(
        ProjectionMember::from_path(["Name"]),
        mapped(flavor, column("Name", Type::String)),
    )]);
    select.apply_projection();

    if ordered {
        select.apply_ordering(OrderByExpr::desc(mapped(flavor, column("Name", Type::String))));
    }
    if let Some(offset) = offset {
        select.apply_offset(mapped(flavor, Expr::constant(offset)));
    }
    if let Some(limit) = limit {
        select.apply_limit(mapped(flavor, Expr::constant(limit)));
    }

    Serializer::new(flavor)
        .serialize(&select.freeze(), &mut ParameterList::new())
        .unwrap()
}

#[test]
fn sql_server_paging() {
    assert_eq!(
        paged(Flavor::SqlServer, false, None, Some(5)),
        "SELECT TOP(5) [c].[Name] FROM [Customers] AS [c]"
    );
    assert_eq!(
        paged(Flavor::SqlServer, true, Some(10), Some(5)),
        "SELECT [c].[Name] FROM [Customers] AS [c] ORDER BY [c].[Name] DESC \
         OFFSET 10 ROWS FETCH NEXT 5 ROWS ONLY"
    );
    assert_eq!(
        paged(Flavor::SqlServer, false, Some(10), None),
        "SELECT [c].[Name] FROM [Customers] AS [c] ORDER BY (SELECT 1) OFFSET 10 ROWS"
    );
}

#[test]
fn sqlite_paging() {
    assert_eq!(
        paged(Flavor::Sqlite, true, Some(10), Some(5)),
        r#"SELECT "c"."Name" FROM "Customers" AS "c" ORDER BY "c"."Name" DESC LIMIT 5 OFFSET 10"#
    );
    assert_eq!(
        paged(Flavor::Sqlite, false, Some(10), None),
        r#"SELECT "c"."Name" FROM "Customers" AS "c" LIMIT -1 OFFSET 10"#
    );
}

#[test]
fn postgres_paging() {
    assert_eq!(
        paged(Flavor::Postgresql, false, Some(10), Some(5)),
        r#"SELECT "c"."Name" FROM "Customers" AS "c" LIMIT 5 OFFSET 10"#
    );
}

#[test]
fn constant_orderings_are_dropped_when_unbounded() {
    let flavor = Flavor::SqlServer;
    let mut select = Select::from_table(Table::new("Customers", "c"));
    select.apply_ordering(OrderByExpr::asc(mapped(flavor, Expr::constant(1))));
    select.append_ordering(OrderByExpr::asc(mapped(flavor, Expr::parameter("p", Type::I32))));

    let mut params = ParameterList::new();
    let sql = Serializer::sql_server()
        .serialize(&select.freeze(), &mut params)
        .unwrap();
    assert_eq!(sql, "SELECT 1 FROM [Customers] AS [c]");
    assert!(params.is_empty());
}
