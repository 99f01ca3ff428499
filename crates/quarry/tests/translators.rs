mod support;

use pretty_assertions::assert_eq;
use quarry::{
    query::{self, Method},
    stmt::{Expr, Type},
    Compiler, Flavor, Member, MethodTranslator, Result, TranslationContext,
};
use support::*;

fn string(name: &str) -> Method {
    Method::new("String", name)
}

fn projected(flavor: Flavor, body: query::Expr) -> String {
    sql(flavor, customers().project(lambda(body)))
}

// ----- strings -----

#[test]
fn starts_with_becomes_like() {
    let sql = sql(
        Flavor::Postgresql,
        customers()
            .filter(lambda(c("Name").call(string("StartsWith"), vec![query::Expr::constant("Ad")])))
            .project(lambda(c("Id"))),
    );

    assert_eq!(sql, r#"SELECT "c"."Id" FROM "Customers" AS "c" WHERE "c"."Name" LIKE 'Ad%'"#);
}

#[test]
fn like_wildcards_in_the_argument_are_escaped() {
    let sql = sql(
        Flavor::Postgresql,
        customers()
            .filter(lambda(c("Name").call(string("Contains"), vec![query::Expr::constant("50%")])))
            .project(lambda(c("Id"))),
    );

    assert!(sql.ends_with(r#"WHERE "c"."Name" LIKE '%50\%%' ESCAPE '\'"#), "{sql}");
}

#[test]
fn non_constant_pattern_is_unsupported() {
    let query = customers()
        .filter(lambda(c("Name").call(string("EndsWith"), vec![c("City")])))
        .project(lambda(c("Id")));

    let err = compiler(Flavor::Postgresql).compile(&query).unwrap_err();
    assert!(err.is_translation_unsupported(), "{err}");
}

#[test]
fn length_uses_flavor_function() {
    assert_eq!(
        projected(Flavor::SqlServer, c("Name").member("Length")),
        "SELECT LEN([c].[Name]) FROM [Customers] AS [c]"
    );
    assert_eq!(
        projected(Flavor::Sqlite, c("Name").member("Length")),
        r#"SELECT LENGTH("c"."Name") FROM "Customers" AS "c""#
    );
}

#[test]
fn case_functions() {
    assert_eq!(
        projected(Flavor::Postgresql, c("Name").call(string("ToUpper"), vec![])),
        r#"SELECT UPPER("c"."Name") FROM "Customers" AS "c""#
    );
    assert_eq!(
        projected(Flavor::Postgresql, c("Name").call(string("Trim"), vec![])),
        r#"SELECT TRIM("c"."Name") FROM "Customers" AS "c""#
    );
}

#[test]
fn concatenation_coalesces_nullable_operands() {
    let sql = projected(
        Flavor::Postgresql,
        query::Expr::binary(query::BinaryOp::Add, c("Name"), c("City")),
    );

    assert_eq!(
        sql,
        r#"SELECT "c"."Name" || COALESCE("c"."City", '') FROM "Customers" AS "c""#
    );
}

#[test]
fn concatenation_operator_on_sql_server() {
    let sql = projected(
        Flavor::SqlServer,
        query::Expr::call_static(string("Concat"), vec![c("Name"), query::Expr::constant("!")]),
    );

    assert_eq!(sql, "SELECT [c].[Name] + N'!' FROM [Customers] AS [c]");
}

#[test]
fn is_null_or_empty() {
    let sql = sql(
        Flavor::Postgresql,
        customers()
            .filter(lambda(query::Expr::call_static(string("IsNullOrEmpty"), vec![c("City")])))
            .project(lambda(c("Id"))),
    );

    assert_eq!(
        sql,
        r#"SELECT "c"."Id" FROM "Customers" AS "c" WHERE "c"."City" IS NULL OR ("c"."City" = '')"#
    );
}

// ----- nullable members -----

#[test]
fn get_value_or_default_becomes_coalesce() {
    assert_eq!(
        projected(
            Flavor::Postgresql,
            c("Age").call(Method::new("Nullable", "GetValueOrDefault"), vec![]),
        ),
        r#"SELECT COALESCE("c"."Age", 0) FROM "Customers" AS "c""#
    );
    assert_eq!(
        projected(
            Flavor::Postgresql,
            c("Age").call(Method::new("Nullable", "GetValueOrDefault"), vec![query::Expr::constant(18)]),
        ),
        r#"SELECT COALESCE("c"."Age", 18) FROM "Customers" AS "c""#
    );
}

#[test]
fn has_value_is_not_null() {
    assert_eq!(
        projected(Flavor::Postgresql, c("Age").member("HasValue")),
        r#"SELECT "c"."Age" IS NOT NULL FROM "Customers" AS "c""#
    );
}

#[test]
fn value_is_the_operand_itself() {
    assert_eq!(
        projected(Flavor::Postgresql, c("Age").member("Value")),
        r#"SELECT "c"."Age" FROM "Customers" AS "c""#
    );
}

// ----- math -----

#[test]
fn math_functions() {
    let math = |name: &str| Method::new("Math", name);

    assert_eq!(
        projected(Flavor::Postgresql, query::Expr::call_static(math("Abs"), vec![c("Id")])),
        r#"SELECT ABS("c"."Id") FROM "Customers" AS "c""#
    );
    assert_eq!(
        projected(Flavor::SqlServer, query::Expr::call_static(math("Round"), vec![c("Score")])),
        "SELECT ROUND([c].[Score], 0) FROM [Customers] AS [c]"
    );
    assert_eq!(
        projected(Flavor::Sqlite, query::Expr::call_static(math("Round"), vec![c("Score")])),
        r#"SELECT ROUND("c"."Score") FROM "Customers" AS "c""#
    );
}

#[test]
fn math_over_strings_is_unsupported() {
    let query = customers().project(lambda(query::Expr::call_static(
        Method::new("Math", "Abs"),
        vec![c("Name")],
    )));

    let err = compiler(Flavor::Sqlite).compile(&query).unwrap_err();
    assert!(err.is_translation_unsupported());
    assert!(err.to_string().contains("Math.Abs"), "{err}");
}

// ----- contains -----

#[test]
fn list_parameter_contains_expands_at_compile_time() {
    let ids = query::Expr::param("ids", Type::list(Type::I32));
    let query = customers()
        .filter(lambda(query::Expr::call_static(
            Method::new("Enumerable", "Contains"),
            vec![ids, c("Id")],
        )))
        .project(lambda(c("Name")));

    let values = query::ParameterValues::new().with("ids", quarry::stmt::Value::list([3, 5]));
    let compiled = compiler(Flavor::SqlServer).compile_with(&query, &values).unwrap();

    assert_eq!(
        compiled.sql,
        "SELECT [c].[Name] FROM [Customers] AS [c] WHERE [c].[Id] IN (3, 5)"
    );
    assert!(!compiled.cacheable);
    assert!(compiled.parameters.is_empty());
}

#[test]
fn instance_contains_on_a_list_constant() {
    let names = query::Expr::Constant {
        value: quarry::stmt::Value::list(["Ada", "Grace"]),
        ty: Type::list(Type::String),
    };
    let sql = sql(
        Flavor::Postgresql,
        customers()
            .filter(lambda(names.call(Method::new("List", "Contains"), vec![c("Name")])))
            .project(lambda(c("Id"))),
    );

    assert_eq!(
        sql,
        r#"SELECT "c"."Id" FROM "Customers" AS "c" WHERE "c"."Name" IN ('Ada', 'Grace')"#
    );
}

// ----- plugins -----

/// `String.Soundex(s)` as `SOUNDEX(s)`.
struct Soundex;

impl MethodTranslator for Soundex {
    fn try_translate(
        &self,
        cx: &TranslationContext<'_>,
        receiver: Option<&Expr>,
        member: Member<'_>,
        args: &[Expr],
    ) -> Result<Option<Expr>> {
        match (receiver, args) {
            (None, [arg]) if member.is_method("String", "Soundex") => {
                Ok(Some(cx.factory().func("SOUNDEX", vec![arg.clone()], Type::String)?))
            }
            _ => Ok(None),
        }
    }
}

/// Claims `ToUpper` ahead of the built-in.
struct UpperInvariant;

impl MethodTranslator for UpperInvariant {
    fn try_translate(
        &self,
        cx: &TranslationContext<'_>,
        receiver: Option<&Expr>,
        member: Member<'_>,
        _args: &[Expr],
    ) -> Result<Option<Expr>> {
        match receiver {
            Some(receiver) if member.is_method("String", "ToUpper") => Ok(Some(cx.factory().func(
                "UPPER_INVARIANT",
                vec![receiver.clone()],
                Type::String,
            )?)),
            _ => Ok(None),
        }
    }
}

#[test]
fn plugin_translator_extends_the_chain() {
    let compiler = Compiler::builder()
        .flavor(Flavor::SqlServer)
        .translator(Soundex)
        .build(schema())
        .unwrap();

    let query = customers().project(lambda(query::Expr::call_static(string("Soundex"), vec![c("Name")])));
    let compiled = compiler.compile(&query).unwrap();

    assert_eq!(compiled.sql, "SELECT SOUNDEX([c].[Name]) FROM [Customers] AS [c]");
}

#[test]
fn plugin_translators_run_before_builtins() {
    let compiler = Compiler::builder()
        .flavor(Flavor::Postgresql)
        .translator(UpperInvariant)
        .build(schema())
        .unwrap();

    let query = customers().project(lambda(c("Name").call(string("ToUpper"), vec![])));
    let compiled = compiler.compile(&query).unwrap();

    assert_eq!(
        compiled.sql,
        r#"SELECT UPPER_INVARIANT("c"."Name") FROM "Customers" AS "c""#
    );
}
