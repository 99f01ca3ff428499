use super::*;
use crate::stmt::{Type, Value};
use pretty_assertions::assert_eq;

fn member(name: &str) -> ProjectionMember {
    ProjectionMember::from_path([name])
}

fn customers() -> Select {
    let mut select = Select::from_table(Table::new("Customers", "c"));
    select.replace_projection_mapping([
        (member("Id"), Expr::column("c", "Id", Type::I32, false)),
        (member("City"), Expr::column("c", "City", Type::String, true)),
    ]);
    select
}

fn derived(select: &Select) -> &Select {
    match &select.tables[..] {
        [TableExpr::Select(inner)] => inner,
        tables => panic!("expected one derived table; tables={tables:#?}"),
    }
}

#[test]
fn predicate_on_unbounded_select_is_anded_in_place() {
    let mut select = customers();
    let city = Expr::column("c", "City", Type::String, true);

    select.apply_predicate(Expr::eq(city.clone(), Value::from("London")));
    select.apply_predicate(Expr::ne(city.clone(), Value::from("Paris")));

    assert_eq!(
        select.predicate,
        Some(Expr::and(
            Expr::eq(city.clone(), Value::from("London")),
            Expr::ne(city, Value::from("Paris")),
        ))
    );
    assert!(matches!(select.tables[..], [TableExpr::Table(_)]));
}

#[test]
fn constant_true_predicate_is_skipped() {
    let mut select = customers();
    select.apply_predicate(Expr::constant(true));
    assert_eq!(select.predicate, None);
}

#[test]
fn predicate_after_limit_pushes_down() {
    let mut select = customers();
    select.apply_limit(Expr::constant(10));
    select.apply_predicate(Expr::eq(
        Expr::column("c", "City", Type::String, true),
        Value::from("London"),
    ));

    let inner = derived(&select);
    assert_eq!(inner.alias.as_deref(), Some("t"));
    assert_eq!(inner.limit, Some(Expr::constant(10)));
    assert_eq!(select.limit, None);

    // The outer filter reads the derived table's projection.
    assert_eq!(
        select.predicate,
        Some(Expr::eq(
            Expr::column("t", "City", Type::String, true),
            Value::from("London"),
        ))
    );
    assert_eq!(
        select.mapped(&member("Id")),
        Some(&Expr::column("t", "Id", Type::I32, false))
    );
}

#[test]
fn second_limit_pushes_down() {
    let mut select = customers();
    select.apply_limit(Expr::constant(10));
    select.apply_limit(Expr::constant(5));

    assert_eq!(select.limit, Some(Expr::constant(5)));
    assert_eq!(derived(&select).limit, Some(Expr::constant(10)));
}

#[test]
fn offset_after_offset_pushes_down() {
    let mut select = customers();
    select.apply_offset(Expr::constant(2));
    select.apply_offset(Expr::constant(3));

    assert_eq!(select.offset, Some(Expr::constant(3)));
    assert_eq!(derived(&select).offset, Some(Expr::constant(2)));
}

#[test]
fn limit_after_offset_stays_in_place() {
    let mut select = customers();
    select.apply_offset(Expr::constant(2));
    select.apply_limit(Expr::constant(3));

    assert_eq!(select.offset, Some(Expr::constant(2)));
    assert_eq!(select.limit, Some(Expr::constant(3)));
    assert!(matches!(select.tables[..], [TableExpr::Table(_)]));
}

#[test]
fn ordering_replaces_previous_ordering() {
    let mut select = customers();
    let id = Expr::column("c", "Id", Type::I32, false);
    let city = Expr::column("c", "City", Type::String, true);

    select.apply_ordering(OrderByExpr::asc(id));
    select.apply_ordering(OrderByExpr::desc(city.clone()));

    assert_eq!(select.orderings, vec![OrderByExpr::desc(city)]);
}

#[test]
fn append_ordering_skips_duplicate_keys() {
    let mut select = customers();
    let id = Expr::column("c", "Id", Type::I32, false);

    select.apply_ordering(OrderByExpr::asc(id.clone()));
    select.append_ordering(OrderByExpr::desc(id.clone()));

    assert_eq!(select.orderings, vec![OrderByExpr::asc(id)]);
}

#[test]
fn append_ordering_on_bounded_select_pushes_down() {
    let mut select = customers();
    let city = Expr::column("c", "City", Type::String, true);
    select.apply_ordering(OrderByExpr::asc(city.clone()));
    select.apply_limit(Expr::constant(5));
    select.append_ordering(OrderByExpr::asc(Expr::column("c", "Id", Type::I32, false)));

    let inner = derived(&select);
    assert_eq!(inner.orderings, vec![OrderByExpr::asc(city)]);
    assert!(inner.limit.is_some());
    assert!(select.limit.is_none());
    assert_eq!(
        select.orderings,
        vec![
            OrderByExpr::asc(Expr::column("t", "City", Type::String, true)),
            OrderByExpr::asc(Expr::column("t", "Id", Type::I32, false)),
        ]
    );
}

#[test]
fn append_ordering_after_distinct_pushes_down() {
    let mut select = customers();
    select.apply_distinct();
    select.append_ordering(OrderByExpr::asc(Expr::column("c", "City", Type::String, true)));

    assert!(derived(&select).distinct);
    assert!(!select.distinct);
    assert_eq!(
        select.orderings,
        vec![OrderByExpr::asc(Expr::column("t", "City", Type::String, true))]
    );
}

#[test]
fn ordering_after_distinct_pushes_down() {
    let mut select = customers();
    select.apply_distinct();
    select.apply_ordering(OrderByExpr::asc(Expr::column("c", "City", Type::String, true)));

    let inner = derived(&select);
    assert!(inner.distinct);
    assert!(!select.distinct);
    assert_eq!(
        select.orderings,
        vec![OrderByExpr::asc(Expr::column("t", "City", Type::String, true))]
    );
}

#[test]
fn pushdown_keeps_inner_orderings_only_when_bounded() {
    let id = Expr::column("c", "Id", Type::I32, false);

    let mut bounded = customers();
    bounded.apply_ordering(OrderByExpr::asc(id.clone()));
    bounded.apply_limit(Expr::constant(3));
    bounded.pushdown_into_subquery();

    assert_eq!(derived(&bounded).orderings, vec![OrderByExpr::asc(id.clone())]);
    assert_eq!(
        bounded.orderings,
        vec![OrderByExpr::asc(Expr::column("t", "Id", Type::I32, false))]
    );

    let mut unbounded = customers();
    unbounded.apply_ordering(OrderByExpr::asc(id));
    unbounded.pushdown_into_subquery();

    assert!(derived(&unbounded).orderings.is_empty());
    assert_eq!(
        unbounded.orderings,
        vec![OrderByExpr::asc(Expr::column("t", "Id", Type::I32, false))]
    );
}

#[test]
fn reverse_orderings_flips_direction() {
    let mut select = customers();
    let id = Expr::column("c", "Id", Type::I32, false);
    select.apply_ordering(OrderByExpr::asc(id.clone()));
    select.reverse_orderings();

    assert_eq!(select.orderings, vec![OrderByExpr::desc(id)]);
}

#[test]
fn distinct_clears_orderings() {
    let mut select = customers();
    select.apply_ordering(OrderByExpr::asc(Expr::column("c", "Id", Type::I32, false)));
    select.apply_distinct();

    assert!(select.distinct);
    assert!(select.orderings.is_empty());
}

#[test]
fn apply_projection_dedupes_equal_expressions() {
    let mut select = Select::from_table(Table::new("Customers", "c"));
    let id = Expr::column("c", "Id", Type::I32, false);
    select.replace_projection_mapping([
        (member("A"), id.clone()),
        (member("B"), id.clone()),
    ]);
    select.apply_projection();

    assert_eq!(select.projection.len(), 1);
    assert_eq!(select.mapping.index(&member("A")), Some(0));
    assert_eq!(select.mapping.index(&member("B")), Some(0));
}

#[test]
fn derived_projection_aliases_are_unique() {
    let mut select = Select::from_table(Table::new("Customers", "c"));
    select.alias = Some("t".to_string());

    select.add_to_projection(Expr::column("c", "Id", Type::I32, false), None);
    select.add_to_projection(Expr::column("o", "ID", Type::I32, false), None);
    select.add_to_projection(Expr::constant(1), None);

    let aliases: Vec<_> = select
        .projection
        .iter()
        .map(|p| p.alias.clone().unwrap_or_default())
        .collect();
    assert_eq!(aliases, ["Id", "ID0", "c"]);
}

#[test]
fn aggregate_over_distinct_pushes_down() {
    let mut select = customers();
    select.apply_distinct();
    select.prepare_for_aggregate();

    assert!(derived(&select).distinct);
    assert!(!select.distinct);
}

#[test]
fn into_subquery_applies_projection() {
    let subquery = customers().into_subquery();

    assert_eq!(subquery.alias.as_deref(), Some(""));
    assert!(subquery.mapping.is_applied());
    assert_eq!(subquery.projection.len(), 2);
}
