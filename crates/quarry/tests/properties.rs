mod support;

use proptest::prelude::*;
use quarry::{
    query::{self, QueryExpr},
    stmt::{Expr, Select, TableExpr},
    Flavor,
};
use std::collections::HashSet;
use support::*;

#[derive(Debug, Clone)]
enum Op {
    FilterActive,
    FilterAge(i32),
    FilterSameCity,
    Project,
    OrderByName,
    ThenById,
    Distinct,
    Take(i32),
    Skip(i32),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::FilterActive),
        (0..100).prop_map(Op::FilterAge),
        Just(Op::FilterSameCity),
        Just(Op::Project),
        Just(Op::OrderByName),
        Just(Op::ThenById),
        Just(Op::Distinct),
        (0..20).prop_map(Op::Take),
        (0..20).prop_map(Op::Skip),
    ]
}

/// Every operator keeps the members later operators refer to. `ThenById`
/// is skipped while nothing is ordered upstream.
fn build(ops: &[Op]) -> QueryExpr {
    let mut ordered = false;
    ops.iter().fold(customers(), |query, op| match op {
        Op::FilterActive => query.filter(lambda(c("IsActive"))),
        Op::FilterAge(age) => query.filter(lambda(c("Age").gt(*age))),
        Op::FilterSameCity => query.filter(lambda(c("City").eq(c("Region")))),
        Op::Project => query.project(lambda(query::Expr::new_object([
            ("Id", c("Id")),
            ("Name", c("Name")),
            ("City", c("City")),
            ("Region", c("Region")),
            ("Age", c("Age")),
            ("IsActive", c("IsActive")),
        ]))),
        Op::OrderByName => {
            ordered = true;
            query.order_by(lambda(c("Name")))
        }
        Op::ThenById if ordered => query.then_by(lambda(c("Id"))),
        Op::ThenById => query,
        Op::Distinct => {
            ordered = false;
            query.distinct()
        }
        Op::Take(count) => query.take(*count),
        Op::Skip(count) => query.skip(*count),
    })
}

/// Every table and derived-table alias in the tree, outermost last.
fn aliases(select: &Select, out: &mut Vec<String>) {
    for table in &select.tables {
        table_aliases(table, out);
    }

    for projection in &select.projection {
        expr_aliases(&projection.expr, out);
    }

    if let Some(predicate) = &select.predicate {
        expr_aliases(predicate, out);
    }
}

fn table_aliases(table: &TableExpr, out: &mut Vec<String>) {
    match table {
        TableExpr::Table(table) => out.push(table.alias.clone()),
        TableExpr::Join(join) => table_aliases(&join.table, out),
        TableExpr::Select(select) => {
            aliases(select, out);
            out.push(select.alias.clone().unwrap_or_default());
        }
    }
}

fn expr_aliases(expr: &Expr, out: &mut Vec<String>) {
    if let Expr::Exists(exists) = expr {
        aliases(&exists.subquery, out);
    }
}

proptest! {
    #[test]
    fn aliases_are_unique_ignoring_case(ops in prop::collection::vec(arb_op(), 0..8)) {
        let compiler = compiler(Flavor::SqlServer);
        let shaped = compiler.lower(&build(&ops)).unwrap();

        let mut all = vec![];
        aliases(&shaped.select, &mut all);

        let mut seen = HashSet::new();
        for alias in &all {
            prop_assert!(!alias.is_empty(), "empty alias in {:?}", all);
            prop_assert!(seen.insert(alias.to_lowercase()), "duplicate alias `{}` in {:?}", alias, all);
        }
    }

    #[test]
    fn every_shaper_leaf_reads_one_column(ops in prop::collection::vec(arb_op(), 0..8)) {
        let compiled = compile(Flavor::SqlServer, build(&ops));
        let shape = &compiled.shape;

        let leaves = shape.shaper.leaves();
        let mut slots = HashSet::new();
        for leaf in &leaves {
            let slot = shape.slot(&leaf.member);
            prop_assert!(slot.is_some(), "leaf `{}` has no slot", leaf.member);
            prop_assert!(slots.insert(slot), "slot shared by two leaves");
        }

        prop_assert_eq!(shape.members().count(), leaves.len());
    }

    #[test]
    fn compilation_is_deterministic(ops in prop::collection::vec(arb_op(), 0..8)) {
        let compiler = compiler(Flavor::Postgresql);
        let query = build(&ops);

        let first = compiler.compile(&query).unwrap();
        let second = compiler.compile(&query).unwrap();
        prop_assert_eq!(first, second);
    }
}
