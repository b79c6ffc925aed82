//! End-to-end rendering of WHERE clauses and their bind values.

mod common;
use common::*;

use chrono::NaiveDate;
use oxide_where::{BooleanOperation, SqlValue, WhereBuilder};

fn text(s: &str) -> SqlValue {
    SqlValue::Text(String::from(s))
}

// ===================================================================
// Clause shape
// ===================================================================

#[test]
fn empty_clause_is_empty_string() {
    let w = WhereBuilder::new();
    assert_eq!(w.where_clause(), "");
    assert_eq!(
        format!("SELECT * FROM t{} ORDER BY id", w.where_clause()),
        "SELECT * FROM t ORDER BY id"
    );
}

#[test]
fn clause_splices_after_table_name() {
    let mut w = WhereBuilder::new();
    w.eq("id", 5);
    assert_eq!(
        format!("SELECT c FROM t{} ORDER BY x", w.where_clause()),
        "SELECT c FROM t WHERE id = ? ORDER BY x"
    );
    assert_eq!(w.values(), vec![SqlValue::Int(5)]);
}

#[test]
fn only_noop_operations_render_nothing() {
    let mut w = WhereBuilder::new();
    w.in_list("status", Vec::<&str>::new())
        .between("age", None::<i32>, None::<i32>)
        .add(BooleanOperation::In {
            column: String::from("kind"),
            values: None,
            negated: true,
        });
    assert_eq!(w.where_clause(), "");
    assert!(w.values().is_empty());
}

// ===================================================================
// Placeholder / value alignment
// ===================================================================

#[test]
fn every_operation_kind_stays_aligned() {
    let mut w = WhereBuilder::new();
    w.eq("a", 1)
        .not_eq("b", "x")
        .eq("c", None::<i32>)
        .not_eq("d", None::<i32>)
        .lt("e", 2.5)
        .gt("f", None::<i64>)
        .between("g", 1, 9)
        .between("h", 1, None::<i32>)
        .between("i", None::<i32>, 9)
        .between("j", None::<i32>, None::<i32>)
        .in_list("k", ["p", "q", "r"])
        .not_in_list("l", vec![4, 5])
        .in_list("m", Vec::<i32>::new())
        .like("n", "needle");

    assert_aligned(&w);
    assert_eq!(
        w.where_expression(),
        "a = ? AND b <> ? AND c IS NULL AND d IS NOT NULL AND e < ? AND f > ? \
         AND g BETWEEN ? AND ? AND h >= ? AND i <= ? AND k IN (?, ?, ?) \
         AND l NOT IN (?, ?) AND n LIKE ?"
    );
    assert_eq!(
        w.values(),
        vec![
            SqlValue::Int(1),
            text("x"),
            SqlValue::Float(2.5),
            SqlValue::Null,
            SqlValue::Int(1),
            SqlValue::Int(9),
            SqlValue::Int(1),
            SqlValue::Int(9),
            text("p"),
            text("q"),
            text("r"),
            SqlValue::Int(4),
            SqlValue::Int(5),
            text("%needle%"),
        ]
    );
}

#[test]
fn alignment_holds_after_each_append() {
    let ops = vec![
        BooleanOperation::in_list("a", [1, 2, 3]),
        BooleanOperation::eq("b", SqlValue::Null),
        BooleanOperation::between("c", 0, 10),
        BooleanOperation::not_in_list("d", Vec::<i32>::new()),
        BooleanOperation::like("e", "z"),
        BooleanOperation::lt("f", 3),
    ];

    let mut w = WhereBuilder::new();
    for op in ops {
        w.add(op);
        assert_aligned(&w);
    }
    assert_eq!(w.len(), 5);
}

/// One operation of every rendering shape, including the ones that render
/// nothing.
fn operation_pool() -> Vec<BooleanOperation> {
    vec![
        BooleanOperation::eq("a", 1),
        BooleanOperation::eq("a", SqlValue::Null),
        BooleanOperation::not_eq("b", "x"),
        BooleanOperation::not_eq("b", SqlValue::Null),
        BooleanOperation::lt("c", 2.5),
        BooleanOperation::gt("d", SqlValue::Null),
        BooleanOperation::between("e", 1, 9),
        BooleanOperation::between("e", 1, SqlValue::Null),
        BooleanOperation::between("e", SqlValue::Null, 9),
        BooleanOperation::between("e", SqlValue::Null, SqlValue::Null),
        BooleanOperation::in_list("f", ["p", "q", "r"]),
        BooleanOperation::not_in_list("f", [4]),
        BooleanOperation::in_list("f", Vec::<i32>::new()),
        BooleanOperation::In {
            column: String::from("f"),
            values: None,
            negated: true,
        },
        BooleanOperation::like("g", "?"),
    ]
}

#[test]
fn every_sequence_up_to_three_stays_aligned() {
    let pool = operation_pool();

    // Each operation rendered on its own.
    let alone: Vec<WhereBuilder> = pool
        .iter()
        .map(|op| WhereBuilder::from_operations([op.clone()]))
        .collect();

    let mut sequences: Vec<Vec<usize>> = vec![vec![]];
    let mut frontier = sequences.clone();
    for _ in 0..3 {
        frontier = frontier
            .iter()
            .flat_map(|seq| {
                (0..pool.len()).map(move |i| {
                    let mut next = seq.clone();
                    next.push(i);
                    next
                })
            })
            .collect();
        sequences.extend(frontier.iter().cloned());
    }
    assert_eq!(sequences.len(), 1 + 15 + 15 * 15 + 15 * 15 * 15);

    for seq in &sequences {
        let w = WhereBuilder::from_operations(seq.iter().map(|&i| pool[i].clone()));
        assert_aligned(&w);

        let expected_sql: Vec<String> = seq
            .iter()
            .map(|&i| alone[i].where_expression())
            .filter(|sql| !sql.is_empty())
            .collect();
        let expected_values: Vec<SqlValue> =
            seq.iter().flat_map(|&i| alone[i].values()).collect();

        assert_eq!(w.where_expression(), expected_sql.join(" AND "), "{seq:?}");
        assert_eq!(w.values(), expected_values, "{seq:?}");
        assert_eq!(w.where_clause().is_empty(), expected_sql.is_empty());
    }
}

// ===================================================================
// Seeding and export
// ===================================================================

#[test]
fn seeded_builder_keeps_appending() {
    let mut w = WhereBuilder::from_operations(vec![BooleanOperation::eq("a", 1)]);
    w.gt("b", 2);
    assert_eq!(w.where_clause(), " WHERE a = ? AND b > ?");
    assert_eq!(w.values(), vec![SqlValue::Int(1), SqlValue::Int(2)]);
}

#[test]
fn export_normalizes_timestamps_without_touching_history() {
    let ts = NaiveDate::from_ymd_opt(2016, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();

    let mut w = WhereBuilder::new();
    w.eq("created", ts).between("updated", date, ts);

    for _ in 0..3 {
        assert_eq!(
            w.values(),
            vec![
                SqlValue::Date(ts.date()),
                SqlValue::Date(date),
                SqlValue::Date(ts.date()),
            ]
        );
    }
    assert_eq!(w.predicates()[0].params(), &[SqlValue::Timestamp(ts)]);
    assert_eq!(
        w.predicates()[1].params(),
        &[SqlValue::Date(date), SqlValue::Timestamp(ts)]
    );
}
