#![allow(dead_code)]

use oxide_where::WhereBuilder;

/// Counts `?` placeholders in rendered SQL.
pub fn placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

/// Asserts that the clause and its values line up.
pub fn assert_aligned(w: &WhereBuilder) {
    let clause = w.where_clause();
    assert_eq!(
        placeholders(&clause),
        w.values().len(),
        "placeholder/value mismatch in {clause:?}"
    );

    let per_predicate: usize = w.predicates().iter().map(|p| p.params().len()).sum();
    assert_eq!(per_predicate, w.values().len());
    for p in w.predicates() {
        assert_eq!(placeholders(p.sql()), p.params().len(), "in {:?}", p.sql());
    }
}
