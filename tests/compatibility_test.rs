use pairsort::core::{Key, PairColumns, TieBreaker};
use pairsort::prelude::*;

// Simulate an external columnar table (like a record batch) with extra columns.
struct MockTable {
    priority: Vec<i32>,
    arrival: Vec<i32>,
    labels: Vec<&'static str>,
}

// Implement PairColumns for the external struct.
// This proves the trait is implementable by "outside crates".
impl PairColumns for MockTable {
    fn columns(&self) -> (&[Key], &[TieBreaker]) {
        (&self.priority, &self.arrival)
    }

    fn columns_mut(&mut self) -> (&mut [Key], &mut [TieBreaker]) {
        (&mut self.priority, &mut self.arrival)
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mut table = MockTable {
        priority: vec![2, 0, 2, 1],
        arrival: vec![7, 3, 4, 9],
        labels: vec!["a", "b", "c", "d"],
    };

    assert!(!table.is_pair_sorted());
    pair_sort_mut(&mut table).unwrap();

    assert!(table.is_pair_sorted());
    assert_eq!(table.priority, vec![0, 1, 2, 2]);
    assert_eq!(table.arrival, vec![3, 9, 4, 7]);
    // Columns outside the pair are not touched.
    assert_eq!(table.labels, vec!["a", "b", "c", "d"]);
}
