//! Tables can be built and shared across threads

use proptable::{Expression, TruthTable};
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_builds_match_sequential() {
    let inputs = ["a ^ b", "~(a v b) -> c", "(p <-> q) ^ ~r", "a v b v c v d"];
    let sequential: Vec<Vec<String>> = inputs
        .iter()
        .map(|input| {
            Expression::parse(input)
                .unwrap()
                .build_truth_table()
                .unwrap()
                .render_lines()
        })
        .collect();

    let handles: Vec<_> = inputs
        .iter()
        .map(|&input| {
            thread::spawn(move || {
                Expression::parse(input)
                    .expect("Failed to parse")
                    .build_truth_table()
                    .expect("Failed to build")
                    .render_lines()
            })
        })
        .collect();

    let concurrent: Vec<Vec<String>> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread panicked"))
        .collect();

    assert_eq!(concurrent, sequential);
}

#[test]
fn test_shared_table_readers() {
    let table: Arc<TruthTable> = Arc::new(
        Expression::parse("(a -> b) ^ c")
            .unwrap()
            .build_truth_table()
            .unwrap(),
    );
    let expected = table.render_lines();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&table);
            thread::spawn(move || table.render_lines())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), expected);
    }
}
