//! Build truth tables on worker threads
//!
//! Run with: cargo run --example concurrent_tables

use proptable::Expression;
use std::thread;

fn main() {
    let inputs = [
        "a ^ b",
        "a v b v c",
        "((a -> b) ^ (b -> c)) -> (a -> c)",
        "~(p ^ q)",
    ];

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            thread::spawn(move || -> Result<_, proptable::Error> {
                let table = Expression::parse(input)?.build_truth_table()?;
                Ok((input, table))
            })
        })
        .collect();

    for handle in handles {
        match handle.join().unwrap() {
            Ok((input, table)) => {
                println!(
                    "{}: {} rows, tautology = {}",
                    input,
                    table.num_rows(),
                    table.is_tautology()
                );
            }
            Err(e) => println!("error: {}", e),
        }
    }
}
