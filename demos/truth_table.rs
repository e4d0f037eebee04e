//! Print truth tables for a handful of expressions
//!
//! Run with: cargo run --example truth_table

use proptable::{Expression, TableConfig};

fn main() -> Result<(), proptable::Error> {
    let inputs = [
        "a ^ b",
        "~a v b",
        "a -> b",
        "not (p and q) <-> (!p || !q)",
        "(a v b) ^ ~(c -> a)",
    ];

    let config = TableConfig::default();
    for input in inputs {
        let expr = Expression::parse(input)?;
        let table = expr.build_truth_table_with(&config)?;

        println!("{}  =>  {}", input, expr);
        println!("{}", table);
        if table.is_tautology() {
            println!("(tautology)");
        }
        println!();
    }

    Ok(())
}
