//! Compares greedy and exact selection on a small menu.
//!
//! Run with `cargo run --example compare_selectors [budget]`.
//! Set `RUST_LOG=u_knapsack=debug` to see solver events.

use tracing_subscriber::EnvFilter;
use u_knapsack::catalog::Catalog;
use u_knapsack::{Comparison, ExactSelector, Solution};

fn print_solution(title: &str, solution: &Solution) {
    println!("---------- {title} ----------");
    println!("Chosen items: {:?}", solution.chosen);
    println!("Total value:  {}", solution.total_value);
    println!("Total cost:   {}", solution.spent);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let budget: i64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 100,
    };

    let catalog = Catalog::builder()
        .with_item("pizza", 50, 300.0)
        .with_item("hamburger", 40, 250.0)
        .with_item("hot-dog", 30, 200.0)
        .with_item("pepsi", 10, 100.0)
        .with_item("cola", 15, 220.0)
        .with_item("potato", 25, 350.0)
        .build()?;

    println!("---------- Budget: {budget} ----------");
    for item in &catalog {
        println!("{}: cost={}, value={}", item.name(), item.cost(), item.value());
    }

    let cmp = Comparison::run(&catalog, budget, &ExactSelector::default())?;
    print_solution("Greedy", &cmp.greedy);
    print_solution("Dynamic programming", &cmp.exact);
    println!(
        "Greedy reaches {:.1}% of the optimum (gap {}).",
        cmp.quality() * 100.0,
        cmp.value_gap()
    );

    Ok(())
}
