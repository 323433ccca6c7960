//! Runs every algorithm template once and prints what each one produces.
//!
//! Run with:
//!   cargo run --example templates_tour
//!   RUST_LOG=debug cargo run --example templates_tour -- path/to/exercises

use std::path::PathBuf;

use anyhow::Context;
use primer::control_flow::arithmetic::divide;
use primer::extrema::min_max::min_max;
use primer::file_io::{read_lines, write_lines};
use primer::numerical::factorial::{factorial, factorial_recursive};
use primer::numerical::fibonacci::{fib_recursive, fibonacci};
use primer::numerical::gcd::{gcd, gcd_recursive};
use primer::numerical::sieve::primes_up_to;
use primer::records::person::Person;
use primer::searching::{binary_search::binary_search, linear_search::linear_search, to_sentinel};
use primer::sorting::bubble_sort::bubble_sort;
use primer::{Catalog, PrimerConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = PrimerConfig::default();

    // ── 1. GCD ───────────────────────────────────────────────────────────
    let (a, b) = (48, 18);
    println!("GCD({a}, {b}) = {}", gcd(a, b));
    println!("GCD (recursive) = {}", gcd_recursive(a, b));

    // ── 2. Primes ────────────────────────────────────────────────────────
    let primes: Vec<u64> = (1..=20).filter(|&n| config.is_prime(n)).collect();
    println!("Prime numbers from 1 to 20: {primes:?}");
    println!("Sieve up to 20:             {:?}", primes_up_to(20));

    // ── 3. Searching ─────────────────────────────────────────────────────
    let unsorted = [3, 7, 2, 9, 1, 5];
    println!("Linear search for 9: index {}", to_sentinel(linear_search(&unsorted, &9)));
    let sorted = [1, 2, 3, 5, 7, 9, 11, 13];
    for target in [7, 4] {
        match binary_search(&sorted, &target) {
            Some(i) => println!("Found {target} at index {i}"),
            None => println!("{target} not found"),
        }
    }

    // ── 4. Fibonacci & factorial ─────────────────────────────────────────
    let n = 10;
    println!("First {n} Fibonacci: {:?}", fibonacci(n)?);
    println!("Fib({n}): {}", fib_recursive(n as u32));
    println!("5! = {}", factorial(5)?);
    println!("5! = {} (recursive)", factorial_recursive(5)?);

    // ── 5. Min/max & sorting ─────────────────────────────────────────────
    if let Some(mm) = min_max(&unsorted) {
        println!("Maximum: {}, Minimum: {}", mm.max, mm.min);
    }
    let mut numbers = [64, 34, 25, 12, 22, 11, 90];
    println!("Original: {numbers:?}");
    bubble_sort(&mut numbers);
    println!("Sorted:   {numbers:?}");

    // ── 6. Records, errors, files ────────────────────────────────────────
    let mut person = Person::new("Alice", 25);
    println!("{}", person.greet());
    println!("{}", person.birthday());

    for (x, y) in [(10.0, 2.0), (10.0, 0.0)] {
        match divide(x, y) {
            Ok(result) => println!("Result: {result}"),
            Err(err) => println!("Error: {err}"),
        }
    }
    println!("Program continues...");

    let dir = std::env::temp_dir().join("primer-templates-tour");
    std::fs::create_dir_all(&dir).context("creating scratch directory")?;
    let path = dir.join("output.txt");
    write_lines(&path, ["Hello, World!", "This is a test."])?;
    println!("File contents:");
    for line in read_lines(&path)? {
        println!("{line}");
    }

    // ── 7. Catalog (optional path argument) ──────────────────────────────
    if let Some(root) = std::env::args().nth(1).map(PathBuf::from) {
        let catalog = Catalog::scan(&root, &config.catalog)
            .with_context(|| format!("scanning {}", root.display()))?;
        for topic in catalog.topics() {
            println!("{topic}: levels {:?}", catalog.levels(topic));
        }
        let prefix = &config.catalog.level_prefix;
        for entry in catalog.incomplete() {
            let key = &entry.key;
            println!("incomplete: {}/{prefix}{}/{}", key.topic, key.level, key.slug);
        }
        for template in catalog.templates() {
            println!("template: {} {}", template.key.language, template.key.id);
        }
    }

    Ok(())
}
