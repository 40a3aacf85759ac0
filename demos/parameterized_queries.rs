//! SQL injection versus parameterized queries demonstration.
//!
//! This example shows:
//! 1. Benign input behaving the same through both query styles
//! 2. An injection payload dumping the table through string interpolation
//! 3. The same payload matching nothing through parameter binding
//!
//! Run with: `cargo run --example parameterized_queries`

use secure_patterns::{QueryError, UserDirectory};

fn main() -> Result<(), QueryError> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== Parameterized Query Example ===\n");
    let directory = UserDirectory::open_demo()?;
    println!("In-memory database created with {} users.", directory.count_users()?);

    println!("\n--- Scenario 1: Normal input (id = 3) ---");
    println!("[SECURE]   {:?}", directory.query_safe("3")?);
    println!("[INSECURE] {:?}", directory.query_unsafe("3")?);

    let payload = "2 OR 1=1 --";
    println!("\n--- Scenario 2: Injection payload ({:?}) ---", payload);

    let safe = directory.query_safe(payload)?;
    println!("[SECURE]   {} rows: {:?}", safe.len(), safe);

    match directory.query_unsafe(payload) {
        Ok(rows) => println!("[INSECURE] {} rows (VULNERABLE): {:?}", rows.len(), rows),
        Err(e) => println!("[INSECURE] query failed: {}", e),
    }

    directory.close()?;

    println!("\n=== Key Takeaways ===");
    println!("1. Bound parameters are data; they can never change the statement");
    println!("2. Interpolated input can rewrite the WHERE clause and leak every row");

    Ok(())
}
