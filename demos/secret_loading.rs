//! Fail-fast secret loading demonstration.
//!
//! This example shows:
//! 1. Explicitly seeding the environment from a `.env` file at startup
//! 2. Loading a required secret and showing only a masked preview
//! 3. Failing fast when a required secret is missing
//!
//! Run with: `EXTERNAL_API_KEY=sk-demo-1234567890 cargo run --example secret_loading`

use secure_patterns::{get_secret, init_env, EnvInit, SecretError};

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== Secret Loading Example ===\n");

    match init_env() {
        Ok(EnvInit::Loaded(path)) => println!("Seeded environment from {}", path.display()),
        Ok(EnvInit::NoFile) => println!("No .env file found, using process environment"),
        Err(e) => {
            println!("Could not read .env file: {}", e);
            return;
        }
    }

    println!("\n--- Scenario 1: Required key present ---");
    match get_secret("EXTERNAL_API_KEY") {
        Ok(key) => {
            println!("✓ Loaded API key ({} characters)", key.char_len());
            println!("  Masked: {}", key.masked());
            println!("  Debug:  {:?}", key);
        }
        Err(e) => println!("✗ {}", e),
    }

    println!("\n--- Scenario 2: Required key missing ---");
    match get_secret("MISSING_DB_PASSWORD") {
        Ok(_) => println!("Unexpected success"),
        Err(e @ SecretError::Missing { .. }) => println!("✓ Failed fast (expected): {}", e),
        Err(e) => println!("✗ Unexpected error: {}", e),
    }

    println!("\n=== Key Takeaways ===");
    println!("1. Secrets never live in source code");
    println!("2. A missing secret stops startup instead of running with a default");
    println!("3. Secret<T> keeps values out of Debug/Display output");
}
