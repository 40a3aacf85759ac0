//! Bounded score validation demonstration.
//!
//! This example shows:
//! 1. Text, integer, and float input coerced into a score in [0, 100]
//! 2. Truncation toward zero rather than rounding
//! 3. Range errors versus type errors
//! 4. Strict versus lenient numeric pattern handling
//!
//! Run with: `cargo run --example score_validation`

use secure_patterns::{NumericPattern, RawInput, ScoreValidator};

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== Score Validation Example ===\n");
    let validator = ScoreValidator::default_limits();

    println!("--- Inputs that should pass ---");
    let passing = [
        (RawInput::from("95"), "text input"),
        (RawInput::from(42), "integer input"),
        (RawInput::from(0), "minimum valid score"),
        (RawInput::from(100), "maximum valid score"),
        (RawInput::from(75.9), "float input, truncates to 75"),
    ];
    for (raw, description) in passing {
        match validator.validate(raw.clone()) {
            Ok(score) => println!("✓ {} ({}): score {}", description, raw, score),
            Err(e) => println!("✗ {} ({}): unexpected failure: {}", description, raw, e),
        }
    }

    println!("\n--- Inputs that should fail ---");
    let failing = [
        (RawInput::from("101"), "too high"),
        (RawInput::from("-10"), "too low"),
        (RawInput::from("75; DROP TABLE"), "injection attempt"),
        (RawInput::from("abc"), "non-numeric text"),
        (RawInput::Absent, "no value"),
    ];
    for (raw, description) in failing {
        match validator.validate(raw.clone()) {
            Ok(score) => println!(
                "✗ {} ({}): unexpectedly accepted as {}",
                description, raw, score
            ),
            Err(e) => println!("✓ {} ({}): rejected ({}) {}", description, raw, e.kind(), e),
        }
    }

    println!("\n--- Strict versus lenient pattern ---");
    let lenient = validator.with_pattern(NumericPattern::Lenient);
    for text in ["1e2", "+5", ".5"] {
        let strict_result = validator.validate(text).map(|s| s.value());
        let lenient_result = lenient.validate(text).map(|s| s.value());
        println!(
            "{:>4}: strict = {:?}, lenient = {:?}",
            text,
            strict_result.map_err(|e| e.kind()),
            lenient_result.map_err(|e| e.kind())
        );
    }

    println!("\n=== Key Takeaways ===");
    println!("1. Every input is either a bounded Score or a classified error");
    println!("2. Type errors mean malformed input; range errors mean out-of-policy values");
    println!("3. Injection text fails the numeric parse before it can reach a query");
}
