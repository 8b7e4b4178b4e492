//! Validating JSON documents against recursive shapes.
//!
//! Run with `RUST_LOG=shapeguard=trace cargo run --example shape_validation`
//! to see where each rejected document stopped.

use serde_json::json;
use shapeguard::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), ValueError> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // A comment thread: every comment may carry replies of the same shape.
    let comment = recursive(|this| {
        object! {
            "author" => string(),
            "body" => string(),
            "score" => union![number(), null()],
            "replies" => array_of(this);
            optional ["replies"]
        }
    });

    let documents = [
        json!({
            "author": "ada",
            "body": "first",
            "score": 3,
            "replies": [{"author": "bob", "body": "re", "score": null}]
        }),
        json!({
            "author": "ada",
            "body": "first",
            "score": 3,
            "replies": [{"author": "bob", "body": 42, "score": null}]
        }),
        json!({"author": "eve", "body": "hi", "score": 1, "flagged": true}),
    ];

    for document in &documents {
        match validate_json(&comment, document) {
            Outcome::Ok(value) => println!("ok: {}", value.to_json()?),
            Outcome::Ng => println!("ng: {document}"),
        }
    }

    let parsed = Value::from_json_str(r#"["a", 1]"#)?;
    let pair = tuple![string(), number()];
    println!("pair {}: {}", parsed.kind(), pair.validate(&parsed).tag());

    Ok(())
}
