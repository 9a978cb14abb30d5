// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for hexenv.
//!
//! This example demonstrates:
//! - Declaring a configuration tree read from environment variables
//! - Typed values, defaults, candidate names and required values
//! - Bundled and custom validators
//! - Reporting every error at once, or failing fast
//!
//! To run this example:
//! ```bash
//! # Set some environment variables
//! export APP_NAME="MyApplication"
//! export DATABASE_PORT="5432"
//! export ENABLE_DEBUG="true"
//! export ALLOWED_HOSTS="a.example, b.example"
//!
//! # Run the example
//! cargo run --example basic_usage
//! ```

use hexenv::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== hexenv: Basic Usage ===\n");

    // Example 1: Single values from the process environment
    println!("--- Example 1: Single Values ---");
    let name = config_value!("APP_NAME", "unnamed-app");
    println!("APP_NAME = {:?}", name);

    let port = config_value!(["DATABASE_PORT", "DB_PORT"], "num", 5432);
    println!("DATABASE_PORT = {:?}", port);

    let debug = config_value!("ENABLE_DEBUG", "bool", false);
    println!("ENABLE_DEBUG = {:?}", debug);

    // The builder form says the same thing with named methods
    let hosts = hexenv::config_value(ValueSpec::new("ALLOWED_HOSTS").csv());
    println!("ALLOWED_HOSTS = {:?}\n", hosts);

    // Example 2: A full tree against an in-memory environment
    println!("--- Example 2: Validating A Tree ---");
    let resolver = Resolver::from_source(
        MapEnv::new()
            .with("PORT", "8080")
            .with("LOG_LEVEL", "info")
            .with("DB_URL", "postgres://localhost:5432/app"),
    );

    let config = validate(config_tree!({
        port: config_value!(in resolver; "PORT", "num", 3000),
        log_level: config_value!(in resolver; "LOG_LEVEL", "info",
            validators::one_of(["debug", "info", "warn", "error"])),
        db: {
            url: config_value!(in resolver; ["DB_URL", "DATABASE_URL"], REQUIRED),
            pool_size: config_value!(in resolver; "DB_POOL_SIZE", "num", 10),
        },
        api_token: config_value!(in resolver; "API_TOKEN"),
    }))?;

    println!("port       = {:?}", config.get_f64("port"));
    println!("log_level  = {:?}", config.get_str("log_level"));
    println!("db.url     = {:?}", config.get_str("db.url"));
    println!("db.pool    = {:?}", config.get_f64("db.pool_size"));
    println!("api_token  = absent: {}\n", config.get("api_token").map_or(true, |v| v.is_absent()));

    // Example 3: Collecting every error
    println!("--- Example 3: Error Reports ---");
    let broken = Resolver::from_source(
        MapEnv::new()
            .with("PORT", "eighty")
            .with("SECRET", "short"),
    );

    let at_least_1024 = validator_fn(|value: Option<&ConfigValue>| {
        match value.and_then(|v| v.as_f64()) {
            Some(n) if n < 1024.0 => Some("Port must be at least 1024".to_string()),
            _ => None,
        }
    });

    let result = report(config_tree!({
        port: config_value!(in broken; "PORT", "num", 3000, at_least_1024),
        secret: config_value!(in broken; "SECRET", REQUIRED,
            vec![validators::min_len(16), validators::max_len(64)]),
        host: config_value!(in broken; "HOST", REQUIRED),
    }));

    for error in result.errors() {
        println!("  * {}", error);
    }

    // Example 4: Failing fast with the same tree
    println!("\n--- Example 4: Fail Fast ---");
    match result.into_result() {
        Ok(_) => println!("unexpectedly valid"),
        Err(e) => println!("{}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
