//! OpenAPI Specification Generator Binary
//!
//! Prints the World Gen OpenAPI specification as JSON to stdout.
//!
//! Usage:
//!   cargo run -p worldgen-api --bin generate-openapi --features openapi > openapi.json

use worldgen_api::ApiDoc;

fn main() {
    match ApiDoc::to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize OpenAPI spec: {}", e);
            std::process::exit(1);
        }
    }
}
