//! Simple Generation Example
//!
//! Sends one prompt through the inference gateway and prints the reply.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example simple_generation
//! ```
//!
//! # Requirements
//!
//! - `GATEWAY_URL` set in the environment or a local `.env` file
//! - `GATEWAY_API_KEY` if the gateway enforces bearer tokens

use wren::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up GATEWAY_* settings from a local .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Create a gateway configured from the environment
    let gateway = InferenceGateway::new();

    // Generate a response under the small profile defaults
    println!("Generating response...");
    let response = gateway
        .generate(
            "Explain what an inference gateway is in one sentence.",
            ModelProfile::Small,
            &GenerationOptions::default(),
        )
        .await?;

    println!("\nResponse: {}", response);

    Ok(())
}
