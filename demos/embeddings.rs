//! Embeddings Example
//!
//! Demonstrates the deterministic placeholder embedding. The vectors are
//! positional accumulations, not semantic representations; the point of the
//! demo is that equal text always yields equal vectors.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example embeddings
//! ```

use wren::prelude::*;

fn main() {
    let text = "Hello, world!";
    println!("Generating placeholder embedding for: '{}'", text);

    let embedding = placeholder_embedding(Some(text));
    println!("Embedding dimensions: {}", embedding.len());
    println!(
        "First 5 values: [{:.6}, {:.6}, {:.6}, {:.6}, {:.6}]",
        embedding[0], embedding[1], embedding[2], embedding[3], embedding[4]
    );

    // Same text, same vector
    let again = placeholder_embedding(Some(text));
    println!("Deterministic: {}", embedding == again);

    // Unusable input collapses to the zero vector
    let zeros = placeholder_embedding(None);
    println!(
        "Empty input is all zeros: {}",
        zeros.iter().all(|v| *v == 0.0) && zeros.len() == EMBEDDING_DIMENSIONS
    );
}
