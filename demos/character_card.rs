//! Character Card Example
//!
//! Prints the built-in character and its JSON card form.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example character_card
//! ```

use wren::prelude::*;

fn main() -> anyhow::Result<()> {
    let character = wren();

    println!("Character: {}", character.name);
    if let Some(system) = &character.system {
        println!("Persona: {}", system);
    }

    println!("\nBio:");
    for line in &character.bio {
        println!("- {}", line);
    }

    println!("\nTopics: {}", character.topics.join(", "));
    println!("Adjectives: {}", character.adjectives.join(", "));

    println!("\nStyle (all):");
    for line in &character.style.all {
        println!("- {}", line);
    }

    // The same data as it would appear in a character card file
    println!("\nCard JSON:\n{}", serde_json::to_string_pretty(&character)?);

    Ok(())
}
