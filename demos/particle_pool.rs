//! Particle Pool
//!
//! This demo shows a bounded spawn pool backing a burst of particle
//! effects: eager allocation, the exhaustion sentinel, expansion, and the
//! shrink-on-release path back toward capacity.
//!
//! Key concepts:
//! - Eager fill to capacity at construction
//! - First-inactive scan in insertion order
//! - None as the "pool exhausted" sentinel, never an error
//! - Above-capacity items are destroyed on release
//!
//! Run with: cargo run --example particle_pool

use perennial::pool::{SpawnHandle, SpawnPool};

fn main() {
    println!("=== Particle Pool ===\n");

    let sparkle = SpawnHandle::new("sparkle");

    println!("-- bounded pool (capacity 3, no expansion) --");
    let mut bounded = SpawnPool::with_source(sparkle.clone(), 3, false);
    println!("constructed with size {}", bounded.size());

    let mut burst = Vec::new();
    for i in 0..4 {
        match bounded.get_pooled_object() {
            Some(particle) => {
                particle.set_active(true);
                println!("spawn {i}: got '{}' (size {})", particle.label(), bounded.size());
                burst.push(particle);
            }
            None => println!("spawn {i}: exhausted, skipping the effect this frame"),
        }
    }

    for particle in &burst {
        bounded.release_item(particle);
    }
    println!("released all, size is now {}\n", bounded.size());

    println!("-- expanding pool (capacity 2, expansion allowed) --");
    let mut expanding = SpawnPool::with_source(sparkle, 2, true);

    let mut storm = Vec::new();
    for _ in 0..5 {
        let particle = expanding.get_pooled_object().expect("expanding pool always grows");
        particle.set_active(true);
        storm.push(particle);
    }
    println!("5 particles active, size grew to {}", expanding.size());

    for particle in &storm {
        expanding.release_item(particle);
    }
    println!("released all, size shrank to {}", expanding.size());

    expanding.clear();
    println!("cleared, size {}", expanding.size());

    println!("\n=== Demo Complete ===");
}
