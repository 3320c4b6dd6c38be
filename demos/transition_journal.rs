//! Transition Journal
//!
//! This demo drives a small HUD flow and then exports the machine's
//! journal as JSON, the timeline a diagnostics tool would replay.
//!
//! Run with: cargo run --example transition_journal

use perennial::core::{State, StateMachine};
use perennial::journal::Journal;

struct Screen {
    name: &'static str,
}

impl State<()> for Screen {
    fn name(&self) -> &str {
        self.name
    }
}

fn main() {
    println!("=== Transition Journal ===\n");

    let mut machine = StateMachine::new();
    machine.initialize(&mut (), || Box::new(Screen { name: "hud" }));
    machine.push_state(&mut (), Box::new(Screen { name: "instructions" }));
    machine.pop_state(&mut ());
    machine.change_state(&mut (), Box::new(Screen { name: "game_over" }));
    machine.end(&mut ());

    println!("machine {} is done: {}", machine.id(), machine.is_done());
    println!("states entered, in order: {:?}", machine.journal().path());
    if let Some(elapsed) = machine.journal().duration() {
        println!("journal spans {elapsed:?}");
    }

    let json = machine
        .journal()
        .to_json()
        .expect("journal serializes to JSON");
    println!("\nexported journal:\n{json}");

    let restored = Journal::from_json(&json).expect("journal imports back");
    println!(
        "\nre-imported {} records for machine {}",
        restored.len(),
        restored.machine()
    );

    println!("\n=== Demo Complete ===");
}
