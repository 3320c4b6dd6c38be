//! Pause Overlay
//!
//! This demo shows layered push semantics: a pause state is pushed over
//! gameplay without exiting it, then popped to resume exactly where the
//! game left off.
//!
//! Key concepts:
//! - handle_input before update, once per tick
//! - Push layers a state; the covered state stays alive but inactive
//! - States request transitions by returning Transition commands
//!
//! Run with: cargo run --example pause_overlay

use perennial::core::{State, StateMachine, Transition};

/// Shared context: the "world" plus this frame's input.
struct World {
    growth: u32,
    pause_pressed: bool,
    resume_pressed: bool,
}

struct Gameplay;

impl State<World> for Gameplay {
    fn name(&self) -> &str {
        "gameplay"
    }

    fn enter(&mut self, _ctx: &mut World) {
        println!("  [gameplay] entered");
    }

    fn handle_input(&mut self, ctx: &mut World) -> Transition<World> {
        if ctx.pause_pressed {
            return Transition::push(Paused);
        }
        Transition::None
    }

    fn update(&mut self, ctx: &mut World) -> Transition<World> {
        ctx.growth += 1;
        println!("  [gameplay] growing (growth = {})", ctx.growth);
        Transition::None
    }

    fn exit(&mut self, _ctx: &mut World) {
        println!("  [gameplay] exited");
    }
}

struct Paused;

impl State<World> for Paused {
    fn name(&self) -> &str {
        "paused"
    }

    fn enter(&mut self, _ctx: &mut World) {
        println!("  [paused] entered, gameplay is covered but alive");
    }

    fn handle_input(&mut self, ctx: &mut World) -> Transition<World> {
        if ctx.resume_pressed {
            return Transition::Pop;
        }
        Transition::None
    }

    fn update(&mut self, _ctx: &mut World) -> Transition<World> {
        println!("  [paused] waiting, nothing grows");
        Transition::None
    }

    fn exit(&mut self, _ctx: &mut World) {
        println!("  [paused] exited");
    }
}

fn main() {
    println!("=== Pause Overlay ===\n");

    let mut world = World {
        growth: 0,
        pause_pressed: false,
        resume_pressed: false,
    };
    let mut machine = StateMachine::new();
    machine.initialize(&mut world, || Box::new(Gameplay));

    for frame in 0..6 {
        world.pause_pressed = frame == 2;
        world.resume_pressed = frame == 4;

        println!(
            "frame {frame} (active: {}, depth: {})",
            machine.current_state().name(),
            machine.depth()
        );
        machine.handle_input(&mut world);
        machine.update(&mut world);
    }

    machine.end(&mut world);
    println!("\nmachine done: {}", machine.is_done());
    println!("journal path: {:?}", machine.journal().path());

    println!("\n=== Demo Complete ===");
}
