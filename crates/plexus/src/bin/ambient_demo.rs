//! # Ambient Demo
//!
//! The full engine without a window: both loops driven for a fixed frame
//! budget against the recording surface, with a boxed summary at the end.
//!
//! Run with: cargo run --package plexus --bin ambient_demo

use std::time::{Duration, Instant};

use plexus::{viewport_channel, FieldLoop, PlexusConfig, TypingLoop, Viewport};
use plexus_field::ParticleField;
use plexus_shared::{ManualFrameClock, RecordingTimer};
use plexus_surface::CommandSurface;
use plexus_typing::Typewriter;

/// Frames the demo simulates (~5 seconds at 60 FPS).
const DEMO_FRAMES: usize = 300;

/// Typewriter transitions the demo applies.
const DEMO_STEPS: u64 = 40;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = PlexusConfig::default();
    let start = Instant::now();

    // =========================================================================
    // FIELD LOOP - deterministic clock, recording surface
    // =========================================================================
    let surface = CommandSurface::new(1280.0, 720.0);
    let clock = ManualFrameClock::new(DEMO_FRAMES);
    let (_viewport_tx, viewport_rx) = viewport_channel(Viewport {
        width: 1280.0,
        height: 720.0,
    });

    let field_loop = FieldLoop::start(
        ParticleField::new(config.field.clone()),
        Some(surface),
        clock,
        viewport_rx,
        42,
    )
    .expect("recording surface is always available");
    let (field, surface) = field_loop.run().await;

    // =========================================================================
    // TYPING LOOP - instant timer, bounded step budget
    // =========================================================================
    let typewriter = Typewriter::new(config.roles.clone(), config.typing)
        .expect("default config has roles");
    let timer = RecordingTimer::new();
    let typing_loop = TypingLoop::new(typewriter, timer.clone());
    let display = typing_loop.display();
    let typewriter = typing_loop.run_for(DEMO_STEPS).await;

    let requested: Duration = timer.requested().iter().sum();
    let elapsed = start.elapsed();

    // =========================================================================
    // SUMMARY
    // =========================================================================
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                      AMBIENT DEMO SUMMARY                        ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();
    println!("┌─ FIELD ────────────────────────────────────────────────────────┐");
    println!("│ Ticks:              {}", field.stats().ticks);
    println!("│ Particles:          {}", field.particles().len());
    println!("│ Frames recorded:    {}", surface.stats().frames);
    println!("│ Links last frame:   {}", field.stats().links_last_frame);
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ TYPEWRITER ───────────────────────────────────────────────────┐");
    println!("│ Transitions:        {DEMO_STEPS}");
    println!("│ Active role:        {:?}", typewriter.role());
    println!("│ Display now:        {:?}", display.read().as_str());
    println!("│ Virtual time spent: {:.1}s", requested.as_secs_f64());
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();
    println!(
        "Simulated {} frames + {} transitions in {:.2}ms of real time",
        DEMO_FRAMES,
        DEMO_STEPS,
        elapsed.as_secs_f64() * 1000.0
    );
}
