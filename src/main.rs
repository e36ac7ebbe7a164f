//! Tamagotchi main entry point
//!
//! Single-owner event loop: the loop owns the pet and its timers, and is
//! the only place where pet state changes.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  ConsoleRenderer   LogEventSink   CallbackObserver             │
//! │  (EventSink)       (EventSink)    (EventSink)                  │
//! │  SchedulerTimers   ConsoleInput   HostClock                    │
//! │  (TimerPort)       (stdin thread) (elapsed time)               │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              PetService (pure logic)                   │    │
//! │  │  FSM · PetContext · RequestKind                        │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Scheduler (delegate-driven) · Event queue (MPMC)              │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::time::Duration;

use anyhow::Result;
use log::{debug, info, warn};

use tamagotchi::adapters::console::{self, ConsoleRenderer, ConsoleText};
use tamagotchi::adapters::input::ConsoleInput;
use tamagotchi::adapters::log_sink::LogEventSink;
use tamagotchi::adapters::observers::{CallbackObserver, Observers};
use tamagotchi::adapters::time::HostClock;
use tamagotchi::adapters::timers::SchedulerTimers;
use tamagotchi::app::ports::{ScheduleFiredKind, SchedulerDelegate, TimerId};
use tamagotchi::app::service::PetService;
use tamagotchi::config::PetConfig;
use tamagotchi::events::{self, push_event, Event};

// ── Scheduler delegate ────────────────────────────────────────
//
// Bridges the scheduler (which knows nothing about the event system)
// to the event queue.

struct EventQueueDelegate;

impl SchedulerDelegate for EventQueueDelegate {
    fn on_timer_fired(&mut self, timer: TimerId, kind: ScheduleFiredKind) {
        debug!("Timer fired: '{}' ({:?})", timer.label(), kind);
        if !push_event(Event::Timer(timer)) {
            warn!("Event queue full, '{}' timer dropped", timer.label());
        }
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    info!("Tamagotchi v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = PetConfig::default();
    config.validate()?;
    debug!("Config: {}", serde_json::to_string(&config)?);

    // ── 3. Name prompt ────────────────────────────────────────
    let text = ConsoleText::for_language(config.language);
    let mut stdout = io::stdout();
    console::print_banner(&mut stdout, text)?;
    let name = console::read_name(&mut io::stdin().lock(), &config.default_name)?;

    // ── 4. Construct adapters ─────────────────────────────────
    let mut rng = config.rng();
    let mut timers = SchedulerTimers::new(&config, &mut rng);
    let mut sink = Observers::new()
        .with(ConsoleRenderer::with_text(io::stdout(), text))
        .with(LogEventSink::new())
        .with(CallbackObserver::new(
            |m| debug!("observer: request '{}'", m),
            |m| debug!("observer: status '{}'", m),
            |m| debug!("observer: death '{}'", m),
        ));
    let mut input = ConsoleInput::spawn()?;
    let mut delegate = EventQueueDelegate;
    let mut clock = HostClock::new();
    let tick = Duration::from_millis(u64::from(config.control_loop_interval_ms));

    // ── 5. Construct the pet ──────────────────────────────────
    let mut pet = PetService::new(name, config);
    pet.start(&mut timers, &mut sink);

    // ── 6. Event loop ─────────────────────────────────────────
    while !pet.is_terminal() {
        std::thread::sleep(tick);
        timers.tick(clock.lap_ms(), &mut delegate);

        events::drain_events(|event| match event {
            Event::Timer(timer) => pet.handle(timer.into(), &mut timers, &mut sink),
            Event::ConsoleLine(line) => {
                input.line_received();
                pet.answer(&line, &mut timers, &mut sink);
            }
        });

        if pet.waiting_for_answer() {
            input.request_line();
        }
    }

    // ── 7. Game over ──────────────────────────────────────────
    info!(
        "Game over after {}s: {:?}",
        clock.uptime_ms() / 1000,
        pet.state()
    );
    console::print_exit_hint(&mut stdout, text)?;
    input.request_line();
    loop {
        if let Event::ConsoleLine(_) = events::wait_event() {
            break;
        }
    }

    Ok(())
}
