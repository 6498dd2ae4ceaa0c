//! Maze Chase entry point
//!
//! Headless native driver: runs the simulation at its fixed tick rate with an
//! optional autopilot steering the player, logs game events, and prints the
//! final frame snapshot as JSON.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use maze_chase::sim::GameEvent;
use maze_chase::{Key, Session, Settings};

fn main() {
    env_logger::init();
    log::info!("Maze Chase (headless) starting...");

    let settings = Settings::load();
    let seed = settings.resolve_seed();
    let settings = Settings {
        seed: Some(seed),
        ..settings
    };

    let mut session = match Session::new(&settings) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Maze layout is invalid: {}", e);
            std::process::exit(1);
        }
    };
    session.handle_key(Key::Start);

    // Separate stream so autopilot input doesn't disturb adversary picks
    let mut pilot = Pcg32::seed_from_u64(seed ^ 0x5eed);
    let keys = [Key::Up, Key::Down, Key::Left, Key::Right];
    let tick = settings.tick_interval();

    for _ in 0..settings.demo_ticks {
        if settings.autopilot && pilot.random_ratio(1, 4) {
            session.handle_key(keys[pilot.random_range(0..keys.len())]);
        }

        let update = session.advance(tick);
        for event in &update.events {
            match event {
                GameEvent::LifeLost { lives, by } => log::info!("Caught by {:?}, {} lives left", by, lives),
                GameEvent::GameOver { score } => log::info!("Game over, final score {}", score),
                GameEvent::MazeReloaded => log::info!("Maze cleared"),
                GameEvent::PickupConsumed { .. } => {}
            }
        }

        if session.engine().is_game_over() {
            if let Some(rank) = session.last_rank() {
                log::info!("New high score, rank {}", rank);
            }
            // Any key restarts
            session.handle_key(Key::Other(' '));
        }
    }

    let snapshot = session.snapshot();
    log::info!("{}", snapshot.hud_text());
    if let Some(best) = session.high_scores().top_score() {
        log::info!("Best score this session: {}", best);
    }

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}
