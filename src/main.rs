//! Flap Gates entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively this runs a headless autopilot session and logs what happens.
//!
//! Usage: flap-gates [seed] [config.json]

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flap_gates::persistence::FileStore;
    use flap_gates::sim::{GameEvent, RunState};
    use flap_gates::{Game, GameConfig, Settings};

    /// Frames to simulate (60 fps)
    const FRAMES: u32 = 60 * 120;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    flap_gates::platform::init_logging();
    log::info!("Flap Gates (native) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let config = match args.next() {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Bad config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let store = FileStore::new(std::env::temp_dir().join("flap_gates_best.json"));
    let mut game = match Game::new(seed, config, Settings::load(), store) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Bad config: {}", e);
            std::process::exit(1);
        }
    };

    let mut runs = 0;
    for frame in 0..FRAMES {
        if autopilot_wants_flap(&game.state) {
            game.flap();
        }
        for event in game.frame(f64::from(frame) * FRAME_MS) {
            match event {
                GameEvent::Scored { score } => log::debug!("Score {}", score),
                GameEvent::Collided(collision) => log::info!("Hit {:?}", collision),
                GameEvent::GameOver {
                    score,
                    best,
                    new_best,
                } => {
                    runs += 1;
                    println!(
                        "Run {}: score {} (best {}{})",
                        runs,
                        score,
                        best,
                        if new_best { ", new record" } else { "" }
                    );
                }
                _ => {}
            }
        }
        if game.state.run_state == RunState::Dead {
            game.restart();
        }
    }

    let snapshot = game.snapshot();
    println!(
        "Finished {} runs, current score {}, best {}",
        runs, snapshot.score, snapshot.best
    );
}

/// Flap when below the next gap's center and falling
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_flap(state: &flap_gates::sim::GameState) -> bool {
    use flap_gates::sim::RunState;

    match state.run_state {
        RunState::Ready => true,
        RunState::Playing => {
            let body = &state.body;
            let width = state.config.obstacle_width;
            let target = state
                .obstacles
                .iter()
                .find(|o| o.x + width >= body.left())
                .map(|o| o.gap_bottom() - body.radius - 12.0)
                .unwrap_or(state.config.world_height * 0.5);
            body.pos.y > target && body.vel_y > 0.0
        }
        RunState::Paused | RunState::Dead => false,
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
