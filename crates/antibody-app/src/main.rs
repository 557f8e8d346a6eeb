//! Headless demo.
//!
//! Briefly exercises the threaded runtime, then fast-forwards a full
//! game synchronously with auto-advancing waves and a few pre-placed
//! towers, reporting state transitions and the final outcome.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use antibody_core::commands::PlayerCommand;
use antibody_core::enums::TowerKind;
use antibody_sim::engine::{EngineConfig, GameEngine};

use antibody_app::game_loop::spawn_game_loop;
use antibody_app::state::GameLoopCommand;

const TOWER_LAYOUT: [(TowerKind, i32, i32); 4] = [
    (TowerKind::Mucus, 3, 0),
    (TowerKind::Cough, 5, 4),
    (TowerKind::Macrophage, 8, 4),
    (TowerKind::Mucus, 9, 4),
];

fn main() {
    // Real-time loop thread: place a tower, poll one snapshot, shut down.
    let slot = Arc::new(Mutex::new(None));
    let tx = spawn_game_loop(EngineConfig::default(), Arc::clone(&slot));
    let _ = tx.send(GameLoopCommand::Player(PlayerCommand::PlaceTower {
        kind: TowerKind::Mucus,
        x: 3,
        y: 0,
    }));
    std::thread::sleep(Duration::from_millis(100));
    if let Ok(snapshot) = slot.lock() {
        if let Some(snapshot) = snapshot.as_ref() {
            println!(
                "runtime loop: tick {} in {:?}, {} tower(s) placed",
                snapshot.time.tick,
                snapshot.state,
                snapshot.towers.len()
            );
        }
    }
    let _ = tx.send(GameLoopCommand::Shutdown);

    // Fast-forward run: drive the engine synchronously to a result.
    let config = EngineConfig {
        wave_cleared_auto_secs: Some(2.0),
        ..Default::default()
    };
    let mut engine = GameEngine::new(config);
    for &(kind, x, y) in &TOWER_LAYOUT {
        engine.queue_command(PlayerCommand::PlaceTower { kind, x, y });
    }

    let dt = 1.0 / 60.0;
    let mut last_state = engine.state_tag();
    let mut last_snapshot = None;

    for _ in 0..600_000 {
        let snapshot = engine.tick(dt);
        if snapshot.state != last_state {
            println!(
                "[{:8.2}s] {:?} -> {:?} (wave {}, lives {}, currency {})",
                snapshot.time.elapsed_secs,
                last_state,
                snapshot.state,
                snapshot.wave,
                snapshot.lives,
                snapshot.currency
            );
            last_state = snapshot.state;
        }
        let game_over = snapshot.game_over;
        last_snapshot = Some(snapshot);
        if game_over {
            break;
        }
    }

    if let Some(snapshot) = last_snapshot {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("failed to serialize final snapshot: {err}"),
        }
    }
}
