//! Game loop thread: drives the engine at the target cadence.
//!
//! Each iteration drains pending commands, measures the elapsed wall
//! time since the previous tick (clamped by the engine to avoid huge
//! steps after a stall), runs exactly one non-reentrant tick, and
//! publishes the snapshot for the embedder to poll.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use antibody_core::constants::TICK_RATE;
use antibody_core::state::GameSnapshot;
use antibody_sim::engine::{EngineConfig, GameEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the embedder to use.
pub fn spawn_game_loop(
    config: EngineConfig,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("antibody-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: EngineConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut engine = GameEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut last_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands to the engine's queue.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick with the measured elapsed time.
        let now = Instant::now();
        let dt = (now - last_tick_time).as_secs_f32();
        last_tick_time = now;
        let snapshot = engine.tick(dt);

        // 3. Publish for synchronous polling.
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        // 4. Sleep until the next tick.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}
