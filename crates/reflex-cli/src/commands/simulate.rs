//! Simulate command — headless round with a scripted player

use super::ConfigArgs;
use anyhow::{Context, Result};
use reflex_core::GameConfig;
use reflex_game::{AutoPlayer, GameLoop, SeededRandom, Session, SessionSummary};
use reflex_runtime::GameClock;
use std::time::Duration;

pub struct SimulateArgs {
    pub config: ConfigArgs,
    pub accuracy: f64,
    pub reaction_ms: u64,
    pub format: String,
}

/// Round length plus one spare period
fn round_limit(config: &GameConfig) -> Duration {
    config
        .countdown_interval()
        .saturating_mul(config.countdown_secs.saturating_add(1))
}

/// Play one round in simulated time and return its summary
pub fn simulate(args: &SimulateArgs) -> Result<SessionSummary> {
    let config = args.config.resolve()?;
    let limit = round_limit(&config);
    let player_seed = config.seed.map(|s| s.wrapping_add(1));

    let session = Session::new(config).context("Failed to start session")?;
    let mut game = GameLoop::new(session);
    let mut player = AutoPlayer::new(
        Duration::from_millis(args.reaction_ms),
        args.accuracy,
        Box::new(SeededRandom::new(player_seed)),
    );

    let mut clock = GameClock::new();
    let frame = clock.fixed_timestep;
    while !game.session().is_over() {
        if clock.total_time > limit {
            anyhow::bail!("Round did not finish within {:?}", limit);
        }
        clock.advance(frame);
        while clock.should_fixed_update() {
            let outcomes = game.step(clock.fixed_timestep);
            player.observe(&outcomes);
            game.run_system(&mut player, clock.fixed_timestep);
            clock.consume_fixed_step();
        }
    }

    tracing::info!(simulated = ?clock.total_time, "simulation finished");
    Ok(game.session().summary())
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let summary = simulate(&args)?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => {
            println!("Final score: {}", summary.score);
            println!("Hits:        {}", summary.hits);
            println!("Misses:      {}", summary.misses);
            println!("Spawned:     {}", summary.spawns);
        }
    }
    Ok(())
}
