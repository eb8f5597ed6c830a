use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{init_logging, AiPlayer, FleetPlacer, Game, GameStatus, Side};
use serde::Serialize;

/// Outcome of one automated game, printed as JSON.
#[derive(Serialize)]
struct SimReport {
    status: GameStatus,
    winner: Option<Side>,
    shots: usize,
    human_sunk: usize,
    computer_sunk: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <placement-seed> <play-seed>", args[0]);
        std::process::exit(1);
    }
    let placement_seed: u64 = args[1].parse()?;
    let play_seed: u64 = args[2].parse()?;

    // both sides are automated; the first one stands in for the human
    let mut placement_rng = SmallRng::seed_from_u64(placement_seed);
    let mut game = Game::with_random_boards(
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        &FleetPlacer::default(),
        &mut placement_rng,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    let mut rng = SmallRng::seed_from_u64(play_seed);
    let status = game.run(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let report = SimReport {
        status,
        winner: match status {
            GameStatus::Finished { winner } => Some(winner),
            _ => None,
        },
        shots: game.shots_fired(),
        human_sunk: game.board(Side::Human).sunk_count(),
        computer_sunk: game.board(Side::Computer).sunk_count(),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
