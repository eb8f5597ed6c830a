#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    init_logging, ui, AiPlayer, CliPlayer, FleetPlacer, Game, GameStatus, OriginSampling, Side,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Sea battle on a 6×6 board against the computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Show the computer's ships.
    #[arg(long)]
    reveal: bool,
    /// Range random ship bows are drawn from during placement.
    #[arg(long, value_enum, default_value_t = OriginSampling::Oversized)]
    sampling: OriginSampling,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let placer = FleetPlacer::new(cli.sampling);
    let mut game = Game::with_random_boards(
        Box::new(CliPlayer::stdio()),
        Box::new(AiPlayer::new()),
        &placer,
        &mut rng,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    game.board_mut(Side::Computer).set_hidden(!cli.reveal);

    println!("{}", ui::greeting());
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    loop {
        println!("{}", "-".repeat(20));
        println!(
            "{}",
            ui::render_boards(
                "User board:",
                game.board(Side::Human),
                "Computer board:",
                game.board(Side::Computer),
            )
        );
        println!("{}", "-".repeat(20));
        match game.to_move() {
            Side::Human => println!("User to move!"),
            Side::Computer => println!("Computer to move!"),
        }

        let Some(report) = game.play_turn(&mut rng).map_err(|e| anyhow::anyhow!(e))? else {
            break;
        };
        if report.side == Side::Computer {
            println!("Computer fires: {}", report.target);
        }
        println!("{}", ui::shot_message(report.result));
    }

    println!("{}", "-".repeat(20));
    match game.status() {
        GameStatus::Finished { winner: Side::Human } => println!("User wins!"),
        GameStatus::Finished {
            winner: Side::Computer,
        } => println!("Computer wins!"),
        GameStatus::Abandoned { .. } => println!("Game abandoned."),
        GameStatus::InProgress => {}
    }
    Ok(())
}
