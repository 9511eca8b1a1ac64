use minesweeper_engine::{Board, MineRng, Pos, Reveal, config};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Reveals hidden cells in random order until the game ends.
fn play<R: MineRng>(
    board: &mut Board<R>,
    picker: &mut StdRng,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut order: Vec<Pos> = (0..board.rows())
        .flat_map(|row| (0..board.cols()).map(move |col| Pos { row, col }))
        .collect();
    order.shuffle(picker);

    for pos in order {
        match board.reveal_cell(pos)? {
            Reveal::Safe { adjacent } => println!("({}, {}) -> {}", pos.row, pos.col, adjacent),
            Reveal::Won { .. } => {
                println!("🎉 Cleared the board!");
                break;
            }
            Reveal::Mine => {
                println!("💣 Hit a mine at ({}, {})", pos.row, pos.col);
                break;
            }
            Reveal::AlreadyRevealed | Reveal::GameFinished => {}
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let params = config::params_from_env();
    let seed = config::seed_from_env().unwrap_or_else(rand::random);
    println!(
        "🎮 {}x{} board with {} mines (seed {})",
        params.rows, params.cols, params.mines, seed
    );

    let mut board = Board::from_params_with_rng(params, StdRng::seed_from_u64(seed))?;
    let mut picker = StdRng::seed_from_u64(seed.wrapping_add(1));

    play(&mut board, &mut picker)?;
    print!("{}", board.snapshot().render());

    // Same parameters, fresh layout
    board.restart();
    println!("\nRestarted with {} mines", board.num_mines());
    play(&mut board, &mut picker)?;
    print!("{}", board.snapshot().render());

    let state = board.game_state();
    println!("Game over: {}, Won: {}", state.is_over(), state.is_won());
    Ok(())
}
