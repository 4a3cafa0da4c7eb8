use clap::Parser;
use rookery::controller::{GameController, MoveResultType};
use rookery::game::{Square, SquareExt};
use rookery::utils::GUICommand;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rookery")]
#[command(about = "Chess rules engine with an interactive text board", long_about = None)]
struct Cli {
    /// Starting position (placement, side to move, en passant target)
    #[arg(long, value_name = "FEN")]
    fen: Option<String>,

    /// Print the perft breakdown of the starting position and exit
    #[arg(long, value_name = "DEPTH")]
    perft: Option<usize>,
}

fn print_perft(controller: &mut GameController, depth: usize) {
    let moves = controller.perft_parallel(depth);

    for (m, c) in &moves {
        println!("{}: {}", m.unparse(), c);
    }

    // The empty breakdown at depth 0 still counts the position itself
    let nodes = match depth {
        0 => 1,
        _ => moves.iter().map(|(_, c)| c).sum::<usize>(),
    };

    println!("\nNodes: {}", nodes);
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("rookery ({})", env!("GIT_HASH"));

    let mut controller = GameController::new();

    if let Some(fen) = &cli.fen {
        if let Err(error) = controller.new_game_from_fen(fen) {
            eprintln!("Invalid position: {}", error);
            return ExitCode::FAILURE;
        }
    }

    if let Some(depth) = cli.perft {
        print_perft(&mut controller, depth);
        return ExitCode::SUCCESS;
    }

    loop {
        match GUICommand::receive() {
            GUICommand::Quit => break,
            GUICommand::MovePosition(moves) => {
                let result = controller.new_game_with_moves(&moves.unwrap_or_default());

                if result != MoveResultType::Success {
                    println!("{:?}", result);
                }
            }
            GUICommand::FenPosition(fen) => {
                if let Err(error) = controller.new_game_from_fen(&fen) {
                    println!("Invalid position: {}", error);
                }
            }
            GUICommand::Move(notation) => match controller.try_move_piece(&notation) {
                MoveResultType::Success => controller.print(),
                result => {
                    log::info!("Rejected '{}': {:?}", notation, result);
                    println!("{:?}", result);
                }
            },
            GUICommand::Undo => match controller.try_unmove_piece() {
                MoveResultType::Success => controller.print(),
                result => println!("{:?}", result),
            },
            GUICommand::ValidMoves(None) => {
                let moves = controller.board.legal_moves();

                println!(
                    "{}",
                    moves.iter().map(|m| m.unparse()).collect::<Vec<_>>().join(" ")
                );
                println!("\nMoves: {}", moves.len());
            }
            GUICommand::ValidMoves(Some(square_string)) => match Square::parse(&square_string) {
                Some(square) => {
                    let destinations = controller
                        .board
                        .legal_moves_from(square)
                        .iter()
                        .map(|m| m.to)
                        .collect::<Vec<_>>();

                    controller.print_with_moves(&destinations);
                }
                None => println!("Invalid square '{}'", square_string),
            },
            GUICommand::Perft(depth_string) => match depth_string.parse::<usize>() {
                Ok(depth) => print_perft(&mut controller, depth),
                Err(_) => println!("Invalid depth '{}'", depth_string),
            },
            GUICommand::Random => match controller.play_random_move() {
                Some(board_move) => {
                    println!("{}", board_move.unparse());
                    controller.print();
                }
                None => println!("No legal moves"),
            },
            GUICommand::Print => println!("{}", controller.board),
            GUICommand::Fen => controller.print_fen(),
            GUICommand::Invalid(input) => {
                if !input.is_empty() {
                    println!("Unknown command '{}'", input);
                }
            }
        }
    }

    ExitCode::SUCCESS
}
