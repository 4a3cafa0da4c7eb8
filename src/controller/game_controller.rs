use crate::game::{Board, Color, MalformedPositionError, Move, MoveRequest, Square, SquareExt};
use fxhash::{FxHashMap, FxHashSet};
use rand::seq::IndexedRandom;
use rayon::prelude::*;

pub struct GameController {
    pub board: Board,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResultType {
    Success,         // successful move / undo
    InvalidNotation, // wrong long algebraic notation
    InvalidMove,     // not among the legal moves
    NoHistory,       // nothing to undo
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
        }
    }

    pub fn new_game(&mut self) {
        self.board = Board::starting_position();
    }

    /// Replaces the board; on error the previous game is kept.
    pub fn new_game_from_fen(&mut self, fen: &str) -> Result<(), MalformedPositionError> {
        self.board = Board::from_fen(fen)?;
        Ok(())
    }

    /// Starts from the initial position and plays `moves` in order, stopping at
    /// the first one that does not apply.
    pub fn new_game_with_moves(&mut self, moves: &[String]) -> MoveResultType {
        self.new_game();

        for notation in moves {
            let result = self.try_move_piece(notation);

            if result != MoveResultType::Success {
                log::info!("Stopped replaying at '{}': {:?}", notation, result);
                return result;
            }
        }

        MoveResultType::Success
    }

    pub fn try_move_piece(&mut self, long_algebraic_notation: &str) -> MoveResultType {
        match MoveRequest::parse(long_algebraic_notation) {
            Some(request) => {
                if self.board.try_request(request) {
                    MoveResultType::Success
                } else {
                    MoveResultType::InvalidMove
                }
            }
            None => MoveResultType::InvalidNotation,
        }
    }

    pub fn try_unmove_piece(&mut self) -> MoveResultType {
        match self.board.undo_move() {
            Some(_) => MoveResultType::Success,
            None => MoveResultType::NoHistory,
        }
    }

    /// Plays a uniformly chosen legal move, if there is one.
    pub fn play_random_move(&mut self) -> Option<Move> {
        let board_move = self.board.legal_moves().choose(&mut rand::rng()).copied()?;

        self.board.try_move(&board_move).then_some(board_move)
    }

    /// Legal moves grouped by the square they start from.
    pub fn get_moves_by_square(&mut self) -> FxHashMap<Square, Vec<Move>> {
        let mut grouped: FxHashMap<Square, Vec<Move>> = FxHashMap::default();

        for board_move in self.board.legal_moves() {
            grouped.entry(board_move.from).or_default().push(*board_move);
        }

        grouped
    }

    /// Leaf counts `depth` plies deep, broken down by root move. Depth 0 has
    /// no root moves to break down and yields an empty table.
    pub fn perft(&mut self, depth: usize) -> Vec<(Move, usize)> {
        if depth == 0 {
            return vec![];
        }

        let root_moves = self.board.legal_moves().to_vec();

        root_moves
            .into_iter()
            .map(|board_move| (board_move, dfs_count_moves(&mut self.board, board_move, depth)))
            .collect()
    }

    /// Same as [`GameController::perft`], with every root move counted on its own board copy.
    pub fn perft_parallel(&mut self, depth: usize) -> Vec<(Move, usize)> {
        if depth == 0 {
            return vec![];
        }

        let root_moves = self.board.legal_moves().to_vec();
        let board = &self.board;

        root_moves
            .into_par_iter()
            .map(|board_move| {
                let mut snapshot = board.clone();
                (board_move, dfs_count_moves(&mut snapshot, board_move, depth))
            })
            .collect()
    }

    pub fn print_with_moves(&self, possible_moves: &[Square]) {
        const RESET: &str = "\x1b[0m";
        const LIGHT_SQUARE_BG: &str = "\x1b[48;5;172m";
        const DARK_SQUARE_BG: &str = "\x1b[48;5;130m";
        const WHITE_PIECE: &str = "\x1b[1;97m";
        const BLACK_PIECE: &str = "\x1b[1;30m";
        const MOVE_HIGHLIGHT: &str = "\x1b[1;34m";
        const HEADING_BG: &str = "\x1b[48;5;240m";

        let heading_text = format!("{} to move", self.board.turn());
        let heading_color = match self.board.turn() {
            Color::White => WHITE_PIECE,
            Color::Black => BLACK_PIECE,
        };

        // 8 squares, 3 characters each
        let board_width = 24;
        let padding = (board_width - heading_text.len()) / 2;
        let right_padding = board_width - heading_text.len() - padding;

        println!(
            "{}{}{}{}{}{}",
            HEADING_BG,
            " ".repeat(padding),
            heading_color,
            heading_text,
            " ".repeat(right_padding),
            RESET
        );

        let move_squares: FxHashSet<Square> = possible_moves.iter().copied().collect();

        for rank in (0..8).rev() {
            let mut line = String::new();

            for file in 0..8 {
                let square = Square::from_position(file, rank);

                line.push_str(if (file + rank) % 2 == 1 {
                    LIGHT_SQUARE_BG
                } else {
                    DARK_SQUARE_BG
                });

                match self.board.piece_at(square) {
                    Some(piece) => {
                        let piece_color = match piece.color {
                            Color::White => WHITE_PIECE,
                            Color::Black => BLACK_PIECE,
                        };
                        line.push_str(&format!("{} {} ", piece_color, piece.kind.to_emoji()));
                    }
                    None if move_squares.contains(&square) => {
                        line.push_str(&format!("{} ● ", MOVE_HIGHLIGHT));
                    }
                    None => line.push_str("   "),
                }

                line.push_str(RESET);
            }

            println!("{}", line);
        }
    }

    pub fn print(&self) {
        self.print_with_moves(&[]);
    }

    pub fn print_fen(&self) {
        println!("{}", self.board.fen());
    }
}

fn dfs_count_moves(board: &mut Board, initial_move: Move, depth: usize) -> usize {
    if depth <= 1 {
        return 1;
    }

    // Only legal moves reach here, so the lookup in try_move is skipped
    board.make_move(initial_move);

    let current_moves = board.legal_moves().to_vec();

    // Bulk counting
    let total_count = if depth == 2 {
        current_moves.len()
    } else {
        current_moves
            .into_iter()
            .map(|board_move| dfs_count_moves(board, board_move, depth - 1))
            .sum()
    };

    board.unmake_move();

    total_count
}
