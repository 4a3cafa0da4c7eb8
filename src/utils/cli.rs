use std::io;

#[derive(Debug, PartialEq, Eq)]
pub enum GUICommand {
    FenPosition(String),               // position fen <fen>
    MovePosition(Option<Vec<String>>), // position startpos <maybe some moves>
    Move(String),                      // move <long algebraic notation>
    Undo,                              // undo the last move
    ValidMoves(Option<String>),        // moves <maybe a square>
    Perft(String),                     // perft <depth>
    Random,                            // random - play any legal move
    Print,                             // print the board
    Fen,                               // fen - print the position string
    Quit,                              // quit the program

    Invalid(String), // placeholder for invalid commands so we can pattern match
}

impl GUICommand {
    /// Reads one line from stdin; end of input counts as `quit`.
    pub fn receive() -> GUICommand {
        let mut input = String::new();

        match io::stdin().read_line(&mut input) {
            Ok(0) => GUICommand::Quit,
            Ok(_) => GUICommand::parse(&input),
            Err(error) => {
                log::error!("Failed to read command: {}", error);
                GUICommand::Quit
            }
        }
    }

    pub fn parse(input: &str) -> GUICommand {
        let parts = input.split_whitespace().collect::<Vec<_>>();

        match parts.as_slice() {
            ["position", "startpos"] | ["new"] => GUICommand::MovePosition(None),
            ["position", "startpos", "moves", moves @ ..] => {
                GUICommand::MovePosition(Some(moves.iter().map(|m| m.to_string()).collect()))
            }
            ["position", "fen", fen @ ..] if !fen.is_empty() => {
                GUICommand::FenPosition(fen.join(" "))
            }
            ["move", notation] => GUICommand::Move(notation.to_string()),
            ["undo"] => GUICommand::Undo,
            ["moves"] => GUICommand::ValidMoves(None),
            ["moves", square] => GUICommand::ValidMoves(Some(square.to_string())),
            ["perft", depth] => GUICommand::Perft(depth.to_string()),
            ["random"] => GUICommand::Random,
            ["print"] | ["d"] => GUICommand::Print,
            ["fen"] => GUICommand::Fen,
            ["quit"] | ["exit"] => GUICommand::Quit,
            _ => GUICommand::Invalid(input.trim().to_string()),
        }
    }
}
