/// Index of a cell, `file + rank * 8`, so a1 is 0 and h8 is 63.
pub type Square = u8;

macro_rules! file_constants {
    ($file:expr => $r1:ident, $r2:ident, $r3:ident, $r4:ident, $r5:ident, $r6:ident, $r7:ident, $r8:ident) => {
        const $r1: Square = $file;
        const $r2: Square = $file + 8;
        const $r3: Square = $file + 16;
        const $r4: Square = $file + 24;
        const $r5: Square = $file + 32;
        const $r6: Square = $file + 40;
        const $r7: Square = $file + 48;
        const $r8: Square = $file + 56;
    };
}

#[allow(dead_code)]
pub trait SquareExt {
    fn get_file(&self) -> u8;
    fn get_rank(&self) -> u8;
    fn parse(string: &str) -> Option<Square>;
    fn unparse(&self) -> String;
    fn from_position(file: u8, rank: u8) -> Square;
    fn offset(&self, rank_delta: i8, file_delta: i8) -> Option<Square>;

    file_constants!(0 => A1, A2, A3, A4, A5, A6, A7, A8);
    file_constants!(1 => B1, B2, B3, B4, B5, B6, B7, B8);
    file_constants!(2 => C1, C2, C3, C4, C5, C6, C7, C8);
    file_constants!(3 => D1, D2, D3, D4, D5, D6, D7, D8);
    file_constants!(4 => E1, E2, E3, E4, E5, E6, E7, E8);
    file_constants!(5 => F1, F2, F3, F4, F5, F6, F7, F8);
    file_constants!(6 => G1, G2, G3, G4, G5, G6, G7, G8);
    file_constants!(7 => H1, H2, H3, H4, H5, H6, H7, H8);
}

pub const fn is_position_valid(file: i8, rank: i8) -> bool {
    file >= 0 && file < 8 && rank >= 0 && rank < 8
}

impl SquareExt for u8 {
    fn get_file(&self) -> u8 {
        self % 8
    }

    fn get_rank(&self) -> u8 {
        self / 8
    }

    fn parse(string: &str) -> Option<Square> {
        let mut chars = string.chars();

        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => Some(
                Square::from_position(file as u8 - b'a', rank as u8 - b'1'),
            ),
            _ => None,
        }
    }

    fn unparse(&self) -> String {
        format!(
            "{}{}",
            (self.get_file() + b'a') as char,
            (self.get_rank() + b'1') as char
        )
    }

    fn from_position(file: u8, rank: u8) -> Square {
        file + rank * 8
    }

    /// The square `rank_delta`/`file_delta` away, or `None` when that falls off the board.
    fn offset(&self, rank_delta: i8, file_delta: i8) -> Option<Square> {
        let file = self.get_file() as i8 + file_delta;
        let rank = self.get_rank() as i8 + rank_delta;

        is_position_valid(file, rank).then(|| Square::from_position(file as u8, rank as u8))
    }
}
