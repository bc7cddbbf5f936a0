use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

pub const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A square on the board. Can only hold in-range values: file `a..=h`
/// (stored as index 0..8) and rank `1..=8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    file: u8,
    rank: u8,
}

impl Coord {
    /// Build from a file letter (either case) and a rank number.
    pub fn new(file: char, rank: u8) -> Option<Coord> {
        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return None;
        }
        Coord::from_index(file as u8 - b'a', rank)
    }

    /// Build from a zero-based file index and a one-based rank.
    pub fn from_index(file: u8, rank: u8) -> Option<Coord> {
        if file < 8 && (1..=8).contains(&rank) {
            Some(Coord { file, rank })
        } else {
            None
        }
    }

    pub fn file(self) -> char {
        FILES[self.file as usize]
    }

    pub fn file_index(self) -> usize {
        self.file as usize
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Signed rank difference `to - self`, not normalised for direction.
    pub fn rank_distance(self, to: Coord) -> i8 {
        to.rank as i8 - self.rank as i8
    }

    /// Signed file difference `to - self`.
    pub fn file_distance(self, to: Coord) -> i8 {
        to.file as i8 - self.file as i8
    }

    /// The square `df` files and `dr` ranks away, if it is on the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Coord> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if !(0..8).contains(&file) || !(1..=8).contains(&rank) {
            return None;
        }
        Coord::from_index(file as u8, rank as u8)
    }

    /// Every square, rank 1 to 8, file a to h within a rank.
    pub fn all() -> impl Iterator<Item = Coord> {
        (1..=8u8).flat_map(|rank| (0..8u8).map(move |file| Coord { file, rank }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank)
    }
}

impl FromStr for Coord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseError::Length(s.to_string()));
        };
        let rank = rank
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .ok_or(ParseError::Rank(rank))?;
        Coord::new(file, rank as u8).ok_or(ParseError::File(file))
    }
}

/// Serialised as its algebraic name, e.g. `"e4"`.
impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Coord {
        s.parse().unwrap()
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Coord::new('i', 1).is_none());
        assert!(Coord::new('a', 0).is_none());
        assert!(Coord::new('a', 9).is_none());
        assert!(Coord::from_index(8, 4).is_none());
        assert_eq!(Coord::new('H', 8), Coord::new('h', 8));
    }

    #[test]
    fn distances_are_signed() {
        assert_eq!(sq("b2").rank_distance(sq("b4")), 2);
        assert_eq!(sq("b4").rank_distance(sq("b2")), -2);
        assert_eq!(sq("c4").file_distance(sq("b3")), -1);
        assert_eq!(sq("a7").file_distance(sq("h7")), 7);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(sq("a2").offset(1, 1), Some(sq("b3")));
        assert_eq!(sq("a2").offset(-1, 1), None);
        assert_eq!(sq("h8").offset(0, 1), None);
        assert_eq!(sq("d1").offset(0, -1), None);
    }

    #[test]
    fn parses_and_displays() {
        assert_eq!(sq("E5").to_string(), "e5");
        assert_eq!("z1".parse::<Coord>(), Err(ParseError::File('z')));
        assert_eq!("a9".parse::<Coord>(), Err(ParseError::Rank('9')));
        assert!("a".parse::<Coord>().is_err());
    }

    #[test]
    fn serde_uses_square_names() {
        assert_eq!(serde_json::to_string(&sq("c6")).unwrap(), "\"c6\"");
        assert_eq!(serde_json::from_str::<Coord>("\"C6\"").unwrap(), sq("c6"));
        assert!(serde_json::from_str::<Coord>("\"i9\"").is_err());
    }

    #[test]
    fn orders_by_file_then_rank() {
        assert!(sq("a8") < sq("b1"));
        assert!(sq("c2") < sq("c3"));
        assert_eq!(Coord::all().count(), 64);
        assert_eq!(Coord::all().next(), Some(sq("a1")));
    }
}
