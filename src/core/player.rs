//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats of a match. Seats are numbered
//! 1 and 2 as shown to players; there is no way to construct any other id.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`, iterated in seat order.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::InvalidSeat;

/// Player identifier: seat 1 or seat 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first seat. Picks first and takes the first turn.
    pub const ONE: PlayerId = PlayerId(1);

    /// The second seat.
    pub const TWO: PlayerId = PlayerId(2);

    /// Create a player ID from a seat number.
    ///
    /// Returns `None` for anything other than 1 or 2.
    ///
    /// ```
    /// use gods_gauntlet::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(2), Some(PlayerId::TWO));
    /// assert_eq!(PlayerId::new(3), None);
    /// ```
    #[must_use]
    pub const fn new(seat: u8) -> Option<Self> {
        match seat {
            1 | 2 => Some(Self(seat)),
            _ => None,
        }
    }

    /// Get the seat number (1 or 2).
    #[must_use]
    pub const fn seat(self) -> u8 {
        self.0
    }

    /// Get the 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        if self.0 == 1 {
            Self::TWO
        } else {
            Self::ONE
        }
    }

    /// Both seats in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidSeat;

    fn try_from(seat: u8) -> Result<Self, Self::Error> {
        Self::new(seat).ok_or(InvalidSeat(seat))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use gods_gauntlet::core::{PlayerId, PlayerMap};
///
/// let mut hand_sizes: PlayerMap<usize> = PlayerMap::with_value(0);
/// hand_sizes[PlayerId::TWO] = 3;
///
/// assert_eq!(hand_sizes[PlayerId::ONE], 0);
/// assert_eq!(hand_sizes[PlayerId::TWO], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.seat(), 1);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(format!("{}", PlayerId::TWO), "Player 2");
    }

    #[test]
    fn test_player_id_rejects_invalid_seats() {
        assert_eq!(PlayerId::new(0), None);
        assert_eq!(PlayerId::new(3), None);
        assert_eq!(PlayerId::new(1), Some(PlayerId::ONE));
    }

    #[test]
    fn test_player_id_other() {
        assert_eq!(PlayerId::ONE.other(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.other(), PlayerId::ONE);
    }

    #[test]
    fn test_player_id_serde_validates() {
        let json = serde_json::to_string(&PlayerId::TWO).unwrap();
        assert_eq!(json, "2");
        assert_eq!(serde_json::from_str::<PlayerId>("1").unwrap(), PlayerId::ONE);
        assert!(serde_json::from_str::<PlayerId>("7").is_err());
    }

    #[test]
    fn test_player_id_try_from_seat() {
        assert_eq!(PlayerId::try_from(2), Ok(PlayerId::TWO));
        assert_eq!(PlayerId::try_from(0), Err(InvalidSeat(0)));
        assert_eq!(u8::from(PlayerId::ONE), 1);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u8> = PlayerMap::new(|p| p.seat() * 10);

        assert_eq!(map[PlayerId::ONE], 10);
        assert_eq!(map[PlayerId::TWO], 20);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::ONE] = 10;
        *map.get_mut(PlayerId::TWO) += 5;

        assert_eq!(map[PlayerId::ONE], 10);
        assert_eq!(map[PlayerId::TWO], 5);
    }

    #[test]
    fn test_player_map_iter_in_seat_order() {
        let map: PlayerMap<Vec<i32>> = PlayerMap::with_default();

        let seats: Vec<_> = map.iter().map(|(p, _)| p).collect();
        assert_eq!(seats, vec![PlayerId::ONE, PlayerId::TWO]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| i32::from(p.seat()));
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
