use crate::game::symbol::Symbol;
use crate::game::tile::Tile;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ordered tiles of one round.
///
/// Updates never touch `self`: every `with_*` method returns a new board and the
/// controller swaps it in wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) tiles: Vec<Tile>,
}

/// Duplicates `alphabet` and applies a uniform random permutation drawn from `rng`.
pub fn new_shuffled_board<R: Rng + ?Sized>(alphabet: &[Symbol], rng: &mut R) -> Board {
    let mut tiles: Vec<Tile> = alphabet
        .iter()
        .chain(alphabet.iter())
        .map(|symbol| Tile::new(*symbol))
        .collect();
    tiles.shuffle(rng);

    Board { tiles }
}

impl Board {
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Every tile matched. An empty board is never solved.
    pub fn is_solved(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(|tile| tile.is_matched)
    }

    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_matched).count()
    }

    pub fn with_revealed(&self, index: usize) -> Board {
        self.updated(&[index], |tile| tile.is_revealed = true)
    }

    pub fn with_matched(&self, pair: [usize; 2]) -> Board {
        self.updated(&pair, |tile| {
            tile.is_revealed = true;
            tile.is_matched = true;
        })
    }

    pub fn with_hidden(&self, indices: &[usize]) -> Board {
        self.updated(indices, |tile| tile.is_revealed = false)
    }

    fn updated<F>(&self, indices: &[usize], update: F) -> Board
    where
        F: Fn(&mut Tile),
    {
        let mut tiles = self.tiles.clone();
        for &index in indices {
            if let Some(tile) = tiles.get_mut(index) {
                update(tile);
            }
        }
        Board { tiles }
    }
}
