use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// A component that represents the "side" or "handedness" that a tracked hand is on
/// Used as the key for all per-hand gesture state
#[derive(Debug, PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    /// Left hand side
    Left,
    /// Right hand side
    Right,
}

impl Handedness {
    /// Both hands, in the order they are processed each frame
    pub const ALL: [Handedness; 2] = [Handedness::Left, Handedness::Right];

    /// The hand on the other side
    pub fn other(self) -> Handedness {
        match self {
            Handedness::Left => Handedness::Right,
            Handedness::Right => Handedness::Left,
        }
    }

    /// Lower case name, handy for logging
    pub fn as_str(self) -> &'static str {
        match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
        }
    }
}

/// Exactly one `T` per hand.
///
/// There are only ever two hands, so rather than keying state by name we keep it in a fixed table
/// indexed by [`Handedness`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandTable<T> {
    left: T,
    right: T,
}

impl<T> HandTable<T> {
    /// Build a table from its two entries
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    /// Get the entry for `handedness`
    pub fn get(&self, handedness: Handedness) -> &T {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    /// Get the entry for `handedness` mutably
    pub fn get_mut(&mut self, handedness: Handedness) -> &mut T {
        match handedness {
            Handedness::Left => &mut self.left,
            Handedness::Right => &mut self.right,
        }
    }

    /// Iterate over both entries, left first
    pub fn iter(&self) -> impl Iterator<Item = (Handedness, &T)> {
        [(Handedness::Left, &self.left), (Handedness::Right, &self.right)].into_iter()
    }
}

impl<T> Index<Handedness> for HandTable<T> {
    type Output = T;

    fn index(&self, handedness: Handedness) -> &T {
        self.get(handedness)
    }
}

impl<T> IndexMut<Handedness> for HandTable<T> {
    fn index_mut(&mut self, handedness: Handedness) -> &mut T {
        self.get_mut(handedness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_table_indexing() {
        let mut table = HandTable::<u32>::default();
        table[Handedness::Left] = 1;
        *table.get_mut(Handedness::Right) += 2;

        assert_eq!(table[Handedness::Left], 1);
        assert_eq!(*table.get(Handedness::Right), 2);

        let entries: Vec<_> = table.iter().map(|(h, v)| (h, *v)).collect();
        assert_eq!(entries, vec![(Handedness::Left, 1), (Handedness::Right, 2)]);
    }

    #[test]
    fn test_handedness_other() {
        assert_eq!(Handedness::Left.other(), Handedness::Right);
        assert_eq!(Handedness::Right.other(), Handedness::Left);
    }
}
