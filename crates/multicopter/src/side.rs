use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the two rotors, seen from behind the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Both sides, right first.
    pub const ALL: [Side; 2] = [Side::Right, Side::Left];
}

/// A value for each rotor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pair<T> {
    pub right: T,
    pub left: T,
}

impl<T> Pair<T> {
    pub fn new(right: T, left: T) -> Self {
        Self { right, left }
    }

    /// Returns the same value for both sides.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            right: value.clone(),
            left: value,
        }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Right => &self.right,
            Side::Left => &self.left,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Right => &mut self.right,
            Side::Left => &mut self.left,
        }
    }

    /// Applies `f` to both values.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Pair<U> {
        Pair {
            right: f(self.right),
            left: f(self.left),
        }
    }

    /// Iterates over `(side, value)` in [`Side::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
    }
}

impl<T> Index<Side> for Pair<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for Pair<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_by_side() {
        let mut pair = Pair::new(1, 2);
        assert_eq!(pair[Side::Right], 1);
        assert_eq!(pair[Side::Left], 2);

        pair[Side::Left] = 5;
        assert_eq!(pair.left, 5);
    }

    #[test]
    fn iterates_right_then_left() {
        let pair = Pair::new("r", "l");
        let items: Vec<_> = pair.iter().collect();
        assert_eq!(items, [(Side::Right, &"r"), (Side::Left, &"l")]);
    }

    #[test]
    fn map_and_splat() {
        assert_eq!(Pair::splat(3).map(|x| x * 2), Pair::new(6, 6));
    }
}
