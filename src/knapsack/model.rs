//! The 0/1 knapsack instance and its objective.

/// One candidate item. Its position in the instance is its index in every
/// solution vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: u64,
    pub value: u64,
}

impl Item {
    pub fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }
}

/// An immutable knapsack instance: the items and the weight capacity.
///
/// Solutions are `[bool]` slices with one entry per item; `true` means the
/// item is packed. A solution may be over capacity; such solutions simply
/// score zero.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::knapsack::{Item, Knapsack};
///
/// let knapsack = Knapsack::new(vec![Item::new(10, 60), Item::new(20, 100)], 15);
/// assert_eq!(knapsack.fitness(&[true, false]), 60);
/// assert_eq!(knapsack.fitness(&[true, true]), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: u64,
}

impl Knapsack {
    pub fn new(items: Vec<Item>, capacity: u64) -> Self {
        Self { items, capacity }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items, which is also the solution length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value of the packed items, or 0 if their weight exceeds the capacity.
    ///
    /// Infeasible solutions are zeroed outright; there is no graduated
    /// penalty.
    ///
    /// # Panics
    /// Panics if `solution.len()` differs from the item count.
    pub fn fitness(&self, solution: &[bool]) -> u64 {
        if self.total_weight(solution) > self.capacity {
            0
        } else {
            self.total_value(solution)
        }
    }

    /// Summed weight of the packed items. Saturates instead of overflowing.
    ///
    /// # Panics
    /// Panics if `solution.len()` differs from the item count.
    pub fn total_weight(&self, solution: &[bool]) -> u64 {
        self.selected(solution)
            .fold(0, |acc: u64, (_, item)| acc.saturating_add(item.weight))
    }

    /// Summed value of the packed items, ignoring the capacity.
    ///
    /// # Panics
    /// Panics if `solution.len()` differs from the item count.
    pub fn total_value(&self, solution: &[bool]) -> u64 {
        self.selected(solution)
            .fold(0, |acc: u64, (_, item)| acc.saturating_add(item.value))
    }

    pub fn is_feasible(&self, solution: &[bool]) -> bool {
        self.total_weight(solution) <= self.capacity
    }

    /// Packed items with their 0-based index, in ascending index order.
    ///
    /// # Panics
    /// Panics if `solution.len()` differs from the item count.
    pub fn selected<'a>(
        &'a self,
        solution: &'a [bool],
    ) -> impl Iterator<Item = (usize, &'a Item)> + 'a {
        assert_eq!(
            solution.len(),
            self.items.len(),
            "solution length must equal the item count"
        );
        self.items
            .iter()
            .zip(solution)
            .enumerate()
            .filter(|(_, (_, &packed))| packed)
            .map(|(i, (item, _))| (i, item))
    }
}
