/// Index-addressed view of a backing store.
///
/// `less` and `swap` are only ever called with indices below the current
/// `len()`, and neither may change the length.
pub trait Sortable {
    fn len(&self) -> usize;

    /// Strict weak ordering between the elements at `i` and `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A `Sortable` store that can also grow and shrink at its last position.
///
/// `push` and `pop` are the only operations allowed to change `len()`.
pub trait Heapable: Sortable {
    type Value;

    /// Appends `value` as the new last element.
    fn push(&mut self, value: Self::Value);

    /// Removes and returns the last element, `None` when the store is empty.
    fn pop(&mut self) -> Option<Self::Value>;
}

impl<ValueT: Ord> Sortable for [ValueT] {
    #[inline(always)]
    fn len(&self) -> usize {
        <[ValueT]>::len(self)
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        debug_assert!(i < self.len() && j < self.len());
        self[i] < self[j]
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        <[ValueT]>::swap(self, i, j);
    }
}

impl<ValueT: Ord> Sortable for Vec<ValueT> {
    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        self.as_slice().less(i, j)
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

impl<ValueT: Ord> Heapable for Vec<ValueT> {
    type Value = ValueT;

    #[inline(always)]
    fn push(&mut self, value: ValueT) {
        Vec::push(self, value);
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<ValueT> {
        Vec::pop(self)
    }
}
