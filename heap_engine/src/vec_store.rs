use super::{Heapable, Sortable};

/// Growable backing store ordered by a caller-supplied comparator, with an
/// optional upper bound on its length.
pub struct VecStore<ValueT, CompareT>
where
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering,
{
    compare: CompareT,
    array: Vec<ValueT>,
    capacity_limit: Option<usize>,
}

impl<ValueT, CompareT> VecStore<ValueT, CompareT>
where
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering,
{
    #[inline(always)]
    pub fn new(compare: CompareT) -> Self {
        Self::from_vec(Vec::default(), compare)
    }

    /// Wraps `array` as is. Call `init` before using it as a heap.
    #[inline(always)]
    pub fn from_vec(array: Vec<ValueT>, compare: CompareT) -> Self {
        Self {
            compare,
            array,
            capacity_limit: None,
        }
    }

    pub fn with_capacity_limit(capacity_limit: usize, compare: CompareT) -> Self {
        Self {
            compare,
            array: Vec::with_capacity(capacity_limit),
            capacity_limit: Some(capacity_limit),
        }
    }

    #[inline(always)]
    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.capacity_limit
            .is_some_and(|capacity_limit| self.array.len() >= capacity_limit)
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[ValueT] {
        &self.array
    }

    /// Mutable access to the elements. The heap invariant is the caller's to
    /// restore afterwards (`fix` or `init`).
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [ValueT] {
        &mut self.array
    }

    #[inline(always)]
    pub fn into_vec(self) -> Vec<ValueT> {
        self.array
    }

    /// Appends `value` unless the store is full, in which case it is handed
    /// back.
    pub fn try_push(&mut self, value: ValueT) -> Result<(), ValueT> {
        if self.is_full() {
            return Err(value);
        }
        self.array.push(value);
        return Ok(());
    }

    pub fn clear(&mut self) {
        self.array.clear();
    }
}

impl<ValueT, CompareT> Sortable for VecStore<ValueT, CompareT>
where
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering,
{
    #[inline(always)]
    fn len(&self) -> usize {
        self.array.len()
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        debug_assert!(i < self.array.len() && j < self.array.len());
        (self.compare)(&self.array[i], &self.array[j]) == std::cmp::Ordering::Less
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.array.swap(i, j);
    }
}

impl<ValueT, CompareT> Heapable for VecStore<ValueT, CompareT>
where
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering,
{
    type Value = ValueT;

    fn push(&mut self, value: ValueT) {
        assert!(
            !self.is_full(),
            "push beyond capacity limit {:?}",
            self.capacity_limit
        );
        self.array.push(value);
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<ValueT> {
        self.array.pop()
    }
}

impl<ValueT, CompareT> Default for VecStore<ValueT, CompareT>
where
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering + Default,
{
    fn default() -> Self {
        Self::new(CompareT::default())
    }
}

impl<ValueT, CompareT> Clone for VecStore<ValueT, CompareT>
where
    ValueT: Clone,
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering + Clone,
{
    fn clone(&self) -> Self {
        Self {
            compare: self.compare.clone(),
            array: self.array.clone(),
            capacity_limit: self.capacity_limit,
        }
    }
}

impl<ValueT, CompareT> std::fmt::Debug for VecStore<ValueT, CompareT>
where
    ValueT: std::fmt::Debug,
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.array, f)
    }
}
