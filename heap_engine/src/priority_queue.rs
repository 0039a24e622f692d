use super::{HeapError, Sortable, VecStore, heap_sort};

pub struct PriorityQueue<ValueT, CompareT>
where
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering,
{
    store: VecStore<ValueT, CompareT>,
}

impl<ValueT, CompareT> PriorityQueue<ValueT, CompareT>
where
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering,
{
    #[inline(always)]
    pub fn new(compare: CompareT) -> Self {
        Self {
            store: VecStore::new(compare),
        }
    }

    pub fn from_vec(array: Vec<ValueT>, compare: CompareT) -> Self {
        let mut store = VecStore::from_vec(array, compare);
        heap_sort::init(&mut store);
        Self { store }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Elements in heap order, not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &ValueT> + Clone + '_ {
        self.store.as_slice().iter()
    }

    #[inline(always)]
    pub fn peek(&self) -> Option<&ValueT> {
        self.store.as_slice().first()
    }

    pub fn push(&mut self, value: ValueT) {
        heap_sort::push(&mut self.store, value);
    }

    pub fn pop(&mut self) -> Option<ValueT> {
        self.try_pop().ok()
    }

    pub fn try_pop(&mut self) -> Result<ValueT, HeapError> {
        heap_sort::pop(&mut self.store)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Ascending under the comparator.
    pub fn into_sorted_vec(mut self) -> Vec<ValueT> {
        heap_sort::sort(&mut self.store);
        let mut array = self.store.into_vec();
        array.reverse();
        return array;
    }
}

impl<ValueT, CompareT> Default for PriorityQueue<ValueT, CompareT>
where
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering + Default,
{
    fn default() -> Self {
        Self {
            store: VecStore::default(),
        }
    }
}

impl<ValueT, CompareT> Clone for PriorityQueue<ValueT, CompareT>
where
    ValueT: Clone,
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering + Clone,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<ValueT, CompareT> std::fmt::Debug for PriorityQueue<ValueT, CompareT>
where
    ValueT: std::fmt::Debug,
    CompareT: Fn(&ValueT, &ValueT) -> std::cmp::Ordering,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.store, f)
    }
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use super::PriorityQueue;
    use crate::HeapError;

    #[test]
    fn test_pop_order() {
        let mut queue = PriorityQueue::from_vec(vec![1, 5, 2, 8], |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(queue.peek(), Some(&1));
        queue.push(7);
        assert_eq!(queue.len(), 5);

        let mut popped = Vec::default();
        while let Some(value) = queue.pop() {
            popped.push(value);
        }
        assert_eq!(popped, vec![1, 2, 5, 7, 8]);
        assert!(queue.is_empty());
        assert_eq!(queue.try_pop(), Err(HeapError::EmptyCollection));
    }

    #[test]
    fn test_mixed_pushes_and_pops() {
        let mut queue = PriorityQueue::new(|a: &i32, b: &i32| b.cmp(a));
        queue.push(1);
        queue.push(2);
        assert_eq!(queue.pop(), Some(2));
        queue.push(4);
        queue.push(3);
        assert_eq!(queue.pop(), Some(4));
        queue.push(-1);
        queue.push(-1);
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.iter().count(), 3);
        queue.clear();
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_into_sorted_vec() {
        let mut rng = SmallRng::seed_from_u64(7);
        let array: Vec<i32> = (0..100).map(|_| rng.gen_range(0..30)).collect();
        let mut expected = array.clone();
        expected.sort();
        let queue = PriorityQueue::from_vec(array, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(queue.clone().into_sorted_vec(), expected);
        assert_eq!(queue.len(), 100);
    }
}
