use super::{HeapError, Heapable, Sortable, heap_sort};

const NULL_POSITION: usize = usize::MAX;

/// Heap storage that keeps the key→position table in sync on every swap.
struct Entries<ValueT, CompareT>
where
    CompareT: Fn(&(usize, ValueT), &(usize, ValueT)) -> std::cmp::Ordering,
{
    compare: CompareT,
    index_to_position: Vec<usize>,
    item_array: Vec<(usize, ValueT)>,
}

impl<ValueT, CompareT> Entries<ValueT, CompareT>
where
    CompareT: Fn(&(usize, ValueT), &(usize, ValueT)) -> std::cmp::Ordering,
{
    #[inline(always)]
    fn position_of(&self, index: usize) -> Option<usize> {
        match self.index_to_position.get(index) {
            Some(&position) if position != NULL_POSITION => Some(position),
            _ => None,
        }
    }
}

impl<ValueT, CompareT> Sortable for Entries<ValueT, CompareT>
where
    CompareT: Fn(&(usize, ValueT), &(usize, ValueT)) -> std::cmp::Ordering,
{
    #[inline(always)]
    fn len(&self) -> usize {
        self.item_array.len()
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        (self.compare)(&self.item_array[i], &self.item_array[j]) == std::cmp::Ordering::Less
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.item_array.swap(i, j);
        self.index_to_position[self.item_array[i].0] = i;
        self.index_to_position[self.item_array[j].0] = j;
    }
}

impl<ValueT, CompareT> Heapable for Entries<ValueT, CompareT>
where
    CompareT: Fn(&(usize, ValueT), &(usize, ValueT)) -> std::cmp::Ordering,
{
    type Value = (usize, ValueT);

    fn push(&mut self, item: (usize, ValueT)) {
        let index = item.0;
        if index >= self.index_to_position.len() {
            self.index_to_position.resize(index + 1, NULL_POSITION);
        }
        debug_assert!(self.index_to_position[index] == NULL_POSITION);
        self.index_to_position[index] = self.item_array.len();
        self.item_array.push(item);
    }

    fn pop(&mut self) -> Option<(usize, ValueT)> {
        let item = self.item_array.pop()?;
        debug_assert!(self.index_to_position[item.0] == self.item_array.len());
        self.index_to_position[item.0] = NULL_POSITION;
        return Some(item);
    }
}

/// Map from dense `usize` keys to values, ordered as a heap on `(key, value)`.
pub struct HeapedMap<ValueT, CompareT>
where
    CompareT: Fn(&(usize, ValueT), &(usize, ValueT)) -> std::cmp::Ordering,
{
    entries: Entries<ValueT, CompareT>,
}

impl<ValueT, CompareT> Default for HeapedMap<ValueT, CompareT>
where
    CompareT: Fn(&(usize, ValueT), &(usize, ValueT)) -> std::cmp::Ordering + Default,
{
    fn default() -> Self {
        Self::new(CompareT::default())
    }
}

impl<ValueT, CompareT> Clone for HeapedMap<ValueT, CompareT>
where
    ValueT: Clone,
    CompareT: Fn(&(usize, ValueT), &(usize, ValueT)) -> std::cmp::Ordering + Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: Entries {
                compare: self.entries.compare.clone(),
                index_to_position: self.entries.index_to_position.clone(),
                item_array: self.entries.item_array.clone(),
            },
        }
    }
}

impl<ValueT, CompareT> HeapedMap<ValueT, CompareT>
where
    CompareT: Fn(&(usize, ValueT), &(usize, ValueT)) -> std::cmp::Ordering,
{
    #[inline(always)]
    pub fn new(compare: CompareT) -> Self {
        Self {
            entries: Entries {
                compare,
                index_to_position: Vec::default(),
                item_array: Vec::default(),
            },
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline(always)]
    pub fn first(&self) -> Option<(&usize, &ValueT)> {
        self.entries
            .item_array
            .first()
            .map(|(index, value)| (index, value))
    }

    #[inline(always)]
    pub fn contains_key(&self, index: usize) -> bool {
        self.entries.position_of(index).is_some()
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&ValueT> {
        self.entries
            .position_of(index)
            .map(|position| &self.entries.item_array[position].1)
    }

    /// Inserts or replaces the value under `index`, moving it to its new place
    /// in the heap.
    pub fn insert(&mut self, index: usize, value: ValueT) {
        if let Some(position) = self.entries.position_of(index) {
            debug_assert!(self.entries.item_array[position].0 == index);
            self.entries.item_array[position].1 = value;
            // positions from `index_to_position` are always below `len`
            if let Err(error) = heap_sort::fix(&mut self.entries, position) {
                unreachable!("{}", error);
            }
        } else {
            heap_sort::push(&mut self.entries, (index, value));
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<ValueT> {
        let position = self.entries.position_of(index)?;
        debug_assert!(self.entries.item_array[position].0 == index);
        // `position` is in range and `Entries` keeps the push/pop length contract
        match heap_sort::remove(&mut self.entries, position) {
            Ok((_, value)) => return Some(value),
            Err(error) => unreachable!("{}", error),
        }
    }

    pub fn pop_first(&mut self) -> Option<(usize, ValueT)> {
        match heap_sort::pop(&mut self.entries) {
            Ok(item) => Some(item),
            Err(HeapError::EmptyCollection) => None,
            Err(error) => unreachable!("{}", error),
        }
    }

    pub fn clear(&mut self) {
        while self.entries.pop().is_some() {}
    }

    /// Entries in heap order.
    pub fn iter(&self) -> impl Iterator<Item = (&usize, &ValueT)> + Clone {
        self.entries
            .item_array
            .iter()
            .map(|(index, value)| (index, value))
    }
}

impl<ValueT, CompareT> std::fmt::Debug for HeapedMap<ValueT, CompareT>
where
    ValueT: std::fmt::Debug,
    CompareT: Fn(&(usize, ValueT), &(usize, ValueT)) -> std::cmp::Ordering,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod test {
    use ordered_float::OrderedFloat;
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use super::HeapedMap;
    use crate::is_heap;

    fn by_activity(a: &(usize, OrderedFloat<f64>), b: &(usize, OrderedFloat<f64>)) -> std::cmp::Ordering {
        b.1.cmp(&a.1).then(a.0.cmp(&b.0))
    }

    fn check_positions<CompareT>(map: &HeapedMap<OrderedFloat<f64>, CompareT>)
    where
        CompareT: Fn(
            &(usize, OrderedFloat<f64>),
            &(usize, OrderedFloat<f64>),
        ) -> std::cmp::Ordering,
    {
        assert!(is_heap(&map.entries));
        for (position, (index, _)) in map.entries.item_array.iter().enumerate() {
            assert_eq!(map.entries.index_to_position[*index], position);
        }
    }

    #[test]
    fn test_insert_and_pop_first() {
        let mut map = HeapedMap::new(by_activity);
        map.insert(3, OrderedFloat(0.5));
        map.insert(0, OrderedFloat(2.0));
        map.insert(7, OrderedFloat(1.0));
        check_positions(&map);
        assert_eq!(map.len(), 3);
        assert_eq!(map.first(), Some((&0, &OrderedFloat(2.0))));
        assert!(map.contains_key(7));
        assert!(!map.contains_key(5));
        assert!(!map.contains_key(100));

        // raise a key in place
        map.insert(3, OrderedFloat(4.0));
        check_positions(&map);
        assert_eq!(map.get(3), Some(&OrderedFloat(4.0)));

        assert_eq!(map.pop_first(), Some((3, OrderedFloat(4.0))));
        assert_eq!(map.pop_first(), Some((0, OrderedFloat(2.0))));
        assert_eq!(map.pop_first(), Some((7, OrderedFloat(1.0))));
        assert_eq!(map.pop_first(), None);
        assert!(!map.contains_key(3));
    }

    #[test]
    fn test_remove() {
        let mut map = HeapedMap::new(by_activity);
        for index in 0..10 {
            map.insert(index, OrderedFloat(index as f64));
        }
        assert_eq!(map.remove(4), Some(OrderedFloat(4.0)));
        assert_eq!(map.remove(4), None);
        assert_eq!(map.remove(42), None);
        check_positions(&map);
        assert_eq!(map.len(), 9);
        map.clear();
        assert!(map.is_empty());
        assert!(!map.contains_key(9));
    }

    #[test]
    fn test_random_updates() {
        let mut rng = SmallRng::seed_from_u64(8);
        let mut map = HeapedMap::new(by_activity);
        let mut shadow = vec![None; 32];
        for _ in 0..3000 {
            let index = rng.gen_range(0..shadow.len());
            match rng.gen_range(0..3) {
                0 | 1 => {
                    let value = OrderedFloat(rng.gen_range(0.0..1.0));
                    map.insert(index, value);
                    shadow[index] = Some(value);
                }
                _ => {
                    assert_eq!(map.remove(index), shadow[index].take());
                }
            }
            check_positions(&map);
            assert_eq!(map.len(), shadow.iter().flatten().count());
        }

        let mut previous = OrderedFloat(f64::INFINITY);
        while let Some((index, value)) = map.pop_first() {
            assert!(value <= previous);
            assert_eq!(shadow[index].take(), Some(value));
            previous = value;
        }
        assert!(shadow.iter().all(Option::is_none));
    }

    #[test]
    fn test_debug() {
        let mut map = HeapedMap::new(|a: &(usize, i64), b: &(usize, i64)| a.1.cmp(&b.1));
        map.insert(1, 15);
        map.insert(4, -2);
        assert_eq!(format!("{:?}", map), "{4: -2, 1: 15}");
    }
}
