use heap_engine::{Heapable, Sortable};

/// Integer backing store driven by the demo script. Smaller values pop first.
#[derive(Clone, Default, Debug)]
pub struct IntHeap {
    array: Vec<i64>,
}

impl IntHeap {
    pub fn new(array: Vec<i64>) -> Self {
        Self { array }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.array
    }
}

impl Sortable for IntHeap {
    fn len(&self) -> usize {
        self.array.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        debug_assert!(i < self.array.len() && j < self.array.len());
        self.array[i] < self.array[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.array.swap(i, j);
    }
}

impl Heapable for IntHeap {
    type Value = i64;

    fn push(&mut self, value: i64) {
        self.array.push(value);
    }

    fn pop(&mut self) -> Option<i64> {
        self.array.pop()
    }
}
