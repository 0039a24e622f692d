mod capability;
mod error;
mod heap_sort;
mod heaped_map;
mod priority_queue;
mod vec_store;

pub use capability::{Heapable, Sortable};
pub use error::HeapError;
pub use heap_sort::{fix, init, is_heap, pop, push, remove, sort};
pub use heaped_map::HeapedMap;
pub use priority_queue::PriorityQueue;
pub use vec_store::VecStore;
