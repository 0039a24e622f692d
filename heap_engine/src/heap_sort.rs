use super::{HeapError, Heapable, Sortable};

#[inline(always)]
fn parent_of(position: usize) -> usize {
    debug_assert!(position != 0);
    return (position + 1) / 2 - 1;
}

#[inline(always)]
fn left_of(position: usize) -> usize {
    return (position + 1) * 2 - 1;
}

#[inline(always)]
fn right_of(position: usize) -> usize {
    (position + 1) * 2
}

/// Moves the element at `position` towards the root while it is less than its
/// parent. Returns whether anything was swapped.
fn up_heap<StoreT: Sortable + ?Sized>(store: &mut StoreT, position: usize) -> bool {
    debug_assert!(position < store.len());
    let mut current = position;
    loop {
        if current == 0 {
            break;
        }
        let parent = parent_of(current);
        if store.less(current, parent) {
            store.swap(parent, current);
            current = parent;
        } else {
            break;
        }
    }
    return current != position;
}

/// Moves the element at `position` towards the leaves of the heap occupying
/// `[0, end)`. Returns whether anything was swapped.
fn down_heap<StoreT: Sortable + ?Sized>(store: &mut StoreT, position: usize, end: usize) -> bool {
    debug_assert!(end <= store.len());
    let mut current = position;
    loop {
        let left = left_of(current);
        if left >= end {
            break;
        }
        let right = right_of(current);
        // left wins ties
        let child = if right < end && store.less(right, left) {
            right
        } else {
            left
        };
        if store.less(child, current) {
            store.swap(current, child);
            current = child;
        } else {
            break;
        }
    }
    return current != position;
}

/// Establishes the heap invariant over the whole store in linear time.
pub fn init<StoreT: Sortable + ?Sized>(store: &mut StoreT) {
    let len = store.len();
    for position in (0..len / 2).rev() {
        down_heap(store, position, len);
    }
}

/// Appends `value` and restores the invariant.
pub fn push<StoreT: Heapable + ?Sized>(store: &mut StoreT, value: StoreT::Value) {
    let len = store.len();
    store.push(value);
    assert!(
        store.len() == len + 1,
        "{}",
        HeapError::ContractViolation {
            index: len,
            len: store.len()
        }
    );
    up_heap(store, len);
}

/// Removes and returns the least element.
pub fn pop<StoreT: Heapable + ?Sized>(store: &mut StoreT) -> Result<StoreT::Value, HeapError> {
    let len = store.len();
    if len == 0 {
        return Err(HeapError::EmptyCollection);
    }
    let last = len - 1;
    if last != 0 {
        store.swap(0, last);
    }
    let value = take_last(store, 0, len)?;
    if last != 0 {
        down_heap(store, 0, last);
    }
    return Ok(value);
}

/// Pops the element that was swapped from `position` to the last slot. When
/// the store breaks the length contract and still holds `len` elements, the
/// swap is undone so the invariant survives the error.
fn take_last<StoreT: Heapable + ?Sized>(
    store: &mut StoreT,
    position: usize,
    len: usize,
) -> Result<StoreT::Value, HeapError> {
    let last = len - 1;
    match store.pop() {
        Some(value) if store.len() == last => return Ok(value),
        _ => {}
    }
    if position != last && store.len() == len {
        store.swap(position, last);
    }
    return Err(HeapError::ContractViolation {
        index: last,
        len: store.len(),
    });
}

/// Restores the invariant after the element at `position` changed its key.
pub fn fix<StoreT: Sortable + ?Sized>(store: &mut StoreT, position: usize) -> Result<(), HeapError> {
    let len = store.len();
    if position >= len {
        return Err(HeapError::ContractViolation {
            index: position,
            len,
        });
    }
    if !down_heap(store, position, len) {
        up_heap(store, position);
    }
    return Ok(());
}

/// Removes and returns the element at `position`.
pub fn remove<StoreT: Heapable + ?Sized>(
    store: &mut StoreT,
    position: usize,
) -> Result<StoreT::Value, HeapError> {
    let len = store.len();
    if position >= len {
        return Err(HeapError::ContractViolation {
            index: position,
            len,
        });
    }
    let last = len - 1;
    if position != last {
        store.swap(position, last);
    }
    let value = take_last(store, position, len)?;
    if position != last {
        fix(store, position)?;
    }
    return Ok(value);
}

/// Heap sort. The store ends up in non-increasing order under `less`.
pub fn sort<StoreT: Sortable + ?Sized>(store: &mut StoreT) {
    init(store);
    for end in (1..store.len()).rev() {
        store.swap(0, end);
        down_heap(store, 0, end);
    }
}

pub fn is_heap<StoreT: Sortable + ?Sized>(store: &StoreT) -> bool {
    (1..store.len()).all(|position| !store.less(position, parent_of(position)))
}
