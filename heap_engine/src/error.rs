#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeapError {
    /// `pop` on a store with no elements. Nothing was mutated.
    EmptyCollection,
    /// The caller addressed a position outside `[0, len)`, or the store broke
    /// the push/pop length contract.
    ContractViolation { index: usize, len: usize },
}

impl std::fmt::Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapError::EmptyCollection => write!(f, "heap is empty"),
            HeapError::ContractViolation { index, len } => write!(
                f,
                "capability contract violated at index {} (len {})",
                index, len
            ),
        }
    }
}

impl std::error::Error for HeapError {}
