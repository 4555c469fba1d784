//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch the listing page at the given offset and resolve its entries
    LoadPage { offset: u32 },
    /// Fetch the full list of type labels
    LoadTypes,
}
