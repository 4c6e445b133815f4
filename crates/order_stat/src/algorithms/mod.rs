pub(crate) mod common;
pub(crate) mod partition;
pub(crate) mod select;
pub(crate) mod sort_indices;
