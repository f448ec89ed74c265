//! Plain data carried through the order pipeline.
//!
//! Nothing here is mutated after construction: requests come in from the caller,
//! products come out of the catalog snapshot, and an [`Order`] is only built once
//! every sub-task has succeeded.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
