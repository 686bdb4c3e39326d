//! A beap (bi-parental heap): an implicit max-heap laid out as triangular
//! levels in a flat array, giving O(sqrt(n)) insert, delete, and membership
//! search without the pointer overhead of a tree.

// Data structure
// --------------
pub mod beap;
pub mod layout;
pub mod verified;

pub use beap::Beap;
pub use verified::VerifiedBeap;
