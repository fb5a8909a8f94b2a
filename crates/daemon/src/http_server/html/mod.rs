pub mod drop;
pub mod index;
