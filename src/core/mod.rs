//! Core building blocks: parsing of date specifications into the ordered
//! date list the dispatcher sends. Consumed by the high-level `api` module.
pub mod dates;
