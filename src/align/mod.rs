//! Alignment engine
//!
//! Edit distance with unit-cost insert, delete, replace and adjacent
//! transposition, and reconstruction of one minimal transformation script.
//! Every table and script is scoped to a single call; nothing is cached
//! between word pairs.

mod script;
mod table;

pub use script::{get_transformation_list, reconstruct, replay};
pub use table::{DistanceTable, Predecessors, Step, build_table, edit_distance};
