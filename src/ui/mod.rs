//! egui rendering layer: filter panels, table view, and metric bars.
//! Everything here draws from [`crate::state::AppState`]; the data layer
//! never depends back on it.

pub mod bars;
pub mod panels;
pub mod table;
