pub mod day_cell;
pub mod pipeline;
pub mod reconcile;
pub mod rows;
pub mod staff;
pub mod week_key;
