//! Input data: the embedded flight table and synthetic power-law samples.

pub mod flyers;
pub mod synthetic;

pub use flyers::load_flyers;
pub use synthetic::generate_power_law;
