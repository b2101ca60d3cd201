pub mod model;
pub mod ports;

pub use model::{ProjectRecord, ProjectsDocument};
pub use ports::{ProjectSource, Storage};
