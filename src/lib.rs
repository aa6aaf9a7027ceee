mod setup;

pub use setup::{init_tracing, set_up_db};

pub use models;
pub use repositories;
pub use services;
