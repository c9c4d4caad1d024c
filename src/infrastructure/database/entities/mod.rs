//! SeaORM entity definitions

pub mod movie;
