//! SeaORM entities for the forwarder account service.

pub mod entities;
