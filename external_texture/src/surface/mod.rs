/// Surface module - producer-facing capability set

pub mod surface_producer;

pub use surface_producer::*;
