//! Domain layer: entities, repository traits, and the pure slot-generation
//! algorithms (opening-hours resolution, interval conflict test, stride
//! walk). No I/O happens here.

pub mod conflict;
pub mod entities;
pub mod hours;
pub mod repositories;
pub mod slots;
