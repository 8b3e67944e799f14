mod person;
pub mod sort;

pub use person::{Field, Person};
