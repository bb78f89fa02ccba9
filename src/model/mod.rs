pub mod common;
pub mod department;
pub mod employee;
pub mod required;

pub use common::*;
pub use department::*;
pub use employee::*;
pub use required::*;
