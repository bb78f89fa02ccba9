pub mod decode;
pub mod department_ops;
pub mod employee_ops;
pub mod validate;

pub use decode::{decode, FieldSpec, RequestShape};
pub use department_ops::*;
pub use employee_ops::*;
pub use validate::*;
