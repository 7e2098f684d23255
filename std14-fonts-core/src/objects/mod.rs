//! The slice of the PDF object model a font dictionary needs.

mod dictionary;
mod indirect;
mod primitive;

pub use dictionary::Dictionary;
pub use indirect::IndirectObject;
pub use primitive::{Object, ObjectId};
