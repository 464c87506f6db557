pub mod error;
pub mod grade;
pub mod input;
pub mod output;
pub mod record;
pub mod shell;
pub mod store;

pub use error::GradeError;
pub use grade::{Grade, average, grade};
pub use record::{HEADERS, StudentRecord};
pub use store::GradeStore;
