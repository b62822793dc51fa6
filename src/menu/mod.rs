//! Menu domain: items, courses, the add-item draft and the session state
//! machine that owns them.

mod collection;
mod course;
mod draft;
mod error;
mod item;
mod machine;

pub use collection::{CourseGroup, MenuCollection, MenuStats};
pub use course::{Course, CourseFilter};
pub use draft::{parse_price, Draft, DraftField};
pub use error::ValidationError;
pub use item::{ItemId, MenuItem};
pub use machine::{MenuStateMachine, Screen};
