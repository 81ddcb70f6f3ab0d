// Tag collections: the ordered, de-duplicated string lists behind core skills,
// nice-to-have, tools and domains, plus the keyboard-driven editor for them.

pub mod handlers;
pub mod input;
pub mod list;
pub mod presets;

pub use input::{Key, KeyResponse, TagInput};
pub use list::TagList;
