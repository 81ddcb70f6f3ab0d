// Role brief construction: form snapshot -> canonical JSON document.
// Construction is synchronous and total. The only side effect is
// `export::write_export`, which writes the finished document to disk.

pub mod builder;
pub mod export;
pub mod form;
pub mod handlers;
pub mod models;

pub use builder::build_brief;
pub use form::RoleForm;
pub use models::RoleBrief;
