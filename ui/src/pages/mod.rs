//! Pages module for the application.
//!
//! Which page is shown follows the [`campusdesk_business::Route`] state:
//! - `home_page`: entity directory
//! - `index_page`: one entity family's records in a table
//! - `edit_page`: a single record, fetched by its identifier
//! - `create_page`: placeholder for record creation

mod create_page;
mod edit_page;
mod home_page;
mod index_page;

pub use create_page::create_page;
pub use edit_page::edit_page;
pub use home_page::home_page;
pub use index_page::index_page;
