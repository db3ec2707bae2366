mod backend_status;
mod notice_bar;
pub mod table;
pub mod tables;
mod version_badge;

pub use backend_status::backend_status;
pub use notice_bar::notice_bar;
pub use version_badge::version_badge;
