pub mod auth;

pub mod courses;

pub mod prl;

pub mod reports;

pub mod system;

pub use auth::configure_auth_routes;
pub use courses::configure_courses_routes;
pub use prl::configure_prl_routes;
pub use reports::configure_reports_routes;
pub use system::configure_system_routes;
