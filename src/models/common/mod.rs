pub mod de;
pub mod response;
pub mod scope;

pub use response::ApiResponse;
pub use scope::{ProgramQuery, ProgramType, ScopeQuery, Stream};
