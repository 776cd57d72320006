pub mod render;
pub mod session;

pub use render::CellDescriptor;
pub use session::{FetchRequest, RequestTicker, SessionAction, SessionState};
