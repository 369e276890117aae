pub mod dto;
pub mod http;
pub mod session;
pub mod traits;

pub use http::HttpBoardApi;
pub use session::{Credentials, Session};
pub use traits::{AuthApi, BoardApi};
