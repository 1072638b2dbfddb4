pub mod request_id;
pub mod session;

pub use request_id::{make_render_span, request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use session::{session_middleware, SessionId, SESSION_COOKIE};
