mod request;
mod response;

pub use self::request::Request;
pub use self::response::Response;

#[derive(Debug, thiserror::Error)]
#[error("{msg}")]
pub struct HeadError {
    msg: &'static str,
}

impl HeadError {
    pub(crate) fn new(msg: &'static str) -> Self {
        Self { msg }
    }
}
