pub mod services;

pub use crate::core::traits::{HttpRequest, HttpResponse, HttpTransport};
pub use services::ReqwestTransport;
