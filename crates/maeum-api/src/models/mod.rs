//! 모델 모듈

mod request;
mod response;

pub use request::{ChatRequest, CounselingRequest};
pub use response::{ChatResponse, CounselingResponse, RootResponse};
