//! Credit policy service adapters.

mod dto;
mod fixed;
mod http_service;

pub use fixed::FixedCreditPolicyService;
pub use http_service::HttpCreditPolicyService;
