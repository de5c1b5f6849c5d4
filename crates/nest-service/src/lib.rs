//! # nest-service
//!
//! Application layer: one service per collection plus the session service.
//! Each operation is a single store call; results are returned as the store
//! reports them.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, QueryService, RecommendationService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
