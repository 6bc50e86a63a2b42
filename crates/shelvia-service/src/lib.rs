//! # shelvia-service
//!
//! Application layer containing the defect, audit, attachment and stats use cases and their DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AttachmentFile, AttachmentService, AuditService, DefectService, HealthService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StatsService,
};
