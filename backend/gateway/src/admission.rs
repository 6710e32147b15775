//! Admission control for `/process`.
//!
//! A fixed number of uploads may be in flight at once. When every permit is
//! taken the request is turned away immediately; nothing is queued.

use std::sync::Arc;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use inkwiz_core::InkwizError;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::error::ApiError;
use crate::server::GatewayState;

/// Bounded pool of in-flight request slots.
#[derive(Clone)]
pub struct Admission {
    permits: Arc<Semaphore>,
    limit: usize,
}

impl Admission {
    pub fn new(limit: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    /// Take a slot if one is free.
    pub fn try_acquire(&self) -> Option<OwnedSemaphorePermit> {
        Arc::clone(&self.permits).try_acquire_owned().ok()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn in_flight(&self) -> usize {
        self.limit.saturating_sub(self.permits.available_permits())
    }
}

/// Extractor holding one admission slot for the lifetime of the handler.
pub struct AdmissionPermit(#[allow(dead_code)] OwnedSemaphorePermit);

#[async_trait]
impl FromRequestParts<GatewayState> for AdmissionPermit {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &GatewayState,
    ) -> Result<Self, Self::Rejection> {
        match state.admission.try_acquire() {
            Some(permit) => Ok(AdmissionPermit(permit)),
            None => {
                let err = ApiError(InkwizError::Overloaded);
                err.log();
                Err(err)
            }
        }
    }
}
