//! Error stack middleware
//!
//! When enabled, responses produced from a [`ServiceError`] are rebuilt with
//! the error's debug chain in the `stack` field. Only enabled in development.

use crate::utils::error::{ErrorResponse, ServiceError};
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{HttpResponse, ResponseError};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;

/// Error stack middleware for Actix-web
#[derive(Debug, Clone, Copy)]
pub struct ErrorStack {
    enabled: bool,
}

impl ErrorStack {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorStack
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = ErrorStackService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorStackService {
            service,
            enabled: self.enabled,
        }))
    }
}

/// Service implementation for error stack middleware
pub struct ErrorStackService<S> {
    service: S,
    enabled: bool,
}

impl<S, B> Service<ServiceRequest> for ErrorStackService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        let enabled = self.enabled;

        Box::pin(async move {
            let res = fut.await?;
            if !enabled {
                return Ok(res.map_into_left_body());
            }

            let rebuilt = res
                .response()
                .error()
                .and_then(|error| error.as_error::<ServiceError>())
                .map(|error| (error.status_code(), ErrorResponse::from_error(error, true)));

            match rebuilt {
                Some((status, body)) => {
                    let (req, _) = res.into_parts();
                    let response = HttpResponse::build(status).json(body);
                    Ok(ServiceResponse::new(req, response).map_into_right_body())
                }
                None => Ok(res.map_into_left_body()),
            }
        })
    }
}
