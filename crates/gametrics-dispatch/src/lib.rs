//! Asynchronous HTTP dispatch for the Gametrics SDK.
//!
//! Provides the [`Dispatcher`] trait that abstracts "perform one HTTP
//! exchange", the production [`HttpDispatcher`] built on `reqwest`, and
//! the [`Response`] model every exchange settles with.
//!
//! The one rule of this layer: **a dispatch never fails at the
//! signature level.** Transport errors, bad bodies, and HTTP failures
//! all come back inside the [`Response`], because the caller's task has
//! already suspended on the exchange and must be resumed exactly once,
//! with something it can inspect.

#![allow(async_fn_in_trait)]

mod error;
mod http_dispatcher;
mod response;

pub use error::DispatchError;
pub use http_dispatcher::{
    Dispatcher, HttpDispatcher, HttpDispatcherBuilder, Request,
};
pub use response::Response;
