//! Blocking client for the Zillow real-estate web service.
//!
//! # Overview
//! `ZillowClient` exposes one method per endpoint (search results,
//! Zestimates, charts, comps, demographics, region data, mortgage rates).
//! Each builds a query URL from typed parameters and hands it to a
//! `Transport`, which performs the GET and classifies the XML reply.
//!
//! # Design
//! - URL building is pure (`build_*`), so request shapes are testable
//!   without a network.
//! - `transport::check_response` is the single place that decides between
//!   a document, a `ZillowError::Transport` and a `ZillowError::Application`.
//! - The returned `ServiceResponse` is the raw document; interpreting the
//!   real-estate payload is left to the caller.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod response;
pub mod transport;
pub mod types;

pub use client::{Endpoint, ZillowClient};
pub use config::ClientConfig;
pub use error::{ConfigError, Result, ZillowError};
pub use http::HttpResponse;
pub use response::ServiceResponse;
pub use transport::{check_response, Transport, TransportConfig, DEFAULT_MAX_BODY_BYTES};
pub use types::{
    AddressQuery, ChartDuration, ChartQuery, CompsQuery, DemographicsQuery, MonthlyPaymentsQuery,
    OutputFormat, RateSummaryQuery, RegionChartQuery, RegionChildrenQuery, RegionType, UnitType,
};
