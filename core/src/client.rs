//! One method per Zillow web service endpoint.
//!
//! # Design
//! Each operation is split the same way: a `build_*` method turns typed
//! parameters into the full request URL without touching the network, and
//! the operation method hands that URL to the client's `Transport`.
//! The transport is created on first use and cached for the life of the
//! client. Errors from the transport are returned as they are.

use crate::config::ClientConfig;
use crate::error::{ConfigError, Result};
use crate::query::QueryUrl;
use crate::response::ServiceResponse;
use crate::transport::Transport;
use crate::types::{
    AddressQuery, ChartQuery, CompsQuery, DemographicsQuery, MonthlyPaymentsQuery,
    RateSummaryQuery, RegionChartQuery, RegionChildrenQuery,
};

/// Remote endpoints, one per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SearchResults,
    Zestimate,
    Chart,
    Comps,
    Demographics,
    RegionChildren,
    RegionChart,
    RateSummary,
    MonthlyPayments,
    DeepSearchResults,
    DeepComps,
    UpdatedPropertyDetails,
}

impl Endpoint {
    pub const ALL: [Endpoint; 12] = [
        Endpoint::SearchResults,
        Endpoint::Zestimate,
        Endpoint::Chart,
        Endpoint::Comps,
        Endpoint::Demographics,
        Endpoint::RegionChildren,
        Endpoint::RegionChart,
        Endpoint::RateSummary,
        Endpoint::MonthlyPayments,
        Endpoint::DeepSearchResults,
        Endpoint::DeepComps,
        Endpoint::UpdatedPropertyDetails,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::SearchResults => "GetSearchResults.htm",
            Endpoint::Zestimate => "GetZestimate.htm",
            Endpoint::Chart => "GetChart.htm",
            Endpoint::Comps => "GetComps.htm",
            Endpoint::Demographics => "GetDemographics.htm",
            Endpoint::RegionChildren => "GetRegionChildren.htm",
            Endpoint::RegionChart => "GetRegionChart.htm",
            Endpoint::RateSummary => "GetRateSummary.htm",
            Endpoint::MonthlyPayments => "GetMonthlyPayments.htm",
            Endpoint::DeepSearchResults => "GetDeepSearchResults.htm",
            Endpoint::DeepComps => "GetDeepComps.htm",
            Endpoint::UpdatedPropertyDetails => "GetUpdatedPropertyDetails.htm",
        }
    }
}

/// Client for the Zillow web service.
///
/// Holds the ZWS ID and a lazily created `Transport`. Operations take
/// `&mut self`, so a client is used by one caller at a time; give each
/// worker its own client or wrap it in a `Mutex`.
#[derive(Debug)]
pub struct ZillowClient {
    config: ClientConfig,
    transport: Option<Transport>,
}

impl ZillowClient {
    pub fn new(zws_id: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(zws_id))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    /// Build a client from `ZWS_ID` and the optional overrides in the
    /// environment.
    pub fn factory() -> std::result::Result<Self, ConfigError> {
        Ok(Self::with_config(ClientConfig::from_env()?))
    }

    pub fn zws_id(&self) -> &str {
        &self.config.zws_id
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// The cached transport, created on first call.
    pub fn transport(&mut self) -> &mut Transport {
        let config = &self.config;
        self.transport
            .get_or_insert_with(|| Transport::with_config(&config.transport_config()))
    }

    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    fn url(&self, endpoint: Endpoint) -> QueryUrl {
        QueryUrl::new(&self.config.base_url, endpoint.path(), &self.config.zws_id)
    }

    // --- request builders ---

    pub fn build_search_results(&self, query: &AddressQuery) -> String {
        self.address_url(Endpoint::SearchResults, query)
    }

    pub fn build_zestimate(&self, query: &AddressQuery) -> String {
        self.address_url(Endpoint::Zestimate, query)
    }

    pub fn build_chart(&self, query: &ChartQuery) -> String {
        self.url(Endpoint::Chart)
            .param("zpid", query.zpid)
            .param("unit-type", query.unit_type)
            .param("width", query.width)
            .param("height", query.height)
            .param("duration", query.duration)
            .finish()
    }

    pub fn build_comps(&self, query: &CompsQuery) -> String {
        self.comps_url(Endpoint::Comps, query)
    }

    pub fn build_demographics(&self, query: &DemographicsQuery) -> String {
        self.url(Endpoint::Demographics)
            .param("regionid", query.region_id)
            .param("state", query.state.as_deref())
            .param("city", query.city.as_deref())
            .param("neighborhood", query.neighborhood.as_deref())
            .param("zip", query.zip.as_deref())
            .finish()
    }

    pub fn build_region_children(&self, query: &RegionChildrenQuery) -> String {
        self.url(Endpoint::RegionChildren)
            .param("regionid", query.region_id)
            .param("state", query.state.as_deref())
            .param("county", query.county.as_deref())
            .param("city", query.city.as_deref())
            .param("childtype", query.child_type)
            .finish()
    }

    pub fn build_region_chart(&self, query: &RegionChartQuery) -> String {
        self.url(Endpoint::RegionChart)
            .param("city", query.city.as_deref())
            .param("state", query.state.as_deref())
            .param("neighborhood", query.neighborhood.as_deref())
            .param("zip", query.zip.as_deref())
            .param("unit-type", query.unit_type)
            .param("width", query.width)
            .param("height", query.height)
            .param("chartDuration", query.duration)
            .finish()
    }

    pub fn build_rate_summary(&self, query: &RateSummaryQuery) -> String {
        self.url(Endpoint::RateSummary)
            .param("state", query.state.as_deref())
            .param("output", query.output)
            .param("callback", query.callback.as_deref())
            .finish()
    }

    pub fn build_monthly_payments(&self, query: &MonthlyPaymentsQuery) -> String {
        self.url(Endpoint::MonthlyPayments)
            .param("price", query.price)
            .param("down", query.down)
            .param("dollarsdown", query.dollars_down)
            .param("zip", query.zip.as_deref())
            .param("output", query.output)
            .param("callback", query.callback.as_deref())
            .finish()
    }

    pub fn build_deep_search_results(&self, query: &AddressQuery) -> String {
        self.address_url(Endpoint::DeepSearchResults, query)
    }

    pub fn build_deep_comps(&self, query: &CompsQuery) -> String {
        self.comps_url(Endpoint::DeepComps, query)
    }

    pub fn build_updated_property_details(&self, zpid: Option<u64>) -> String {
        self.url(Endpoint::UpdatedPropertyDetails)
            .param("zpid", zpid)
            .finish()
    }

    fn address_url(&self, endpoint: Endpoint, query: &AddressQuery) -> String {
        self.url(endpoint)
            .param("address", query.address.as_deref())
            .param("citystatezip", query.citystatezip.as_deref())
            .finish()
    }

    fn comps_url(&self, endpoint: Endpoint, query: &CompsQuery) -> String {
        self.url(endpoint)
            .param("zpid", query.zpid)
            .param("count", query.count)
            .finish()
    }

    // --- operations ---

    /// Properties matching an address, with basic elements set.
    pub fn search_results(&mut self, query: &AddressQuery) -> Result<ServiceResponse> {
        let url = self.build_search_results(query);
        self.transport().fetch(&url)
    }

    pub fn zestimate(&mut self, query: &AddressQuery) -> Result<ServiceResponse> {
        let url = self.build_zestimate(query);
        self.transport().fetch(&url)
    }

    /// URL of a historical Zestimate chart image for a property.
    pub fn chart(&mut self, query: &ChartQuery) -> Result<ServiceResponse> {
        let url = self.build_chart(query);
        self.transport().fetch(&url)
    }

    pub fn comps(&mut self, query: &CompsQuery) -> Result<ServiceResponse> {
        let url = self.build_comps(query);
        self.transport().fetch(&url)
    }

    /// Market, affordability and demographic data for a region.
    pub fn demographics(&mut self, query: &DemographicsQuery) -> Result<ServiceResponse> {
        let url = self.build_demographics(query);
        self.transport().fetch(&url)
    }

    pub fn region_children(&mut self, query: &RegionChildrenQuery) -> Result<ServiceResponse> {
        let url = self.build_region_children(query);
        self.transport().fetch(&url)
    }

    pub fn region_chart(&mut self, query: &RegionChartQuery) -> Result<ServiceResponse> {
        let url = self.build_region_chart(query);
        self.transport().fetch(&url)
    }

    /// Current and week-old mortgage rates per loan type.
    pub fn rate_summary(&mut self, query: &RateSummaryQuery) -> Result<ServiceResponse> {
        let url = self.build_rate_summary(query);
        self.transport().fetch(&url)
    }

    pub fn monthly_payments(&mut self, query: &MonthlyPaymentsQuery) -> Result<ServiceResponse> {
        let url = self.build_monthly_payments(query);
        self.transport().fetch(&url)
    }

    /// Like `search_results`, plus lot size, year built, beds, baths and
    /// last sale details.
    pub fn deep_search_results(&mut self, query: &AddressQuery) -> Result<ServiceResponse> {
        let url = self.build_deep_search_results(query);
        self.transport().fetch(&url)
    }

    pub fn deep_comps(&mut self, query: &CompsQuery) -> Result<ServiceResponse> {
        let url = self.build_deep_comps(query);
        self.transport().fetch(&url)
    }

    /// Home facts edited by the owner or agent.
    pub fn updated_property_details(&mut self, zpid: Option<u64>) -> Result<ServiceResponse> {
        let url = self.build_updated_property_details(zpid);
        self.transport().fetch(&url)
    }
}
