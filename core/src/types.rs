//! Typed parameters for the web service operations.
//!
//! # Design
//! Every field is optional. The service treats some of them as required, but
//! that is its decision to report (as an application error), not ours.
//! Structs derive `Deserialize` so queries can be loaded from JSON fixtures
//! or configuration files.

use std::fmt;

use serde::Deserialize;

/// Chart value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Dollar,
    Percent,
}

impl UnitType {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitType::Dollar => "dollar",
            UnitType::Percent => "percent",
        }
    }
}

/// Span of historical data shown in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ChartDuration {
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "5years")]
    FiveYears,
    #[serde(rename = "10years")]
    TenYears,
}

impl ChartDuration {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartDuration::OneYear => "1year",
            ChartDuration::FiveYears => "5years",
            ChartDuration::TenYears => "10years",
        }
    }
}

/// Output format for the mortgage endpoints. Only `Xml` produces a body
/// `Transport` can parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Xml,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Json => "json",
        }
    }
}

/// Subregion level requested from `region_children`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionType {
    County,
    City,
    Zipcode,
    Neighborhood,
}

impl RegionType {
    pub fn as_str(self) -> &'static str {
        match self {
            RegionType::County => "county",
            RegionType::City => "city",
            RegionType::Zipcode => "zipcode",
            RegionType::Neighborhood => "neighborhood",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(UnitType, ChartDuration, OutputFormat, RegionType);

/// Street address lookup, used by search results, zestimate and deep search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddressQuery {
    pub address: Option<String>,
    /// City and state, zip code, or both.
    pub citystatezip: Option<String>,
}

impl AddressQuery {
    pub fn new(address: impl Into<String>, citystatezip: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            citystatezip: Some(citystatezip.into()),
        }
    }
}

/// Historical Zestimate chart for a single property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartQuery {
    pub zpid: Option<u64>,
    pub unit_type: Option<UnitType>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration: Option<ChartDuration>,
}

/// Comparable recent sales for a property. `count` ranges 1 to 25.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompsQuery {
    pub zpid: Option<u64>,
    pub count: Option<u32>,
}

impl CompsQuery {
    pub fn new(zpid: u64, count: u32) -> Self {
        Self {
            zpid: Some(zpid),
            count: Some(count),
        }
    }
}

/// Region selector for demographics: a region id, a zip code, or some
/// combination of state, city and neighborhood.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemographicsQuery {
    pub region_id: Option<u64>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub zip: Option<String>,
}

/// County and city should not be given together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegionChildrenQuery {
    pub region_id: Option<u64>,
    pub state: Option<String>,
    pub county: Option<String>,
    pub city: Option<String>,
    pub child_type: Option<RegionType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegionChartQuery {
    pub city: Option<String>,
    pub state: Option<String>,
    pub neighborhood: Option<String>,
    pub zip: Option<String>,
    pub unit_type: Option<UnitType>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration: Option<ChartDuration>,
}

/// Current mortgage rates; national averages when `state` is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RateSummaryQuery {
    pub state: Option<String>,
    pub output: Option<OutputFormat>,
    /// JSONP wrapper name, only meaningful with `OutputFormat::Json`.
    pub callback: Option<String>,
}

/// Estimated monthly payment for a loan. `down` is a percentage of `price`;
/// `dollars_down` applies when `down` is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonthlyPaymentsQuery {
    pub price: Option<u64>,
    pub down: Option<u32>,
    pub dollars_down: Option<u64>,
    pub zip: Option<String>,
    pub output: Option<OutputFormat>,
    pub callback: Option<String>,
}
