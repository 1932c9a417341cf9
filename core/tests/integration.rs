//! End-to-end tests against the live mock web service.
//!
//! # Design
//! Starts the mock server on a random port in a background tokio runtime,
//! then drives `ZillowClient` and `Transport` over real HTTP.

use std::net::SocketAddr;

use mock_server::{SAMPLE_ZPID, VALID_ZWS_ID};
use zillow_core::{
    AddressQuery, ChartQuery, ClientConfig, CompsQuery, MonthlyPaymentsQuery, OutputFormat, RateSummaryQuery,
    RegionChildrenQuery, RegionType, Transport, ZillowClient, ZillowError,
};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client_with_key(addr: SocketAddr, key: &str) -> ZillowClient {
    ZillowClient::with_config(ClientConfig::new(key).with_base_url(&format!("http://{addr}/webservice")))
}

#[test]
fn search_results_round_trip() {
    let addr = start_server();
    let mut client = client_with_key(addr, VALID_ZWS_ID);

    let query = AddressQuery::new("123 Main St", "Seattle, WA");
    assert!(client
        .build_search_results(&query)
        .ends_with("&address=123%20Main%20St&citystatezip=Seattle%2C%20WA"));

    let doc = client.search_results(&query).unwrap();
    assert_eq!(doc.code(), "0");
    assert_eq!(doc.text(), "Request successfully processed");
    assert_eq!(doc.text_at("request/address").as_deref(), Some("123 Main St"));
    assert_eq!(doc.text_at("request/citystatezip").as_deref(), Some("Seattle, WA"));
    assert_eq!(
        doc.text_at("response/results/result/zpid"),
        Some(SAMPLE_ZPID.to_string())
    );
}

#[test]
fn every_operation_succeeds_with_valid_parameters() {
    let addr = start_server();
    let mut client = client_with_key(addr, VALID_ZWS_ID);
    let address = AddressQuery::new("2114 Bigelow Ave", "Seattle, WA");
    let comps = CompsQuery::new(SAMPLE_ZPID, 3);

    let zestimate = client.zestimate(&address).unwrap();
    assert_eq!(zestimate.text_at("response/zestimate/amount").as_deref(), Some("1219500"));
    assert_eq!(client.deep_search_results(&address).unwrap().root().name, "deepsearchresults");

    let chart = client
        .chart(&ChartQuery {
            zpid: Some(SAMPLE_ZPID),
            ..Default::default()
        })
        .unwrap();
    assert!(chart.text_at("response/url").unwrap().contains("chartDuration=1year&chartType"));

    let comps_doc = client.comps(&comps).unwrap();
    let comparables = comps_doc.find("response/properties/comparables").unwrap();
    assert_eq!(comparables.children.len(), 3);
    assert_eq!(client.deep_comps(&comps).unwrap().root().name, "deepcomps");
    assert!(client.demographics(&Default::default()).is_ok());
    assert!(client
        .region_children(&RegionChildrenQuery {
            state: Some("wa".into()),
            child_type: Some(RegionType::County),
            ..Default::default()
        })
        .is_ok());
    assert!(client.region_chart(&Default::default()).is_ok());
    assert!(client.rate_summary(&Default::default()).is_ok());
    assert!(client
        .monthly_payments(&MonthlyPaymentsQuery { price: Some(300000), ..Default::default() })
        .is_ok());
    assert!(client.updated_property_details(Some(SAMPLE_ZPID)).is_ok());

    assert!(client.has_transport());
}

#[test]
fn invalid_key_is_application_error() {
    let addr = start_server();
    let mut client = client_with_key(addr, "not-a-key");

    let err = client.search_results(&AddressQuery::new("1 A St", "Seattle, WA")).unwrap_err();
    assert_eq!(
        err,
        ZillowError::Application {
            code: "5".to_string(),
            message: "Invalid zws-id".to_string(),
        }
    );
}

#[test]
fn missing_required_parameter_is_application_error() {
    let addr = start_server();
    let mut client = client_with_key(addr, VALID_ZWS_ID);

    let err = client.updated_property_details(None).unwrap_err();
    assert_eq!(err.code(), "500");
    assert_eq!(err.message(), "Error: invalid or missing zpid parameter");
}

#[test]
fn outage_is_transport_error() {
    let addr = start_server();
    let mut transport = Transport::new();

    let err = transport
        .fetch(&format!("http://{addr}/webservice/GetOutage.htm?zws-id=x"))
        .unwrap_err();
    assert!(matches!(err, ZillowError::Transport { status: 500, .. }));
    assert_eq!(err.message(), "500 Error");
}

#[test]
fn json_output_is_transport_error() {
    let addr = start_server();
    let mut client = client_with_key(addr, VALID_ZWS_ID);

    let err = client
        .rate_summary(&RateSummaryQuery {
            output: Some(OutputFormat::Json),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, ZillowError::Transport { status: 200, .. }));
}

#[test]
fn separate_transports_run_concurrently() {
    let addr = start_server();
    let search = format!(
        "http://{addr}/webservice/GetSearchResults.htm?zws-id={VALID_ZWS_ID}&address=1%20First%20Ave&citystatezip=98101"
    );
    let comps = format!(
        "http://{addr}/webservice/GetComps.htm?zws-id={VALID_ZWS_ID}&zpid={SAMPLE_ZPID}&count=2"
    );

    let handles: Vec<_> = [search, comps]
        .into_iter()
        .map(|url| {
            std::thread::spawn(move || {
                let mut transport = Transport::new();
                (0..5)
                    .map(|_| transport.fetch(&url).unwrap().root().name.clone())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results[0].iter().all(|name| name == "searchresults"));
    assert!(results[1].iter().all(|name| name == "comps"));
}
