use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use xml::escape::escape_str_pcdata;

/// The only ZWS ID the mock accepts.
pub const VALID_ZWS_ID: &str = "X1-ZWz-mock";

pub const SAMPLE_ZPID: u64 = 48749425;

const ENDPOINTS: [&str; 12] = [
    "GetSearchResults",
    "GetZestimate",
    "GetChart",
    "GetComps",
    "GetDemographics",
    "GetRegionChildren",
    "GetRegionChart",
    "GetRateSummary",
    "GetMonthlyPayments",
    "GetDeepSearchResults",
    "GetDeepComps",
    "GetUpdatedPropertyDetails",
];

const ADDRESS_ENDPOINTS: [&str; 3] = ["GetSearchResults", "GetZestimate", "GetDeepSearchResults"];
const ZPID_ENDPOINTS: [&str; 4] = ["GetChart", "GetComps", "GetDeepComps", "GetUpdatedPropertyDetails"];

type Params = Vec<(String, String)>;

pub fn app() -> Router {
    Router::new().route("/webservice/{endpoint}", get(webservice))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Unknown endpoints behave like an outage: HTTP 500 with a plain-text body.
async fn webservice(Path(endpoint): Path<String>, Query(params): Query<Params>) -> Response {
    let name = match endpoint.strip_suffix(".htm") {
        Some(name) if ENDPOINTS.contains(&name) => name,
        _ => {
            tracing::warn!(%endpoint, "unknown endpoint");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
    };

    let (code, text) = check_request(name, &params);
    tracing::info!(endpoint = name, code, "request");

    if param(&params, "output") == Some("json") {
        let body = format!(r#"{{"message":{{"text":"{text}","code":{code}}},"response":{{}}}}"#);
        return ([(header::CONTENT_TYPE, "application/json")], body).into_response();
    }

    let payload = if code == "0" { response_payload(name, &params) } else { String::new() };
    let body = envelope(name, &params, code, text, &payload);
    ([(header::CONTENT_TYPE, "text/xml; charset=utf-8")], body).into_response()
}

fn param<'a>(params: &'a Params, name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

fn check_request(name: &str, params: &Params) -> (&'static str, &'static str) {
    if param(params, "zws-id") != Some(VALID_ZWS_ID) {
        return ("5", "Invalid zws-id");
    }
    if ADDRESS_ENDPOINTS.contains(&name) && param(params, "address").unwrap_or("").is_empty() {
        return ("500", "Error: invalid or missing address parameter");
    }
    if ZPID_ENDPOINTS.contains(&name)
        && param(params, "zpid").and_then(|z| z.parse::<u64>().ok()).is_none()
    {
        return ("500", "Error: invalid or missing zpid parameter");
    }
    ("0", "Request successfully processed")
}

fn envelope(name: &str, params: &Params, code: &str, text: &str, payload: &str) -> String {
    let prefix = name.trim_start_matches("Get");
    let tag = format!("{prefix}:{}", prefix.to_lowercase());

    let request: String = params
        .iter()
        .filter(|(k, _)| k != "zws-id" && is_element_name(k))
        .map(|(k, v)| format!("<{k}>{}</{k}>", escape_str_pcdata(v)))
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <{tag} xmlns:{prefix}=\"http://www.zillow.com/static/xsd/{prefix}.xsd\">\
         <request>{request}</request>\
         <message><text>{}</text><code>{code}</code></message>\
         {payload}\
         </{tag}>",
        escape_str_pcdata(text)
    )
}

fn response_payload(name: &str, params: &Params) -> String {
    match name {
        "GetSearchResults" | "GetDeepSearchResults" => format!(
            "<response><results><result><zpid>{SAMPLE_ZPID}</zpid>\
             <address><street>{}</street></address></result></results></response>",
            escape_str_pcdata(param(params, "address").unwrap_or(""))
        ),
        "GetZestimate" => format!(
            "<response><zpid>{SAMPLE_ZPID}</zpid>\
             <zestimate><amount currency=\"USD\">1219500</amount></zestimate></response>"
        ),
        "GetChart" | "GetRegionChart" => format!(
            "<response><url>{}</url></response>",
            escape_str_pcdata("http://www.zillow.com/app?chartDuration=1year&chartType=partner")
        ),
        "GetComps" | "GetDeepComps" => {
            let count = param(params, "count")
                .and_then(|c| c.parse::<u64>().ok())
                .unwrap_or(1)
                .clamp(1, 25);
            let comps: String = (1..=count)
                .map(|i| format!("<comp score=\"{i}.0\"><zpid>{}</zpid></comp>", SAMPLE_ZPID + i))
                .collect();
            format!(
                "<response><properties><principal><zpid>{SAMPLE_ZPID}</zpid></principal>\
                 <comparables>{comps}</comparables></properties></response>"
            )
        }
        _ => "<response/>".to_string(),
    }
}

fn is_element_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
