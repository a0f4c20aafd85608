//! HTTP metadata generation

use crate::entropy::Entropy;
use crate::error::Result;
use crate::internet::data;
use crate::types::{HttpHeaderKind, HttpResponseType};

/// Generate a web protocol name (`"http"` or `"https"`)
pub fn protocol(entropy: &Entropy) -> Result<&'static str> {
    Ok(*entropy.pick("internet.web_protocols", data::WEB_PROTOCOLS)?)
}

/// Generate an HTTP request method name
pub fn http_method(entropy: &Entropy) -> Result<&'static str> {
    Ok(*entropy.pick("internet.http_methods", data::HTTP_METHODS)?)
}

/// The fixed status code list for one response class
pub fn status_codes_for(class: HttpResponseType) -> &'static [u16] {
    match class {
        HttpResponseType::Informational => data::HTTP_STATUS_INFORMATIONAL_CODES,
        HttpResponseType::Success => data::HTTP_STATUS_SUCCESS_CODES,
        HttpResponseType::Redirection => data::HTTP_STATUS_REDIRECTION_CODES,
        HttpResponseType::ClientError => data::HTTP_STATUS_CLIENT_ERROR_CODES,
        HttpResponseType::ServerError => data::HTTP_STATUS_SERVER_ERROR_CODES,
    }
}

/// Generate an HTTP status code
///
/// With a response class the pool is that class's code list. Without one the
/// draw is uniform over the union of all five lists: the class is picked
/// weighted by its list length, then a code uniformly inside it.
pub fn http_status_code(entropy: &Entropy, class: Option<HttpResponseType>) -> Result<u16> {
    let codes = match class {
        Some(class) => status_codes_for(class),
        None => {
            let classes: [(&'static [u16], u32); 5] = [
                weighted(data::HTTP_STATUS_INFORMATIONAL_CODES),
                weighted(data::HTTP_STATUS_SUCCESS_CODES),
                weighted(data::HTTP_STATUS_REDIRECTION_CODES),
                weighted(data::HTTP_STATUS_CLIENT_ERROR_CODES),
                weighted(data::HTTP_STATUS_SERVER_ERROR_CODES),
            ];
            *entropy.pick_weighted("internet.http_status_codes", &classes)?
        }
    };
    Ok(*entropy.pick("internet.http_status_codes", codes)?)
}

/// Generate an HTTP header name for the given side of the exchange
pub fn http_header(entropy: &Entropy, kind: HttpHeaderKind) -> Result<&'static str> {
    let header = match kind {
        HttpHeaderKind::Request => {
            entropy.pick("internet.http_request_headers", data::HTTP_REQUEST_HEADERS)?
        }
        HttpHeaderKind::Response => {
            entropy.pick("internet.http_response_headers", data::HTTP_RESPONSE_HEADERS)?
        }
    };
    Ok(*header)
}

/// Generate an HTTP media type
pub fn http_media_type(entropy: &Entropy) -> Result<&'static str> {
    Ok(*entropy.pick("internet.http_media_types", data::HTTP_MEDIA_TYPES)?)
}

fn weighted(codes: &'static [u16]) -> (&'static [u16], u32) {
    (codes, codes.len() as u32)
}
