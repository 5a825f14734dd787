use crate::core::relay::{check_status, RelayConfig, RelayError};
use crate::core::validation::ContactForm;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn unexpected(e: JsValue) -> RelayError {
    RelayError::Unexpected(format!("{:?}", e))
}

/// POST the (already trimmed) form to the relay's send endpoint.
///
/// Single attempt: no retry, no timeout.
pub async fn send(relay: &RelayConfig, form: &ContactForm) -> Result<(), RelayError> {
    let body = relay
        .request_body(form)
        .map_err(|e| RelayError::Unexpected(e.to_string()))?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_body(&JsValue::from_str(&body));
    let request = web::Request::new_with_str_and_init(&relay.endpoint, &init).map_err(unexpected)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(unexpected)?;

    let window = web::window().ok_or_else(|| RelayError::Unexpected("no window".to_string()))?;
    log::info!(
        "[relay] sending via service={} template={}",
        relay.service_id,
        relay.template_id
    );
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            log::error!("[relay] transport error: {:?}", e);
            RelayError::Other(None)
        })?;
    let response: web::Response = response.dyn_into().map_err(unexpected)?;
    let status = response.status();

    let text = match response.text() {
        Ok(p) => JsFuture::from(p).await.ok().and_then(|v| v.as_string()),
        Err(_) => None,
    };
    log::info!("[relay] status={} body={:?}", status, text);
    check_status(status)
}
