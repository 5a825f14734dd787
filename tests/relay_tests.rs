// Host-side tests for the email relay request and status mapping.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod validation {
        include!("../src/core/validation.rs");
    }
    pub mod relay {
        include!("../src/core/relay.rs");
    }
}

use core::relay::*;
use core::validation::ContactForm;
use std::collections::HashMap;

fn sample() -> ContactForm {
    ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello there".into(),
        message: "Quote: \"hi\"\nbye".into(),
    }
}

#[test]
fn success_range_is_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert!(check_status(302).is_err());
}

#[test]
fn statuses_map_to_visitor_messages() {
    assert_eq!(RelayError::from_status(400), RelayError::BadRequest);
    assert_eq!(RelayError::from_status(401), RelayError::Unauthorized);
    assert_eq!(RelayError::from_status(404), RelayError::NotFound);
    assert_eq!(RelayError::from_status(429), RelayError::RateLimited);
    assert_eq!(RelayError::from_status(503), RelayError::Server(503));
    assert_eq!(RelayError::from_status(418), RelayError::Other(Some(418)));

    assert_eq!(
        RelayError::RateLimited.to_string(),
        "Too many requests. Please wait a moment and try again."
    );
    assert_eq!(RelayError::Server(500).to_string(), "Server error. Please try again later.");
    assert_eq!(
        RelayError::Other(None).to_string(),
        "Failed to send message. Please try again or email me directly."
    );
    assert_eq!(
        RelayError::Unexpected("boom".into()).to_string(),
        "Unexpected error occurred. Please try again."
    );
}

#[test]
fn request_body_carries_ids_and_template_params() {
    let relay = RelayConfig::default();
    let body = relay.request_body(&sample()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["service_id"], "service_e38iyv4");
    assert_eq!(json["template_id"], "template_3nyenng");
    assert_eq!(json["user_id"], "dQmrhnlupg0TUCIgL");
    let params = &json["template_params"];
    assert_eq!(params["from_name"], "Ada");
    assert_eq!(params["from_email"], "ada@example.com");
    assert_eq!(params["reply_to"], "ada@example.com");
    assert_eq!(params["subject"], "Hello there");
    assert_eq!(params["message"], "Quote: \"hi\"\nbye");
    assert_eq!(params["to_name"], "Smit Malaviya");
}

#[test]
fn overrides_replace_only_non_empty_values() {
    let attrs: HashMap<&str, &str> = [("service-id", "service_abc"), ("public-key", "  ")]
        .into_iter()
        .collect();
    let relay = RelayConfig::default().with_overrides(|key| attrs.get(key).map(|v| v.to_string()));
    assert_eq!(relay.service_id, "service_abc");
    assert_eq!(relay.public_key, "dQmrhnlupg0TUCIgL");
    assert_eq!(relay.template_id, "template_3nyenng");
    assert_eq!(relay.endpoint, EMAILJS_SEND_URL);
}
