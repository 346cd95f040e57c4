//! Outbound request construction.
//!
//! The backend expects a browser-originated form submission. The fixed
//! boundary token, header values and part ordering reproduce that shape
//! exactly; the backend may validate any of them, so none may be regenerated
//! or reordered per request.

use crate::domain::model::{SupportTicket, TicketRequest};
use crate::utils::error::{Result, SubmissionError};
use url::Url;

/// Fixed multipart boundary token, never regenerated.
pub const BOUNDARY: &str = "----WebKitFormBoundaryq0qKH8apUNfyKGNp";

/// Path of the single supported endpoint, relative to the base.
pub const TICKET_PATH: &str = "/en/customer/create-ticket/";

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-GB,en;q=0.9";
const PRIORITY: &str = "u=0, i";
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Safari/605.1.15";

/// Build the complete request descriptor for one ticket. Pure function of
/// (ticket, endpoint); fails without any network contact when the endpoint
/// does not form a valid absolute URL.
pub fn build_ticket_request(ticket: &SupportTicket, base_endpoint: &str) -> Result<TicketRequest> {
    let full_url = format!("{base_endpoint}{TICKET_PATH}");
    let url = Url::parse(&full_url)
        .map_err(|_| SubmissionError::TransportError("Invalid URL".to_string()))?;

    let headers = vec![
        ("Accept", ACCEPT.to_string()),
        ("Accept-Language", ACCEPT_LANGUAGE.to_string()),
        ("Priority", PRIORITY.to_string()),
        ("User-Agent", USER_AGENT.to_string()),
        ("Content-Type", format!("multipart/form-data; boundary={BOUNDARY}")),
        ("Referer", base_endpoint.to_string()),
    ];

    Ok(TicketRequest {
        url,
        headers,
        body: encode_form_body(ticket),
    })
}

/// Encode the five form parts in the fixed order the backend expects,
/// values inserted verbatim with no escaping.
fn encode_form_body(ticket: &SupportTicket) -> Vec<u8> {
    let fields = [
        ("name", ticket.name.as_str()),
        ("from", ticket.email.as_str()),
        ("type", ticket.ticket_type.as_str()),
        ("subject", ticket.subject.as_str()),
        ("reply", ticket.message.as_str()),
    ];

    let mut body = String::new();
    for (field, value) in fields {
        body.push_str("--");
        body.push_str(BOUNDARY);
        body.push_str("\r\n");
        body.push_str("Content-Disposition: form-data; name=\"");
        body.push_str(field);
        body.push_str("\"\r\n\r\n");
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str("--");
    body.push_str(BOUNDARY);
    body.push_str("--\r\n");
    body.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ticket() -> SupportTicket {
        SupportTicket::new(
            "John Doe",
            "john@example.com",
            "2",
            "Test",
            "Test message",
        )
    }

    #[test]
    fn body_matches_wire_format_exactly() {
        let request = build_ticket_request(&sample_ticket(), "https://support.example.com").unwrap();
        let body = String::from_utf8(request.body).unwrap();

        let expected = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nJohn Doe\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"from\"\r\n\r\njohn@example.com\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"type\"\r\n\r\n2\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"subject\"\r\n\r\nTest\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"reply\"\r\n\r\nTest message\r\n\
             --{b}--\r\n",
            b = BOUNDARY
        );
        assert_eq!(body, expected);
    }

    #[test]
    fn body_has_five_parts_in_fixed_order() {
        let request = build_ticket_request(&sample_ticket(), "https://support.example.com").unwrap();
        let body = String::from_utf8(request.body).unwrap();

        let positions: Vec<usize> = ["name", "from", "type", "subject", "reply"]
            .iter()
            .map(|field| {
                body.find(&format!("name=\"{field}\""))
                    .unwrap_or_else(|| panic!("missing part {field}"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(body.matches("Content-Disposition").count(), 5);
    }

    #[test]
    fn values_are_inserted_verbatim() {
        let ticket = SupportTicket::new(
            "A & B <c>",
            "x@example.com",
            "1",
            "Subject with \"quotes\"",
            "Line one\nLine two",
        );
        let request = build_ticket_request(&ticket, "https://support.example.com").unwrap();
        let body = String::from_utf8(request.body).unwrap();

        assert!(body.contains("A & B <c>"));
        assert!(body.contains("Subject with \"quotes\""));
        assert!(body.contains("Line one\nLine two"));
    }

    #[test]
    fn url_is_base_plus_fixed_path() {
        let request = build_ticket_request(&sample_ticket(), "https://support.example.com").unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://support.example.com/en/customer/create-ticket/"
        );
    }

    #[test]
    fn empty_endpoint_is_an_invalid_url() {
        let err = build_ticket_request(&sample_ticket(), "").unwrap_err();
        assert_eq!(err, SubmissionError::TransportError("Invalid URL".to_string()));
    }

    #[test]
    fn endpoint_without_scheme_is_an_invalid_url() {
        let err = build_ticket_request(&sample_ticket(), "support.example.com").unwrap_err();
        assert_eq!(err, SubmissionError::TransportError("Invalid URL".to_string()));
    }

    #[test]
    fn headers_carry_the_fixed_browser_fingerprint() {
        let request = build_ticket_request(&sample_ticket(), "https://support.example.com").unwrap();
        let header = |name: &str| {
            request
                .headers
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
                .unwrap_or_else(|| panic!("missing header {name}"))
        };

        assert_eq!(
            header("Content-Type"),
            format!("multipart/form-data; boundary={BOUNDARY}")
        );
        assert_eq!(header("Referer"), "https://support.example.com");
        assert_eq!(header("Accept-Language"), "en-GB,en;q=0.9");
        assert_eq!(header("Priority"), "u=0, i");
        assert!(header("User-Agent").starts_with("Mozilla/5.0"));
        assert!(header("Accept").contains("text/html"));
    }
}
