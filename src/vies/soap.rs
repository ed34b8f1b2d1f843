//! SOAP 1.1 envelope for `checkVat` and parsing of its response.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::core::ViesError;

pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const CHECK_VAT_NS: &str = "urn:ec.europa.eu:taxud:vies:services:checkVat:types";

fn xml_io(e: std::io::Error) -> ViesError {
    ViesError::Parse(format!("XML write error: {e}"))
}

struct EnvelopeWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl EnvelopeWriter {
    fn new() -> Result<Self, ViesError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    fn into_string(self) -> Result<String, ViesError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| ViesError::Parse(format!("XML UTF-8 error: {e}")))
    }

    fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, ViesError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    fn start_element(&mut self, name: &str) -> Result<&mut Self, ViesError> {
        self.start_element_with_attrs(name, &[])
    }

    fn end_element(&mut self, name: &str) -> Result<&mut Self, ViesError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, ViesError> {
        self.start_element(name)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }
}

/// Build the request body for `checkVat(countryCode, vatNumber)`.
///
/// Both values are sent as given; VIES answers `INVALID_INPUT` for
/// malformed ones.
pub fn check_vat_envelope(country_code: &str, vat_number: &str) -> Result<String, ViesError> {
    let mut w = EnvelopeWriter::new()?;
    w.start_element_with_attrs(
        "soapenv:Envelope",
        &[("xmlns:soapenv", SOAP_ENV_NS), ("xmlns:urn", CHECK_VAT_NS)],
    )?;
    w.start_element("soapenv:Body")?;
    w.start_element("urn:checkVat")?;
    w.text_element("urn:countryCode", country_code)?;
    w.text_element("urn:vatNumber", vat_number)?;
    w.end_element("urn:checkVat")?;
    w.end_element("soapenv:Body")?;
    w.end_element("soapenv:Envelope")?;
    w.into_string()
}

/// Fields of a `checkVatResponse` that the checker uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckVatResponse {
    pub valid: bool,
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Parse a VIES SOAP response body.
///
/// Elements are matched by local name, so any namespace prefix works.
/// A SOAP fault becomes `ViesError::Fault` with its `faultstring`.
pub fn parse_check_vat_response(xml: &str) -> Result<CheckVatResponse, ViesError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut valid: Option<bool> = None;
    let mut resp = CheckVatResponse::default();
    let mut in_fault = false;
    let mut fault: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = std::str::from_utf8(e.local_name().as_ref())
                    .unwrap_or("")
                    .to_string();
                if name == "Fault" {
                    in_fault = true;
                }
                path.push(name);
            }
            Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"Fault" {
                    in_fault = true;
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default().to_string();
                if text.is_empty() {
                    continue;
                }
                match path.last().map(String::as_str) {
                    Some("faultstring") => fault = Some(text),
                    Some("valid") => {
                        valid = Some(match text.as_str() {
                            "true" | "1" => true,
                            "false" | "0" => false,
                            other => {
                                return Err(ViesError::Parse(format!(
                                    "unexpected <valid> value {other:?}"
                                )));
                            }
                        });
                    }
                    Some("name") => resp.name = Some(text),
                    Some("address") => resp.address = Some(text),
                    _ => {}
                }
            }
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ViesError::Parse(format!("XML parse error: {e}")));
            }
            _ => {}
        }
    }

    if in_fault {
        return Err(ViesError::Fault(
            fault.unwrap_or_else(|| "unknown SOAP fault".into()),
        ));
    }

    resp.valid = valid.ok_or_else(|| ViesError::Parse("response has no <valid> element".into()))?;
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_RESPONSE: &str = r#"<env:Envelope xmlns:env="http://schemas.xmlsoap.org/soap/envelope/"><env:Header/><env:Body><ns2:checkVatResponse xmlns:ns2="urn:ec.europa.eu:taxud:vies:services:checkVat:types"><ns2:countryCode>DK</ns2:countryCode><ns2:vatNumber>12345678</ns2:vatNumber><ns2:requestDate>2024-06-15+02:00</ns2:requestDate><ns2:valid>true</ns2:valid><ns2:name>NORDISK HANDEL ApS</ns2:name><ns2:address>Vestergade 1
1456 K&#xF8;benhavn K</ns2:address></ns2:checkVatResponse></env:Body></env:Envelope>"#;

    #[test]
    fn envelope_carries_both_inputs() {
        let xml = check_vat_envelope("DK", "12345678").unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"xmlns:urn="urn:ec.europa.eu:taxud:vies:services:checkVat:types""#));
        assert!(xml.contains("<urn:countryCode>DK</urn:countryCode>"));
        assert!(xml.contains("<urn:vatNumber>12345678</urn:vatNumber>"));
    }

    #[test]
    fn envelope_escapes_input() {
        let xml = check_vat_envelope("DE", "1<2&3").unwrap();
        assert!(xml.contains("<urn:vatNumber>1&lt;2&amp;3</urn:vatNumber>"));
    }

    #[test]
    fn parses_valid_response() {
        let resp = parse_check_vat_response(VALID_RESPONSE).unwrap();
        assert!(resp.valid);
        assert_eq!(resp.name.as_deref(), Some("NORDISK HANDEL ApS"));
        assert_eq!(
            resp.address.as_deref(),
            Some("Vestergade 1\n1456 København K")
        );
    }

    #[test]
    fn parses_invalid_number_with_empty_fields() {
        let xml = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body><checkVatResponse xmlns="urn:ec.europa.eu:taxud:vies:services:checkVat:types"><countryCode>DE</countryCode><vatNumber>000</vatNumber><requestDate>2024-06-15+02:00</requestDate><valid>false</valid><name/><address/></checkVatResponse></soap:Body></soap:Envelope>"#;
        let resp = parse_check_vat_response(xml).unwrap();
        assert!(!resp.valid);
        assert!(resp.name.is_none());
        assert!(resp.address.is_none());
    }

    #[test]
    fn fault_is_reported() {
        let xml = r#"<env:Envelope xmlns:env="http://schemas.xmlsoap.org/soap/envelope/"><env:Body><env:Fault><faultcode>env:Server</faultcode><faultstring>MS_UNAVAILABLE</faultstring></env:Fault></env:Body></env:Envelope>"#;
        match parse_check_vat_response(xml) {
            Err(ViesError::Fault(msg)) => assert_eq!(msg, "MS_UNAVAILABLE"),
            other => panic!("expected fault, got {other:?}"),
        }
    }

    #[test]
    fn missing_valid_is_a_parse_error() {
        let xml = r#"<env:Envelope xmlns:env="http://schemas.xmlsoap.org/soap/envelope/"><env:Body/></env:Envelope>"#;
        assert!(matches!(
            parse_check_vat_response(xml),
            Err(ViesError::Parse(_))
        ));
    }

    #[test]
    fn html_error_page_is_a_parse_error() {
        assert!(parse_check_vat_response("<html><body>Service Unavailable</body></html>").is_err());
    }
}
