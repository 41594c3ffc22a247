//! FILENAME: core/cellset-engine/src/server.rs
//! Adminhost server list.
//!
//! The adminhost answers `/api/v1/Servers` with `{"value": [...]}`, one
//! object per registered server. Fetching the document is left to the
//! caller; this module only turns the body into typed records.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::log_debug;

/// A server as registered with the adminhost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Host", default)]
    pub host: Option<String>,

    #[serde(rename = "IPAddress", default)]
    pub ip_address: Option<String>,

    #[serde(rename = "IPv6Address", default)]
    pub ipv6_address: Option<String>,

    #[serde(rename = "PortNumber", default)]
    pub port_number: Option<u32>,

    #[serde(rename = "ClientMessagePortNumber", default)]
    pub client_message_port_number: Option<u32>,

    #[serde(rename = "HTTPPortNumber", default)]
    pub http_port_number: Option<u32>,

    #[serde(rename = "UsingSSL", default)]
    pub using_ssl: Option<bool>,

    #[serde(rename = "AcceptingClients", default)]
    pub accepting_clients: Option<bool>,

    #[serde(rename = "SelfRegistered", default)]
    pub self_registered: Option<bool>,

    #[serde(rename = "IsLocal", default)]
    pub is_local: Option<bool>,

    #[serde(rename = "SSLCertificateID", default)]
    pub ssl_certificate_id: Option<String>,

    #[serde(rename = "SSLCertAuthority", default)]
    pub ssl_cert_authority: Option<String>,

    #[serde(rename = "SSLCertRevocationFile", default)]
    pub ssl_cert_revocation_file: Option<String>,

    #[serde(rename = "ClientExportSSLSvrCert", default)]
    pub client_export_ssl_svr_cert: Option<bool>,

    #[serde(rename = "ClientExportSSLSvrKeyID", default)]
    pub client_export_ssl_svr_key_id: Option<String>,
}

impl Server {
    /// Servers that do not report the flag are assumed to accept clients.
    pub fn accepts_clients(&self) -> bool {
        self.accepting_clients.unwrap_or(true)
    }
}

#[derive(Deserialize)]
struct ServerList {
    value: Vec<Server>,
}

/// Parses the body of an adminhost `/api/v1/Servers` response.
pub fn parse_adminhost_servers(json: &str) -> Result<Vec<Server>> {
    let list: ServerList = serde_json::from_str(json)?;
    log_debug!("ADMINHOST", "parsed {} servers", list.value.len());
    Ok(list.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellsetError;

    const RESPONSE: &str = r#"{
        "@odata.context": "$metadata#Servers",
        "value": [
            {
                "Name": "Planning Sample",
                "IPAddress": "10.0.0.12",
                "IPv6Address": "",
                "PortNumber": 12354,
                "ClientMessagePortNumber": 0,
                "HTTPPortNumber": 12354,
                "UsingSSL": true,
                "AcceptingClients": true,
                "SelfRegistered": false,
                "Host": "tm1host",
                "IsLocal": false,
                "SSLCertificateID": "tm1server",
                "SSLCertAuthority": "ibmtm1.arm",
                "SSLCertRevocationFile": "",
                "ClientExportSSLSvrCert": false,
                "ClientExportSSLSvrKeyID": ""
            },
            {
                "Name": "SData",
                "PortNumber": 8010,
                "AcceptingClients": false
            }
        ]
    }"#;

    #[test]
    fn test_parse_servers() {
        let servers = parse_adminhost_servers(RESPONSE).unwrap();
        assert_eq!(servers.len(), 2);

        let planning = &servers[0];
        assert_eq!(planning.name, "Planning Sample");
        assert_eq!(planning.ip_address.as_deref(), Some("10.0.0.12"));
        assert_eq!(planning.http_port_number, Some(12354));
        assert_eq!(planning.using_ssl, Some(true));
        assert_eq!(planning.host.as_deref(), Some("tm1host"));
        assert!(planning.accepts_clients());

        let sdata = &servers[1];
        assert_eq!(sdata.port_number, Some(8010));
        assert_eq!(sdata.http_port_number, None);
        assert!(!sdata.accepts_clients());
    }

    #[test]
    fn test_missing_value_array() {
        assert!(matches!(
            parse_adminhost_servers(r#"{"servers": []}"#),
            Err(CellsetError::Json(_))
        ));
    }

    #[test]
    fn test_empty_list() {
        assert!(parse_adminhost_servers(r#"{"value": []}"#).unwrap().is_empty());
    }
}
