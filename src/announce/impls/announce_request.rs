use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crate::announce::enums::announce_error::AnnounceError;
use crate::announce::enums::announce_event::AnnounceEvent;
use crate::announce::structs::announce_request::AnnounceRequest;
use crate::announce::structs::raw_announce::RawAnnounce;
use crate::peer::structs::peer_id::PeerId;

impl AnnounceRequest {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn normalize(raw: &RawAnnounce) -> Result<AnnounceRequest, AnnounceError>
    {
        fn decode(field: &str, value: &str) -> Result<Vec<u8>, AnnounceError> {
            STANDARD.decode(value.as_bytes())
                .map_err(|e| AnnounceError::MalformedInput(format!("invalid {} encoding: {}", field, e)))
        }

        fn parse_integer<T: FromStr>(field: &str, value: &Option<String>) -> Result<T, AnnounceError> {
            let value = value.as_deref()
                .ok_or_else(|| AnnounceError::MalformedInput(format!("missing {}", field)))?;
            value.trim().parse::<T>()
                .map_err(|_| AnnounceError::MalformedInput(format!("missing or invalid {}", field)))
        }

        Ok(AnnounceRequest {
            event: AnnounceEvent::from_name(raw.event.as_deref()),
            peer_id: PeerId(decode("peer_id", &raw.peer_id)?),
            ip: decode("ip", &raw.ip)?,
            port: parse_integer::<u16>("port", &raw.port)?,
            uploaded: parse_integer::<u64>("uploaded", &raw.uploaded)?,
            downloaded: parse_integer::<u64>("downloaded", &raw.downloaded)?,
            left: parse_integer::<u64>("left", &raw.left)?,
            agent: raw.agent.clone(),
        })
    }

    pub fn is_seeder(&self) -> bool {
        self.left == 0
    }

    pub fn is_stopping(&self) -> bool {
        self.event == AnnounceEvent::Stopped
    }

    /// The ip-address as an `IpAddr`, when it holds 4 or 16 bytes.
    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self.ip.len() {
            4 => {
                let octets: [u8; 4] = self.ip.as_slice().try_into().ok()?;
                Some(IpAddr::V4(Ipv4Addr::from(octets)))
            }
            16 => {
                let octets: [u8; 16] = self.ip.as_slice().try_into().ok()?;
                Some(IpAddr::V6(Ipv6Addr::from(octets)))
            }
            _ => None,
        }
    }
}
