#[cfg(test)]
mod announce_tests {
    mod announce_event_tests {
        use crate::announce::enums::announce_event::AnnounceEvent;

        #[test]
        fn test_from_name_known_events() {
            assert_eq!(AnnounceEvent::from_name(Some("started")), AnnounceEvent::Started);
            assert_eq!(AnnounceEvent::from_name(Some("Stopped")), AnnounceEvent::Stopped);
            assert_eq!(AnnounceEvent::from_name(Some("COMPLETED")), AnnounceEvent::Completed);
        }

        #[test]
        fn test_from_name_absent_or_unknown() {
            assert_eq!(AnnounceEvent::from_name(None), AnnounceEvent::None);
            assert_eq!(AnnounceEvent::from_name(Some("")), AnnounceEvent::None);
            assert_eq!(AnnounceEvent::from_name(Some("paused")), AnnounceEvent::None);
        }

        #[test]
        fn test_event_serialization() {
            assert_eq!(serde_json::to_string(&AnnounceEvent::Stopped).unwrap(), "\"stopped\"");
            assert_eq!(format!("{}", AnnounceEvent::None), "none");
        }
    }

    mod announce_error_tests {
        use crate::announce::enums::announce_error::AnnounceError;
        use crate::batch::errors::QueueError;

        #[test]
        fn test_retryable_errors() {
            assert!(AnnounceError::Contention(String::from("1:2")).is_retryable());
            assert!(AnnounceError::EmissionFailure(QueueError::ConnectionError(String::from("down"))).is_retryable());
            assert!(!AnnounceError::MalformedInput(String::from("missing left")).is_retryable());
        }

        #[test]
        fn test_emission_failure_is_not_requeueable() {
            assert!(AnnounceError::Contention(String::from("1:2")).is_requeueable());
            assert!(!AnnounceError::EmissionFailure(QueueError::ConnectionError(String::from("down"))).is_requeueable());
            assert!(!AnnounceError::MalformedInput(String::from("missing left")).is_requeueable());
        }

        #[test]
        fn test_error_display() {
            let error = AnnounceError::MalformedInput(String::from("missing left"));
            assert_eq!(format!("{}", error), "Malformed input: missing left");
        }
    }

    mod announce_request_tests {
        use std::net::{IpAddr, Ipv4Addr};
        use crate::announce::enums::announce_error::AnnounceError;
        use crate::announce::enums::announce_event::AnnounceEvent;
        use crate::announce::structs::announce_request::AnnounceRequest;
        use crate::announce::structs::raw_announce::RawAnnounce;

        fn raw() -> RawAnnounce {
            RawAnnounce {
                event: Some(String::from("started")),
                peer_id: String::from("LXFCNDYyMC1hYmNkZWZnaGlqa2w="),
                ip: String::from("fwAAAQ=="),
                port: Some(String::from("6881")),
                uploaded: Some(String::from("1024")),
                downloaded: Some(String::from("2048")),
                left: Some(String::from("0")),
                agent: String::from("qBittorrent/4.6.2"),
            }
        }

        #[test]
        fn test_normalize_valid_announce() {
            let request = AnnounceRequest::normalize(&raw()).unwrap();
            assert_eq!(request.event, AnnounceEvent::Started);
            assert_eq!(request.peer_id.0, b"-qB4620-abcdefghijkl".to_vec());
            assert_eq!(request.ip_addr(), Some(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))));
            assert_eq!(request.port, 6881);
            assert_eq!(request.uploaded, 1024);
            assert_eq!(request.downloaded, 2048);
            assert!(request.is_seeder());
        }

        #[test]
        fn test_normalize_rejects_bad_peer_id_encoding() {
            let mut announce = raw();
            announce.peer_id = String::from("not base64!");
            match AnnounceRequest::normalize(&announce) {
                Err(AnnounceError::MalformedInput(message)) => assert!(message.contains("peer_id")),
                other => panic!("expected malformed input, got {:?}", other),
            }
        }

        #[test]
        fn test_normalize_rejects_bad_ip_encoding() {
            let mut announce = raw();
            announce.ip = String::from("%%%");
            assert!(matches!(AnnounceRequest::normalize(&announce), Err(AnnounceError::MalformedInput(_))));
        }

        #[test]
        fn test_normalize_rejects_missing_counter() {
            let mut announce = raw();
            announce.left = None;
            match AnnounceRequest::normalize(&announce) {
                Err(AnnounceError::MalformedInput(message)) => assert_eq!(message, "missing left"),
                other => panic!("expected malformed input, got {:?}", other),
            }
        }

        #[test]
        fn test_normalize_rejects_negative_counter() {
            let mut announce = raw();
            announce.uploaded = Some(String::from("-5"));
            assert!(matches!(AnnounceRequest::normalize(&announce), Err(AnnounceError::MalformedInput(_))));
        }

        #[test]
        fn test_normalize_rejects_port_overflow() {
            let mut announce = raw();
            announce.port = Some(String::from("70000"));
            assert!(matches!(AnnounceRequest::normalize(&announce), Err(AnnounceError::MalformedInput(_))));
        }

        #[test]
        fn test_absent_event_is_none() {
            let mut announce = raw();
            announce.event = None;
            let request = AnnounceRequest::normalize(&announce).unwrap();
            assert_eq!(request.event, AnnounceEvent::None);
            assert!(!request.is_stopping());
        }

        #[test]
        fn test_ip_addr_of_unexpected_length() {
            let mut announce = raw();
            announce.ip = String::from("AQID");
            let request = AnnounceRequest::normalize(&announce).unwrap();
            assert!(request.ip_addr().is_none());
        }
    }
}
