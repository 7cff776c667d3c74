#[cfg(test)]
mod common_tests {
    use serde::{Deserialize, Serialize};
    use crate::common::common::{parse_log_level, truncate_agent, AGENT_MAX_LENGTH};
    use crate::common::structs::custom_error::CustomError;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Wrapped {
        #[serde(with = "crate::common::serde_base64")]
        bytes: Vec<u8>,
    }

    #[test]
    fn test_parse_log_level_known_levels() {
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
        assert_eq!(parse_log_level("trace").unwrap(), log::LevelFilter::Trace);
        assert_eq!(parse_log_level("warn").unwrap(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_parse_log_level_unknown_level() {
        let error = parse_log_level("verbose").unwrap_err();
        assert!(error.message().contains("verbose"));
    }

    #[test]
    fn test_truncate_agent_short_agent_untouched() {
        assert_eq!(truncate_agent("qBittorrent/4.6.2"), "qBittorrent/4.6.2");
    }

    #[test]
    fn test_truncate_agent_respects_char_boundary() {
        let agent = format!("{}é", "a".repeat(AGENT_MAX_LENGTH - 1));
        let truncated = truncate_agent(&agent);
        assert_eq!(truncated.len(), AGENT_MAX_LENGTH - 1);
        assert!(truncated.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_serde_base64_bytes() {
        let wrapped = Wrapped { bytes: b"-qB4620-abcdefghijkl".to_vec() };
        let json = serde_json::to_string(&wrapped).unwrap();
        assert_eq!(json, "{\"bytes\":\"LXFCNDYyMC1hYmNkZWZnaGlqa2w=\"}");
        let decoded: Wrapped = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, wrapped);
    }

    #[test]
    fn test_serde_base64_rejects_garbage() {
        let result = serde_json::from_str::<Wrapped>("{\"bytes\":\"***\"}");
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not create config.toml file");
        assert_eq!(format!("{}", error), "could not create config.toml file");
    }
}
