use crate::config::structs::announce_config::AnnounceConfig;
use crate::credit::structs::credit_policy::CreditPolicy;

impl From<&AnnounceConfig> for CreditPolicy {
    fn from(config: &AnnounceConfig) -> CreditPolicy {
        CreditPolicy {
            global_freeleech: config.global_freeleech,
            global_double_upload: config.global_double_upload,
        }
    }
}
