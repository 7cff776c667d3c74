use std::sync::Arc;
use log::debug;
use crate::announce::enums::announce_error::AnnounceError;
use crate::cache::flags::{freeleech_token_key, personal_freeleech_key, remember_flag};
use crate::cache::traits::flag_cache::FlagCache;
use crate::credit::structs::credit_engine::CreditEngine;
use crate::credit::structs::credit_overrides::CreditOverrides;
use crate::credit::structs::credit_policy::CreditPolicy;
use crate::credit::structs::credited_deltas::CreditedDeltas;
use crate::database::traits::freeleech_repository::FreeleechRepository;
use crate::tracker::structs::group_entry::GroupEntry;
use crate::tracker::structs::torrent_entry::TorrentEntry;

impl CreditEngine {
    pub fn new(policy: CreditPolicy, cache: Arc<dyn FlagCache>, freeleech: Arc<dyn FreeleechRepository>) -> CreditEngine {
        CreditEngine { policy, cache, freeleech }
    }

    pub fn policy(&self) -> CreditPolicy {
        self.policy
    }

    /// Looks up both grants, skipping the token once personal freeleech is known.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn resolve_overrides(&self, user_id: u64, torrent_id: u64) -> Result<CreditOverrides, AnnounceError> {
        let personal_freeleech = remember_flag(
            self.cache.as_ref(),
            &personal_freeleech_key(user_id),
            self.freeleech.personal_freeleech_exists(user_id),
        ).await?;
        if personal_freeleech {
            return Ok(CreditOverrides { personal_freeleech, freeleech_token: false });
        }
        let freeleech_token = remember_flag(
            self.cache.as_ref(),
            &freeleech_token_key(user_id, torrent_id),
            self.freeleech.freeleech_token_exists(user_id, torrent_id),
        ).await?;
        Ok(CreditOverrides { personal_freeleech, freeleech_token })
    }

    pub fn apply(&self, uploaded: u64, downloaded: u64, group: &GroupEntry, torrent: &TorrentEntry, overrides: CreditOverrides) -> CreditedDeltas {
        let freeleech = overrides.personal_freeleech
            || group.is_freeleech
            || overrides.freeleech_token
            || self.policy.global_freeleech;
        let double_upload = torrent.doubleup
            || group.is_double_upload
            || self.policy.global_double_upload;
        let credited = CreditedDeltas {
            uploaded: CreditEngine::credit_upload(uploaded, double_upload),
            downloaded: if freeleech { 0 } else { CreditEngine::credit_download(downloaded, torrent.free_percentage()) },
        };
        debug!("[CREDIT] torrent {} raw {}/{} credited {}/{}", torrent.id, uploaded, downloaded, credited.uploaded, credited.downloaded);
        credited
    }

    /// `raw * (100 - free) / 100`, with `free` capped at 100.
    pub fn credit_download(raw: u64, free: u64) -> u64 {
        let counted = 100 - u128::from(free.min(100));
        (u128::from(raw) * counted / 100) as u64
    }

    pub fn credit_upload(raw: u64, double_upload: bool) -> u64 {
        if double_upload { raw.saturating_mul(2) } else { raw }
    }
}
