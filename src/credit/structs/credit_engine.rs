use std::sync::Arc;
use crate::cache::traits::flag_cache::FlagCache;
use crate::credit::structs::credit_policy::CreditPolicy;
use crate::database::traits::freeleech_repository::FreeleechRepository;

#[derive(Clone)]
pub struct CreditEngine {
    pub(crate) policy: CreditPolicy,
    pub(crate) cache: Arc<dyn FlagCache>,
    pub(crate) freeleech: Arc<dyn FreeleechRepository>,
}
