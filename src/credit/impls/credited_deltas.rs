use crate::credit::structs::credited_deltas::CreditedDeltas;

impl CreditedDeltas {
    pub fn is_zero(&self) -> bool {
        self.uploaded == 0 && self.downloaded == 0
    }
}
