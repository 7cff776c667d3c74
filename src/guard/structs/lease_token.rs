#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LeaseToken(pub String);
