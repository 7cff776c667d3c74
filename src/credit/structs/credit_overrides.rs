#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreditOverrides {
    pub personal_freeleech: bool,
    pub freeleech_token: bool,
}
