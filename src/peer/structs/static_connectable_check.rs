#[derive(Debug, Clone, Copy, Default)]
pub struct StaticConnectableCheck {
    pub connectable: bool,
}
