#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientState {
    /// No tracker selected yet; the next request runs the selection.
    #[default]
    Uninitialized,
    /// A tracker connection was established and is reused for good.
    Bound,
}
