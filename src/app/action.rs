/// Side effects the main loop performs after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Ring the terminal bell.
    Bell,
}
