/// Side effects the event loop performs after a state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
}
