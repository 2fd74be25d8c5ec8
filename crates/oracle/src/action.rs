/// Control actions an observer can return during an oracle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current trial and report the trials run so far.
    StopEarly,
}
