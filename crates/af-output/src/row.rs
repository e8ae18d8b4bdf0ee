//! Plain data row written by output backends.

/// One ant entering one node, with the node resolved to its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRow<'a> {
    pub step: u64,
    pub ant:  u32,
    pub node: &'a str,
}
