/// Tag attached to an issued request.
///
/// Ids grow strictly with every issue; a completion is only committed while
/// its id is still the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues [`RequestId`]s and remembers the newest one.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    /// Newest issued id, `None` before the first issue.
    pub fn latest(&self) -> Option<RequestId> {
        (self.latest > 0).then_some(RequestId(self.latest))
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }
}
