use std::sync::Mutex;

/// The one piece of display state: whatever markup is currently shown.
///
/// Every operation claims a ticket before its request goes out and commits
/// with it afterwards. Claiming bumps the region's generation, so a commit
/// from a fetch that another operation started after it is discarded instead
/// of overwriting the newer content.
#[derive(Debug, Default)]
pub struct DisplayRegion {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    content: String,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket(u64);

impl DisplayRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the region for an operation that is about to fetch.
    pub fn begin(&self) -> RenderTicket {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.generation += 1;
        RenderTicket(inner.generation)
    }

    /// Replace the region's contents, unless a later `begin` has superseded
    /// this ticket. Returns whether the markup was actually applied.
    pub fn commit(&self, ticket: RenderTicket, markup: String) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if ticket.0 != inner.generation {
            return false;
        }
        inner.content = markup;
        true
    }

    pub fn content(&self) -> String {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .content
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_with_current_ticket_replaces_content() {
        let region = DisplayRegion::new();
        let ticket = region.begin();
        assert!(region.commit(ticket, "<p>hello</p>".to_string()));
        assert_eq!(region.content(), "<p>hello</p>");
    }

    #[test]
    fn stale_commit_is_discarded() {
        let region = DisplayRegion::new();
        let first = region.begin();
        let second = region.begin();
        assert!(region.commit(second, "<p>newer</p>".to_string()));
        assert!(!region.commit(first, "<p>late arrival</p>".to_string()));
        assert_eq!(region.content(), "<p>newer</p>");
    }

    #[test]
    fn each_commit_fully_replaces_the_previous() {
        let region = DisplayRegion::new();
        let t1 = region.begin();
        region.commit(t1, "<table></table>".to_string());
        let t2 = region.begin();
        region.commit(t2, "<p>No data available.</p>".to_string());
        assert_eq!(region.content(), "<p>No data available.</p>");
    }
}
