//! Live query subscription handles.

use tokio::sync::watch;

use crate::sqlite::row_types::TaskRow;

/// Handle to a continuously-updating query over the `tasks` table.
///
/// The handle starts with an initial snapshot already available from
/// [`TaskWatch::snapshot`]. After every committed write the backing
/// task requeries and publishes a new snapshot, except when the result
/// set is byte-for-byte identical to the previous emission — unrelated
/// writes produce no notification.
///
/// Dropping the handle ends the subscription; the backing refresh task
/// exits once no receiver remains.
#[derive(Debug)]
pub struct TaskWatch {
    rx: watch::Receiver<Vec<TaskRow>>,
}

impl TaskWatch {
    pub(crate) fn new(rx: watch::Receiver<Vec<TaskRow>>) -> Self {
        Self { rx }
    }

    /// The most recently published result set.
    pub fn snapshot(&self) -> Vec<TaskRow> {
        self.rx.borrow().clone()
    }

    /// Wait for the next changed snapshot. Returns `false` if the store
    /// (and with it the publishing side) has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
