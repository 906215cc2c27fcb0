use model::BillboardRecord;

use crate::api_client::BillboardApi;
use crate::error::FetchError;
use crate::request::{RequestId, RequestSequence};
use crate::status::FetchStatus;

/// What a refresh completion did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Collection replaced, error cleared
    Replaced,
    /// Collection kept, error recorded
    Failed,
    /// A newer refresh was issued meanwhile; nothing changed
    Stale,
}

/// Owner of the billboard collection.
///
/// Every refresh is split into [`AssetStore::begin_refresh`] and
/// [`AssetStore::complete_refresh`]. Only the completion of the newest issued
/// refresh is applied; a failure never discards the last accepted snapshot.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    collection: Vec<BillboardRecord>,
    status: FetchStatus,
    sequence: RequestSequence,
    loaded: bool,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last accepted collection, empty before the first successful refresh.
    pub fn current(&self) -> &[BillboardRecord] {
        &self.collection
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.status.error()
    }

    /// Whether any refresh has ever succeeded.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    pub fn find(&self, id: i64) -> Option<&BillboardRecord> {
        self.collection.iter().find(|record| record.id == id)
    }

    pub fn find_by_code(&self, billboard_id: &str) -> Option<&BillboardRecord> {
        self.collection
            .iter()
            .find(|record| record.billboard_id == billboard_id)
    }

    /// Marks a refresh as issued and returns its tag.
    pub fn begin_refresh(&mut self) -> RequestId {
        let id = self.sequence.issue();
        self.status = FetchStatus::Loading;
        log::debug!("Billboard refresh {} issued", id.value());
        id
    }

    /// Applies the result of refresh `id`, unless a newer one was issued.
    pub fn complete_refresh(
        &mut self,
        id: RequestId,
        result: Result<Vec<BillboardRecord>, FetchError>,
    ) -> RefreshOutcome {
        if !self.sequence.is_latest(id) {
            log::debug!("Discarding stale billboard refresh {}", id.value());
            return RefreshOutcome::Stale;
        }

        match result {
            Ok(collection) => {
                log::info!("Loaded {} billboards", collection.len());
                self.collection = collection;
                self.status = FetchStatus::Idle;
                self.loaded = true;
                RefreshOutcome::Replaced
            }
            Err(err) => {
                log::error!("Error loading billboards: {}", err);
                self.status = FetchStatus::Failed(err);
                RefreshOutcome::Failed
            }
        }
    }

    /// Issues, awaits and completes one refresh.
    pub async fn refresh(&mut self, api: &dyn BillboardApi) -> Result<&[BillboardRecord], FetchError> {
        let id = self.begin_refresh();
        let result = api.list_billboards().await;
        self.complete_refresh(id, result);

        match self.error() {
            Some(err) => Err(err.clone()),
            None => Ok(self.current()),
        }
    }

    /// Operator text for the current error, if any.
    pub fn error_message(&self, api_base_url: &str) -> Option<String> {
        self.error().map(|err| {
            format!(
                "Failed to load billboards: {}. Please ensure backend server is running on {}",
                err, api_base_url
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, fleet, record};

    #[test]
    fn test_empty_before_first_refresh() {
        let store = AssetStore::new();
        assert!(store.current().is_empty());
        assert!(!store.is_loading());
        assert!(!store.has_loaded());
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_loading_while_latest_pending() {
        let mut store = AssetStore::new();
        let id = store.begin_refresh();
        assert!(store.is_loading());

        assert_eq!(store.complete_refresh(id, Ok(fleet())), RefreshOutcome::Replaced);
        assert!(!store.is_loading());
        assert_eq!(store.current().len(), 4);
        assert!(store.has_loaded());
    }

    #[test]
    fn test_failure_keeps_data_and_success_clears_error() {
        let mut store = AssetStore::new();
        let first = store.begin_refresh();
        store.complete_refresh(first, Ok(fleet()));

        let second = store.begin_refresh();
        let outcome = store.complete_refresh(
            second,
            Err(FetchError::Transport("connection refused".to_string())),
        );
        assert_eq!(outcome, RefreshOutcome::Failed);
        assert_eq!(store.current(), fleet().as_slice());
        assert!(store.error().is_some());

        let replacement = vec![record(7, "B007", "Dehiwala")];
        let third = store.begin_refresh();
        store.complete_refresh(third, Ok(replacement.clone()));
        assert_eq!(store.error(), None);
        assert_eq!(store.current(), replacement.as_slice());
    }

    #[test]
    fn test_older_completion_is_discarded() {
        let mut store = AssetStore::new();
        let older = store.begin_refresh();
        let newer = store.begin_refresh();

        assert_eq!(store.complete_refresh(newer, Ok(fleet())), RefreshOutcome::Replaced);
        assert_eq!(
            store.complete_refresh(older, Ok(vec![record(9, "B009", "Kandy")])),
            RefreshOutcome::Stale
        );
        assert_eq!(store.current(), fleet().as_slice());
    }

    #[test]
    fn test_older_completion_does_not_end_loading() {
        let mut store = AssetStore::new();
        let older = store.begin_refresh();
        let _newer = store.begin_refresh();

        store.complete_refresh(older, Err(FetchError::Transport("timeout".to_string())));
        assert!(store.is_loading());
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_error_message() {
        let mut store = AssetStore::new();
        let id = store.begin_refresh();
        store.complete_refresh(id, Err(FetchError::Transport("connection refused".to_string())));

        assert_eq!(
            store.error_message("http://localhost:5000").as_deref(),
            Some(
                "Failed to load billboards: Request failed: connection refused. \
                 Please ensure backend server is running on http://localhost:5000"
            )
        );
    }

    #[test]
    fn test_find() {
        let mut store = AssetStore::new();
        let id = store.begin_refresh();
        store.complete_refresh(id, Ok(fleet()));

        assert_eq!(store.find(12).map(|r| r.billboard_id.as_str()), Some("B012"));
        assert_eq!(store.find_by_code("B002").map(|r| r.id), Some(2));
        assert!(store.find(99).is_none());
    }

    #[tokio::test]
    async fn test_refresh_through_api() {
        let api = FakeApi::default();
        api.push_billboards(Ok(fleet()));
        api.push_billboards(Err(FetchError::Application("database offline".to_string())));

        let mut store = AssetStore::new();
        assert_eq!(store.refresh(&api).await.unwrap().len(), 4);

        let err = store.refresh(&api).await.unwrap_err();
        assert_eq!(err, FetchError::Application("database offline".to_string()));
        assert_eq!(store.current().len(), 4);
        assert_eq!(api.calls(), vec!["/api/billboards", "/api/billboards"]);
    }
}
