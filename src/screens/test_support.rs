//! Fakes shared by the screen store tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use bookbud_catalog::wire::{VolumeInfo, VolumeRecord};
use bookbud_catalog::{CatalogApi, CatalogError};

pub fn record(id: &str, title: &str) -> VolumeRecord {
    VolumeRecord {
        id: id.to_string(),
        volume_info: VolumeInfo {
            title: title.to_string(),
            ..VolumeInfo::default()
        },
    }
}

/// Catalog fake answering from queued responses.
#[derive(Default)]
pub struct StubCatalog {
    searches: Mutex<VecDeque<Result<Vec<VolumeRecord>, CatalogError>>>,
    lookups: Mutex<VecDeque<Result<VolumeRecord, CatalogError>>>,
}

impl StubCatalog {
    pub fn push_search(&self, result: Result<Vec<VolumeRecord>, CatalogError>) {
        self.searches.lock().unwrap().push_back(result);
    }

    pub fn push_lookup(&self, result: Result<VolumeRecord, CatalogError>) {
        self.lookups.lock().unwrap().push_back(result);
    }
}

#[async_trait]
impl CatalogApi for StubCatalog {
    async fn search(
        &self,
        _query: &str,
        _max_results: u32,
    ) -> Result<Vec<VolumeRecord>, CatalogError> {
        self.searches
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected search call")
    }

    async fn get_by_id(&self, _volume_id: &str) -> Result<VolumeRecord, CatalogError> {
        self.lookups
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected get_by_id call")
    }
}

type Gate = Option<oneshot::Receiver<()>>;

/// Catalog fake whose queued search responses can be held back behind a
/// oneshot gate, for exercising overlapping intents.
#[derive(Default)]
pub struct GatedCatalog {
    searches: Mutex<VecDeque<(Gate, Result<Vec<VolumeRecord>, CatalogError>)>>,
}

impl GatedCatalog {
    pub fn push_search(&self, gate: Gate, result: Result<Vec<VolumeRecord>, CatalogError>) {
        self.searches.lock().unwrap().push_back((gate, result));
    }
}

#[async_trait]
impl CatalogApi for GatedCatalog {
    async fn search(
        &self,
        _query: &str,
        _max_results: u32,
    ) -> Result<Vec<VolumeRecord>, CatalogError> {
        let (gate, result) = self
            .searches
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected search call");
        if let Some(gate) = gate {
            gate.await.ok();
        }
        result
    }

    async fn get_by_id(&self, volume_id: &str) -> Result<VolumeRecord, CatalogError> {
        Err(CatalogError::not_found(volume_id))
    }
}
