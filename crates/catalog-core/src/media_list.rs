//! Media list — fetch a feed, decode it, notify a listener.
//!
//! Each `load` runs on its own thread. A generation counter decides which
//! worker may commit: `load` and `cancel_load` bump it, and a worker only
//! stores its tree and fires the listener while still holding the current
//! generation. The guard is held across the notification, so once
//! `cancel_load` returns no callback for the cancelled request can fire.

use std::cell::Cell;
use std::sync::Arc;
use std::thread;

use parking_lot::{ReentrantMutex, RwLock};

use crate::decoder;
use crate::effects::{HttpResponse, Transport};
use crate::error::LoadError;
use crate::models::MediaTree;

/// Receives the outcome of each load that is neither cancelled nor superseded.
///
/// Called from the load's worker thread. Exactly one method fires per such
/// load. Callbacks may call back into the `MediaList` (including `load` and
/// `cancel_load`).
pub trait MediaListListener: Send + Sync {
    fn on_loaded(&self, tree: &MediaTree);
    fn on_load_failed(&self, error: &LoadError);
}

#[derive(Debug, Clone, Copy, Default)]
struct Generation {
    current: u64,
    in_flight: bool,
}

struct Shared {
    generation: ReentrantMutex<Cell<Generation>>,
    tree: RwLock<Option<Arc<MediaTree>>>,
}

/// A feed-backed list of playable media.
pub struct MediaList {
    transport: Arc<dyn Transport>,
    listener: Arc<dyn MediaListListener>,
    shared: Arc<Shared>,
}

impl MediaList {
    pub fn new(transport: Arc<dyn Transport>, listener: Arc<dyn MediaListListener>) -> Self {
        Self {
            transport,
            listener,
            shared: Arc::new(Shared {
                generation: ReentrantMutex::new(Cell::new(Generation::default())),
                tree: RwLock::new(None),
            }),
        }
    }

    /// Media list over the ureq transport, configured from the environment.
    #[cfg(feature = "http")]
    pub fn with_http(listener: Arc<dyn MediaListListener>) -> Self {
        Self::new(
            Arc::new(crate::effects::http::UreqTransport::from_env()),
            listener,
        )
    }

    /// Start loading `url`, superseding any load already in flight.
    pub fn load(&self, url: &str) {
        let id = {
            let guard = self.shared.generation.lock();
            let mut state = guard.get();
            if state.in_flight {
                log::debug!("catalog: superseding load #{}", state.current);
            }
            state.current += 1;
            state.in_flight = true;
            guard.set(state);
            state.current
        };

        log::debug!("catalog: load #{} {}", id, url);

        let url = url.to_string();
        let transport = Arc::clone(&self.transport);
        let listener = Arc::clone(&self.listener);
        let shared = Arc::clone(&self.shared);

        thread::spawn(move || {
            let outcome = fetch(&*transport, &url);
            commit(&shared, &*listener, id, outcome);
        });
    }

    /// Abort the in-flight load, if any. No callback fires for it afterwards.
    pub fn cancel_load(&self) {
        let guard = self.shared.generation.lock();
        let mut state = guard.get();
        if state.in_flight {
            log::debug!("catalog: cancelled load #{}", state.current);
        }
        state.current += 1;
        state.in_flight = false;
        guard.set(state);
    }

    /// Most recently loaded tree.
    pub fn tree(&self) -> Option<Arc<MediaTree>> {
        self.shared.tree.read().clone()
    }

    /// Title of the most recently loaded list.
    pub fn title(&self) -> Option<String> {
        self.shared
            .tree
            .read()
            .as_ref()
            .and_then(|tree| tree.title().map(String::from))
    }

    pub fn is_loaded(&self) -> bool {
        self.shared.tree.read().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.generation.lock().get().in_flight
    }
}

impl Drop for MediaList {
    fn drop(&mut self) {
        self.cancel_load();
    }
}

/// Fetch and decode. No shared state is touched here.
fn fetch(transport: &dyn Transport, url: &str) -> Result<MediaTree, LoadError> {
    let response = transport.get(url)?;
    let body = check_response(response)?;
    Ok(decoder::decode_slice(&body)?)
}

fn check_response(response: HttpResponse) -> Result<Vec<u8>, LoadError> {
    if !response.is_success() {
        return Err(LoadError::HttpStatus(response.status));
    }
    match response.body {
        Some(body) if !body.is_empty() => Ok(body),
        _ => Err(LoadError::EmptyResponse),
    }
}

/// Store the outcome and notify, unless `id` has been cancelled or superseded.
fn commit(
    shared: &Shared,
    listener: &dyn MediaListListener,
    id: u64,
    outcome: Result<MediaTree, LoadError>,
) {
    let guard = shared.generation.lock();
    let mut state = guard.get();
    if state.current != id {
        log::debug!("catalog: dropping result of stale load #{}", id);
        return;
    }
    state.in_flight = false;
    guard.set(state);

    match outcome {
        Ok(tree) => {
            let tree = Arc::new(tree);
            *shared.tree.write() = Some(Arc::clone(&tree));
            log::debug!(
                "catalog: load #{} decoded {} items",
                id,
                tree.children(tree.root()).count()
            );
            listener.on_loaded(&tree);
        }
        Err(error) => {
            log::warn!("catalog: load #{} failed: {}", id, error);
            listener.on_load_failed(&error);
        }
    }
}
