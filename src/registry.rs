//! In-memory artifact store.
//!
//! The registry is the only process-wide mutable state in the crate. It maps
//! unguessable identifiers to packaged documents so the HTTP layer can serve
//! downloads after the translation request has returned. Entries accumulate
//! until process exit: no eviction, no persistence, no cross-process sharing.
//! That is an explicit scaling limit — a long-lived deployment wanting
//! durability replaces this component with a storage-backed one honouring
//! the same `put`/`get` contract.
//!
//! A plain `std::sync::Mutex` guards the map. The registry is never held
//! across an await point and both operations are a hash lookup plus a
//! buffer move, so an async lock would buy nothing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Opaque handle to a stored artifact.
///
/// Backed by a UUIDv4: 122 bits of randomness make enumeration infeasible,
/// which is the only access control the download endpoint has.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ArtifactId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A packaged document plus its suggested download filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Process-wide mapping from [`ArtifactId`] to [`Artifact`].
///
/// Initialised empty at startup; shared across requests behind an `Arc`.
#[derive(Debug, Default)]
pub struct ArtifactRegistry {
    entries: Mutex<HashMap<ArtifactId, Artifact>>,
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an artifact and return its freshly generated identifier.
    pub fn put(&self, artifact: Artifact) -> ArtifactId {
        let id = ArtifactId::generate();
        debug!(id = %id, filename = %artifact.filename, bytes = artifact.bytes.len(), "Registered artifact");
        self.entries
            .lock()
            .expect("artifact registry poisoned")
            .insert(id.clone(), artifact);
        id
    }

    /// Retrieve a stored artifact, if the identifier is known.
    pub fn get(&self, id: &ArtifactId) -> Option<Artifact> {
        self.entries
            .lock()
            .expect("artifact registry poisoned")
            .get(id)
            .cloned()
    }

    /// Number of stored artifacts.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("artifact registry poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
