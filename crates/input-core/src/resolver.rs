//! Lazy, load-once resolution of icon-set bundles.
//!
//! The default namespace is always present. Every other namespace is loaded
//! at most once per process, no matter how many widgets ask for it.

use crate::error::IconLoadError;
use crate::icon::IconRef;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{LazyLock, Mutex, MutexGuard};

/// A loadable icon-set bundle.
#[derive(Debug, PartialEq, Eq)]
pub struct IconBundle {
    pub namespace: &'static str,
    /// Module path of the bundle, relative to the icon asset root.
    pub module: &'static str,
}

/// Namespaces that can be loaded on demand.
pub const ICON_BUNDLES: &[IconBundle] = &[
    IconBundle { namespace: "av", module: "icon-sets/av-icons" },
    IconBundle { namespace: "communication", module: "icon-sets/communication-icons" },
    IconBundle { namespace: "device", module: "icon-sets/device-icons" },
    IconBundle { namespace: "editor", module: "icon-sets/editor-icons" },
    IconBundle { namespace: "hardware", module: "icon-sets/hardware-icons" },
    IconBundle { namespace: "image", module: "icon-sets/image-icons" },
    IconBundle { namespace: "maps", module: "icon-sets/maps-icons" },
    IconBundle { namespace: "notification", module: "icon-sets/notification-icons" },
    IconBundle { namespace: "social", module: "icon-sets/social-icons" },
    IconBundle { namespace: "places", module: "icon-sets/places-icons" },
];

/// Look up a namespace in [`ICON_BUNDLES`].
pub fn bundle_for(namespace: &str) -> Option<&'static IconBundle> {
    ICON_BUNDLES.iter().find(|b| b.namespace == namespace)
}

/// Like [`bundle_for`], but says why nothing was found.
pub fn find_bundle(namespace: &str) -> Result<&'static IconBundle, IconLoadError> {
    bundle_for(namespace).ok_or_else(|| IconLoadError::unknown_namespace(namespace))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// Which namespaces have been requested, and how their loads went.
///
/// Entries are never removed. Claiming a namespace checks and records under
/// a single lock acquisition, so two widgets racing for the same namespace
/// cannot both win.
#[derive(Debug, Default)]
pub struct IconResourceCache {
    entries: Mutex<HashMap<String, LoadState>>,
}

static GLOBAL_CACHE: LazyLock<IconResourceCache> = LazyLock::new(IconResourceCache::default);

impl IconResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache shared by every widget instance.
    pub fn global() -> &'static IconResourceCache {
        &GLOBAL_CACHE
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, LoadState>> {
        // A poisoned map still holds valid markers.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record `namespace` as requested with `state`. Returns `false` if it
    /// was already recorded, in which case nothing changes.
    pub fn claim(&self, namespace: &str, state: LoadState) -> bool {
        let mut entries = self.lock();
        if entries.contains_key(namespace) {
            return false;
        }
        entries.insert(namespace.to_string(), state);
        true
    }

    /// Move a recorded namespace to its final state.
    pub fn settle(&self, namespace: &str, state: LoadState) {
        self.lock().insert(namespace.to_string(), state);
    }

    pub fn state(&self, namespace: &str) -> Option<LoadState> {
        self.lock().get(namespace).copied()
    }

    /// Whether glyphs from this namespace can be drawn right now.
    pub fn is_available(&self, namespace: &str) -> bool {
        namespace == crate::icon::DEFAULT_NAMESPACE
            || self.state(namespace) == Some(LoadState::Loaded)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What the resolver decided for one icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveDecision {
    /// Default namespace, nothing to load.
    Default,
    /// Another widget already requested this namespace.
    AlreadyRequested,
    /// The caller must start loading this bundle. Already recorded as
    /// [`LoadState::Loading`].
    Load(&'static IconBundle),
    /// No bundle exists for the namespace. Recorded as failed.
    Unknown,
}

/// Decides, against a cache, whether an icon needs a bundle load.
#[derive(Debug, Clone, Copy)]
pub struct IconResolver<'a> {
    cache: &'a IconResourceCache,
}

impl IconResolver<'static> {
    pub fn global() -> Self {
        Self::new(IconResourceCache::global())
    }
}

impl<'a> IconResolver<'a> {
    pub fn new(cache: &'a IconResourceCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &'a IconResourceCache {
        self.cache
    }

    /// Synchronous check-and-record. No await happens between the lookup and
    /// the insert.
    pub fn resolve(&self, icon: &IconRef) -> ResolveDecision {
        if icon.is_default_namespace() {
            return ResolveDecision::Default;
        }
        let namespace = icon.namespace();
        match find_bundle(namespace) {
            Ok(bundle) => {
                if self.cache.claim(namespace, LoadState::Loading) {
                    tracing::debug!(namespace, module = bundle.module, "loading icon set");
                    ResolveDecision::Load(bundle)
                } else {
                    ResolveDecision::AlreadyRequested
                }
            }
            Err(e) => {
                if self.cache.claim(namespace, LoadState::Failed) {
                    tracing::warn!(icon = %icon, error = %e, "icon left blank");
                    ResolveDecision::Unknown
                } else {
                    ResolveDecision::AlreadyRequested
                }
            }
        }
    }
}

/// Fetches an icon-set bundle.
pub trait IconSetLoader {
    fn load(&self, bundle: &'static IconBundle) -> impl Future<Output = Result<(), IconLoadError>>;
}

/// Run a bundle load to completion and record the outcome.
///
/// Never fails: errors are logged and the namespace is marked failed, which
/// leaves its glyphs unresolved.
#[tracing::instrument(skip(loader, cache), fields(namespace = bundle.namespace))]
pub async fn load_icon_set<L: IconSetLoader>(
    loader: &L,
    bundle: &'static IconBundle,
    cache: &IconResourceCache,
) -> LoadState {
    let state = match loader.load(bundle).await {
        Ok(()) => {
            tracing::debug!("icon set loaded");
            LoadState::Loaded
        }
        Err(e) => {
            tracing::warn!(error = %e, "icon set failed to load; glyphs stay blank");
            LoadState::Failed
        }
    };
    cache.settle(bundle.namespace, state);
    state
}
