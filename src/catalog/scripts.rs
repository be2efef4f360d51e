//! Script storage with suffix-fallback resolution.
//!
//! The engine asks for scripts by whatever path its card data mentions,
//! which rarely matches the key the host registered verbatim. Resolution
//! therefore tries the exact name first and then, for each `/` in the
//! name left to right, the suffix after that separator:
//! `a/b/c` is tried as `a/b/c`, then `b/c`, then `c`, stopping at the
//! first hit.

use log::{debug, warn};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Attempted lookup keys for one resolution.
///
/// Inline capacity covers the common case of a handful of separators;
/// deeper names spill to the heap rather than cutting the attempt list
/// short.
pub type ResolveAttempts<'a> = SmallVec<[&'a str; 6]>;

/// Catalog of script sources, keyed by exact registered name.
///
/// Content is arbitrary bytes and is stored verbatim at the length the
/// caller supplied: an embedded NUL is content, not a terminator.
///
/// ## Example
///
/// ```
/// use duel_bridge::catalog::ScriptCatalog;
///
/// let mut scripts = ScriptCatalog::new();
/// scripts.register("scripts/c4031.lua", b"-- Blue-Eyes".to_vec());
///
/// let found = scripts.resolve("/data/cards/scripts/c4031.lua");
/// assert_eq!(found, Some(&b"-- Blue-Eyes"[..]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptCatalog {
    scripts: FxHashMap<String, Vec<u8>>,
}

impl ScriptCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `content` verbatim under `name`, overwriting any prior entry.
    pub fn register(&mut self, name: impl Into<String>, content: Vec<u8>) {
        let name = name.into();
        debug!("register_script: {} ({} bytes)", name, content.len());
        self.scripts.insert(name, content);
    }

    /// Exact-key lookup, no fallback.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.scripts.get(name).map(Vec::as_slice)
    }

    /// Resolve a script name with suffix fallback.
    ///
    /// Returns the content of the first key that hits, or `None` if
    /// every attempt misses. A miss is recoverable; the engine treats
    /// it as "script unavailable."
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&[u8]> {
        let (content, attempts) = self.resolve_with_attempts(name);

        if content.is_none() {
            warn!("read_script: script {} not found", name);
            for tried in &attempts {
                warn!("  - tried: {}", tried);
            }
        }

        content
    }

    /// Resolve a script name, also returning every key that was tried.
    ///
    /// All attempts are recorded even past the first few separators; the
    /// diagnostic list never bounds how deep the fallback goes.
    #[must_use]
    pub fn resolve_with_attempts<'a>(
        &self,
        name: &'a str,
    ) -> (Option<&[u8]>, ResolveAttempts<'a>) {
        let mut attempts = ResolveAttempts::new();

        attempts.push(name);
        if let Some(content) = self.get(name) {
            return (Some(content), attempts);
        }

        // '/' is ASCII, so slicing just past it stays on a char boundary.
        for (pos, _) in name.match_indices('/') {
            let suffix = &name[pos + 1..];
            attempts.push(suffix);
            if let Some(content) = self.get(suffix) {
                return (Some(content), attempts);
            }
        }

        (None, attempts)
    }

    /// Number of registered scripts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}
