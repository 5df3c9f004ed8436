use ahash::AHashSet;
use tracing::trace;

/// Placeholder assigned to outputs nobody reads.
pub const DISCARD_ID: &str = "_";

/// The set of identifiers taken during one transpilation run.
///
/// Variables and classes share this namespace, so a variable can never shadow
/// a callee. The scope only ever grows.
#[derive(Debug, Clone)]
pub struct NamingScope {
    ids: AHashSet<String>,
}

impl Default for NamingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingScope {
    pub fn new() -> Self {
        let mut ids = AHashSet::new();
        ids.insert(DISCARD_ID.to_string());
        Self { ids }
    }

    /// Reserves `id` as-is. Declaring an existing id is a no-op, which is what
    /// lets several nodes of one type share a class name.
    pub fn declare_id(&mut self, id: &str) -> String {
        if !self.ids.contains(id) {
            trace!(id, "declared identifier");
            self.ids.insert(id.to_string());
        }
        id.to_string()
    }

    /// Reserves a fresh identifier derived from `name`, suffixing `2`, `3`, …
    /// until an unused one is found.
    pub fn assign_id(&mut self, name: &str) -> String {
        let mut id = name.to_string();
        let mut suffix = 2u64;
        while self.ids.contains(&id) {
            id = format!("{}{}", name, suffix);
            suffix += 1;
        }
        trace!(name, id = %id, "assigned identifier");
        self.ids.insert(id.clone());
        id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
