//! Event-name to hook registry.
//!
//! Uses `DashMap` so registration and lookup both take `&self`; the
//! registry is written during application startup and only read at request
//! time.

use std::sync::Arc;

use dashmap::DashMap;

use hookshot_types::delivery::WILDCARD_EVENT;

use crate::hook::Hook;

/// Ordered hook registry keyed by event name.
///
/// Within one event name, hooks keep registration order. The same hook
/// registered twice runs twice -- there is no de-duplication.
pub struct HookRegistry {
    hooks: DashMap<String, Vec<Arc<dyn Hook>>>,
}

impl HookRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            hooks: DashMap::new(),
        }
    }

    /// Append a hook to the list for `event`.
    pub fn register(&self, event: &str, hook: Arc<dyn Hook>) {
        tracing::info!(event = %event, "registered hook");
        self.hooks.entry(event.to_string()).or_default().push(hook);
    }

    /// Hooks applicable to `event`: exact matches first, then wildcard
    /// hooks, each group in registration order.
    pub fn hooks_for(&self, event: &str) -> Vec<Arc<dyn Hook>> {
        let mut selected = Vec::new();
        if let Some(exact) = self.hooks.get(event) {
            selected.extend(exact.iter().cloned());
        }
        if event != WILDCARD_EVENT {
            if let Some(any) = self.hooks.get(WILDCARD_EVENT) {
                selected.extend(any.iter().cloned());
            }
        }
        selected
    }

    /// Total number of registered hooks across all event names.
    pub fn len(&self) -> usize {
        self.hooks.iter().map(|entry| entry.value().len()).sum()
    }

    /// Check if the registry has no hooks at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use serde_json::Value;

    fn labeled(log: &Arc<Mutex<Vec<&'static str>>>, label: &'static str) -> Arc<dyn Hook> {
        let log = Arc::clone(log);
        Arc::new(move |_payload: Value| {
            let log = Arc::clone(&log);
            async move {
                log.lock().unwrap().push(label);
                anyhow::Ok(())
            }
        })
    }

    async fn run_all(registry: &HookRegistry, event: &str) {
        for hook in registry.hooks_for(event) {
            hook.call(serde_json::json!({})).await.unwrap();
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = HookRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.hooks_for("push").is_empty());
    }

    #[tokio::test]
    async fn test_registration_order_is_preserved() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = HookRegistry::new();
        registry.register("push", labeled(&log, "first"));
        registry.register("push", labeled(&log, "second"));
        registry.register("push", labeled(&log, "third"));

        run_all(&registry, "push").await;
        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_wildcard_runs_after_exact_matches() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = HookRegistry::new();
        registry.register(WILDCARD_EVENT, labeled(&log, "any"));
        registry.register("push", labeled(&log, "push"));

        run_all(&registry, "push").await;
        // Exact hooks run first even though the wildcard registered earlier
        assert_eq!(*log.lock().unwrap(), vec!["push", "any"]);
    }

    #[tokio::test]
    async fn test_duplicate_registration_runs_twice() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = HookRegistry::new();
        let hook = labeled(&log, "dup");
        registry.register("push", Arc::clone(&hook));
        registry.register("push", hook);

        run_all(&registry, "push").await;
        assert_eq!(*log.lock().unwrap(), vec!["dup", "dup"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unrelated_event_selects_only_wildcard() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = HookRegistry::new();
        registry.register("push", labeled(&log, "push"));
        registry.register(WILDCARD_EVENT, labeled(&log, "any"));

        assert_eq!(registry.hooks_for("issues").len(), 1);
        assert_eq!(registry.hooks_for("push").len(), 2);
    }
}
