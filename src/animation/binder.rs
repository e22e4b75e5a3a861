//! Binding resolution: turning the document's flat binding list into
//! per-model lists.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::document::{ActionBinding, Document};

pub struct Binder;

impl Binder {
    /// Attaches every binding to the model it names.
    ///
    /// Bindings are grouped by `model_name` with their relative document
    /// order preserved, then each model's list is *replaced* with its
    /// group, so resolving twice is the same as resolving once. A model
    /// nothing binds to gets an empty list and stays static; a binding
    /// naming an unknown model is logged and dropped. The document's
    /// master binding list is left untouched.
    pub fn resolve(document: &mut Document) {
        let mut groups: FxHashMap<&str, SmallVec<[ActionBinding; 2]>> = FxHashMap::default();
        for binding in &document.bindings {
            groups
                .entry(binding.model_name.as_str())
                .or_default()
                .push(binding.clone());
        }

        for info in &mut document.models {
            info.bindings = groups.remove(info.name.as_str()).unwrap_or_default();
        }

        for name in groups.keys() {
            log::warn!("binding targets unknown model '{name}'");
        }
    }
}
