//! Function definition extraction.
//!
//! A line-oriented scanner, kept regex-based for fidelity to the behaviour
//! the rest of the toolchain expects: the first `)` closes a parameter
//! list, and nested parentheses or multi-line signatures are not
//! understood. Parsing is a pure function of the source text, so results
//! are memoized in a process-wide bounded cache.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use super::signature::{DefinitionIndex, MethodSignature};

/// Distinct source texts remembered before the oldest entry is evicted.
/// Validation-time call volume is tiny; this only guards long-lived
/// processes churning through many templates.
const CACHE_CAPACITY: usize = 64;

lazy_static! {
    /// `def` / `async def`, an identifier, a flat parameter list, an
    /// optional return annotation, and the trailing colon.
    static ref FUNCTION_DEF: Regex =
        Regex::new(r"(async def|def)\s+([a-zA-Z_]\w*)\s*\(([^)]*)\)\s*[->]*.*:").unwrap();

    static ref INDEX_CACHE: Mutex<IndexCache> = Mutex::new(IndexCache::new(CACHE_CAPACITY));
}

/// Extract every function definition from `source`.
///
/// Byte-identical source always yields the same index; repeated calls hit
/// the cache instead of re-scanning. A concurrent race can compute the same
/// index twice, which wastes a scan but never disagrees on the value — for
/// the same reason a poisoned cache lock is safe to recover.
pub fn extract_definitions(source: &str) -> Arc<DefinitionIndex> {
    {
        let cache = INDEX_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(index) = cache.get(source) {
            trace!(definitions = index.len(), "definition cache hit");
            return index;
        }
    }

    // Scan outside the lock so a slow parse never blocks other callers.
    let index = Arc::new(parse_definitions(source));
    trace!(definitions = index.len(), "definition cache miss");

    INDEX_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(source.to_owned(), Arc::clone(&index));

    index
}

/// Single scan of the source text. Later definitions of a name overwrite
/// earlier ones via plain index insertion.
fn parse_definitions(source: &str) -> DefinitionIndex {
    let mut index = DefinitionIndex::new();
    for caps in FUNCTION_DEF.captures_iter(source) {
        let name = &caps[2];
        let raw_parameters = caps[3].split(',').map(str::to_owned).collect();
        index.insert(MethodSignature::new(name, raw_parameters));
    }
    index
}

/// Bounded memoization of parsed indexes, keyed by the full source text.
/// Eviction is insertion-order: when full, the oldest entry goes first.
struct IndexCache {
    capacity: usize,
    entries: HashMap<String, Arc<DefinitionIndex>>,
    order: VecDeque<String>,
}

impl IndexCache {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    fn get(&self, source: &str) -> Option<Arc<DefinitionIndex>> {
        self.entries.get(source).cloned()
    }

    fn insert(&mut self, source: String, index: Arc<DefinitionIndex>) {
        // A racing caller may have inserted the same key already; both
        // computed the same value, so keeping the first is fine.
        if self.entries.contains_key(&source) {
            return;
        }
        if self.entries.len() == self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(source.clone());
        self.entries.insert(source, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_sync_and_async_definitions() {
        let source = "def alpha():\n    pass\n\nasync def beta(x, y):\n    pass\n";
        let index = parse_definitions(source);

        assert!(index.contains("alpha"));
        assert!(index.contains("beta"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn raw_parameters_are_comma_split_text() {
        let source = "def handler(request, *, retries=3):\n    pass\n";
        let index = parse_definitions(source);

        let sig = index.get("handler").unwrap();
        assert_eq!(sig.raw_parameters(), ["request", " *", " retries=3"]);
    }

    #[test]
    fn empty_parameter_list_yields_single_empty_item() {
        // str::split on "" produces one empty item; preserved behaviour.
        let index = parse_definitions("def noop():\n    pass\n");
        assert_eq!(index.get("noop").unwrap().raw_parameters(), [""]);
    }

    #[test]
    fn last_definition_wins_on_duplicate_names() {
        let source = "def run(a):\n    pass\n\ndef run(b):\n    pass\n";
        let index = parse_definitions(source);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("run").unwrap().raw_parameters(), ["b"]);
    }

    #[test]
    fn return_annotations_are_tolerated() {
        let source = "def answer() -> int:\n    return 42\n";
        assert!(parse_definitions(source).contains("answer"));
    }

    #[test]
    fn names_starting_with_digits_are_not_definitions() {
        let source = "def 1bad():\n    pass\n";
        assert!(parse_definitions(source).is_empty());
    }

    #[test]
    fn unparseable_source_yields_empty_index() {
        assert!(parse_definitions("not code at all }{").is_empty());
        assert!(parse_definitions("").is_empty());
    }

    #[test]
    fn repeated_extraction_is_idempotent() {
        let source = "def stable(x):\n    pass\n";
        let first = extract_definitions(source);
        let second = extract_definitions(source);

        assert_eq!(*first, *second);
        // Second call must come from the cache: same allocation.
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn cache_evicts_oldest_when_full() {
        let mut cache = IndexCache::new(2);
        cache.insert("a".into(), Arc::new(DefinitionIndex::new()));
        cache.insert("b".into(), Arc::new(DefinitionIndex::new()));
        cache.insert("c".into(), Arc::new(DefinitionIndex::new()));

        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn cache_insert_keeps_first_value_on_duplicate_key() {
        let mut cache = IndexCache::new(2);
        let mut populated = DefinitionIndex::new();
        populated.insert(MethodSignature::new("x", vec![]));

        cache.insert("k".into(), Arc::new(populated.clone()));
        cache.insert("k".into(), Arc::new(DefinitionIndex::new()));

        assert_eq!(*cache.get("k").unwrap(), populated);
        assert_eq!(cache.order.len(), 1);
    }
}
