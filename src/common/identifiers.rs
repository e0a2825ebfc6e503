//! Slug generation and duplicate id resolution
//!
//! Record ids are slugs of human-readable names. Within one allocation
//! scope the first record keeps its slug and later collisions receive a
//! `_dupeN` suffix, N counting per base slug from 2.

use crate::constants::FALLBACK_ID;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use tracing::debug;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static UNSAFE_CHAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_]").unwrap());
static UNDERSCORE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Convert a name into a lowercase `[a-z0-9_]` identifier
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let underscored = WHITESPACE_RUN.replace_all(&lowered, "_");
    let safe = UNSAFE_CHAR.replace_all(&underscored, "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&safe, "_");
    let stripped = collapsed.trim_matches('_');

    if stripped.is_empty() {
        FALLBACK_ID.to_string()
    } else {
        stripped.to_string()
    }
}

/// Append the duplicate suffix to a base id
pub fn dupe_suffix(base_id: &str, dupe_index: usize) -> String {
    format!("{}_dupe{}", base_id, dupe_index)
}

/// Result of asking the allocator for an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    /// The base id was free
    Fresh(String),
    /// The base id was taken; `assigned` carries the suffix
    Renamed { base: String, assigned: String },
}

impl Allocation {
    pub fn id(&self) -> &str {
        match self {
            Allocation::Fresh(id) => id,
            Allocation::Renamed { assigned, .. } => assigned,
        }
    }

    pub fn into_id(self) -> String {
        match self {
            Allocation::Fresh(id) => id,
            Allocation::Renamed { assigned, .. } => assigned,
        }
    }
}

/// Tracks ids handed out within one scope
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    used: HashSet<String>,
    base_counts: HashMap<String, usize>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `base_id`, or the next free `_dupeN` variant of it
    pub fn allocate(&mut self, base_id: &str) -> Allocation {
        if self.used.insert(base_id.to_string()) {
            self.base_counts.insert(base_id.to_string(), 1);
            return Allocation::Fresh(base_id.to_string());
        }

        let count = self.base_counts.entry(base_id.to_string()).or_insert(1);
        let assigned = loop {
            *count += 1;
            let candidate = dupe_suffix(base_id, *count);
            if !self.used.contains(&candidate) {
                break candidate;
            }
        };
        self.used.insert(assigned.clone());

        debug!("Id collision on {}, assigned {}", base_id, assigned);

        Allocation::Renamed {
            base: base_id.to_string(),
            assigned,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
