use crate::catalog::fallback;
use crate::catalog::model::{Catalog, FruitCatalogEntry, QualityText};
use crate::ripeness::RipenessCategory;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const UNKNOWN_FRUIT: &str = "unknown";

/// Resolves per-fruit text from the catalog. Lookups are memoized for the lifetime of the
/// enricher and the cache is never invalidated.
pub struct MetadataEnricher {
    catalog: Catalog,
    cache: Mutex<HashMap<String, Option<Arc<FruitCatalogEntry>>>>,
}

impl MetadataEnricher {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn lookup(&self, fruit_type: &str) -> Option<Arc<FruitCatalogEntry>> {
        let key = fruit_type.trim().to_lowercase();

        if let Ok(cache) = self.cache.lock() {
            if let Some(cached) = cache.get(&key) {
                return cached.clone();
            }
        }

        // Resolved outside the lock. Racing first lookups compute the same value.
        let resolved = self.catalog.find(&key).cloned().map(Arc::new);

        match self.cache.lock() {
            Ok(mut cache) => cache.entry(key).or_insert(resolved).clone(),
            Err(_) => resolved,
        }
    }

    /// Catalog name in the filename, then a variant alias, then the built-in fruit list.
    /// Names only match as whole words, and the longest match in a pass wins.
    pub fn detect_fruit_type(&self, source: Option<&str>) -> String {
        let Some(source) = source else {
            return UNKNOWN_FRUIT.to_string();
        };
        let source = file_name(source).to_lowercase();

        let by_name = self
            .catalog
            .fruits
            .iter()
            .map(|entry| (entry.name.as_str(), entry.name.as_str()));
        if let Some(name) = longest_word_match(&source, by_name) {
            return name.to_string();
        }

        let by_variant = self.catalog.fruits.iter().flat_map(|entry| {
            entry
                .variants
                .iter()
                .map(move |variant| (variant.as_str(), entry.name.as_str()))
        });
        if let Some(name) = longest_word_match(&source, by_variant) {
            return name.to_string();
        }

        let by_fallback = fallback::FALLBACK_FRUITS.iter().map(|fruit| (*fruit, *fruit));
        longest_word_match(&source, by_fallback)
            .unwrap_or(UNKNOWN_FRUIT)
            .to_string()
    }

    pub fn display_name(&self, fruit_type: &str) -> String {
        match self.lookup(fruit_type) {
            Some(entry) => match &entry.display_name {
                Some(display_name) if !display_name.trim().is_empty() => display_name.clone(),
                _ => capitalize(&entry.name),
            },
            None => capitalize(fruit_type),
        }
    }

    pub fn recommendation(&self, category: RipenessCategory, fruit_type: &str) -> String {
        self.catalog_text(category, fruit_type, |entry| &entry.storage_recommendations)
            .unwrap_or_else(|| fallback::recommendation(category).to_string())
    }

    pub fn indicators(&self, category: RipenessCategory, fruit_type: &str) -> String {
        self.catalog_text(category, fruit_type, |entry| &entry.quality_indicators)
            .unwrap_or_else(|| fallback::indicators(category).to_string())
    }

    fn catalog_text(
        &self,
        category: RipenessCategory,
        fruit_type: &str,
        field: impl Fn(&FruitCatalogEntry) -> &QualityText,
    ) -> Option<String> {
        let entry = self.lookup(fruit_type)?;
        field(&*entry)
            .get(category.quality_axis())
            .map(|text| text.to_string())
    }
}

/// Candidates are `(needle, fruit name)`. Ties keep the earliest candidate.
fn longest_word_match<'a>(
    source: &str,
    candidates: impl Iterator<Item = (&'a str, &'a str)>,
) -> Option<&'a str> {
    let mut best: Option<(&str, &str)> = None;
    for (needle, name) in candidates {
        if !contains_word(source, needle) {
            continue;
        }
        if best.map_or(true, |(current, _)| needle.len() > current.len()) {
            best = Some((needle, name));
        }
    }
    best.map(|(_, name)| name)
}

/// `needle` bounded by non-letters, with an optional trailing plural "s".
fn contains_word(source: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    source.match_indices(needle).any(|(start, _)| {
        let before = source[..start].chars().next_back();
        let mut after = source[start + needle.len()..].chars();
        let after = match after.next() {
            Some('s') => after.next(),
            next => next,
        };
        !before.is_some_and(char::is_alphabetic) && !after.is_some_and(char::is_alphabetic)
    })
}

fn file_name(source: &str) -> &str {
    source.rsplit(['/', '\\']).next().unwrap_or(source)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
