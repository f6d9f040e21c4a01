//! Bubble cache
//!
//! Hosts re-render message lists on every frame; rendering the same bubble
//! over and over (markdown conversion included) is wasted work. Caches
//! rendered bubbles keyed by message content and sender side. A hit is
//! guaranteed identical to a fresh render because rendering is pure.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::html::{render_bubble, Bubble};
use crate::markdown::MarkdownConfig;
use crate::message::{ChatMessageView, Position};

/// Cache key: (content_hash, position)
type CacheKey = (u64, Position);

/// Cached rendered bubbles
#[derive(Debug, Default)]
pub struct BubbleCache {
    cache: HashMap<CacheKey, Arc<Bubble>>,
}

impl BubbleCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached bubble for a message, rendering and storing it on a
    /// miss.
    pub fn get_or_render(
        &mut self,
        view: &ChatMessageView,
        config: &MarkdownConfig,
    ) -> Arc<Bubble> {
        let key = (content_hash(&view.text), view.position);
        self.cache
            .entry(key)
            .or_insert_with(|| Arc::new(render_bubble(view, config)))
            .clone()
    }

    /// Drop all cached bubbles
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

fn content_hash(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_matches_a_fresh_render() {
        let mut cache = BubbleCache::new();
        let config = MarkdownConfig::default();
        let view = ChatMessageView::new("```rs\nlet a = 1;\n```", Position::Right);

        let cached = cache.get_or_render(&view, &config);
        let fresh = render_bubble(&view, &config);
        assert_eq!(*cached, fresh);
    }

    #[test]
    fn second_lookup_reuses_the_entry() {
        let mut cache = BubbleCache::new();
        let config = MarkdownConfig::default();
        let view = ChatMessageView::new("hello", Position::Left);

        let first = cache.get_or_render(&view, &config);
        let second = cache.get_or_render(&view, &config);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn position_is_part_of_the_key() {
        let mut cache = BubbleCache::new();
        let config = MarkdownConfig::default();

        cache.get_or_render(&ChatMessageView::new("hello", Position::Left), &config);
        cache.get_or_render(&ChatMessageView::new("hello", Position::Right), &config);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut cache = BubbleCache::new();
        let config = MarkdownConfig::default();
        cache.get_or_render(&ChatMessageView::new("hello", Position::Left), &config);

        cache.clear();
        assert!(cache.is_empty());
    }
}
