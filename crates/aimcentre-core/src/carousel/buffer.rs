use crate::catalog::CatalogItem;

/// Number of identical copies rendered back to back
pub const COPIES: usize = 3;

/// Render sequence backing the infinite track: the active list repeated
/// [`COPIES`] times so the track can wrap without a visible jump.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollBuffer {
    items: Vec<CatalogItem>,
    copy_len: usize,
}

impl ScrollBuffer {
    pub fn from_items(items: &[CatalogItem]) -> Self {
        let mut buffer = Vec::with_capacity(items.len() * COPIES);
        for _ in 0..COPIES {
            buffer.extend_from_slice(items);
        }
        Self {
            items: buffer,
            copy_len: items.len(),
        }
    }

    /// Total rendered length (`COPIES * copy_len`)
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Length of a single copy, i.e. of the active item list
    #[inline]
    pub fn copy_len(&self) -> usize {
        self.copy_len
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    /// Index into the active list for any visual position.
    ///
    /// Works for positions past the rendered copies too, which lets a view
    /// draw an endless track straight from the source list.
    pub fn source_index(&self, visual_index: usize) -> Option<usize> {
        (self.copy_len > 0).then(|| visual_index % self.copy_len)
    }

    /// Item at any visual position, wrapping around the active list
    pub fn item_at(&self, visual_index: usize) -> Option<&CatalogItem> {
        self.source_index(visual_index).and_then(|i| self.items.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resolve;

    #[test]
    fn test_buffer_is_three_copies() {
        let items = resolve("IELTS", None);
        let buffer = ScrollBuffer::from_items(&items);
        assert_eq!(buffer.len(), 15);
        assert_eq!(buffer.copy_len(), 5);
        for (i, item) in buffer.iter().enumerate() {
            assert_eq!(item, &items[i % items.len()]);
        }
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = ScrollBuffer::from_items(&[]);
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.source_index(7), None);
        assert!(buffer.item_at(0).is_none());
    }

    #[test]
    fn test_source_index_wraps_past_rendered_copies() {
        let items = resolve("Special Needs", Some("Autism Level 1"));
        let buffer = ScrollBuffer::from_items(&items);
        assert_eq!(buffer.len(), 9);
        assert_eq!(buffer.source_index(4), Some(1));
        assert_eq!(buffer.source_index(100), Some(1));
        assert_eq!(buffer.item_at(100).map(|i| i.name.as_str()), Some("Academic Focus"));
    }
}
