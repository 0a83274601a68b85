use alloc::vec::Vec;

/// One entry on the ring: a stable identity plus the category it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<K, C> {
    pub key: K,
    pub category: C,
}

/// The fixed-order item sequence laid out around the ring.
///
/// A roster is built once and never mutated; the carousel only reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster<K, C> {
    items: Vec<Item<K, C>>,
}

impl<K, C> Default for Roster<K, C> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K, C> Roster<K, C> {
    pub fn from_items(items: impl IntoIterator<Item = Item<K, C>>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Flattens ordered category groups into one ring.
    ///
    /// Members keep their order inside a group and groups keep their order relative to each
    /// other, so all items of a category are contiguous.
    pub fn from_groups<G, M>(groups: G) -> Self
    where
        C: Clone,
        G: IntoIterator<Item = (C, M)>,
        M: IntoIterator<Item = K>,
    {
        let mut items = Vec::new();
        for (category, members) in groups {
            for key in members {
                items.push(Item {
                    key,
                    category: category.clone(),
                });
            }
        }
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item<K, C>> {
        self.items.get(index)
    }

    pub fn key_of(&self, index: usize) -> Option<&K> {
        self.get(index).map(|it| &it.key)
    }

    pub fn category_of(&self, index: usize) -> Option<&C> {
        self.get(index).map(|it| &it.category)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item<K, C>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item<K, C>] {
        &self.items
    }
}

impl<K, C: PartialEq> Roster<K, C> {
    /// Index of the first item in `category`, if any.
    pub fn first_index_of(&self, category: &C) -> Option<usize> {
        self.items.iter().position(|it| &it.category == category)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&C> {
        let mut out: Vec<&C> = Vec::new();
        for it in &self.items {
            if !out.contains(&&it.category) {
                out.push(&it.category);
            }
        }
        out
    }
}

impl<'a, K, C> IntoIterator for &'a Roster<K, C> {
    type Item = &'a Item<K, C>;
    type IntoIter = core::slice::Iter<'a, Item<K, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
