use crate::catalog::VariantId;

/// Ordered multiset of variant ids, one entry per "add".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<VariantId>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: VariantId) {
        self.items.push(id);
    }

    /// Removes the most recently added entry equal to `id`.
    ///
    /// Returns `false` and leaves the cart untouched when `id` is absent.
    pub fn remove(&mut self, id: VariantId) -> bool {
        match self.items.iter().rposition(|item| *item == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[VariantId] {
        &self.items
    }
}

impl FromIterator<VariantId> for Cart {
    fn from_iter<I: IntoIterator<Item = VariantId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
