use rand::seq::index;
use rand::Rng;

use super::Catalog;

/// Indexes into a [`Catalog`] drawn for a single browser render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    indexes: Vec<usize>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Resolves the selected indexes to country names, in draw order.
    pub fn names<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a str> + 'a {
        self.indexes
            .iter()
            .filter_map(move |&index| catalog.get(index))
    }
}

/// Draws `count` distinct catalog indexes, capped at the catalog size.
pub fn sample_catalog<R: Rng + ?Sized>(catalog: &Catalog, count: usize, rng: &mut R) -> Selection {
    let amount = count.min(catalog.len());
    if amount == 0 {
        return Selection::default();
    }

    Selection {
        indexes: index::sample(rng, catalog.len(), amount).into_vec(),
    }
}
