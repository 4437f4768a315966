use super::*;

type Partners<Id> = SmallVec<[Id; 4]>;

/// Symmetric set of colliding entity pairs.
///
/// Both orderings of a pair are stored in `pairs`. `partners` mirrors the
/// same relation per entity so purging one entity costs its degree rather
/// than a scan of the whole set.
pub(crate) struct CollisionPairs<Id> {
    pairs: FxHashSet<(Id, Id)>,
    partners: FxHashMap<Id, Partners<Id>>,
}

impl<Id: Copy + Eq + Hash> CollisionPairs<Id> {
    pub(crate) fn new() -> Self {
        Self {
            pairs: FxHashSet::default(),
            partners: FxHashMap::default(),
        }
    }

    /// Records `(a, b)` and `(b, a)`. Self pairs are ignored.
    pub(crate) fn insert(&mut self, a: Id, b: Id) {
        if a == b || !self.pairs.insert((a, b)) {
            return;
        }
        self.pairs.insert((b, a));
        self.partners.entry(a).or_default().push(b);
        self.partners.entry(b).or_default().push(a);
    }

    pub(crate) fn contains(&self, a: Id, b: Id) -> bool {
        self.pairs.contains(&(a, b))
    }

    /// Drops every pair that mentions `id`.
    pub(crate) fn purge(&mut self, id: Id) {
        let Some(partners) = self.partners.remove(&id) else {
            return;
        };
        for other in partners {
            self.pairs.remove(&(id, other));
            self.pairs.remove(&(other, id));
            if let Some(list) = self.partners.get_mut(&other) {
                list.retain(|p| *p != id);
                if list.is_empty() {
                    self.partners.remove(&other);
                }
            }
        }
    }

    pub(crate) fn partners(&self, id: Id) -> impl Iterator<Item = Id> + '_ {
        self.partners
            .get(&id)
            .into_iter()
            .flat_map(|list| list.iter().copied())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Id, Id)> + '_ {
        self.pairs.iter().copied()
    }

    /// Entry count, both orderings included.
    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }

    pub(crate) fn clear(&mut self) {
        self.pairs.clear();
        self.partners.clear();
    }
}
