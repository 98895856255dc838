use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::SkipListConfig;
use crate::error::Result;
use crate::hash::{Key, KeyScope};
use crate::level::LevelGenerator;
use crate::node::{Node, NodeArena, NodeId};

/// Entry count above which [`HashedSkipList::retune`] recomputes the growth
/// probability.
pub const RETUNE_THRESHOLD: usize = 100;

/// Outcome of [`HashedSkipList::lookup`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Lookup {
    /// Shorter than the configured prefix length; never stored.
    TooShort,
    NotFound,
    Found,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found)
    }
}

/// Where a walk stands: on the header or on a node.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Position {
    Head,
    Node(NodeId),
}

/// Skip list of pattern strings ordered by a hashed key.
///
/// Keys only localize a search; membership is always confirmed by comparing
/// the stored string, so key collisions never produce false positives.
#[derive(Debug)]
pub struct HashedSkipList<R: Rng = ChaCha8Rng> {
    head: Vec<Option<NodeId>>,
    arena: NodeArena,
    levels: LevelGenerator<R>,
    current_level: usize,
    len: usize,
    prefix_length: usize,
    key_scope: KeyScope,
}

impl HashedSkipList<ChaCha8Rng> {
    pub fn new(max_level: usize, prefix_length: usize) -> Result<Self> {
        Self::with_config(SkipListConfig::new(max_level, prefix_length))
    }

    pub fn with_config(config: SkipListConfig) -> Result<Self> {
        config.validate()?;
        let levels = LevelGenerator::seeded(config.max_level, config.seed);
        Ok(Self::from_parts(&config, levels))
    }
}

impl Default for HashedSkipList<ChaCha8Rng> {
    fn default() -> Self {
        let config = SkipListConfig::default();
        let levels = LevelGenerator::seeded(config.max_level, config.seed);
        Self::from_parts(&config, levels)
    }
}

impl<R: Rng> HashedSkipList<R> {
    /// Build a list whose tower heights are drawn from `rng`. `config.seed` is
    /// ignored.
    pub fn with_rng(config: SkipListConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let levels = LevelGenerator::new(config.max_level, rng);
        Ok(Self::from_parts(&config, levels))
    }

    fn from_parts(config: &SkipListConfig, levels: LevelGenerator<R>) -> Self {
        Self {
            head: vec![None; config.max_level],
            arena: NodeArena::new(),
            levels,
            current_level: 0,
            len: 0,
            prefix_length: config.prefix_length,
            key_scope: config.key_scope,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tallest tower, 0 when empty.
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn max_level(&self) -> usize {
        self.levels.max_level()
    }

    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    pub fn key_scope(&self) -> KeyScope {
        self.key_scope
    }

    pub fn growth_probability(&self) -> f64 {
        self.levels.probability()
    }

    pub fn key_for(&self, s: &str) -> Key {
        self.key_scope.key(s, self.prefix_length)
    }

    /// Add a pattern. Patterns shorter than the prefix length are ignored and
    /// `false` is returned. Duplicates are stored again.
    pub fn insert(&mut self, pattern: &str) -> bool {
        if pattern.len() < self.prefix_length {
            log::trace!(
                "ignoring pattern {:?}: shorter than {} bytes",
                pattern,
                self.prefix_length
            );
            return false;
        }

        let key = self.key_for(pattern);
        let update = self.locate_predecessors(key);
        let level = self.levels.random_level();

        // fully link the new node before touching any existing one
        let mut node = Node::new(key, pattern.to_string(), level);
        for (i, pred) in update.iter().take(level).enumerate() {
            node.forward[i] = self.next(*pred, i);
        }
        let id = self.arena.alloc(node);

        for (i, pred) in update.iter().take(level).enumerate() {
            self.set_next(*pred, i, Some(id));
        }

        if level > self.current_level {
            log::debug!("list height {} -> {}", self.current_level, level);
            self.current_level = level;
        }
        self.len += 1;
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        self.lookup(text).is_found()
    }

    /// Like [`contains`](Self::contains), but tells a too-short query apart
    /// from a miss.
    pub fn lookup(&self, text: &str) -> Lookup {
        if text.len() < self.prefix_length {
            return Lookup::TooShort;
        }

        let key = self.key_for(text);
        let pred = self.descend(key, |_, _| {});

        // every node sharing the key sits in one run at level 0
        let mut current = self.next(pred, 0);
        while let Some(id) = current {
            let node = self.arena.get(id);
            if node.key != key {
                break;
            }
            if node.value == text {
                return Lookup::Found;
            }
            current = node.next(0);
        }

        Lookup::NotFound
    }

    /// Recompute the growth probability from the entry count. Below
    /// [`RETUNE_THRESHOLD`] entries this does nothing.
    pub fn retune(&mut self) {
        if self.len <= RETUNE_THRESHOLD {
            return;
        }

        let exponent = (self.len as f64).log2() / self.prefix_length as f64;
        let probability = 1.0 - 1.0 / 2f64.powf(exponent);
        log::debug!(
            "retune: {} entries, growth probability {} -> {}",
            self.len,
            self.levels.probability(),
            probability
        );
        self.levels.set_probability(probability);
    }

    /// Drop every entry. The list keeps its configuration and growth
    /// probability and can be reused.
    pub fn clear(&mut self) {
        let mut released = 0;
        let mut current = self.head[0];
        while let Some(id) = current {
            current = self.arena.get(id).next(0);
            released += 1;
        }
        debug_assert_eq!(released, self.len);
        debug_assert_eq!(released, self.arena.len());

        self.arena.clear();
        self.head.iter_mut().for_each(|link| *link = None);
        self.current_level = 0;
        self.len = 0;

        if released > 0 {
            log::debug!("cleared {} entries", released);
        }
    }

    /// Entries in level-0 order.
    pub fn iter(&self) -> Iter<'_, R> {
        self.iter_level(0)
    }

    /// Entries whose tower reaches `level`, in order. Empty above
    /// `current_level`.
    pub fn iter_level(&self, level: usize) -> Iter<'_, R> {
        Iter {
            list: self,
            current: self.head.get(level).copied().flatten(),
            level,
        }
    }

    /// Last position at each level whose successor is not below `key`.
    /// Levels at or above `current_level` report the header.
    pub(crate) fn locate_predecessors(&self, key: Key) -> Vec<Position> {
        let mut update = vec![Position::Head; self.max_level()];
        self.descend(key, |level, pos| update[level] = pos);
        update
    }

    fn descend(&self, key: Key, mut visit: impl FnMut(usize, Position)) -> Position {
        let mut pos = Position::Head;
        for level in (0..self.current_level).rev() {
            while let Some(next) = self.next(pos, level) {
                if self.arena.get(next).key < key {
                    pos = Position::Node(next);
                } else {
                    break;
                }
            }
            visit(level, pos);
        }
        pos
    }

    fn next(&self, pos: Position, level: usize) -> Option<NodeId> {
        match pos {
            Position::Head => self.head[level],
            Position::Node(id) => self.arena.get(id).next(level),
        }
    }

    fn set_next(&mut self, pos: Position, level: usize, next: Option<NodeId>) {
        match pos {
            Position::Head => self.head[level] = next,
            Position::Node(id) => self.arena.get_mut(id).forward[level] = next,
        }
    }
}

impl<'a, R: Rng> Extend<&'a str> for HashedSkipList<R> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for pattern in iter {
            self.insert(pattern);
        }
    }
}

/// An entry as seen while walking one level.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EntryRef<'a> {
    pub key: Key,
    pub value: &'a str,
    /// Height of the entry's tower.
    pub level: usize,
}

pub struct Iter<'a, R: Rng> {
    list: &'a HashedSkipList<R>,
    current: Option<NodeId>,
    level: usize,
}

impl<'a, R: Rng> Iterator for Iter<'a, R> {
    type Item = EntryRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id);
        self.current = node.next(self.level);
        Some(EntryRef {
            key: node.key,
            value: &node.value,
            level: node.level(),
        })
    }
}

impl<'a, R: Rng> IntoIterator for &'a HashedSkipList<R> {
    type Item = EntryRef<'a>;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
