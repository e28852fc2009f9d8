//! Registry of distinct genome records and their usage counts.

use crate::base::Sequence;
use crate::evolution::mutation::Substitution;

/// Identifier of a genome record inside a [`GenePool`].
pub type GenomeId = usize;

#[derive(Debug, Clone)]
struct GenomeRecord {
    sequence: Sequence,
    frequency: usize,
}

/// Slab of genome records with a free list.
///
/// Each record carries a usage count: the number of live individuals
/// currently holding that genome. Records whose count drops to zero are
/// recycled, and their slots are reported as "available" until reused.
#[derive(Debug, Default)]
pub struct GenePool {
    records: Vec<Option<GenomeRecord>>,
    free: Vec<GenomeId>,
}

impl GenePool {
    /// Create an empty gene pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new genome record with no holders yet.
    ///
    /// Callers take a holder slot with [`acquire`](Self::acquire);
    /// [`duplicate_genome`](Self::duplicate_genome) does so on behalf of
    /// the new child.
    pub fn create_genome(&mut self, sequence: Sequence) -> GenomeId {
        let record = GenomeRecord {
            sequence,
            frequency: 0,
        };
        match self.free.pop() {
            Some(id) => {
                self.records[id] = Some(record);
                id
            }
            None => {
                self.records.push(Some(record));
                self.records.len() - 1
            }
        }
    }

    /// Derive a child genome from `parent`.
    ///
    /// With no mutations the child shares the parent's record; otherwise a
    /// new record is created with the substitutions applied. Either way the
    /// returned record holds one additional usage count for the child.
    pub fn duplicate_genome(&mut self, parent: GenomeId, mutations: &[Substitution]) -> GenomeId {
        if mutations.is_empty() {
            self.acquire(parent);
            return parent;
        }
        let child = match self.sequence(parent) {
            Some(seq) => {
                let mut seq = seq.clone();
                for m in mutations {
                    seq.set(m.position, m.base);
                }
                self.create_genome(seq)
            }
            None => parent,
        };
        self.acquire(child);
        child
    }

    /// Borrow the sequence of a genome record, if the record is live.
    pub fn sequence(&self, id: GenomeId) -> Option<&Sequence> {
        self.records
            .get(id)
            .and_then(|slot| slot.as_ref())
            .map(|record| &record.sequence)
    }

    /// Current usage count of a genome record (0 for recycled slots).
    pub fn frequency(&self, id: GenomeId) -> usize {
        self.records
            .get(id)
            .and_then(|slot| slot.as_ref())
            .map_or(0, |record| record.frequency)
    }

    /// Add one holder to a genome record.
    pub fn acquire(&mut self, id: GenomeId) {
        if let Some(record) = self.records.get_mut(id).and_then(|slot| slot.as_mut()) {
            record.frequency += 1;
        }
    }

    /// Remove one holder from a genome record, recycling the slot when the
    /// last holder is gone.
    pub fn release(&mut self, id: GenomeId) {
        if let Some(slot) = self.records.get_mut(id) {
            if let Some(record) = slot.as_mut() {
                record.frequency = record.frequency.saturating_sub(1);
                if record.frequency == 0 {
                    *slot = None;
                    self.free.push(id);
                }
            }
        }
    }

    /// Number of distinct genome records currently live.
    pub fn unique_genome_count(&self) -> usize {
        self.records.len() - self.free.len()
    }

    /// Number of recycled slots available for reuse.
    pub fn unused_genome_count(&self) -> usize {
        self.free.len()
    }
}
