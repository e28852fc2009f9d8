//! Shared genome state: the gene pool and the reference panel.
//!
//! Both are read-mostly and shared by every population and every
//! replicate. The `GenePool` tracks the distinct genome records currently
//! carried by live individuals together with their usage counts; the
//! `ReferencePanel` holds the immutable reference sequences a run is
//! seeded from.

pub mod gene_pool;
pub mod reference;

pub use gene_pool::{GenePool, GenomeId};
pub use reference::ReferencePanel;
