//! Serde round-trips for parameter-like types and sample records.

use virosim::evolution::{ExponentialGrowth, PurifyingFitness, UniformMutator};
use virosim::samplers::SampleRecord;
use virosim::simulation::InoculumType;
use virosim::{Nucleotide, Sequence};

#[test]
fn test_nucleotide_round_trip() {
    for base in [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T] {
        let json = serde_json::to_string(&base).unwrap();
        let back: Nucleotide = serde_json::from_str(&json).unwrap();
        assert_eq!(back, base);
    }
}

#[test]
fn test_sequence_round_trip() {
    let seq: Sequence = "ACGTTGCA".parse().unwrap();
    let json = serde_json::to_string(&seq).unwrap();
    let back: Sequence = serde_json::from_str(&json).unwrap();
    assert_eq!(back, seq);
}

#[test]
fn test_inoculum_type_round_trip() {
    for inoculum in [
        InoculumType::None,
        InoculumType::Consensus,
        InoculumType::Random,
        InoculumType::All,
    ] {
        let json = serde_json::to_string(&inoculum).unwrap();
        let back: InoculumType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inoculum);
    }
}

#[test]
fn test_mutator_round_trip_preserves_rate() {
    let mutator = UniformMutator::new(0.0025).unwrap();
    let json = serde_json::to_string(&mutator).unwrap();
    let back: UniformMutator = serde_json::from_str(&json).unwrap();
    assert_eq!(back.rate(), 0.0025);
}

#[test]
fn test_growth_round_trip_preserves_rate() {
    let growth = ExponentialGrowth::new(1.8).unwrap();
    let json = serde_json::to_string(&growth).unwrap();
    let back: ExponentialGrowth = serde_json::from_str(&json).unwrap();
    assert_eq!(back.rate(), 1.8);
}

#[test]
fn test_purifying_fitness_round_trip() {
    let preferred: Sequence = "ACGT".parse().unwrap();
    let fitness = PurifyingFitness::new(preferred.clone(), 0.1).unwrap();
    let json = serde_json::to_string(&fitness).unwrap();
    let back: PurifyingFitness = serde_json::from_str(&json).unwrap();
    assert_eq!(back.preferred(), &preferred);
}

#[test]
fn test_sample_record_round_trip() {
    let record = SampleRecord {
        replicate: 2,
        generation: 150,
        population: 1,
        population_size: 500,
        mean_fitness: 0.93,
        mean_distance: 4.2,
        max_frequency: 0.31,
    };
    let json = serde_json::to_string(&record).unwrap();
    let back: SampleRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
