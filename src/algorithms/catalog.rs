//! The fixed registry of visualizable algorithms
//!
//! The table is a `'static` array built at compile time and never mutated.
//! [`Catalog`] adds an id index on top of it and is what consumers hold.

use super::bogo::BogoSteps;
use super::bubble::BubbleSteps;
use super::bucket::BucketSteps;
use super::counting::CountingSteps;
use super::heap::HeapSteps;
use super::insertion::InsertionSteps;
use super::merge::MergeSteps;
use super::quick::QuickSteps;
use super::radix::RadixSteps;
use super::selection::SelectionSteps;
use super::StepProducer;
use crate::errors::{Result, SortError};
use rustc_hash::FxHashMap;

/// Builds the step sequence of one run over a copy of the input
pub type StepFactory = fn(&[i32]) -> Result<StepProducer>;

/// Everything the catalog knows about one algorithm
pub struct AlgorithmDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub complexity: &'static str,
    pub description: &'static str,
    factory: StepFactory,
}

impl AlgorithmDescriptor {
    /// Start a new run of this algorithm over `input`
    pub fn producer(&self, input: &[i32]) -> Result<StepProducer> {
        (self.factory)(input)
    }

    pub fn description(&self) -> Description {
        Description {
            complexity: self.complexity,
            description: self.description,
        }
    }
}

impl std::fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("complexity", &self.complexity)
            .finish_non_exhaustive()
    }
}

/// Display metadata for an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description {
    pub complexity: &'static str,
    pub description: &'static str,
}

static ALGORITHMS: [AlgorithmDescriptor; 10] = [
    AlgorithmDescriptor {
        id: "bubble",
        name: "Bubble Sort",
        complexity: "O(n²)",
        description: "Compares adjacent pairs and swaps them until the entire array is sorted.",
        factory: |input| Ok(StepProducer::new("bubble", BubbleSteps::new(input))),
    },
    AlgorithmDescriptor {
        id: "insertion",
        name: "Insertion Sort",
        complexity: "O(n²)",
        description: "Inserts each element into the correct position in the already sorted part.",
        factory: |input| Ok(StepProducer::new("insertion", InsertionSteps::new(input))),
    },
    AlgorithmDescriptor {
        id: "selection",
        name: "Selection Sort",
        complexity: "O(n²)",
        description: "Finds the minimum element and repeatedly places it at the beginning.",
        factory: |input| Ok(StepProducer::new("selection", SelectionSteps::new(input))),
    },
    AlgorithmDescriptor {
        id: "merge",
        name: "Merge Sort",
        complexity: "O(n log n)",
        description: "Divides the array into halves and then merges them in sorted order.",
        factory: |input| Ok(StepProducer::new("merge", MergeSteps::new(input))),
    },
    AlgorithmDescriptor {
        id: "quick",
        name: "Quick Sort",
        complexity: "O(n log n) average, O(n²) worst case",
        description: "Selects a pivot and recursively sorts the other elements around it.",
        factory: |input| Ok(StepProducer::new("quick", QuickSteps::new(input))),
    },
    AlgorithmDescriptor {
        id: "heap",
        name: "Heap Sort",
        complexity: "O(n log n)",
        description: "Builds a heap and repeatedly extracts the maximum element.",
        factory: |input| Ok(StepProducer::new("heap", HeapSteps::new(input))),
    },
    AlgorithmDescriptor {
        id: "counting",
        name: "Counting Sort",
        complexity: "O(n + k)",
        description: "Counts occurrences of each value and reconstructs the array.",
        factory: |input| Ok(StepProducer::new("counting", CountingSteps::new(input)?)),
    },
    AlgorithmDescriptor {
        id: "radix",
        name: "Radix Sort",
        complexity: "O(n·k)",
        description: "Sorts by digits, from the least significant to the most significant.",
        factory: |input| Ok(StepProducer::new("radix", RadixSteps::new(input)?)),
    },
    AlgorithmDescriptor {
        id: "bucket",
        name: "Bucket Sort",
        complexity: "O(n + k)",
        description:
            "Distributes elements into buckets, sorts each bucket, and then combines them.",
        factory: |input| Ok(StepProducer::new("bucket", BucketSteps::new(input))),
    },
    AlgorithmDescriptor {
        id: "bogo",
        name: "Bogo Sort [BAD]",
        complexity: "O((n+1)!)",
        description: "Randomly shuffles the array until, by chance, it is sorted.",
        factory: |input| Ok(StepProducer::new("bogo", BogoSteps::new(input))),
    },
];

/// Read-only view over the algorithm table, indexed by id
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: &'static [AlgorithmDescriptor],
    index: FxHashMap<&'static str, usize>,
}

impl Catalog {
    /// The ten built-in algorithms, in menu order
    pub fn builtin() -> Self {
        let index = ALGORITHMS
            .iter()
            .enumerate()
            .map(|(i, descriptor)| (descriptor.id, i))
            .collect();
        Catalog {
            entries: &ALGORITHMS,
            index,
        }
    }

    pub fn lookup(&self, id: &str) -> Result<&'static AlgorithmDescriptor> {
        let entries = self.entries;
        self.index
            .get(id)
            .map(|&i| &entries[i])
            .ok_or_else(|| SortError::unknown(id))
    }

    pub fn describe(&self, id: &str) -> Result<Description> {
        self.lookup(id).map(AlgorithmDescriptor::description)
    }

    /// `(id, name)` pairs in menu order
    pub fn list(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        let entries = self.entries;
        entries.iter().map(|d| (d.id, d.name))
    }

    pub fn entries(&self) -> &'static [AlgorithmDescriptor] {
        self.entries
    }

    /// Menu position of `id`, if registered
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
