//! Suspect registry
//!
//! A fixed-size hash table mapping clue names to the suspect they
//! implicate. Collisions are chained; new entries go to the head of
//! their bucket's chain.

use tracing::trace;

/// Number of buckets. Prime, to spread the checksum hash.
pub const TABLE_SIZE: usize = 31;

/// Returned by [`SuspectRegistry::lookup`] for clues nobody registered.
pub const UNKNOWN_SUSPECT: &str = "Unknown";

/// Case-insensitive checksum hash: sum of the uppercased code points
/// of the clue, reduced modulo [`TABLE_SIZE`].
pub fn hash_clue(clue: &str) -> usize {
    let sum: u64 = clue
        .chars()
        .flat_map(char::to_uppercase)
        .map(|c| u64::from(u32::from(c)))
        .sum();
    (sum % TABLE_SIZE as u64) as usize
}

#[derive(Debug, Clone)]
struct Entry {
    clue: String,
    suspect: String,
    next: Option<Box<Entry>>,
}

/// Clue → suspect lookup table
#[derive(Debug, Clone)]
pub struct SuspectRegistry {
    buckets: Vec<Option<Box<Entry>>>,
    len: usize,
}

impl SuspectRegistry {
    pub fn new() -> Self {
        Self {
            buckets: vec![None; TABLE_SIZE],
            len: 0,
        }
    }

    /// The registry used by the mansion case
    pub fn reference() -> Self {
        let mut registry = Self::new();
        registry.register("Faca", "Cozinheira");
        registry.register("Veneno", "Jardineiro");
        registry.register("Relogio", "Mordomo");
        registry.register("Luvas", "Jardineiro");
        registry.register("Castiçal", "Mordomo");
        registry
    }

    /// Associate a clue with a suspect.
    ///
    /// There is no duplicate check: registering the same clue twice
    /// shadows the older entry, since lookups scan from the head.
    pub fn register(&mut self, clue: &str, suspect: &str) {
        let idx = hash_clue(clue);
        let entry = Box::new(Entry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next: self.buckets[idx].take(),
        });
        self.buckets[idx] = Some(entry);
        self.len += 1;
        trace!(clue, suspect, bucket = idx, "registered clue");
    }

    /// Suspect implicated by `clue`, or [`UNKNOWN_SUSPECT`].
    ///
    /// Hashing ignores case but the chain comparison does not.
    pub fn lookup(&self, clue: &str) -> &str {
        self.chain(hash_clue(clue))
            .find(|(c, _)| *c == clue)
            .map(|(_, suspect)| suspect)
            .unwrap_or(UNKNOWN_SUSPECT)
    }

    /// Bucket index a clue hashes to
    pub fn bucket_of(&self, clue: &str) -> usize {
        hash_clue(clue)
    }

    /// Entries of one bucket, most recently registered first
    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            next: self.buckets.get(bucket).and_then(|b| b.as_deref()),
        }
    }

    /// Total number of registrations, shadowed ones included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for SuspectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SuspectRegistry {
    // Unlink chains iteratively so a long chain cannot overflow the stack.
    fn drop(&mut self) {
        for bucket in &mut self.buckets {
            let mut cur = bucket.take();
            while let Some(mut entry) = cur {
                cur = entry.next.take();
            }
        }
    }
}

/// Iterator over one bucket's `(clue, suspect)` pairs
pub struct Chain<'a> {
    next: Option<&'a Entry>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some((entry.clue.as_str(), entry.suspect.as_str()))
    }
}
