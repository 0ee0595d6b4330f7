//! Deduction
//!
//! Walks the clue notebook, asks the registry who each clue points to
//! and counts votes for the three known suspects.

use crate::data::{ClueSet, Suspect, SuspectRegistry};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One clue and the suspect the registry names for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub clue: String,
    pub suspect: String,
}

/// Votes per suspect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub mordomo: u32,
    pub jardineiro: u32,
    pub cozinheira: u32,
}

impl Tally {
    pub fn new(mordomo: u32, jardineiro: u32, cozinheira: u32) -> Self {
        Self { mordomo, jardineiro, cozinheira }
    }

    pub fn count(&self, suspect: Suspect) -> u32 {
        match suspect {
            Suspect::Mordomo => self.mordomo,
            Suspect::Jardineiro => self.jardineiro,
            Suspect::Cozinheira => self.cozinheira,
        }
    }

    /// Count a vote. Names outside the three suspects are ignored.
    pub fn record(&mut self, suspect_name: &str) {
        match Suspect::from_name(suspect_name) {
            Some(Suspect::Mordomo) => self.mordomo += 1,
            Some(Suspect::Jardineiro) => self.jardineiro += 1,
            Some(Suspect::Cozinheira) => self.cozinheira += 1,
            None => {}
        }
    }
}

/// Outcome of the vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Culprit(Suspect),
    /// No suspect beats both others
    Inconclusive,
}

/// Full result of a deduction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    pub attributions: Vec<Attribution>,
    pub tally: Tally,
    pub verdict: Verdict,
}

/// What the investigation ends with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conclusion {
    /// The player collected nothing; no tally was run
    NoEvidence,
    Deduced(Deduction),
}

/// Look up every clue, in alphabetical order, and count the votes.
pub fn tally(clues: &ClueSet, registry: &SuspectRegistry) -> (Vec<Attribution>, Tally) {
    let mut counts = Tally::default();
    let attributions = clues
        .iter()
        .map(|clue| {
            let suspect = registry.lookup(clue);
            counts.record(suspect);
            Attribution {
                clue: clue.to_string(),
                suspect: suspect.to_string(),
            }
        })
        .collect();
    (attributions, counts)
}

/// A suspect is guilty only with strictly more votes than each of the
/// other two. Any tie at the top is inconclusive.
pub fn announce_verdict(tally: &Tally) -> Verdict {
    let Tally { mordomo: m, jardineiro: j, cozinheira: c } = *tally;
    if m > j && m > c {
        Verdict::Culprit(Suspect::Mordomo)
    } else if j > m && j > c {
        Verdict::Culprit(Suspect::Jardineiro)
    } else if c > m && c > j {
        Verdict::Culprit(Suspect::Cozinheira)
    } else {
        Verdict::Inconclusive
    }
}

/// Run the deduction, or report that there is nothing to deduce from.
pub fn deduce(clues: &ClueSet, registry: &SuspectRegistry) -> Conclusion {
    if clues.is_empty() {
        info!("no clues collected, skipping deduction");
        return Conclusion::NoEvidence;
    }

    let (attributions, tally) = tally(clues, registry);
    let verdict = announce_verdict(&tally);
    info!(
        mordomo = tally.mordomo,
        jardineiro = tally.jardineiro,
        cozinheira = tally.cozinheira,
        ?verdict,
        "deduction complete"
    );

    Conclusion::Deduced(Deduction {
        attributions,
        tally,
        verdict,
    })
}
