//! Chord table
//!
//! The process-wide lookup from canonical pitch-class-set hash to named
//! triad. Built exactly once, on first use, by generating every triad of
//! every quality over every single-accidental root; read-only thereafter.

use crate::chord::{TriadInfo, TriadType, ALL_TRIAD_TYPES};
use crate::interval::Interval;
use crate::note::{Accidental, Note, ALL_LETTERS};
use crate::note_set::NoteSet;
use lazy_static::lazy_static;
use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

lazy_static! {
    static ref SHARED: ChordTable = ChordTable::new();
}

/// Accidentals a root may carry, in generation order.
const ROOT_ACCIDENTALS: [Accidental; 3] =
    [Accidental::Flat, Accidental::Natural, Accidental::Sharp];

/// A table of pitch-class sets so chords can be looked up by name.
///
/// Distinct roots can spell the same pitch-class set (every augmented
/// triad has three such roots). The table keeps the root with the
/// simplest accidental; among equally simple roots the first generated
/// wins, so naming is deterministic and natural spellings shadow their
/// enharmonic respellings.
#[derive(Debug)]
pub struct ChordTable {
    triads: HashMap<u64, TriadInfo>,
}

impl ChordTable {
    /// The process-wide table, built at most once on first access.
    pub fn shared() -> &'static ChordTable {
        &SHARED
    }

    /// Build a fresh table holding every generated triad.
    pub fn new() -> ChordTable {
        let mut triads = HashMap::new();
        for triad_type in ALL_TRIAD_TYPES {
            let (third, fifth) = triad_type.third_and_fifth();
            Self::generate_triads(third, fifth, triad_type, &mut triads);
        }
        debug!("generated {} triads", triads.len());
        ChordTable { triads }
    }

    /// The triad stored for a canonical pitch-class-set hash, if any.
    pub fn lookup(&self, hash: u64) -> Option<&TriadInfo> {
        self.triads.get(&hash)
    }

    /// Number of distinct pitch-class sets in the table.
    pub fn len(&self) -> usize {
        self.triads.len()
    }

    /// Is the table empty? (It never is once built.)
    pub fn is_empty(&self) -> bool {
        self.triads.is_empty()
    }

    /// Canonical hash of the pitch classes of the given notes. `None`s
    /// (unspellable shifted notes) are skipped.
    pub fn hash_pitch_classes(notes: &[Option<Note>]) -> u64 {
        let mut pitch_classes = NoteSet::new();
        for note in notes.iter().flatten() {
            pitch_classes.add(Note::from_index(i16::from(note.pitch_class())));
        }
        pitch_classes.canonical_hash()
    }

    /// Generate one quality's triads over every root into `triads`.
    fn generate_triads(
        third: Interval,
        fifth: Interval,
        triad_type: TriadType,
        triads: &mut HashMap<u64, TriadInfo>,
    ) {
        for accidental in ROOT_ACCIDENTALS {
            for letter in ALL_LETTERS {
                let root = Note::pitched(letter, accidental);
                let hash = Self::hash_pitch_classes(&[
                    Some(root),
                    root.shift_up(third),
                    root.shift_up(fifth),
                ]);
                let info = TriadInfo { root, triad_type };
                match triads.entry(hash) {
                    Entry::Vacant(vacant) => {
                        vacant.insert(info);
                    }
                    Entry::Occupied(mut occupied) => {
                        if spelling_complexity(root) < spelling_complexity(occupied.get().root) {
                            debug!(
                                "{} shadows enharmonic {}",
                                info.name(),
                                occupied.get().name()
                            );
                            occupied.insert(info);
                        } else {
                            debug!(
                                "{} shadowed by enharmonic {}",
                                info.name(),
                                occupied.get().name()
                            );
                        }
                    }
                }
            }
        }
    }
}

impl Default for ChordTable {
    fn default() -> Self {
        ChordTable::new()
    }
}

/// How far a root's accidental strays from natural.
fn spelling_complexity(root: Note) -> u8 {
    root.accidental.offset().unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Letter;

    #[test]
    fn shared_table_is_built_once() {
        let a = ChordTable::shared() as *const ChordTable;
        let b = ChordTable::shared() as *const ChordTable;
        assert_eq!(a, b);
        assert!(!ChordTable::shared().is_empty());
    }

    #[test]
    fn table_size_matches_the_distinct_sets() {
        let table = ChordTable::new();
        // 12 pitch-class sets each for major, minor and diminished, 4
        // augmented cycles, plus the truncated B-sharp augmented entry
        // whose fifth is unspellable.
        assert_eq!(table.len(), 41);
    }

    #[test]
    fn natural_roots_shadow_remote_spellings() {
        let table = ChordTable::new();
        let c = Note::pitched(Letter::C, Accidental::Natural);
        let hash = ChordTable::hash_pitch_classes(&[
            Some(c),
            c.shift_up(Interval::MajorThird),
            c.shift_up(Interval::PerfectFifth),
        ]);
        // B-sharp major spells the same pitch classes but loses to C.
        let info = table.lookup(hash).expect("C major triad in table");
        assert_eq!(info.root, c);
        assert_eq!(info.triad_type, TriadType::Major);
    }

    #[test]
    fn missing_hash_yields_none() {
        let table = ChordTable::new();
        // The empty pitch-class set is never generated.
        assert!(table.lookup(NoteSet::new().canonical_hash()).is_none());
    }
}
