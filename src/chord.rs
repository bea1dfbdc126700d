//! Chords
//!
//! A chord is a set of simultaneously-sounding notes. Naming reduces the
//! chord to its pitch-class set and looks the canonical hash up in the
//! shared triad table; insertion order and octave placement of the member
//! notes are irrelevant to the name.

use crate::chord_table::ChordTable;
use crate::interval::Interval;
use crate::note::{Note, ParseNoteError};
use crate::note_set::NoteSet;
use std::fmt::Display;
use std::str::FromStr;

/// The four triad qualities the lookup table covers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TriadType {
    /// Major triad (M3 + P5)
    Major,
    /// Minor triad (m3 + P5)
    Minor,
    /// Diminished triad (m3 + d5)
    Diminished,
    /// Augmented triad (M3 + A5)
    Augmented,
}

/// All triad qualities in table-generation order.
pub const ALL_TRIAD_TYPES: [TriadType; 4] = [
    TriadType::Major,
    TriadType::Minor,
    TriadType::Diminished,
    TriadType::Augmented,
];

impl TriadType {
    /// The (third, fifth) interval pair that builds this quality above a
    /// root.
    pub const fn third_and_fifth(self) -> (Interval, Interval) {
        match self {
            TriadType::Major => (Interval::MajorThird, Interval::PerfectFifth),
            TriadType::Minor => (Interval::MinorThird, Interval::PerfectFifth),
            TriadType::Diminished => (Interval::MinorThird, Interval::DiminishedFifth),
            TriadType::Augmented => (Interval::MajorThird, Interval::AugmentedFifth),
        }
    }

    /// Suffix appended to the root spelling when naming: nothing for
    /// major, `m`, `°` and `⁺` for the rest.
    pub const fn suffix(self) -> &'static str {
        match self {
            TriadType::Major => "",
            TriadType::Minor => "m",
            TriadType::Diminished => "°",
            TriadType::Augmented => "⁺",
        }
    }
}

impl Display for TriadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A named triad: a spelled root and a quality. Created only during table
/// generation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TriadInfo {
    /// Spelled root of the triad; the spelling survives into the name.
    pub root: Note,
    /// Quality of the triad.
    pub triad_type: TriadType,
}

impl TriadInfo {
    /// Rendered chord name: root spelling plus quality suffix.
    pub fn name(&self) -> String {
        format!("{}{}", self.root.spelling(), self.triad_type.suffix())
    }
}

/// A set of simultaneously-sounding notes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Chord {
    note_set: NoteSet,
}

impl Chord {
    /// Distance returned by [`Chord::hausdorff`] when the other chord is
    /// empty: the diameter of the note identity space.
    pub const HAUSDORFF_MAX: u8 = 127;

    /// Name returned when no known triad matches the pitch-class set.
    pub const UNKNOWN_NAME: &'static str = "unknown chord";

    /// An empty chord.
    pub const fn new() -> Chord {
        Chord {
            note_set: NoteSet::new(),
        }
    }

    /// A chord from a sequence of notes. Duplicates and enharmonic
    /// respellings collapse; the order of the sequence is irrelevant.
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Chord {
        let mut chord = Chord::new();
        for note in notes {
            chord.add(note);
        }
        chord
    }

    /// Add a note to the chord.
    pub fn add(&mut self, note: Note) {
        self.note_set.add(note);
    }

    /// Is a note in the chord?
    pub fn contains(&self, note: Note) -> bool {
        self.note_set.contains(note)
    }

    /// Visit each note in the chord, ascending by pitch.
    pub fn for_each_note(&self, f: impl FnMut(Note)) {
        self.note_set.for_each_note(f)
    }

    /// Member notes, ascending by pitch.
    pub fn notes(&self) -> Vec<Note> {
        self.note_set.notes()
    }

    /// Number of distinct pitches in the chord.
    pub fn note_count(&self) -> usize {
        self.note_set.len()
    }

    /// Does the chord hold exactly two pitches?
    pub fn is_dyad(&self) -> bool {
        self.note_count() == 2
    }

    /// Does the chord hold exactly three pitches?
    pub fn is_triad(&self) -> bool {
        self.note_count() == 3
    }

    /// Canonical hash of the chord's pitch-class set. Members are
    /// projected to pitch classes into a fresh set, so the same pitch
    /// class in two octaves contributes one bit. This is the only key
    /// used for name lookup.
    pub fn pitch_classes_hash(&self) -> u64 {
        let mut pitch_classes = NoteSet::new();
        self.for_each_note(|note| {
            pitch_classes.add(Note::from_index(i16::from(note.pitch_class())));
        });
        pitch_classes.canonical_hash()
    }

    /// Name of the chord per the shared triad table, or
    /// [`Chord::UNKNOWN_NAME`] when no triad matches. Dyads, larger
    /// chords and unmatched triads all produce the same sentinel; it is a
    /// display fallback, not an error.
    pub fn name(&self) -> String {
        self.name_in(ChordTable::shared())
            .unwrap_or_else(|| Chord::UNKNOWN_NAME.to_string())
    }

    /// Name of the chord per an explicit table, or `None` when no triad
    /// matches.
    pub fn name_in(&self, table: &ChordTable) -> Option<String> {
        table.lookup(self.pitch_classes_hash()).map(TriadInfo::name)
    }

    /// One-sided Hausdorff distance to another chord, in semitones: the
    /// maximum over notes of `self` of the distance to the nearest note
    /// of `to`.
    ///
    /// Not symmetric; take the maximum of both directions for the
    /// two-sided distance. An empty `self` yields 0 (nothing exceeds any
    /// bound); a nonempty `self` against an empty `to` yields
    /// [`Chord::HAUSDORFF_MAX`] (no nearest note exists).
    ///
    /// <https://en.wikipedia.org/wiki/Hausdorff_distance>
    pub fn hausdorff(&self, to: &Chord) -> u8 {
        let mut d_sup = 0;
        self.for_each_note(|n0| {
            let mut d_inf = Chord::HAUSDORFF_MAX;
            to.for_each_note(|n1| d_inf = d_inf.min(n0.semitones_to(&n1)));
            d_sup = d_sup.max(d_inf);
        });
        d_sup
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let spelled: Vec<String> = self.notes().iter().map(Note::to_string).collect();
        write!(f, "{}", spelled.join(" "))
    }
}

impl FromStr for Chord {
    type Err = ParseNoteError;

    /// Parses whitespace-separated note names, e.g. `"C4 E♭4 G4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notes = s
            .split_whitespace()
            .map(Note::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Chord::from_notes(notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(s: &str) -> Chord {
        s.parse().unwrap()
    }

    #[test]
    fn cardinality_classifiers() {
        assert!(chord("C4 G4").is_dyad());
        assert!(chord("C4 E4 G4").is_triad());
        assert!(!chord("C4 E4 G4 B4").is_triad());
        assert_eq!(Chord::new().note_count(), 0);
    }

    #[test]
    fn display_lists_notes_ascending() {
        assert_eq!(chord("G4 C4 E4").to_string(), "C4 E4 G4");
    }

    #[test]
    fn pitch_class_hash_ignores_octaves() {
        assert_eq!(
            chord("C4 E4 G4").pitch_classes_hash(),
            chord("C2 E3 G5 C6").pitch_classes_hash()
        );
        assert_ne!(
            chord("C4 E4 G4").pitch_classes_hash(),
            chord("C4 Eb4 G4").pitch_classes_hash()
        );
    }

    #[test]
    fn pitch_class_hash_ignores_spelling() {
        assert_eq!(
            chord("C4 Eb4 G4").pitch_classes_hash(),
            chord("C4 D#4 G4").pitch_classes_hash()
        );
    }
}
