//! Notes
//!
//! Spelled pitch identities: a letter, an accidental and an octave. The
//! semitone index (C4 = 60) is the identity used by [`NoteSet`], so
//! enharmonic respellings of the same pitch compare as the same set member.
//!
//! [`NoteSet`]: crate::NoteSet

use crate::interval::{Interval, SEMITONES};
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// The seven natural note letters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    /// C
    C,
    /// D
    D,
    /// E
    E,
    /// F
    F,
    /// G
    G,
    /// A
    A,
    /// B
    B,
}

/// All letters in canonical order, C first.
pub const ALL_LETTERS: [Letter; 7] = [
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
    Letter::A,
    Letter::B,
];

impl Letter {
    /// Position within the letter cycle, `C = 0 .. B = 6`.
    pub const fn position(self) -> u8 {
        self as u8
    }

    /// Pitch class of the natural note with this letter.
    pub const fn natural_pitch_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// An accidental, from double flat to double sharp.
///
/// Chord roots only ever carry a single flat, natural or sharp, but
/// spelling an interval above such a root can land on a double.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Accidental {
    /// Double flat (−2 semitones)
    DoubleFlat,
    /// Flat (−1 semitone)
    Flat,
    /// Natural (no alteration)
    Natural,
    /// Sharp (+1 semitone)
    Sharp,
    /// Double sharp (+2 semitones)
    DoubleSharp,
}

impl Accidental {
    /// Semitone alteration, in `−2..=2`.
    pub const fn offset(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// The accidental with the given alteration, or `None` outside `−2..=2`.
    ///
    /// Spelling an interval above a remote root can call for a triple
    /// accidental; no such spelling exists, so the shifted note does not
    /// exist either.
    pub const fn from_offset(offset: i8) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }
}

impl Display for Accidental {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyph = match self {
            Accidental::DoubleFlat => "𝄫",
            Accidental::Flat => "♭",
            Accidental::Natural => "",
            Accidental::Sharp => "♯",
            Accidental::DoubleSharp => "𝄪",
        };
        write!(f, "{glyph}")
    }
}

/// Errors when parsing a note from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseNoteError {
    /// The input was empty.
    #[error("empty note name")]
    Empty,

    /// The first character was not a note letter `A`..=`G`.
    #[error("invalid note letter `{0}`")]
    InvalidLetter(char),

    /// Trailing text after the accidental was not an octave number.
    #[error("invalid octave `{0}`")]
    InvalidOctave(String),
}

/// Canonical sharp-preferring spelling for each pitch class, used when a
/// note is reconstructed from its semitone index.
const SHARP_SPELLINGS: [(Letter, Accidental); SEMITONES as usize] = [
    (Letter::C, Accidental::Natural),
    (Letter::C, Accidental::Sharp),
    (Letter::D, Accidental::Natural),
    (Letter::D, Accidental::Sharp),
    (Letter::E, Accidental::Natural),
    (Letter::F, Accidental::Natural),
    (Letter::F, Accidental::Sharp),
    (Letter::G, Accidental::Natural),
    (Letter::G, Accidental::Sharp),
    (Letter::A, Accidental::Natural),
    (Letter::A, Accidental::Sharp),
    (Letter::B, Accidental::Natural),
];

/// A spelled note: letter, accidental and octave, tuned so that C4 has
/// semitone index 60.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Note {
    /// Note letter.
    pub letter: Letter,
    /// Accidental applied to the letter.
    pub accidental: Accidental,
    /// Octave number; C4 is middle C.
    pub octave: i8,
}

impl Note {
    /// Octave used when none is given, middle C's.
    pub const DEFAULT_OCTAVE: i8 = 4;

    /// A note from its letter, accidental and octave.
    pub const fn new(letter: Letter, accidental: Accidental, octave: i8) -> Note {
        Note {
            letter,
            accidental,
            octave,
        }
    }

    /// A note in the default octave.
    pub const fn pitched(letter: Letter, accidental: Accidental) -> Note {
        Note::new(letter, accidental, Note::DEFAULT_OCTAVE)
    }

    /// The note with the given semitone index, spelled with the canonical
    /// sharp-preferring spelling for its pitch class.
    pub fn from_index(index: i16) -> Note {
        let (letter, accidental) = SHARP_SPELLINGS[index.rem_euclid(12) as usize];
        Note::new(letter, accidental, (index.div_euclid(12) - 1) as i8)
    }

    /// Semitone identity of this note, C4 = 60. Enharmonic respellings of
    /// one pitch share an index.
    pub fn index(&self) -> i16 {
        (i16::from(self.octave) + 1) * 12
            + i16::from(self.letter.natural_pitch_class())
            + i16::from(self.accidental.offset())
    }

    /// Pitch class of this note, in `0..12`.
    pub fn pitch_class(&self) -> u8 {
        (i16::from(self.letter.natural_pitch_class()) + i16::from(self.accidental.offset()))
            .rem_euclid(12) as u8
    }

    /// Absolute distance to another note, in semitones.
    pub fn semitones_to(&self, other: &Note) -> u8 {
        (other.index() - self.index())
            .unsigned_abs()
            .min(u16::from(u8::MAX)) as u8
    }

    /// The note `interval` above this one, spelled so the letter advances
    /// by the interval's degree. `None` when the spelling would require
    /// more than a double accidental.
    pub fn shift_up(&self, interval: Interval) -> Option<Note> {
        let steps = self.letter.position() + interval.degree();
        let letter = ALL_LETTERS[usize::from(steps % 7)];
        let octave = self.octave + (steps / 7) as i8;
        let natural = Note::new(letter, Accidental::Natural, octave).index();
        let target = self.index() + i16::from(interval.semitones());
        let accidental = Accidental::from_offset(i8::try_from(target - natural).ok()?)?;
        Some(Note::new(letter, accidental, octave))
    }

    /// Letter-and-accidental spelling without the octave, e.g. `E♭`.
    pub fn spelling(&self) -> String {
        format!("{}{}", self.letter, self.accidental)
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental, self.octave)
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index()
            .cmp(&other.index())
            .then_with(|| self.letter.cmp(&other.letter))
            .then_with(|| self.accidental.cmp(&other.accidental))
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Note {
    type Err = ParseNoteError;

    /// Parses spellings like `C`, `Eb4`, `E♭4`, `F##3` or `C-1`. The
    /// accidental may use either the Unicode glyphs or their ASCII forms
    /// (`bb`, `b`, `#`, `##`, `x`); a missing octave means the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(ParseNoteError::Empty)?;
        let letter = match first {
            'C' => Letter::C,
            'D' => Letter::D,
            'E' => Letter::E,
            'F' => Letter::F,
            'G' => Letter::G,
            'A' => Letter::A,
            'B' => Letter::B,
            other => return Err(ParseNoteError::InvalidLetter(other)),
        };

        let rest = chars.as_str();
        let spellings = [
            ("𝄫", Accidental::DoubleFlat),
            ("bb", Accidental::DoubleFlat),
            ("♭", Accidental::Flat),
            ("b", Accidental::Flat),
            ("𝄪", Accidental::DoubleSharp),
            ("##", Accidental::DoubleSharp),
            ("x", Accidental::DoubleSharp),
            ("♯", Accidental::Sharp),
            ("#", Accidental::Sharp),
        ];
        let (accidental, rest) = spellings
            .iter()
            .find_map(|(text, accidental)| {
                rest.strip_prefix(text).map(|rest| (*accidental, rest))
            })
            .unwrap_or((Accidental::Natural, rest));

        let octave = if rest.is_empty() {
            Note::DEFAULT_OCTAVE
        } else {
            rest.parse::<i8>()
                .map_err(|_| ParseNoteError::InvalidOctave(rest.to_string()))?
        };

        Ok(Note::new(letter, accidental, octave))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> Note {
        s.parse().unwrap()
    }

    #[test]
    fn middle_c_is_sixty() {
        assert_eq!(note("C4").index(), 60);
        assert_eq!(note("B3").index(), 59);
        assert_eq!(note("Cb4").index(), 59);
        assert_eq!(note("B#3").index(), 60);
    }

    #[test]
    fn pitch_class_wraps_accidentals() {
        assert_eq!(note("C4").pitch_class(), 0);
        assert_eq!(note("Cb4").pitch_class(), 11);
        assert_eq!(note("B#3").pitch_class(), 0);
        assert_eq!(note("Fx2").pitch_class(), 7);
        assert_eq!(note("Abb5").pitch_class(), 7);
    }

    #[test]
    fn parses_unicode_and_ascii_accidentals() {
        assert_eq!(note("E♭4"), note("Eb4"));
        assert_eq!(note("G♯2"), note("G#2"));
        assert_eq!(note("D𝄫3"), note("Dbb3"));
        assert_eq!(note("F𝄪3"), note("F##3"));
        assert_eq!(note("C"), Note::pitched(Letter::C, Accidental::Natural));
        assert_eq!(note("C-1").octave, -1);
    }

    #[test]
    fn rejects_malformed_spellings() {
        assert_eq!("".parse::<Note>(), Err(ParseNoteError::Empty));
        assert_eq!("H4".parse::<Note>(), Err(ParseNoteError::InvalidLetter('H')));
        assert_eq!(
            "C#x".parse::<Note>(),
            Err(ParseNoteError::InvalidOctave("x".to_string()))
        );
    }

    #[test]
    fn shift_up_respells_the_letter() {
        assert_eq!(note("C4").shift_up(Interval::MajorThird), Some(note("E4")));
        assert_eq!(note("C4").shift_up(Interval::MinorThird), Some(note("Eb4")));
        assert_eq!(
            note("Cb4").shift_up(Interval::DiminishedFifth),
            Some(note("Gbb4"))
        );
        assert_eq!(
            note("G#4").shift_up(Interval::AugmentedFifth),
            Some(note("D##5"))
        );
    }

    #[test]
    fn shift_up_carries_the_octave() {
        assert_eq!(note("A4").shift_up(Interval::PerfectFifth), Some(note("E5")));
        assert_eq!(note("B3").shift_up(Interval::MinorSecond), Some(note("C4")));
    }

    #[test]
    fn shift_up_refuses_triple_accidentals() {
        // The fifth of the B-sharp augmented triad would be an F with
        // three sharps.
        assert_eq!(note("B#3").shift_up(Interval::AugmentedFifth), None);
    }

    #[test]
    fn semitone_distance_is_absolute() {
        assert_eq!(note("C4").semitones_to(&note("G4")), 7);
        assert_eq!(note("G4").semitones_to(&note("C4")), 7);
        assert_eq!(note("C4").semitones_to(&note("C4")), 0);
        assert_eq!(note("B4").semitones_to(&note("G4")), 4);
    }

    #[test]
    fn spelling_omits_the_octave() {
        assert_eq!(note("Eb4").spelling(), "E♭");
        assert_eq!(note("C7").spelling(), "C");
        assert_eq!(note("F##3").to_string(), "F𝄪3");
    }

    #[test]
    fn index_round_trips_canonical_spellings() {
        for index in 0..128 {
            assert_eq!(Note::from_index(index).index(), index);
        }
    }
}
