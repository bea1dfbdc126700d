//! # chord_namer
//!
//! Identify and name simultaneously-sounding musical notes: reduce a set
//! of pitches to a canonical pitch-class representation and match it
//! against a precomputed table of triads.
//!
//! ## Example
//! ```rust
//! use chord_namer::{Chord, Note};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Build a chord from spelled notes
//!     let mut chord: Chord = "C4 Eb4".parse()?;
//!     chord.add("G4".parse::<Note>()?);
//!
//!     // 2) Ask for its name: octave and spelling of the members are
//!     //    irrelevant, only the pitch-class set matters
//!     assert_eq!(chord.name(), "Cm");
//!
//!     // 3) Compare chords by one-sided Hausdorff distance
//!     let seventh: Chord = "C4 Eb4 G4 Bb4".parse()?;
//!     assert_eq!(chord.hausdorff(&seventh), 0);
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Chord membership, naming and distance.
pub use chord::{Chord, TriadInfo, TriadType, ALL_TRIAD_TYPES};

/// Triad lookup table.
pub use chord_table::ChordTable;

/// Interval algebra and interval option-sets.
pub use interval::{ChordType, Interval, ALL_INTERVALS};

/// Spelled notes.
pub use note::{Accidental, Letter, Note, ParseNoteError, ALL_LETTERS};

/// Bitset note containers.
pub use note_set::NoteSet;

/// Interval scales.
pub use scale::Scale;

/// Chord model module.
pub mod chord;

/// Triad table module.
pub mod chord_table;

/// Interval module.
pub mod interval;

/// Note spelling module.
pub mod note;

/// Note set module.
pub mod note_set;

/// Scale module.
pub mod scale;
