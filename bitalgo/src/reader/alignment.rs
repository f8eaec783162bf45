use derive_more::Display;

/// How the start offsets of two ranges relate, decided once per reader.
///
/// When neither range starts on a word boundary, the one with the larger
/// offset is "ahead": it reaches its next word boundary first.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Alignment {
    BothAligned,
    FirstAligned,
    SecondAligned,
    FirstAhead,
    SecondAhead,
}

impl Alignment {
    #[must_use]
    pub fn classify(first_offset: usize, second_offset: usize) -> Self {
        match (first_offset, second_offset) {
            (0, 0) => Alignment::BothAligned,
            (0, _) => Alignment::FirstAligned,
            (_, 0) => Alignment::SecondAligned,
            (first, second) if first > second => Alignment::FirstAhead,
            _ => Alignment::SecondAhead,
        }
    }

    /// Class that holds once the first read has brought the range that was
    /// behind onto a word boundary.
    #[must_use]
    pub fn after_first_read(self) -> Self {
        match self {
            Alignment::FirstAhead => Alignment::SecondAligned,
            Alignment::SecondAhead => Alignment::FirstAligned,
            aligned => aligned,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Initial,
    Steady,
    Finished,
}
