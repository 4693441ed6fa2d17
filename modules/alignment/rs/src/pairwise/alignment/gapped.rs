/// One entry of an aligned (gapped) sequence row.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Gapped<T> {
    Symbol(T),
    Gap,
}

impl<T> Gapped<T> {
    pub fn is_gap(&self) -> bool {
        matches!(self, Gapped::Gap)
    }

    pub fn symbol(&self) -> Option<&T> {
        match self {
            Gapped::Symbol(x) => Some(x),
            Gapped::Gap => None,
        }
    }
}

/// Gap character used when aligned rows are rendered as text.
pub const GAP_CHAR: char = '-';

impl<T: Copy + Into<char>> Gapped<T> {
    pub fn to_char(&self) -> char {
        match self {
            Gapped::Symbol(x) => (*x).into(),
            Gapped::Gap => GAP_CHAR,
        }
    }
}
