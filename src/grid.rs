//! The letter grid and the word → cell mapping.
//!
//! Everything in here is `const` data plus pure expansion logic, so the
//! whole module is shareable across the process without locking and
//! testable without any hardware.
//!
//! ## Rust concepts
//! - `const` arrays for compile-time fixed data
//! - Enums as closed sets (the compiler enforces exhaustive handling)
//! - Struct-variant enums instead of tuples-disambiguated-by-arity

// ── Grid ─────────────────────────────────────────────────────────────

pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 11;

/// The fixed letter layout. Row 0 is decorative filler and is never
/// illuminated; no word run references it.
pub const GRID: [&str; GRID_ROWS] = [
    "ITLISASTIME",
    "ACQUARTERDC",
    "TWENTYFIVEX",
    "HALFBTENYTO",
    "PASTERUNINE",
    "ONESIXTHREE",
    "FOURFIVETWO",
    "EIGHTELEVEN",
    "SEVENTWELVE",
    "OCLOCKXXXXX",
];

/// The letter printed at a grid cell. Rows are plain ASCII, so byte
/// indexing is safe here.
pub fn letter_at(row: usize, col: usize) -> char {
    GRID[row].as_bytes()[col] as char
}

// ── Words ────────────────────────────────────────────────────────────

/// Every word the grid can light up.
///
/// # Rust concept: enums as closed worlds
/// With a string-keyed table, a typo'd key is a runtime error. As an
/// enum, "unregistered word" is unrepresentable — `runs()` must match
/// every variant or the crate doesn't compile.
///
/// `FiveHour` and `TenHour` exist because the grid spells the numeral 5
/// in two places (minute row and hour row); for 10 both roles resolve to
/// the same letters, but the phrase logic still distinguishes the roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Word {
    Quarter,
    Twenty,
    Five,
    Half,
    Ten,
    To,
    Past,
    One,
    Two,
    Three,
    Four,
    FiveHour,
    Six,
    Seven,
    Eight,
    Nine,
    TenHour,
    Eleven,
    Twelve,
    Oclock,
}

impl Word {
    /// All variants, for closed-world property tests.
    pub const ALL: [Word; 20] = [
        Word::Quarter,
        Word::Twenty,
        Word::Five,
        Word::Half,
        Word::Ten,
        Word::To,
        Word::Past,
        Word::One,
        Word::Two,
        Word::Three,
        Word::Four,
        Word::FiveHour,
        Word::Six,
        Word::Seven,
        Word::Eight,
        Word::Nine,
        Word::TenHour,
        Word::Eleven,
        Word::Twelve,
        Word::Oclock,
    ];

    /// The cell runs this word occupies on the grid.
    ///
    /// `Ten` and `TenHour` share one physical run; the grid spells TEN
    /// only once.
    pub const fn runs(self) -> &'static [CellRun] {
        use CellRun::Span;
        match self {
            Word::Quarter => &[Span { row: 1, start: 2, end: 8 }],
            Word::Twenty => &[Span { row: 2, start: 0, end: 5 }],
            Word::Five => &[Span { row: 2, start: 6, end: 9 }],
            Word::Half => &[Span { row: 3, start: 0, end: 3 }],
            Word::Ten => &[Span { row: 3, start: 5, end: 7 }],
            Word::To => &[Span { row: 3, start: 9, end: 10 }],
            Word::Past => &[Span { row: 4, start: 0, end: 3 }],
            Word::One => &[Span { row: 5, start: 0, end: 2 }],
            Word::Two => &[Span { row: 6, start: 7, end: 9 }],
            Word::Three => &[Span { row: 5, start: 4, end: 8 }],
            Word::Four => &[Span { row: 6, start: 0, end: 3 }],
            Word::FiveHour => &[Span { row: 6, start: 4, end: 7 }],
            Word::Six => &[Span { row: 5, start: 3, end: 5 }],
            Word::Seven => &[Span { row: 8, start: 0, end: 4 }],
            Word::Eight => &[Span { row: 7, start: 0, end: 4 }],
            Word::Nine => &[Span { row: 4, start: 6, end: 9 }],
            Word::TenHour => &[Span { row: 3, start: 5, end: 7 }],
            Word::Eleven => &[Span { row: 7, start: 5, end: 10 }],
            Word::Twelve => &[Span { row: 8, start: 5, end: 10 }],
            Word::Oclock => &[Span { row: 9, start: 0, end: 5 }],
        }
    }

    /// Expand every run to concrete `(row, col)` cells.
    pub fn cells(self) -> Vec<(usize, usize)> {
        self.runs().iter().flat_map(|run| run.cells()).collect()
    }
}

// ── Cell runs ────────────────────────────────────────────────────────

/// A compact encoding of the cells a word occupies.
///
/// Tagged variants rather than tuples disambiguated by arity, so each
/// field says what it means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRun {
    /// A single cell.
    Point { row: usize, col: usize },
    /// A horizontal run on one row, `start..=end` inclusive.
    Span { row: usize, start: usize, end: usize },
    /// A filled rectangle, inclusive on both axes.
    Block {
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
    },
}

impl CellRun {
    /// Expand to concrete cells. Blocks expand row-major; only set
    /// membership matters downstream, not order.
    pub fn cells(self) -> Vec<(usize, usize)> {
        match self {
            CellRun::Point { row, col } => vec![(row, col)],
            CellRun::Span { row, start, end } => (start..=end).map(|col| (row, col)).collect(),
            CellRun::Block {
                top,
                left,
                bottom,
                right,
            } => {
                let mut cells = Vec::new();
                for row in top..=bottom {
                    for col in left..=right {
                        cells.push((row, col));
                    }
                }
                cells
            }
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
