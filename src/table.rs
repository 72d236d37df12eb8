//! Fixed-schema result tables.
//!
//! Every table exposes its schema as an ordered list of [`Column`]s and can
//! be rendered as text through [`Tabular`]. Column labels are the constants
//! below; roll and die indices are 0-based.
//!
//! Columns named after data carry a fixed prefix so they never collide with
//! the fixed columns: `die 0`, `die 1`, … in wide game tables and `face H`,
//! `face T`, … in face count tables, even for a face labelled `roll`.

use std::fmt::{self, Display};
use std::slice;

use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{Cell, ContentArrangement, Table};
use itertools::Itertools;

use crate::face::Face;
use crate::weight::Weight;

pub const ROLL_COLUMN: &str = "roll";
pub const DIE_COLUMN: &str = "die";
pub const OUTCOME_COLUMN: &str = "outcome";
pub const FACE_COLUMN: &str = "face";
pub const WEIGHT_COLUMN: &str = "weight";
pub const COUNT_COLUMN: &str = "count";
pub const COMBINATION_COLUMN: &str = "combination";
pub const PERMUTATION_COLUMN: &str = "permutation";
/// Prefix of the per-die columns of a wide game table, followed by the die index.
pub const WIDE_DIE_PREFIX: &str = "die ";
/// Prefix of the per-face columns of a face count table, followed by the face.
pub const FACE_COUNT_PREFIX: &str = "face ";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// 0-based roll or die index.
    Index,
    Face,
    Weight,
    Count,
    /// Tuple of faces.
    Outcomes,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Column {
    pub name: String,
    pub kind: ColumnType,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ColumnType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

pub trait Tabular {
    fn columns(&self) -> Vec<Column>;

    fn text_rows(&self) -> Vec<Vec<String>>;

    fn column_names(&self) -> Vec<String> {
        self.columns().into_iter().map(|c| c.name).collect()
    }

    fn table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_NO_BORDERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(self.column_names().into_iter().map(Cell::new).collect_vec());
        for row in self.text_rows() {
            table.add_row(row);
        }
        format!("{table}\n")
    }

    fn print_table(&self) {
        print!("{}", self.table());
    }
}

macro_rules! impl_display_table {
    ($typ:ty) => {
        impl Display for $typ {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.table().trim_end_matches('\n'))
            }
        }
    };
}

fn outcomes_label(outcomes: &[Face]) -> String {
    format!("({})", outcomes.iter().join(", "))
}

/// Face to weight snapshot of a die, in face order.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTable {
    rows: Vec<(Face, Weight)>,
}

impl WeightTable {
    pub(crate) fn new(rows: Vec<(Face, Weight)>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, (Face, Weight)> {
        self.rows.iter()
    }

    #[must_use]
    pub fn get(&self, face: &Face) -> Option<Weight> {
        self.rows.iter().find(|(f, _)| f == face).map(|(_, w)| *w)
    }

    /// Overwrites a weight in this snapshot only.
    pub fn set(&mut self, face: &Face, weight: Weight) -> bool {
        match self.rows.iter_mut().find(|(f, _)| f == face) {
            Some((_, w)) => {
                *w = weight;
                true
            }
            None => false,
        }
    }

    pub fn faces(&self) -> impl Iterator<Item = &Face> + '_ {
        self.rows.iter().map(|(f, _)| f)
    }

    #[must_use]
    pub fn weights(&self) -> Vec<Weight> {
        self.rows.iter().map(|(_, w)| *w).collect()
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<(Face, Weight)> {
        self.rows
    }
}

impl Tabular for WeightTable {
    fn columns(&self) -> Vec<Column> {
        vec![
            Column::new(FACE_COLUMN, ColumnType::Face),
            Column::new(WEIGHT_COLUMN, ColumnType::Weight),
        ]
    }

    fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|(f, w)| vec![f.to_string(), format!("{w:.3}")])
            .collect()
    }
}

/// Game history with one row per roll and one column per die.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideTable {
    dice: usize,
    rows: Vec<Vec<Face>>,
}

impl WideTable {
    pub(crate) fn new(dice: usize, rows: Vec<Vec<Face>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == dice));
        Self { dice, rows }
    }

    #[must_use]
    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn num_dice(&self) -> usize {
        self.dice
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Face>] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[Face]> {
        self.rows.get(roll).map(Vec::as_slice)
    }

    /// Outcomes of one die across all rolls.
    pub fn column(&self, die: usize) -> impl Iterator<Item = &Face> + '_ {
        self.rows.iter().filter_map(move |r| r.get(die))
    }

    /// All outcomes, roll by roll.
    pub fn outcomes(&self) -> impl Iterator<Item = &Face> + '_ {
        self.rows.iter().flatten()
    }

    #[must_use]
    pub fn to_narrow(&self) -> NarrowTable {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(roll, r)| {
                r.iter().enumerate().map(move |(die, outcome)| NarrowRow {
                    roll,
                    die,
                    outcome: outcome.clone(),
                })
            })
            .collect();
        NarrowTable { rows }
    }
}

impl Tabular for WideTable {
    fn columns(&self) -> Vec<Column> {
        let mut columns = Vec::with_capacity(self.dice + 1);
        columns.push(Column::new(ROLL_COLUMN, ColumnType::Index));
        columns.extend(
            (0..self.dice).map(|d| Column::new(format!("{WIDE_DIE_PREFIX}{d}"), ColumnType::Face)),
        );
        columns
    }

    fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(roll, r)| {
                std::iter::once(roll.to_string())
                    .chain(r.iter().map(Face::to_string))
                    .collect()
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrowRow {
    pub roll: usize,
    pub die: usize,
    pub outcome: Face,
}

/// Game history with one row per (roll, die) pair, ordered by roll then die.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrowTable {
    rows: Vec<NarrowRow>,
}

impl NarrowTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[NarrowRow] {
        &self.rows
    }

    pub fn iter(&self) -> slice::Iter<'_, NarrowRow> {
        self.rows.iter()
    }
}

impl Tabular for NarrowTable {
    fn columns(&self) -> Vec<Column> {
        vec![
            Column::new(ROLL_COLUMN, ColumnType::Index),
            Column::new(DIE_COLUMN, ColumnType::Index),
            Column::new(OUTCOME_COLUMN, ColumnType::Face),
        ]
    }

    fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| vec![r.roll.to_string(), r.die.to_string(), r.outcome.to_string()])
            .collect()
    }
}

/// Either layout of a game history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameTable {
    Wide(WideTable),
    Narrow(NarrowTable),
}

impl GameTable {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            GameTable::Wide(t) => t.num_rolls(),
            GameTable::Narrow(t) => t.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_wide(&self) -> Option<&WideTable> {
        match self {
            GameTable::Wide(t) => Some(t),
            GameTable::Narrow(_) => None,
        }
    }

    #[must_use]
    pub fn as_narrow(&self) -> Option<&NarrowTable> {
        match self {
            GameTable::Wide(_) => None,
            GameTable::Narrow(t) => Some(t),
        }
    }
}

impl Tabular for GameTable {
    fn columns(&self) -> Vec<Column> {
        match self {
            GameTable::Wide(t) => t.columns(),
            GameTable::Narrow(t) => t.columns(),
        }
    }

    fn text_rows(&self) -> Vec<Vec<String>> {
        match self {
            GameTable::Wide(t) => t.text_rows(),
            GameTable::Narrow(t) => t.text_rows(),
        }
    }
}

/// Per-roll count of every face of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceCountTable {
    faces: Vec<Face>,
    counts: Vec<Vec<usize>>,
}

impl FaceCountTable {
    pub(crate) fn new(faces: Vec<Face>, counts: Vec<Vec<usize>>) -> Self {
        Self { faces, counts }
    }

    #[must_use]
    pub fn num_rolls(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.counts
    }

    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[usize]> {
        self.counts.get(roll).map(Vec::as_slice)
    }

    #[must_use]
    pub fn count(&self, roll: usize, face: &Face) -> Option<usize> {
        let col = self.faces.iter().position(|f| f == face)?;
        self.counts.get(roll).map(|r| r[col])
    }
}

impl Tabular for FaceCountTable {
    fn columns(&self) -> Vec<Column> {
        std::iter::once(Column::new(ROLL_COLUMN, ColumnType::Index))
            .chain(
                self.faces
                    .iter()
                    .map(|f| {
                        Column::new(format!("{FACE_COUNT_PREFIX}{f}"), ColumnType::Count)
                    }),
            )
            .collect()
    }

    fn text_rows(&self) -> Vec<Vec<String>> {
        self.counts
            .iter()
            .enumerate()
            .map(|(roll, r)| {
                std::iter::once(roll.to_string())
                    .chain(r.iter().map(usize::to_string))
                    .collect()
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Grouping {
    /// Outcomes sorted, die order ignored.
    Combination,
    /// Outcomes in die order.
    Permutation,
}

impl Grouping {
    #[must_use]
    pub fn column_name(self) -> &'static str {
        match self {
            Grouping::Combination => COMBINATION_COLUMN,
            Grouping::Permutation => PERMUTATION_COLUMN,
        }
    }
}

/// Distinct outcome tuples with the number of rolls that produced each.
///
/// Rows are ordered by descending count, ties by ascending tuple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeCountTable {
    grouping: Grouping,
    rows: Vec<(Vec<Face>, usize)>,
}

impl OutcomeCountTable {
    pub(crate) fn new(grouping: Grouping, rows: Vec<(Vec<Face>, usize)>) -> Self {
        let rows = rows
            .into_iter()
            .sorted_by(|(k1, c1), (k2, c2)| c2.cmp(c1).then_with(|| k1.cmp(k2)))
            .collect();
        Self { grouping, rows }
    }

    #[must_use]
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, (Vec<Face>, usize)> {
        self.rows.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &[Face]> + '_ {
        self.rows.iter().map(|(k, _)| k.as_slice())
    }

    /// Number of rolls matching `key`, 0 when the tuple never occurred.
    #[must_use]
    pub fn get(&self, key: &[Face]) -> usize {
        self.rows
            .iter()
            .find(|(k, _)| k.as_slice() == key)
            .map_or(0, |(_, c)| *c)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.iter().map(|(_, c)| c).sum()
    }
}

impl Tabular for OutcomeCountTable {
    fn columns(&self) -> Vec<Column> {
        vec![
            Column::new(self.grouping.column_name(), ColumnType::Outcomes),
            Column::new(COUNT_COLUMN, ColumnType::Count),
        ]
    }

    fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|(k, c)| vec![outcomes_label(k), c.to_string()])
            .collect()
    }
}

impl_display_table!(WeightTable);
impl_display_table!(WideTable);
impl_display_table!(NarrowTable);
impl_display_table!(GameTable);
impl_display_table!(FaceCountTable);
impl_display_table!(OutcomeCountTable);
