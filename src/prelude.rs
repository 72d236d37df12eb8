pub use crate::defs::*;
pub use crate::table::{
    Column, ColumnType, FaceCountTable, GameTable, Grouping, NarrowRow, NarrowTable,
    OutcomeCountTable, Tabular, WeightTable, WideTable,
};
pub use crate::{Analyzer, Die, Error, ErrorKind, Face, FaceKind, Form, Game, IntoWeight};
