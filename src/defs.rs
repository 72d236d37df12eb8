use once_cell::sync::Lazy;

use crate::die::DieInner;
use crate::face::{Face, FaceKind};
use crate::Die;

pub static COIN: Lazy<Vec<Face>> = Lazy::new(|| vec![Face::from("H"), Face::from("T")]);
pub static D4: Lazy<Vec<Face>> = Lazy::new(|| numeric(4));
pub static D6: Lazy<Vec<Face>> = Lazy::new(|| numeric(6));
pub static D8: Lazy<Vec<Face>> = Lazy::new(|| numeric(8));
pub static D10: Lazy<Vec<Face>> = Lazy::new(|| numeric(10));
pub static D12: Lazy<Vec<Face>> = Lazy::new(|| numeric(12));
pub static D20: Lazy<Vec<Face>> = Lazy::new(|| numeric(20));

fn numeric(size: i64) -> Vec<Face> {
    (1..=size).map(Face::Int).collect()
}

fn fair(kind: FaceKind, faces: &[Face]) -> Die {
    Die::from_inner(DieInner::uniform(kind, faces.to_vec()))
}

// Each call builds an independent die; weights are never shared between calls.

pub fn coin() -> Die {
    fair(FaceKind::Text, &COIN)
}

pub fn d4() -> Die {
    fair(FaceKind::Int, &D4)
}

pub fn d6() -> Die {
    fair(FaceKind::Int, &D6)
}

pub fn d8() -> Die {
    fair(FaceKind::Int, &D8)
}

pub fn d10() -> Die {
    fair(FaceKind::Int, &D10)
}

pub fn d12() -> Die {
    fair(FaceKind::Int, &D12)
}

pub fn d20() -> Die {
    fair(FaceKind::Int, &D20)
}
