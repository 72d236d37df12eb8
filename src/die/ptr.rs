use std::cell::RefCell;
use std::rc::Rc;

use rand::{thread_rng, Rng};

use super::inner::DieInner;
use crate::error::Result;
use crate::face::{Face, FaceKind};
use crate::table::WeightTable;
use crate::weight::{IntoWeight, Weight};

type Ptr<T> = Rc<RefCell<T>>;

/// A die with fixed faces and mutable weights.
///
/// `Die` is a shared handle: clones point at the same die, so a weight change
/// made through any handle is seen by every game holding one.
#[derive(Clone, Debug)]
pub struct Die(Ptr<DieInner>);

impl Die {
    /// Creates a fair die from unique faces of a single kind.
    pub fn new<I, F>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        Ok(Self::from_inner(DieInner::new(faces)?))
    }

    /// Fair die with faces `1..=size`.
    pub fn numeric(size: u32) -> Result<Self> {
        Self::new(1..=size)
    }

    pub(crate) fn from_inner(inner: DieInner) -> Self {
        Die(Rc::new(RefCell::new(inner)))
    }

    #[must_use]
    pub fn kind(&self) -> FaceKind {
        self.0.borrow().kind()
    }

    #[must_use]
    pub fn faces(&self) -> Vec<Face> {
        self.0.borrow().faces().to_vec()
    }

    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.0.borrow().faces().len()
    }

    #[must_use]
    pub fn weight<F>(&self, face: F) -> Option<Weight>
    where
        F: Into<Face>,
    {
        self.0.borrow().weight(&face.into())
    }

    /// Sets the weight of one face.
    ///
    /// Fails with [`crate::Error::FaceNotFound`] for an unknown face and with a weight
    /// error when `weight` is not a non-negative finite number. Nothing is
    /// changed on failure.
    pub fn change_weight<F, W>(&self, face: F, weight: W) -> Result<()>
    where
        F: Into<Face>,
        W: IntoWeight,
    {
        let face = face.into();
        let previous = self.0.borrow_mut().change_weight(&face, weight)?;
        tracing::debug!(
            face = %face,
            previous,
            weight = ?self.weight(&face),
            "changed face weight"
        );
        Ok(())
    }

    #[must_use]
    pub fn probabilities(&self) -> Vec<f64> {
        self.0.borrow().probabilities()
    }

    pub fn roll(&self, num_rolls: usize) -> Result<Vec<Face>> {
        let mut rng = thread_rng();
        self.roll_rng(num_rolls, &mut rng)
    }

    pub fn roll_rng<G>(&self, num_rolls: usize, rng: &mut G) -> Result<Vec<Face>>
    where
        G: Rng + ?Sized,
    {
        self.0.borrow().sample_many_rng(num_rolls, rng)
    }

    pub fn roll_once(&self) -> Result<Face> {
        let mut rng = thread_rng();
        self.roll_once_rng(&mut rng)
    }

    pub fn roll_once_rng<G>(&self, rng: &mut G) -> Result<Face>
    where
        G: Rng + ?Sized,
    {
        self.0.borrow().sample_rng(rng)
    }

    /// Snapshot of the current weights in face order.
    #[must_use]
    pub fn show(&self) -> WeightTable {
        WeightTable::new(
            self.0
                .borrow()
                .iter()
                .map(|(f, w)| (f.clone(), *w))
                .collect(),
        )
    }

    /// Whether both handles refer to the same die.
    #[must_use]
    pub fn ptr_eq(&self, other: &Die) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn same_faces(&self, other: &Die) -> bool {
        self.ptr_eq(other) || self.0.borrow().same_faces(&other.0.borrow())
    }
}
