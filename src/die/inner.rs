use itertools::Itertools;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::{Error, Result};
use crate::face::{Face, FaceKind};
use crate::weight::{self, IntoWeight, Weight, DEFAULT_WEIGHT};

#[derive(Clone, Debug, PartialEq)]
pub struct DieInner {
    kind: FaceKind,
    faces: Vec<Face>,
    weights: Vec<Weight>,
}

impl DieInner {
    pub fn new<I, F>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        let faces = faces.into_iter().map(Into::into).collect_vec();
        let kind = faces.first().ok_or(Error::EmptyFaces)?.kind();
        if let Some(found) = faces.iter().map(Face::kind).find(|k| *k != kind) {
            return Err(Error::MixedFaces {
                expected: kind,
                found,
            });
        }
        if let Some(face) = faces.iter().duplicates().next() {
            return Err(Error::DuplicateFace(face.clone()));
        }
        Ok(Self::uniform(kind, faces))
    }

    /// Faces must be non-empty, unique and of `kind`.
    pub(crate) fn uniform(kind: FaceKind, faces: Vec<Face>) -> Self {
        let n = faces.len();
        Self {
            kind,
            faces,
            weights: vec![DEFAULT_WEIGHT; n],
        }
    }

    pub fn kind(&self) -> FaceKind {
        self.kind
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Face, &Weight)> + '_ {
        self.faces.iter().zip(&self.weights)
    }

    pub fn position(&self, face: &Face) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }

    pub fn weight(&self, face: &Face) -> Option<Weight> {
        self.position(face).map(|i| self.weights[i])
    }

    /// Replaces the weight of `face` and returns the previous one.
    pub fn change_weight<W>(&mut self, face: &Face, value: W) -> Result<Weight>
    where
        W: IntoWeight,
    {
        let i = self
            .position(face)
            .ok_or_else(|| Error::FaceNotFound(face.clone()))?;
        let value = weight::validate(value.into_weight()?)?;
        Ok(std::mem::replace(&mut self.weights[i], value))
    }

    /// Weights divided by the largest one, so their sum stays within `len()`.
    fn scaled_weights(&self) -> Option<Vec<Weight>> {
        let max = self.weights.iter().copied().fold(0.0, Weight::max);
        (max > 0.0).then(|| self.weights.iter().map(|w| w / max).collect())
    }

    pub fn probabilities(&self) -> Vec<f64> {
        match self.scaled_weights() {
            Some(scaled) => {
                let total: Weight = scaled.iter().sum();
                scaled.iter().map(|w| w / total).collect()
            }
            None => vec![0.0; self.weights.len()],
        }
    }

    fn sampler(&self) -> Result<WeightedIndex<Weight>> {
        let scaled = self.scaled_weights().ok_or(Error::AllWeightsZero)?;
        // scaled weights are finite, non-negative and include a 1.0
        WeightedIndex::new(&scaled).map_err(|_| Error::AllWeightsZero)
    }

    pub fn sample_rng<G>(&self, rng: &mut G) -> Result<Face>
    where
        G: Rng + ?Sized,
    {
        let dist = self.sampler()?;
        Ok(self.faces[dist.sample(rng)].clone())
    }

    pub fn sample_many_rng<G>(&self, n: usize, rng: &mut G) -> Result<Vec<Face>>
    where
        G: Rng + ?Sized,
    {
        if n == 0 {
            return Err(Error::ZeroRolls);
        }
        let dist = self.sampler()?;
        Ok((0..n)
            .map(|_| self.faces[dist.sample(&mut *rng)].clone())
            .collect())
    }

    /// Whether both dice carry the same set of faces, ignoring order.
    pub fn same_faces(&self, other: &Self) -> bool {
        self.faces.len() == other.faces.len()
            && self.faces.iter().sorted().eq(other.faces.iter().sorted())
    }
}
