use std::fmt::Debug;

use num::ToPrimitive;

use crate::error::{Error, Result};

pub type Weight = f64;

pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Values that can be turned into a face weight.
///
/// Conversion only checks that the value is a number; range checks happen
/// when the weight is applied to a die.
pub trait IntoWeight {
    fn into_weight(self) -> Result<Weight>;
}

fn numeric<T>(value: T) -> Result<Weight>
where
    T: ToPrimitive + Debug,
{
    value
        .to_f64()
        .filter(|w| !w.is_nan())
        .ok_or_else(|| Error::NonNumericWeight(format!("{value:?}")))
}

macro_rules! impl_into_weight {
    ($typ:ty) => {
        impl $crate::weight::IntoWeight for $typ {
            fn into_weight(self) -> $crate::error::Result<$crate::weight::Weight> {
                numeric(self)
            }
        }
    };
}

impl_into_weight!(f32);
impl_into_weight!(f64);
impl_into_weight!(u8);
impl_into_weight!(u16);
impl_into_weight!(u32);
impl_into_weight!(u64);
impl_into_weight!(usize);
impl_into_weight!(i8);
impl_into_weight!(i16);
impl_into_weight!(i32);
impl_into_weight!(i64);
impl_into_weight!(isize);

impl IntoWeight for &str {
    fn into_weight(self) -> Result<Weight> {
        self.trim()
            .parse::<Weight>()
            .ok()
            .filter(|w| !w.is_nan())
            .ok_or_else(|| Error::NonNumericWeight(self.to_owned()))
    }
}

impl IntoWeight for String {
    fn into_weight(self) -> Result<Weight> {
        self.as_str().into_weight()
    }
}

/// Checks that a converted weight can be stored on a die.
pub(crate) fn validate(weight: Weight) -> Result<Weight> {
    if weight < 0.0 {
        Err(Error::NegativeWeight(weight))
    } else if !weight.is_finite() {
        Err(Error::NonFiniteWeight(weight))
    } else {
        Ok(weight)
    }
}
