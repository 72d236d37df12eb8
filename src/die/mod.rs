mod inner;
mod ptr;

pub(crate) use inner::DieInner;
pub use ptr::Die;
