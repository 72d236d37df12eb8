use std::fmt::{self, Display};

/// Label of one die face. A die holds faces of a single kind.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    Int(i64),
    Text(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceKind {
    Int,
    Text,
}

impl Face {
    #[must_use]
    pub fn kind(&self) -> FaceKind {
        match self {
            Face::Int(_) => FaceKind::Int,
            Face::Text(_) => FaceKind::Text,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Face::Int(x) => Some(*x),
            Face::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Face::Int(_) => None,
            Face::Text(s) => Some(s),
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Int(x) => write!(f, "{x}"),
            Face::Text(s) => f.write_str(s),
        }
    }
}

impl Display for FaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceKind::Int => f.write_str("integer"),
            FaceKind::Text => f.write_str("text"),
        }
    }
}

macro_rules! impl_face_from_int {
    ($typ:ty) => {
        impl From<$typ> for $crate::face::Face {
            fn from(value: $typ) -> Self {
                $crate::face::Face::Int(i64::from(value))
            }
        }
    };
}

impl_face_from_int!(u8);
impl_face_from_int!(u16);
impl_face_from_int!(u32);
impl_face_from_int!(i8);
impl_face_from_int!(i16);
impl_face_from_int!(i32);
impl_face_from_int!(i64);

impl From<&str> for Face {
    fn from(value: &str) -> Self {
        Face::Text(value.to_owned())
    }
}

impl From<String> for Face {
    fn from(value: String) -> Self {
        Face::Text(value)
    }
}

impl From<char> for Face {
    fn from(value: char) -> Self {
        Face::Text(value.to_string())
    }
}

impl From<&Face> for Face {
    fn from(value: &Face) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_kind() {
        assert_eq!(Face::from(3u8), Face::Int(3));
        assert_eq!(Face::from(-2i32).kind(), FaceKind::Int);
        assert_eq!(Face::from("H"), Face::Text("H".into()));
        assert_eq!(Face::from('T').kind(), FaceKind::Text);
        assert_eq!(Face::from(4u16).as_int(), Some(4));
        assert_eq!(Face::from("4").as_int(), None);
    }

    #[test]
    fn display_is_the_bare_label() {
        assert_eq!(Face::Int(6).to_string(), "6");
        assert_eq!(Face::from("heads").to_string(), "heads");
        assert_eq!(FaceKind::Text.to_string(), "text");
    }

    #[test]
    fn ints_order_numerically() {
        let mut faces = vec![Face::Int(10), Face::Int(2), Face::Int(-1)];
        faces.sort();
        assert_eq!(faces, vec![Face::Int(-1), Face::Int(2), Face::Int(10)]);
    }
}
