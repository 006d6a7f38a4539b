//! `Display` formatting for [`Vector`].

use core::fmt;

use crate::Scalar;

use super::Vector;

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(v, f)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex;

    use super::*;

    #[test]
    fn test_display() {
        let v = Vector::from([1.0, 2.5, -3.0]);
        assert_eq!(format!("{v}"), "[1, 2.5, -3]");
    }

    #[test]
    fn test_display_forwards_precision() {
        let v = Vector::from([1.0, 2.5]);
        assert_eq!(format!("{v:.2}"), "[1.00, 2.50]");
        assert_eq!(format!("{v:>4}"), "[   1,  2.5]");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(format!("{}", Vector::<f32>::zeros(0)), "[]");
    }

    #[test]
    fn test_display_complex() {
        let v = Vector::from([Complex::new(1.0, -2.0)]);
        assert_eq!(v.to_string(), "[1-2i]");
    }
}
