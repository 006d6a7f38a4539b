//! `Display` formatting for [`Matrix`].
//!
//! Rows are printed in reading order even though storage is by column.
//! The alternate form (`{:#}`) puts each row on its own line.

use core::fmt;

use crate::Scalar;

use super::Matrix;

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        write!(f, "[")?;
        for r in 0..rows {
            if r > 0 {
                if f.alternate() {
                    write!(f, ",\n ")?;
                } else {
                    write!(f, ", ")?;
                }
            }
            fmt::Display::fmt(&self.row(r), f)?;
        }
        write!(f, "]")
    }
}
