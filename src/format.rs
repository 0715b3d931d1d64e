/*!
The canonical string formatter: renders a `Decimal` in plain (non-
exponential) notation.

There is no teacher analogue for a non-exponential decimal renderer — the
teacher's formats either print hex/scientific float forms or rely on
`Integer`'s own `Display`. This module follows the teacher's habit of
building the output with a `String` buffer and `write!` rather than pulling
in a formatting crate, the same way `rfloat::RFloat`'s own rendering (used
only in `Debug`) stays on `std::fmt`.
*/

use std::fmt;

use crate::{Decimal, Hook};

impl<H: Hook> fmt::Display for Decimal<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::decimal::Kind;

        if self.sign {
            write!(f, "-")?;
        }

        match self.kind {
            Kind::Nan => return write!(f, "NaN"),
            Kind::Infinity => return write!(f, "Infinity"),
            Kind::Finite => {}
        }

        let s = self.coefficient.to_string();
        let d = -self.exponent;

        if d <= 0 {
            write!(f, "{s}")?;
            for _ in 0..(-d) {
                write!(f, "0")?;
            }
            return Ok(());
        }

        let d = d as usize;
        let len = s.len();
        if len > d {
            write!(f, "{}.{}", &s[..len - d], &s[len - d..])
        } else if len == d {
            write!(f, "0.{s}")
        } else {
            write!(f, "0.")?;
            for _ in 0..(d - len) {
                write!(f, "0")?;
            }
            write!(f, "{s}")
        }
    }
}
