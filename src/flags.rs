// flags.rs
//
// Condition flags raised by an operation on a `Decimal`.
//

/// The eight General Decimal Arithmetic condition flags.
///
/// Every [`Decimal`][crate::Decimal] carries its own `Flags`, reflecting
/// only the operation that produced it (flags are not propagated from
/// operands onto a result unless stated otherwise). Flags are monotone
/// (`false -> true`) within the lifetime of a value unless the owner calls
/// [`Flags::reset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub clamped: bool,
    pub division_by_zero: bool,
    pub inexact: bool,
    pub invalid_operation: bool,
    pub overflow: bool,
    pub rounded: bool,
    pub subnormal: bool,
    pub underflow: bool,
}

impl Flags {
    /// All flags clear.
    pub const fn new() -> Self {
        Self {
            clamped: false,
            division_by_zero: false,
            inexact: false,
            invalid_operation: false,
            overflow: false,
            rounded: false,
            subnormal: false,
            underflow: false,
        }
    }

    /// Clears every flag.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// True if any flag is set.
    pub fn any(&self) -> bool {
        self.clamped
            || self.division_by_zero
            || self.inexact
            || self.invalid_operation
            || self.overflow
            || self.rounded
            || self.subnormal
            || self.underflow
    }
}
