use std::error::Error;

/// Builder-side parameters that still have to be validated.
///
/// Estimators and solvers are configured through a params builder which is
/// only usable once it went through `check`. Validation happens before any
/// evaluation of the objective, so a misconfigured run fails without doing
/// any numerical work.
pub trait ParamGuard {
    /// Parameters known to be valid
    type Checked;
    /// Error raised when a parameter is out of its domain
    type Error: Error;

    /// Validates the parameters and borrows the checked set
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Validates the parameters and consumes them into the checked set
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Same as `check()` but panics on invalid parameters
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}
