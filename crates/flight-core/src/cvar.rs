//! Bounded numeric control variables ("cvars") driving the dashboard widgets.
//!
//! Three boundary policies exist and each camera parameter keeps the one it
//! was given:
//! - [`CvarLin`]: linear step, a step that would leave `[min, max]` is a no-op
//! - [`CvarLinWrap`]: linear step, results wrap into `[min, max)`
//! - [`CvarLog`]: multiply/divide by a factor, out-of-range steps are no-ops
//!
//! Every constructor validates its arguments, so a cvar that exists is valid.

use crate::error::CvarError;

/// Capability set shared by all control variable flavours.
pub trait ControlVariable {
    fn name(&self) -> &str;
    fn value(&self) -> f64;
    fn min(&self) -> f64;
    fn max(&self) -> f64;
    fn increment(&mut self);
    fn decrement(&mut self);
    fn set_value(&mut self, value: f64) -> Result<(), CvarError>;
    /// Re-validate the invariants established at construction.
    fn check(&self) -> Result<(), CvarError>;
}

fn check_bounds(name: &str, min: f64, max: f64) -> Result<(), CvarError> {
    if !(min <= max) {
        return Err(CvarError::InvalidBounds {
            name: name.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

fn check_in_range(name: &str, value: f64, min: f64, max: f64) -> Result<(), CvarError> {
    if !(min <= value && value <= max) {
        return Err(CvarError::InitialOutOfRange {
            name: name.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn out_of_range(name: &str, value: f64, min: f64, max: f64) -> CvarError {
    CvarError::OutOfRange {
        name: name.to_string(),
        value,
        min,
        max,
    }
}

/// Linear cvar; steps that would cross a bound leave the value unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct CvarLin {
    min: f64,
    max: f64,
    step: f64,
    name: String,
    current: f64,
}

impl CvarLin {
    pub fn new(
        min: f64,
        max: f64,
        initial: f64,
        step: f64,
        name: impl Into<String>,
    ) -> Result<Self, CvarError> {
        let cvar = Self {
            min,
            max,
            step,
            name: name.into(),
            current: initial,
        };
        cvar.check()?;
        Ok(cvar)
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl ControlVariable for CvarLin {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.current
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn increment(&mut self) {
        let next = self.current + self.step;
        if next <= self.max {
            self.current = next;
        }
    }

    fn decrement(&mut self) {
        let next = self.current - self.step;
        if next >= self.min {
            self.current = next;
        }
    }

    fn set_value(&mut self, value: f64) -> Result<(), CvarError> {
        if value >= self.min && value <= self.max {
            self.current = value;
            Ok(())
        } else {
            Err(out_of_range(&self.name, value, self.min, self.max))
        }
    }

    fn check(&self) -> Result<(), CvarError> {
        check_bounds(&self.name, self.min, self.max)?;
        check_in_range(&self.name, self.current, self.min, self.max)?;
        if !(self.step > 0.0) {
            return Err(CvarError::NonPositiveStep {
                name: self.name.clone(),
                step: self.step,
            });
        }
        Ok(())
    }
}

/// Linear cvar whose value wraps around the half-open range `[min, max)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CvarLinWrap {
    min: f64,
    max: f64,
    step: f64,
    name: String,
    current: f64,
}

impl CvarLinWrap {
    /// The initial value is normalised into range rather than rejected.
    pub fn new(
        min: f64,
        max: f64,
        initial: f64,
        step: f64,
        name: impl Into<String>,
    ) -> Result<Self, CvarError> {
        let mut cvar = Self {
            min,
            max,
            step,
            name: name.into(),
            current: min,
        };
        cvar.check()?;
        cvar.set_value(initial)?;
        Ok(cvar)
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    fn wrap(&self, value: f64) -> f64 {
        wrap_into(value, self.min, self.max)
    }
}

/// Map `value` to the member of `[min, max)` congruent to it modulo
/// `max - min`. Both bounds must be finite with `min < max`.
pub fn wrap_into(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    let mut wrapped = min + (value - min).rem_euclid(range);
    // rem_euclid may round up to exactly `range` for tiny negative offsets
    if wrapped >= max {
        wrapped -= range;
    }
    if wrapped < min {
        wrapped = min;
    }
    wrapped
}

impl ControlVariable for CvarLinWrap {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.current
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn increment(&mut self) {
        self.current = self.wrap(self.current + self.step);
    }

    fn decrement(&mut self) {
        self.current = self.wrap(self.current - self.step);
    }

    /// Any finite value is accepted after wrapping.
    fn set_value(&mut self, value: f64) -> Result<(), CvarError> {
        if !value.is_finite() {
            return Err(CvarError::NonFinite {
                name: self.name.clone(),
                value,
            });
        }
        self.current = self.wrap(value);
        Ok(())
    }

    fn check(&self) -> Result<(), CvarError> {
        for bound in [self.min, self.max] {
            if !bound.is_finite() {
                return Err(CvarError::NonFinite {
                    name: self.name.clone(),
                    value: bound,
                });
            }
        }
        if !(self.min < self.max) {
            return Err(CvarError::EmptyWrapRange {
                name: self.name.clone(),
                min: self.min,
                max: self.max,
            });
        }
        if !(self.step > 0.0) {
            return Err(CvarError::NonPositiveStep {
                name: self.name.clone(),
                step: self.step,
            });
        }
        Ok(())
    }
}

/// Logarithmic cvar: increments multiply by `factor`, decrements divide.
#[derive(Clone, Debug, PartialEq)]
pub struct CvarLog {
    min: f64,
    max: f64,
    factor: f64,
    name: String,
    current: f64,
}

impl CvarLog {
    pub fn new(
        min: f64,
        max: f64,
        initial: f64,
        factor: f64,
        name: impl Into<String>,
    ) -> Result<Self, CvarError> {
        let cvar = Self {
            min,
            max,
            factor,
            name: name.into(),
            current: initial,
        };
        cvar.check()?;
        Ok(cvar)
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl ControlVariable for CvarLog {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.current
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn increment(&mut self) {
        let next = self.current * self.factor;
        if next <= self.max {
            self.current = next;
        }
    }

    fn decrement(&mut self) {
        let next = self.current / self.factor;
        if next >= self.min {
            self.current = next;
        }
    }

    fn set_value(&mut self, value: f64) -> Result<(), CvarError> {
        if value < self.min || value > self.max || value.is_nan() {
            return Err(out_of_range(&self.name, value, self.min, self.max));
        }
        self.current = value;
        Ok(())
    }

    fn check(&self) -> Result<(), CvarError> {
        check_bounds(&self.name, self.min, self.max)?;
        check_in_range(&self.name, self.current, self.min, self.max)?;
        if !(self.factor > 1.0) {
            return Err(CvarError::FactorTooSmall {
                name: self.name.clone(),
                factor: self.factor,
            });
        }
        Ok(())
    }
}

/// Any of the three flavours, so a bank of widgets can hold them by value.
#[derive(Clone, Debug, PartialEq)]
pub enum Cvar {
    Lin(CvarLin),
    LinWrap(CvarLinWrap),
    Log(CvarLog),
}

impl Cvar {
    fn inner(&self) -> &dyn ControlVariable {
        match self {
            Cvar::Lin(c) => c,
            Cvar::LinWrap(c) => c,
            Cvar::Log(c) => c,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ControlVariable {
        match self {
            Cvar::Lin(c) => c,
            Cvar::LinWrap(c) => c,
            Cvar::Log(c) => c,
        }
    }
}

impl ControlVariable for Cvar {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn value(&self) -> f64 {
        self.inner().value()
    }

    fn min(&self) -> f64 {
        self.inner().min()
    }

    fn max(&self) -> f64 {
        self.inner().max()
    }

    fn increment(&mut self) {
        self.inner_mut().increment()
    }

    fn decrement(&mut self) {
        self.inner_mut().decrement()
    }

    fn set_value(&mut self, value: f64) -> Result<(), CvarError> {
        self.inner_mut().set_value(value)
    }

    fn check(&self) -> Result<(), CvarError> {
        self.inner().check()
    }
}

impl From<CvarLin> for Cvar {
    fn from(c: CvarLin) -> Self {
        Cvar::Lin(c)
    }
}

impl From<CvarLinWrap> for Cvar {
    fn from(c: CvarLinWrap) -> Self {
        Cvar::LinWrap(c)
    }
}

impl From<CvarLog> for Cvar {
    fn from(c: CvarLog) -> Self {
        Cvar::Log(c)
    }
}
