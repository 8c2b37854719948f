//! Scalar extraction
//!
//! Each primitive has a strict getter, which answers only when the wrapped
//! value already has that exact type, and a coercing `*_value` getter that
//! always answers.

use crate::policy::Policy;
use crate::trunk::Trunk;
use trunk_core::{to_bool_value, to_float_value, to_int_value, to_string_value};

impl<P: Policy> Trunk<P> {
    /// The string, if the value is a string
    pub fn string(&self) -> Option<&str> {
        self.data().as_str()
    }

    /// The value coerced to a string
    pub fn string_value(&self) -> String {
        to_string_value(self.data())
    }

    /// The integer, if the value is an integer
    pub fn int(&self) -> Option<i64> {
        self.data().as_int()
    }

    /// The value coerced to an integer
    pub fn int_value(&self) -> i64 {
        to_int_value(self.data())
    }

    /// The float, if the value is a float
    pub fn float(&self) -> Option<f64> {
        self.data().as_float()
    }

    /// The value coerced to a float
    pub fn float_value(&self) -> f64 {
        to_float_value(self.data())
    }

    /// The boolean, if the value is a boolean
    pub fn bool(&self) -> Option<bool> {
        self.data().as_bool()
    }

    /// The value coerced to a boolean
    pub fn bool_value(&self) -> bool {
        to_bool_value(self.data())
    }
}
