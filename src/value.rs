//! A small dynamically typed value universe.
//!
//! Currying here works on untyped values, so a target can be something that
//! is not a function at all, and a satisfied chain can hand its target values it
//! cannot operate on. Both failures surface as [`CurryError`]s.

use std::fmt;
use std::rc::Rc;

use crate::{Curried, CurryError};

type NativeBody = Rc<dyn Fn(&[Value]) -> Result<Value, CurryError>>;

/// The result type of a curried [`NativeFn`].
pub type Outcome = Result<Value, CurryError>;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Function(NativeFn),
}

/// A host function callable from dynamic values.
#[derive(Clone)]
pub struct NativeFn {
    name: String,
    arity: Option<usize>,
    body: NativeBody,
}

impl NativeFn {
    /// A function taking exactly `arity` arguments.
    pub fn fixed<F>(name: impl Into<String>, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Outcome + 'static,
    {
        Self {
            name: name.into(),
            arity: Some(arity),
            body: Rc::new(body),
        }
    }

    /// A function taking any number of arguments. Its arity cannot be
    /// introspected, so currying it needs an explicit one.
    pub fn variadic<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Outcome + 'static,
    {
        Self {
            name: name.into(),
            arity: None,
            body: Rc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared arity, or `None` if variadic.
    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// Runs the body. A fixed-arity function only runs on exactly its arity.
    pub fn apply(&self, args: &[Value]) -> Outcome {
        match self.arity {
            Some(expected) if expected != args.len() => Err(CurryError::ArityMismatch {
                name: self.name.clone(),
                expected,
                got: args.len(),
            }),
            _ => (self.body)(args),
        }
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::Function(_) => "function",
        }
    }

    pub fn add(&self, other: &Value) -> Outcome {
        let mismatch = || CurryError::TypeMismatch {
            op: "+",
            left: self.type_name(),
            right: other.type_name(),
        };

        Ok(match (self, other) {
            (Self::Int(a), Self::Int(b)) => match a.checked_add(*b) {
                Some(sum) => Self::Int(sum),
                None => Self::Float(*a as f64 + *b as f64),
            },
            (Self::Int(a), Self::Float(b)) => Self::Float(*a as f64 + b),
            (Self::Float(a), Self::Int(b)) => Self::Float(a + *b as f64),
            (Self::Float(a), Self::Float(b)) => Self::Float(a + b),
            (Self::Str(a), Self::Str(b)) => Self::Str(format!("{a}{b}")),
            _ => return Err(mismatch()),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Function(function) => write!(f, "[function {}]", function.name),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NativeFn> for Value {
    fn from(value: NativeFn) -> Self {
        Self::Function(value)
    }
}

/// Variadic `+` over all of its arguments.
pub fn sum() -> NativeFn {
    NativeFn::variadic("sum", |args| {
        let Some((first, rest)) = args.split_first() else {
            return Ok(Value::Int(0));
        };
        rest.iter()
            .try_fold(first.clone(), |total, value| total.add(value))
    })
}

/// Curries a dynamic value.
///
/// `arity` is required for variadic functions. For fixed functions it may
/// only restate the declared arity. Errors from the function itself come back unchanged from the
/// satisfying call.
pub fn curry_value(
    target: &Value,
    arity: Option<usize>,
) -> Result<Curried<Value, Outcome>, CurryError> {
    let Value::Function(function) = target else {
        return Err(CurryError::InvalidArgument(format!(
            "cannot curry a value of type {}",
            target.type_name()
        )));
    };

    let arity = match (function.arity, arity) {
        (Some(declared), Some(explicit)) if declared != explicit => {
            return Err(CurryError::InvalidArgument(format!(
                "`{}` takes {declared} arguments, cannot curry it with arity {explicit}",
                function.name
            )));
        }
        (Some(declared), _) => declared,
        (None, Some(explicit)) => explicit,
        (None, None) => {
            return Err(CurryError::InvalidArgument(format!(
                "`{}` is variadic and needs an explicit arity",
                function.name
            )));
        }
    };

    let function = function.clone();
    Ok(Curried::with_arity(arity, move |args: Vec<Value>| {
        function.apply(&args)
    }))
}
