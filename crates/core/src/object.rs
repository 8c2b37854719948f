//! Structured objects and public field access
//!
//! Rust has no runtime reflection, so a structured object opts in by
//! implementing [`Reflect`]: it lists its fields with their visibility and
//! reads or writes them by name. The wrapper never talks to `Reflect`
//! directly; it goes through [`Object`], which only ever exposes **public**
//! fields. Protected and private fields are invisible to every indexing,
//! iteration and extraction path.
//!
//! # Examples
//!
//! ```
//! use trunk_core::{Data, Field, Object, Reflect};
//!
//! struct Person {
//!     name: String,
//!     secret: i64,
//! }
//!
//! impl Reflect for Person {
//!     fn fields(&self) -> Vec<Field> {
//!         vec![Field::public("name"), Field::private("secret")]
//!     }
//!
//!     fn field(&self, name: &str) -> Option<Data> {
//!         match name {
//!             "name" => Some(Data::from(self.name.as_str())),
//!             "secret" => Some(Data::Int(self.secret)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let joe = Object::new(Person { name: "joe".into(), secret: 1 });
//! assert_eq!(joe.get_public("name"), Some(Data::from("joe")));
//! assert_eq!(joe.get_public("secret"), None);
//! ```

use crate::value::Data;
use std::any::{type_name, Any};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a typed instance, as returned by class extraction
pub type Shared<T> = Rc<RefCell<T>>;

/// Field visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Readable and writable through a wrapper
    Public,
    /// Hidden from wrappers
    Protected,
    /// Hidden from wrappers
    Private,
}

/// A declared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name
    pub name: String,
    /// Field visibility
    pub visibility: Visibility,
}

impl Field {
    /// Declare a field
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Field {
            name: name.into(),
            visibility,
        }
    }

    /// Declare a public field
    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public)
    }

    /// Declare a protected field
    pub fn protected(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Protected)
    }

    /// Declare a private field
    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Private)
    }

    /// True for public fields
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Field-level reflection capability for structured objects
pub trait Reflect: Any {
    /// Declared fields, in declaration order
    fn fields(&self) -> Vec<Field>;

    /// Read a field by name
    fn field(&self, name: &str) -> Option<Data>;

    /// Write a field by name
    ///
    /// Returns false when the field does not exist or cannot hold `value`.
    /// Read-only objects keep the default.
    fn set_field(&mut self, name: &str, value: Data) -> bool {
        let _ = (name, value);
        false
    }
}

/// Shared handle to a reflectable object
///
/// Both handles below point at the same allocation: `reflect` serves field
/// access, `any` serves type identity.
#[derive(Clone)]
pub struct Object {
    reflect: Rc<RefCell<dyn Reflect>>,
    any: Rc<dyn Any>,
    type_name: &'static str,
}

impl Object {
    /// Move a value into a new shared object
    pub fn new<T: Reflect>(value: T) -> Self {
        Self::from_shared(Rc::new(RefCell::new(value)))
    }

    /// Adopt an existing shared instance without copying it
    pub fn from_shared<T: Reflect>(shared: Shared<T>) -> Self {
        let reflect: Rc<RefCell<dyn Reflect>> = shared.clone();
        let any: Rc<dyn Any> = shared;
        Object {
            reflect,
            any,
            type_name: type_name::<T>(),
        }
    }

    /// Name of the concrete type behind this object
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True when the object is an instance of `T`
    pub fn is<T: Reflect>(&self) -> bool {
        self.any.is::<RefCell<T>>()
    }

    /// The instance as `T`, sharing it rather than copying
    pub fn downcast<T: Reflect>(&self) -> Option<Shared<T>> {
        self.any.clone().downcast::<RefCell<T>>().ok()
    }

    /// Snapshot of the public field names; `fields()` runs once here
    pub fn public_fields(&self) -> PublicFields {
        let names: Rc<[String]> = self
            .reflect
            .borrow()
            .fields()
            .into_iter()
            .filter(Field::is_public)
            .map(|f| f.name)
            .collect();
        PublicFields {
            object: self.clone(),
            names,
        }
    }

    /// Names of the public fields, in declaration order
    pub fn public_field_names(&self) -> Vec<String> {
        self.public_fields().names().to_vec()
    }

    /// True when `name` is a declared public field
    pub fn has_public(&self, name: &str) -> bool {
        self.public_fields().contains(name)
    }

    /// Read a public field; `None` for missing and non-public fields alike
    pub fn get_public(&self, name: &str) -> Option<Data> {
        self.public_fields().get(name)
    }

    /// Write a public field; false (and nothing written) otherwise
    pub fn set_public(&self, name: &str, value: Data) -> bool {
        self.public_fields().set(name, value)
    }

    /// Public fields as `(name, value)` pairs, in declaration order
    pub fn public_entries(&self) -> Vec<(String, Data)> {
        self.public_fields().entries()
    }

    /// True when both handles point at the same instance
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.any, &other.any)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("type", &self.type_name)
            .field("public", &self.public_entries())
            .finish()
    }
}

/// An object paired with its public field names
///
/// Reads and writes check membership against the names captured by
/// [`Object::public_fields`] instead of asking the object again.
#[derive(Clone)]
pub struct PublicFields {
    object: Object,
    names: Rc<[String]>,
}

impl PublicFields {
    /// Public field names, in declaration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True when `name` is one of the public fields
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Read a public field
    pub fn get(&self, name: &str) -> Option<Data> {
        if !self.contains(name) {
            return None;
        }
        self.object.reflect.borrow().field(name)
    }

    /// Write a public field; false (and nothing written) otherwise
    pub fn set(&self, name: &str, value: Data) -> bool {
        if !self.contains(name) {
            return false;
        }
        self.object.reflect.borrow_mut().set_field(name, value)
    }

    /// Public fields as `(name, value)` pairs, in declaration order
    pub fn entries(&self) -> Vec<(String, Data)> {
        let object = self.object.reflect.borrow();
        self.names
            .iter()
            .filter_map(|name| object.field(name).map(|v| (name.clone(), v)))
            .collect()
    }
}

impl fmt::Debug for PublicFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicFields")
            .field("type", &self.object.type_name)
            .field("names", &self.names)
            .finish()
    }
}

impl<T: Reflect> From<Shared<T>> for Object {
    fn from(shared: Shared<T>) -> Self {
        Object::from_shared(shared)
    }
}
