use crate::error::Error;
use std::{fmt::Debug, rc::Rc};

struct Binding {
    name: String,
    value: isize,
    tail: Env,
}

/// Persistent variable table, newest binding first.
///
/// `bind` never touches the receiver: the returned table shares every older
/// binding with it, so earlier versions stay valid and keep their own view.
#[derive(Clone, Default)]
pub struct Env(Option<Rc<Binding>>);

impl Env {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn bind(&self, name: impl Into<String>, value: isize) -> Self {
        Self(Some(Rc::new(Binding {
            name: name.into(),
            value,
            tail: self.clone(),
        })))
    }

    pub fn lookup(&self, name: &str) -> Result<isize, Error> {
        self.iter()
            .find(|(id, _)| *id == name)
            .map(|(_, value)| value)
            .ok_or_else(|| Error::NotDefined(name.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.as_deref())
    }
}

pub struct Iter<'a>(Option<&'a Binding>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, isize);

    fn next(&mut self) -> Option<Self::Item> {
        let binding = self.0?;
        self.0 = binding.tail.0.as_deref();
        Some((binding.name.as_str(), binding.value))
    }
}

impl Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
