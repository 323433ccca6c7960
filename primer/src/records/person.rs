//! Person — plain encapsulated record.
//!
//! Variables:
//!   name : String  — fixed at construction
//!   age  : u32     — advanced only by birthday()

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self { name: name.into(), age }
    }

    pub fn greet(&self) -> String {
        format!("Hello, I'm {}!", self.name)
    }

    pub fn birthday(&mut self) -> String {
        self.age = self.age.saturating_add(1);
        format!("Happy birthday! Now {} years old.", self.age)
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn age(&self) -> u32   { self.age }
}
