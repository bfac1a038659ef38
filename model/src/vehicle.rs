use std::fmt;

/// an immutable vehicle identity record. The facility does not enforce that
/// registrations are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    registration: String,
    color: String,
}

// static functions
impl Vehicle {
    pub fn new(registration: String, color: String) -> Vehicle {
        Vehicle {
            registration,
            color,
        }
    }
}

// methods
impl Vehicle {
    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "vehicle {} ({})", self.registration, self.color)
    }
}
