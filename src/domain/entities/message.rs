use std::fmt;

/// Planet a message originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    A,
    B,
}

impl Planet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Planet::A => "A",
            Planet::B => "B",
        }
    }
}

/// Layout stage a provider was introduced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Basic,
    Intermediate,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Basic => "basic",
            Stage::Intermediate => "intermediate",
        }
    }
}

/// An identifying text constant for a planet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    text: &'static str,
}

impl Message {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_text() {
        let msg = Message::new("hello");
        assert_eq!(msg.to_string(), "hello");
        assert_eq!(msg.text(), "hello");
    }

    #[test]
    fn test_stage_ordering() {
        assert!(Stage::Basic < Stage::Intermediate);
        assert_eq!(Stage::Intermediate.as_str(), "intermediate");
    }

    #[test]
    fn test_planet_labels() {
        assert_eq!(Planet::A.as_str(), "A");
        assert_eq!(Planet::B.as_str(), "B");
        assert_ne!(Planet::A, Planet::B);
    }
}
