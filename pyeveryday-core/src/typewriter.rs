//! Character-by-character reveal of the demo command

/// Reveals `target` one character per step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Typewriter {
    target: &'static str,
    revealed: usize,
}

impl Typewriter {
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            revealed: 0,
        }
    }

    /// Start over with a new target, revealing nothing yet
    pub fn restart(&mut self, target: &'static str) {
        self.target = target;
        self.revealed = 0;
    }

    /// Reveal one more character. Returns `true` while more remain.
    pub fn step(&mut self) -> bool {
        if !self.is_complete() {
            self.revealed += 1;
        }
        !self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.target.chars().count()
    }

    /// The revealed prefix
    pub fn text(&self) -> &'static str {
        match self.target.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.target[..end],
            None => self.target,
        }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_reveals_monotonically_until_complete() {
        let mut typewriter = Typewriter::new("python x.py");
        let mut previous = 0;
        while typewriter.step() {
            let len = typewriter.text().len();
            assert_eq!(len, previous + 1);
            assert!(len <= typewriter.target().len());
            previous = len;
        }
        assert_eq!(typewriter.text(), "python x.py");
        assert!(!typewriter.step());
        assert_eq!(typewriter.text(), "python x.py");
    }

    #[test]
    fn test_multibyte_boundaries() {
        let mut typewriter = Typewriter::new("✅ ok");
        typewriter.step();
        assert_eq!(typewriter.text(), "✅");
        typewriter.step();
        assert_eq!(typewriter.text(), "✅ ");
    }

    #[test]
    fn test_empty_target_is_complete() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_complete());
        assert!(!typewriter.step());
        assert_eq!(typewriter.text(), "");
    }

    #[test]
    fn test_restart_clears_progress() {
        let mut typewriter = Typewriter::new("abc");
        typewriter.step();
        typewriter.restart("xyz");
        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.target(), "xyz");
    }
}
