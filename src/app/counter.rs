//! The counter widget's state.
//!
//! A [`CounterWidget`] owns a single [`Count`]. It starts at zero when the
//! widget is mounted, only ever goes up, and disappears with the widget.
//! Remounting (constructing a fresh widget) is the only way back to zero.

use std::fmt;

/// Number of times the button has been activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(u64);

impl Count {
    pub fn get(self) -> u64 {
        self.0
    }

    /// The next count. Saturates so the count can never wrap back down.
    fn succ(self) -> Self {
        Count(self.0.saturating_add(1))
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
pub struct CounterWidget {
    count: Count,
}

impl CounterWidget {
    pub fn mount() -> Self {
        tracing::debug!("counter mounted");
        Self {
            count: Count::default(),
        }
    }

    pub fn count(&self) -> Count {
        self.count
    }

    /// Record one activation and return the new count.
    pub fn activate(&mut self) -> Count {
        self.count = self.count.succ();
        tracing::debug!(count = self.count.get(), "counter activated");
        self.count
    }

    /// Text shown on the button.
    pub fn label(&self) -> String {
        format!("Count is {}", self.count)
    }
}
