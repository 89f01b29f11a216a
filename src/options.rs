//! Table configuration options.

use alloc::string::String;

/// Number of seats at a table.
pub const SEATS: usize = 3;

/// Configuration options for a table.
///
/// The rules themselves are fixed; options only describe who sits where and
/// how the automated seats behave. Use the builder pattern to customize:
///
/// ```
/// use landlord::GameOptions;
///
/// let options = GameOptions::default()
///     .with_human_seat(1, true)
///     .with_cooperative_pass(false);
/// assert!(options.human[0]);
/// assert!(options.human[1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Which seats are driven by a human (the rest are AI).
    pub human: [bool; SEATS],
    /// Display names, by seat.
    pub names: [String; SEATS],
    /// Whether AI seats sometimes yield a trick they could beat.
    pub cooperative_pass: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            human: [true, false, false],
            names: [
                String::from("You"),
                String::from("Computer 1"),
                String::from("Computer 2"),
            ],
            cooperative_pass: true,
        }
    }
}

impl GameOptions {
    /// Sets whether a seat is human-driven. Out-of-range seats are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use landlord::GameOptions;
    ///
    /// let options = GameOptions::default().with_human_seat(0, false);
    /// assert_eq!(options.human, [false, false, false]);
    /// ```
    #[must_use]
    pub fn with_human_seat(mut self, seat: usize, human: bool) -> Self {
        if let Some(flag) = self.human.get_mut(seat) {
            *flag = human;
        }
        self
    }

    /// Sets the display names of all three seats.
    ///
    /// # Example
    ///
    /// ```
    /// use landlord::GameOptions;
    ///
    /// let options = GameOptions::default().with_names(["Ann", "Bo", "Cy"]);
    /// assert_eq!(options.names[2], "Cy");
    /// ```
    #[must_use]
    pub fn with_names(mut self, names: [&str; SEATS]) -> Self {
        self.names = names.map(String::from);
        self
    }

    /// Sets whether AI seats may randomly pass on a beatable trick.
    ///
    /// # Example
    ///
    /// ```
    /// use landlord::GameOptions;
    ///
    /// let options = GameOptions::default().with_cooperative_pass(false);
    /// assert!(!options.cooperative_pass);
    /// ```
    #[must_use]
    pub const fn with_cooperative_pass(mut self, enabled: bool) -> Self {
        self.cooperative_pass = enabled;
        self
    }
}
