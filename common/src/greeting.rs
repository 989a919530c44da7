use std::fmt;

/// Time-of-day greeting shown in the portal header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Morning is [0, 12), afternoon [12, 18), evening [18, 24).
    /// Hours past 23 are treated as evening.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Greeting::Morning,
            12..=17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
        }
    }
}

/// Hour of the local wall clock, 0–23.
#[cfg(feature = "std")]
pub fn local_hour() -> u32 {
    use chrono::Timelike;
    chrono::Local::now().hour()
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_hours() {
        assert_eq!(Greeting::for_hour(9).text(), "Good morning");
        assert_eq!(Greeting::for_hour(14).text(), "Good afternoon");
        assert_eq!(Greeting::for_hour(20).text(), "Good evening");
    }

    #[test]
    fn boundaries() {
        assert_eq!(Greeting::for_hour(0), Greeting::Morning);
        assert_eq!(Greeting::for_hour(11), Greeting::Morning);
        assert_eq!(Greeting::for_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(17), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(18), Greeting::Evening);
        assert_eq!(Greeting::for_hour(23), Greeting::Evening);
    }

    #[test]
    fn display_uses_text() {
        assert_eq!(Greeting::Evening.to_string(), "Good evening");
    }
}
