/// Date and time of an event, kept as the text the client entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDateTime {
    day: String,
    month: String,
    year: String,
    time: String,
}

impl GroupDateTime {
    pub fn new(
        day: impl Into<String>,
        month: impl Into<String>,
        year: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
            time: time.into(),
        }
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn time(&self) -> &str {
        &self.time
    }
}
