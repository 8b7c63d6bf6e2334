use chrono::{DateTime, Local, NaiveDate, Timelike, Utc};

/// Source of wall-clock time for date stamping and time-of-day rules.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Hour of day (0-23) in the server's local time zone.
    fn local_hour(&self) -> u32;

    /// Calendar day used for stamping check-ins and finding today's entry (UTC).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
    pub local_hour: u32,
}

#[cfg(test)]
impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, local_hour: u32) -> Self {
        use chrono::TimeZone;
        Self {
            now: Utc
                .with_ymd_and_hms(year, month, day, 12, 0, 0)
                .single()
                .expect("valid test date"),
            local_hour,
        }
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn local_hour(&self) -> u32 {
        self.local_hour
    }
}
