use chrono::{Duration, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// 12-hour clock with leading zero and AM/PM suffix, e.g. "01:00 PM".
    pub fn format_start(&self) -> String {
        self.start.format("%I:%M %p").to_string()
    }
}

/// Session slots as offsets from a daily start time. Pure time-of-day
/// arithmetic; no date or timezone involved.
pub struct SlotTimeline {
    start: NaiveTime,
    end_boundary: NaiveTime,
    session: Duration,
    break_between: Duration,
}

impl SlotTimeline {
    pub fn new(
        start: NaiveTime,
        end_boundary: NaiveTime,
        session: Duration,
        break_between: Duration,
    ) -> Self {
        Self {
            start,
            end_boundary,
            session,
            break_between,
        }
    }

    /// Slot for the given session index, or None once the slot would end
    /// past the boundary. A slot ending exactly on the boundary still fits.
    pub fn slot(&self, index: usize) -> Option<TimeSlot> {
        let stride = self.session + self.break_between;
        let (start, start_wrap) = self.start.overflowing_add_signed(stride * index as i32);
        let (end, end_wrap) = start.overflowing_add_signed(self.session);
        if start_wrap != 0 || end_wrap != 0 || end > self.end_boundary {
            return None;
        }
        Some(TimeSlot { start, end })
    }
}
