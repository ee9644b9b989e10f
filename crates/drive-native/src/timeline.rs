//! Scripted host input for the headless runner.
//!
//! Stands in for a pointer system: presses, drags to a slider value, and
//! releases, each stamped with the simulated time it is delivered at.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Throttle,
    Steering,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Press(Axis),
    Drag(Axis, f32),
    Release(Axis),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedEvent {
    pub at_sec: f32,
    pub event: HostEvent,
}

const fn at(at_sec: f32, event: HostEvent) -> TimedEvent {
    TimedEvent { at_sec, event }
}

/// Drive forward, turn right a quarter, then back up slowly.
pub fn demo_script() -> Vec<TimedEvent> {
    use Axis::*;
    use HostEvent::*;
    vec![
        at(0.0, Press(Throttle)),
        at(0.0, Drag(Throttle, 0.0)),
        at(2.0, Release(Throttle)),
        at(2.5, Press(Steering)),
        at(2.5, Drag(Steering, 1.0)),
        at(3.0, Release(Steering)),
        at(3.5, Press(Throttle)),
        at(3.5, Drag(Throttle, 0.75)),
        at(5.5, Release(Throttle)),
    ]
}

/// Cursor over a time-ordered event list.
pub struct Timeline {
    events: Vec<TimedEvent>,
    next: usize,
}

impl Timeline {
    pub fn new(mut events: Vec<TimedEvent>) -> Self {
        // Stable sort keeps same-time events in script order
        events.sort_by(|a, b| a.at_sec.total_cmp(&b.at_sec));
        Self { events, next: 0 }
    }

    /// Events due at or before `now_sec` that have not been returned yet.
    pub fn due(&mut self, now_sec: f32) -> &[TimedEvent] {
        let start = self.next;
        while self.next < self.events.len() && self.events[self.next].at_sec <= now_sec {
            self.next += 1;
        }
        &self.events[start..self.next]
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.events.len()
    }

    pub fn last_at(&self) -> f32 {
        self.events.last().map(|e| e.at_sec).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_returns_each_event_once() {
        let mut tl = Timeline::new(demo_script());
        let first = tl.due(0.0).to_vec();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].event, HostEvent::Press(Axis::Throttle));
        assert!(tl.due(0.0).is_empty());
        assert_eq!(tl.due(2.0).len(), 1);
        assert!(!tl.is_finished());
        tl.due(100.0);
        assert!(tl.is_finished());
    }

    #[test]
    fn unsorted_input_is_ordered_by_time() {
        let mut tl = Timeline::new(vec![
            at(1.0, HostEvent::Release(Axis::Steering)),
            at(0.5, HostEvent::Press(Axis::Steering)),
        ]);
        assert_eq!(tl.due(0.5)[0].event, HostEvent::Press(Axis::Steering));
        assert_eq!(tl.last_at(), 1.0);
    }
}
