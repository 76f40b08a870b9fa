/// Current / reference / next triple used for positions.
///
/// `current` follows the strip's own scrolling, `reference` the last pager
/// report, `next` the target of an in-flight tab press.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tracked {
    pub current: f32,
    pub reference: f32,
    pub next: f32,
}

/// Remaining distance to the press target, captured when the press starts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToNext {
    /// `current - next`; the sign is the direction the strip still has to travel.
    pub current: f32,
    /// `|reference - next|`
    pub reference: f32,
}

/// Strip offset bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsetState {
    pub current: f32,
    pub reference: f32,
    pub reference_interpolated: f32,
    pub next: f32,
    pub to_next: ToNext,
    /// Last emitted offset was classified as noise and not sent to the strip.
    pub ignored: bool,
}

impl OffsetState {
    /// Seeds a new press-driven transition toward `next`.
    pub fn begin_transition(&mut self, next: f32) {
        self.next = next;
        self.to_next = ToNext {
            current: self.current - next,
            reference: (self.reference - next).abs(),
        };
        self.reference_interpolated = self.reference;
        self.ignored = false;
    }

    /// `current` lies strictly between `offset` and `next`.
    pub fn is_current_at_middle(&self, offset: f32) -> bool {
        strictly_between(self.current, offset, self.next)
    }

    /// `next` lies strictly between `offset` and `current`: the raw pager
    /// offset approaches the target from the far side.
    pub fn is_next_at_middle(&self, offset: f32) -> bool {
        strictly_between(self.next, offset, self.current)
    }

    pub fn is_current_at_next(&self, tolerance: f32) -> bool {
        (self.current - self.next).abs() < tolerance
    }

    /// The new offset is strictly closer to `next` than the last reference was.
    pub fn is_converging(&self, offset: f32) -> bool {
        (self.next - offset).abs() < (self.next - self.reference).abs()
    }
}

fn strictly_between(value: f32, a: f32, b: f32) -> bool {
    (a < value && value < b) || (b < value && value < a)
}

/// Who is currently steering the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    /// The pager is swiped directly; the strip follows it.
    #[default]
    Idle,
    /// A tab press started a pager animation that the strip is converging on.
    PressDriven,
    /// The strip reached the press target; pager reports are held off until
    /// the press window closes.
    Settling,
}

impl TransitionPhase {
    pub fn is_page_press(self) -> bool {
        !matches!(self, TransitionPhase::Idle)
    }
}
