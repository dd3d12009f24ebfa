use std::rc::Rc;

use yew::prelude::*;

use crate::timer::{BrowserScheduler, Scheduler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Paused,
}

impl Playback {
    /// Live-region politeness for the slide container: announce slide
    /// changes only while the user is holding the carousel still.
    pub fn aria_live(self) -> &'static str {
        match self {
            Playback::Playing => "off",
            Playback::Paused => "polite",
        }
    }
}

/// Something that holds a carousel still. Each reason is released on its
/// own, so leaving with the pointer does not resume a carousel that still
/// has keyboard focus inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseReason {
    Pointer,
    Focus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    JumpTo(usize),
    /// Fired by the autoplay timer.
    Tick,
    Pause(PauseReason),
    Resume(PauseReason),
}

/// Cursor into a fixed, ordered list of `len` slides.
///
/// `active_index` is always `< len` when the list is non-empty and `0` when it
/// is empty. Navigation wraps in both directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    pointer_inside: bool,
    focus_inside: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            pointer_inside: false,
            focus_inside: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn playback(&self) -> Playback {
        if self.pointer_inside || self.focus_inside {
            Playback::Paused
        } else {
            Playback::Playing
        }
    }

    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = (self.active + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = (self.active + self.len - 1) % self.len;
    }

    /// Out-of-range indices are ignored. Returns whether the cursor moved there.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        true
    }

    pub fn pause(&mut self, reason: PauseReason) {
        *self.hold(reason) = true;
    }

    /// Releases one pause reason. Playback resumes once no reason is held.
    pub fn resume(&mut self, reason: PauseReason) {
        *self.hold(reason) = false;
    }

    fn hold(&mut self, reason: PauseReason) -> &mut bool {
        match reason {
            PauseReason::Pointer => &mut self.pointer_inside,
            PauseReason::Focus => &mut self.focus_inside,
        }
    }

    /// Whether an autoplay timer should be running. A carousel with fewer than
    /// two slides has nothing to cycle through.
    pub fn wants_timer(&self) -> bool {
        self.playback() == Playback::Playing && self.len > 1
    }

    /// Up to `size` slide indices starting at the active one, wrapping around.
    pub fn window(&self, size: usize) -> impl Iterator<Item = usize> {
        let len = self.len;
        let start = self.active;
        (0..size.min(len)).map(move |offset| (start + offset) % len)
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => self.advance(),
            CarouselAction::Prev => self.retreat(),
            CarouselAction::JumpTo(index) => {
                if !self.jump_to(index) {
                    log::debug!("ignoring jump to slide {} of {}", index, self.len);
                }
            }
            CarouselAction::Tick => {
                // A tick can race a pause on the event loop.
                if self.playback() == Playback::Playing {
                    self.advance();
                }
            }
            CarouselAction::Pause(reason) => self.pause(reason),
            CarouselAction::Resume(reason) => self.resume(reason),
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Owns the repeating timer of a playing carousel.
///
/// Starting again replaces the previous timer, so a resumed carousel always
/// waits a full interval before its next tick. Dropping the `Autoplay`
/// cancels whatever timer it holds.
pub struct Autoplay<S: Scheduler> {
    scheduler: S,
    interval_ms: u32,
    timer: Option<S::Handle>,
}

impl<S: Scheduler> Autoplay<S> {
    pub fn new(scheduler: S, interval_ms: u32) -> Self {
        Self {
            scheduler,
            interval_ms,
            timer: None,
        }
    }

    pub fn start<F>(&mut self, tick: F)
    where
        F: FnMut() + 'static,
    {
        self.timer = Some(self.scheduler.repeat(self.interval_ms, tick));
    }

    pub fn stop(&mut self) {
        self.timer = None;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

#[derive(Clone)]
pub struct UseCarouselHandle {
    state: UseReducerHandle<Carousel>,
}

impl UseCarouselHandle {
    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn state(&self) -> &Carousel {
        &self.state
    }

    pub fn action<E: 'static>(&self, action: CarouselAction) -> Callback<E> {
        let dispatcher = self.state.dispatcher();
        Callback::from(move |_: E| dispatcher.dispatch(action))
    }

    /// Pause on `enter`, release the same reason on `leave`.
    pub fn hold_callbacks<E: 'static>(&self, reason: PauseReason) -> (Callback<E>, Callback<E>) {
        (
            self.action(CarouselAction::Pause(reason)),
            self.action(CarouselAction::Resume(reason)),
        )
    }

    pub fn jump_callback(&self) -> Callback<usize> {
        let dispatcher = self.state.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(CarouselAction::JumpTo(index)))
    }
}

/// Body of the autoplay effect: starts ticking if the carousel wants a
/// timer and hands back the teardown that cancels it.
fn run_autoplay<S, F>(scheduler: S, interval_ms: u32, wants_timer: bool, tick: F) -> impl FnOnce()
where
    S: Scheduler,
    F: FnMut() + 'static,
{
    let mut autoplay = Autoplay::new(scheduler, interval_ms);
    if wants_timer {
        autoplay.start(tick);
    }
    move || autoplay.stop()
}

/// Carousel state plus a browser autoplay timer that runs only while the
/// carousel is playing. The timer is rebuilt on every pause/resume edge and
/// dropped when the component unmounts.
#[hook]
pub fn use_carousel(len: usize, interval_ms: u32) -> UseCarouselHandle {
    let state = use_reducer(|| Carousel::new(len));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(wants_timer, interval_ms)| {
                run_autoplay(BrowserScheduler, *interval_ms, *wants_timer, move || {
                    dispatcher.dispatch(CarouselAction::Tick)
                })
            },
            (state.wants_timer(), interval_ms),
        );
    }

    UseCarouselHandle { state }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::timer::testing::ManualScheduler;

    fn shared(len: usize) -> Rc<RefCell<Carousel>> {
        Rc::new(RefCell::new(Carousel::new(len)))
    }

    fn ticking(carousel: &Rc<RefCell<Carousel>>) -> impl FnMut() + 'static {
        let carousel = carousel.clone();
        move || carousel.borrow_mut().apply(CarouselAction::Tick)
    }

    #[test]
    fn advance_visits_every_slide_before_repeating() {
        for len in 2..=9 {
            let mut carousel = Carousel::new(len);
            let mut seen = vec![carousel.active_index()];
            for _ in 1..len {
                carousel.advance();
                assert!(carousel.active_index() < len);
                seen.push(carousel.active_index());
            }
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), len, "len {len} skipped a slide");

            carousel.advance();
            assert_eq!(carousel.active_index(), 0);
        }
    }

    #[test]
    fn retreat_and_advance_are_inverse() {
        for start in 0..5 {
            let mut carousel = Carousel::new(5);
            carousel.jump_to(start);

            carousel.retreat();
            carousel.advance();
            assert_eq!(carousel.active_index(), start);

            carousel.advance();
            carousel.retreat();
            assert_eq!(carousel.active_index(), start);
        }
    }

    #[test]
    fn four_testimonials_wrap_both_ways() {
        let mut carousel = Carousel::new(4);
        for _ in 0..4 {
            carousel.advance();
        }
        assert_eq!(carousel.active_index(), 0);

        carousel.retreat();
        assert_eq!(carousel.active_index(), 3);
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(4);
        assert!(carousel.jump_to(2));
        assert_eq!(carousel.active_index(), 2);

        assert!(!carousel.jump_to(4));
        assert!(!carousel.jump_to(usize::MAX));
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn empty_carousel_never_moves_or_plays() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        carousel.retreat();
        carousel.apply(CarouselAction::Tick);
        assert!(!carousel.jump_to(0));

        assert_eq!(carousel.active_index(), 0);
        assert!(carousel.is_empty());
        assert!(!carousel.wants_timer());
        assert_eq!(carousel.window(4).count(), 0);
    }

    #[test]
    fn single_slide_does_not_want_a_timer() {
        let carousel = Carousel::new(1);
        assert_eq!(carousel.playback(), Playback::Playing);
        assert!(!carousel.wants_timer());
    }

    #[test]
    fn tick_while_paused_is_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.apply(CarouselAction::Pause(PauseReason::Pointer));
        carousel.apply(CarouselAction::Tick);
        assert_eq!(carousel.active_index(), 0);
        assert!(!carousel.wants_timer());

        // Manual navigation still works while paused.
        carousel.apply(CarouselAction::Next);
        assert_eq!(carousel.active_index(), 1);

        carousel.apply(CarouselAction::Resume(PauseReason::Pointer));
        carousel.apply(CarouselAction::Tick);
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn pointer_and_focus_pauses_are_released_separately() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselAction::Pause(PauseReason::Pointer));
        carousel.apply(CarouselAction::Pause(PauseReason::Focus));

        // Focus leaves while the pointer is still over the slides.
        carousel.apply(CarouselAction::Resume(PauseReason::Focus));
        assert_eq!(carousel.playback(), Playback::Paused);
        assert!(!carousel.wants_timer());
        carousel.apply(CarouselAction::Tick);
        assert_eq!(carousel.active_index(), 0);

        // And the other way round.
        carousel.apply(CarouselAction::Pause(PauseReason::Focus));
        carousel.apply(CarouselAction::Resume(PauseReason::Pointer));
        assert!(!carousel.wants_timer());

        carousel.apply(CarouselAction::Resume(PauseReason::Focus));
        assert_eq!(carousel.playback(), Playback::Playing);
        assert!(carousel.wants_timer());
    }

    #[test]
    fn repeated_pause_events_need_one_release() {
        let mut carousel = Carousel::new(3);
        carousel.apply(CarouselAction::Pause(PauseReason::Pointer));
        carousel.apply(CarouselAction::Pause(PauseReason::Pointer));
        carousel.apply(CarouselAction::Resume(PauseReason::Pointer));
        assert!(carousel.wants_timer());

        // A stray release with nothing held changes nothing.
        let state = Rc::new(carousel);
        let same = state.clone().reduce(CarouselAction::Resume(PauseReason::Focus));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn live_region_is_polite_only_while_paused() {
        let mut carousel = Carousel::new(2);
        assert_eq!(carousel.playback().aria_live(), "off");
        carousel.pause(PauseReason::Focus);
        assert_eq!(carousel.playback().aria_live(), "polite");
    }

    #[test]
    fn window_wraps_past_the_end() {
        let mut carousel = Carousel::new(5);
        carousel.jump_to(3);
        assert_eq!(carousel.window(4).collect::<Vec<_>>(), vec![3, 4, 0, 1]);

        let short = Carousel::new(2);
        assert_eq!(short.window(4).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn reducer_keeps_the_same_state_for_no_ops() {
        let state = Rc::new(Carousel::new(3));
        let same = state.clone().reduce(CarouselAction::JumpTo(9));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.clone().reduce(CarouselAction::Next);
        assert_eq!(moved.active_index(), 1);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn autoplay_advances_on_each_interval() {
        let scheduler = ManualScheduler::new();
        let carousel = shared(4);
        let mut autoplay = Autoplay::new(scheduler.clone(), 5_000);
        autoplay.start(ticking(&carousel));

        scheduler.advance(4_999);
        assert_eq!(carousel.borrow().active_index(), 0);
        scheduler.advance(1);
        assert_eq!(carousel.borrow().active_index(), 1);
        scheduler.advance(15_000);
        assert_eq!(carousel.borrow().active_index(), 0);
    }

    #[test]
    fn dropping_a_playing_autoplay_leaves_no_timer_behind() {
        let scheduler = ManualScheduler::new();
        let carousel = shared(4);
        let mut autoplay = Autoplay::new(scheduler.clone(), 3_000);
        autoplay.start(ticking(&carousel));
        scheduler.advance(3_000);
        assert_eq!(carousel.borrow().active_index(), 1);

        drop(autoplay);
        scheduler.advance(60_000);

        assert_eq!(carousel.borrow().active_index(), 1);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(Rc::strong_count(&carousel), 1);
    }

    #[test]
    fn resume_restarts_a_full_interval() {
        let scheduler = ManualScheduler::new();
        let carousel = shared(4);
        let mut autoplay = Autoplay::new(scheduler.clone(), 5_000);
        autoplay.start(ticking(&carousel));

        scheduler.advance(4_000);
        carousel.borrow_mut().pause(PauseReason::Pointer);
        autoplay.stop();
        assert!(!autoplay.is_running());
        scheduler.advance(10_000);
        assert_eq!(carousel.borrow().active_index(), 0);

        carousel.borrow_mut().resume(PauseReason::Pointer);
        autoplay.start(ticking(&carousel));
        scheduler.advance(4_999);
        assert_eq!(carousel.borrow().active_index(), 0);
        scheduler.advance(1);
        assert_eq!(carousel.borrow().active_index(), 1);
    }

    #[test]
    fn restarting_replaces_the_previous_timer() {
        let scheduler = ManualScheduler::new();
        let carousel = shared(10);
        let mut autoplay = Autoplay::new(scheduler.clone(), 1_000);
        autoplay.start(ticking(&carousel));
        autoplay.start(ticking(&carousel));

        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(1_000);
        assert_eq!(carousel.borrow().active_index(), 1);
    }

    /// Drives `run_autoplay` the way the effect does: rerun on every
    /// `wants_timer` edge, tearing down the previous run first.
    struct Mounted {
        scheduler: ManualScheduler,
        carousel: Rc<RefCell<Carousel>>,
        teardown: Option<Box<dyn FnOnce()>>,
    }

    impl Mounted {
        fn new(len: usize, interval_ms: u32) -> Self {
            let mut mounted = Self {
                scheduler: ManualScheduler::new(),
                carousel: shared(len),
                teardown: None,
            };
            mounted.rerun(interval_ms);
            mounted
        }

        fn rerun(&mut self, interval_ms: u32) {
            self.unmount();
            let wants_timer = self.carousel.borrow().wants_timer();
            let teardown = run_autoplay(
                self.scheduler.clone(),
                interval_ms,
                wants_timer,
                ticking(&self.carousel),
            );
            self.teardown = Some(Box::new(teardown));
        }

        fn unmount(&mut self) {
            if let Some(teardown) = self.teardown.take() {
                teardown();
            }
        }

        fn index(&self) -> usize {
            self.carousel.borrow().active_index()
        }
    }

    #[test]
    fn effect_teardown_cancels_the_running_timer() {
        let mut mounted = Mounted::new(4, 5_000);
        mounted.scheduler.advance(5_000);
        assert_eq!(mounted.index(), 1);
        assert_eq!(mounted.scheduler.pending(), 1);

        mounted.unmount();
        mounted.scheduler.advance(60_000);

        assert_eq!(mounted.index(), 1);
        assert_eq!(mounted.scheduler.pending(), 0);
        assert_eq!(Rc::strong_count(&mounted.carousel), 1);
    }

    #[test]
    fn effect_holds_no_timer_while_paused_and_restarts_on_resume() {
        let mut mounted = Mounted::new(5, 3_000);
        mounted.scheduler.advance(2_000);

        mounted.carousel.borrow_mut().pause(PauseReason::Pointer);
        mounted.rerun(3_000);
        assert_eq!(mounted.scheduler.pending(), 0);
        mounted.scheduler.advance(30_000);
        assert_eq!(mounted.index(), 0);

        mounted.carousel.borrow_mut().resume(PauseReason::Pointer);
        mounted.rerun(3_000);
        mounted.scheduler.advance(2_999);
        assert_eq!(mounted.index(), 0);
        mounted.scheduler.advance(1);
        assert_eq!(mounted.index(), 1);

        mounted.unmount();
        assert_eq!(mounted.scheduler.pending(), 0);
    }

    #[test]
    fn single_slide_effect_schedules_nothing() {
        let mut mounted = Mounted::new(1, 5_000);
        assert_eq!(mounted.scheduler.pending(), 0);
        mounted.unmount();
        assert_eq!(Rc::strong_count(&mounted.carousel), 1);
    }
}
