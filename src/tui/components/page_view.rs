//! # PageView Component
//!
//! Scrollable body of the current page: the page's sections followed by the
//! footer, stacked in a `ScrollView`.
//!
//! ## Architecture
//!
//! `PageView` is a transient component (created each frame) that wraps
//! `&'a mut PageViewState` (persistent state) and the sections built for
//! this frame (props). Rendering refreshes the layout cache that mouse hit
//! testing, link focus and the statistics visibility check read between
//! frames.
//!
//! ## Smooth scroll-to-top
//!
//! Every navigation starts an eased animation from the current offset back
//! to 0. The event loop keeps redrawing at the frame interval while
//! `is_animating()` holds; any manual scroll cancels it.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::Action;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::section::{Anchor, Section, SectionWidget};
use crate::tui::event::TuiEvent;

/// Duration of the scroll-to-top animation.
pub const SMOOTH_SCROLL: Duration = Duration::from_millis(350);

/// Fraction of the statistics band that must be on screen to start the count-up.
pub const STATS_VISIBILITY_THRESHOLD: f32 = 0.3;

#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: u16,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    /// Offset at `now`, easing out (cubic) towards 0.
    fn offset_at(&self, now: Instant) -> u16 {
        if self.duration.is_zero() {
            return 0;
        }
        let t = (now.saturating_duration_since(self.started).as_secs_f32()
            / self.duration.as_secs_f32())
        .min(1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        (f32::from(self.from) * (1.0 - eased)).round() as u16
    }

    fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Cached section measurements from the last render.
#[derive(Debug, Default)]
pub struct SectionLayout {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    pub links: Vec<Option<Action>>,
    /// Top and bottom (exclusive) of the statistics band, in content rows.
    pub stats_span: Option<(u16, u16)>,
}

impl SectionLayout {
    pub fn rebuild(&mut self, sections: &[Section], width: u16) {
        self.heights = sections.iter().map(|s| s.height(width)).collect();
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
        self.links = sections.iter().map(|s| s.link.clone()).collect();
        self.stats_span = sections
            .iter()
            .position(|s| s.anchor == Some(Anchor::Stats))
            .map(|i| (self.section_top(i), self.prefix_heights[i]));
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    pub fn section_top(&self, index: usize) -> u16 {
        if index == 0 {
            0
        } else {
            self.prefix_heights.get(index - 1).copied().unwrap_or(0)
        }
    }

    /// Section covering content row `y`.
    pub fn section_at(&self, y: u16) -> Option<usize> {
        let index = self.prefix_heights.partition_point(|&end| end <= y);
        (index < self.prefix_heights.len()).then_some(index)
    }

    pub fn visible_range(&self, scroll_offset: u16, viewport_height: u16) -> std::ops::Range<usize> {
        let start = self.prefix_heights.partition_point(|&end| end <= scroll_offset);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < scroll_offset.saturating_add(viewport_height))
            .saturating_add(1)
            .min(self.prefix_heights.len());
        start..end.max(start)
    }
}

/// Scroll and focus state of the page body.
/// Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct PageViewState {
    pub scroll_state: ScrollViewState,
    pub layout: SectionLayout,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Section whose link has keyboard focus
    pub focused: Option<usize>,
    /// Section under the mouse
    pub hovered: Option<usize>,
    animation: Option<ScrollAnimation>,
}

impl PageViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn set_offset(&mut self, y: u16) {
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    fn max_offset(&self) -> u16 {
        self.layout.total_height().saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        if self.offset() > max_y {
            self.set_offset(max_y);
        }
    }

    /// Start the scroll-to-top animation and drop focus and hover, which
    /// belonged to the previous page.
    pub fn begin_scroll_to_top(&mut self, now: Instant, duration: Duration) {
        self.focused = None;
        self.hovered = None;
        let from = self.offset();
        self.animation = (from > 0).then_some(ScrollAnimation {
            from,
            started: now,
            duration,
        });
        if self.animation.is_none() {
            self.set_offset(0);
        }
    }

    /// Move the animation forward. Returns true while it is still running.
    pub fn advance_animation(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        self.set_offset(animation.offset_at(now));
        if animation.is_done(now) {
            self.animation = None;
            return false;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn cancel_animation(&mut self) {
        self.animation = None;
    }

    fn link_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.layout
            .links
            .iter()
            .enumerate()
            .filter_map(|(i, link)| link.as_ref().map(|_| i))
    }

    /// Focus the next section with a link, wrapping around.
    pub fn focus_next_link(&mut self) {
        let links: Vec<usize> = self.link_indices().collect();
        let next = match self.focused {
            Some(current) => links.iter().copied().find(|&i| i > current),
            None => None,
        }
        .or_else(|| links.first().copied());
        self.focus(next);
    }

    /// Focus the previous section with a link, wrapping around.
    pub fn focus_prev_link(&mut self) {
        let links: Vec<usize> = self.link_indices().collect();
        let prev = match self.focused {
            Some(current) => links.iter().rev().copied().find(|&i| i < current),
            None => None,
        }
        .or_else(|| links.last().copied());
        self.focus(prev);
    }

    fn focus(&mut self, index: Option<usize>) {
        self.focused = index;
        if let Some(i) = index {
            self.scroll_to_section(i);
        }
    }

    pub fn focused_link(&self) -> Option<Action> {
        self.focused
            .and_then(|i| self.layout.links.get(i))
            .and_then(Clone::clone)
    }

    /// Scroll just enough to show section `index` fully.
    pub fn scroll_to_section(&mut self, index: usize) {
        if index >= self.layout.prefix_heights.len() {
            return;
        }
        self.cancel_animation();
        let top = self.layout.section_top(index);
        let bottom = self.layout.prefix_heights[index];
        let offset = self.offset();
        if top < offset {
            self.set_offset(top);
        } else if bottom > offset.saturating_add(self.viewport_height) {
            self.set_offset(bottom.saturating_sub(self.viewport_height).min(top));
        }
    }

    /// Map a screen row inside `body` to a section index.
    pub fn section_at_row(&self, row: u16, body: Rect) -> Option<usize> {
        if row < body.y || row >= body.y.saturating_add(body.height) {
            return None;
        }
        self.layout.section_at(row - body.y + self.offset())
    }

    pub fn link_at_row(&self, row: u16, body: Rect) -> Option<Action> {
        self.section_at_row(row, body)
            .and_then(|i| self.layout.links.get(i))
            .and_then(Clone::clone)
    }

    /// Visible fraction of the statistics band, if the page has one.
    pub fn stats_visibility(&self) -> Option<f32> {
        let (top, bottom) = self.layout.stats_span?;
        let height = bottom.saturating_sub(top);
        if height == 0 {
            return None;
        }
        let view_top = self.offset();
        let view_bottom = view_top.saturating_add(self.viewport_height);
        let visible = bottom.min(view_bottom).saturating_sub(top.max(view_top));
        Some(f32::from(visible) / f32::from(height))
    }

    pub fn stats_in_view(&self) -> bool {
        self.stats_visibility()
            .is_some_and(|fraction| fraction >= STATS_VISIBILITY_THRESHOLD)
    }
}

/// Scrollable page body. Created fresh each frame.
pub struct PageView<'a> {
    pub state: &'a mut PageViewState,
    pub sections: &'a [Section],
}

impl<'a> PageView<'a> {
    pub fn new(state: &'a mut PageViewState, sections: &'a [Section]) -> Self {
        Self { state, sections }
    }
}

impl Component for PageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        self.state.layout.rebuild(self.sections, content_width);
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let total_height = self.state.layout.total_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let offset = self.state.offset();
        for i in self.state.layout.visible_range(offset, area.height) {
            let height = self.state.layout.heights[i];
            let rect = Rect::new(0, self.state.layout.section_top(i), content_width, height);
            let highlighted = self.state.focused == Some(i)
                || (self.state.hovered == Some(i) && self.sections[i].link.is_some());
            scroll_view.render_widget(
                SectionWidget {
                    section: &self.sections[i],
                    highlighted,
                },
                rect,
            );
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Manual scrolling. Emits no events; cancels the smooth scroll.
impl EventHandler for PageViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp | TuiEvent::CursorUp => {
                self.cancel_animation();
                self.scroll_state.scroll_up();
            }
            TuiEvent::ScrollDown | TuiEvent::CursorDown => {
                self.cancel_animation();
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollPageUp => {
                self.cancel_animation();
                let y = self.offset().saturating_sub(self.viewport_height.max(1));
                self.set_offset(y);
            }
            TuiEvent::ScrollPageDown => {
                self.cancel_animation();
                let y = self.offset().saturating_add(self.viewport_height.max(1));
                self.set_offset(y.min(self.max_offset()));
            }
            TuiEvent::ScrollToTop => {
                self.cancel_animation();
                self.set_offset(0);
            }
            TuiEvent::ScrollToBottom => {
                self.cancel_animation();
                let y = self.max_offset();
                self.set_offset(y);
            }
            _ => {}
        }
        None
    }
}
