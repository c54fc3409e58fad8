// SPDX-License-Identifier: MPL-2.0
//! Canvas surface for the before/after comparison.
//!
//! Translates native mouse and touch events into reveal engine messages and
//! draws both layers plus the handle from a single divider position.

use crate::domain::reveal::{PointerId, RevealPercent, TrackBounds};
use crate::reveal::gesture::{self, HitTarget};
use crate::reveal::{Message, RevealOutput};
use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{image, Action};
use iced::{mouse, touch, window, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme};

/// Handle geometry, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleStyle {
    pub line_width: f32,
    pub knob_radius: f32,
    pub hit_slop: f32,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            line_width: sizing::DIVIDER_LINE,
            knob_radius: sizing::HANDLE_KNOB_RADIUS,
            hit_slop: sizing::HANDLE_HIT_SLOP,
        }
    }
}

/// Canvas program drawing the comparison and forwarding pointer input.
#[derive(Debug, Clone)]
pub struct CompareCanvas {
    before: image::Handle,
    after: image::Handle,
    image_size: (u32, u32),
    percent: RevealPercent,
    captured: Option<PointerId>,
    style: HandleStyle,
}

impl CompareCanvas {
    /// Creates the surface for one render pass.
    ///
    /// `captured` is the pointer owned by the current gesture; moves of
    /// other pointers are not forwarded.
    #[must_use]
    pub fn new(
        before: image::Handle,
        after: image::Handle,
        image_size: (u32, u32),
        percent: RevealPercent,
        captured: Option<PointerId>,
        style: HandleStyle,
    ) -> Self {
        Self {
            before,
            after,
            image_size,
            percent,
            captured,
            style,
        }
    }

    /// Wraps the program in a canvas filling the available space.
    pub fn into_element(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn track_rect(&self, bounds: Rectangle) -> Rectangle {
        fit_contain(bounds, self.image_size)
    }

    fn press(&self, pointer: PointerId, position: Point, track: Rectangle) -> Option<gesture::Message> {
        let target = hit_test(position, track, self.percent, self.style);
        target.starts_gesture().then_some(gesture::Message::Pressed {
            pointer,
            x: position.x,
            target,
        })
    }

    /// Whether moves of `pointer` belong to a gesture.
    ///
    /// `captured` lags behind by one update, so a press earlier in the same
    /// event batch is tracked locally as well.
    fn owns(&self, state: &CanvasState, pointer: PointerId) -> bool {
        state.pressed == Some(pointer) || self.captured == Some(pointer)
    }
}

/// Per-widget bookkeeping kept by the canvas between events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasState {
    /// Last track rectangle reported to the component.
    track: Option<Rectangle>,
    /// Pointer whose press was forwarded and not yet released.
    pressed: Option<PointerId>,
}

impl canvas::Program<Message> for CompareCanvas {
    type State = CanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let rect = self.track_rect(bounds);
        let track = TrackBounds::from_origin(rect.x, rect.width);

        let (input, capture) = match event {
            Event::Window(window::Event::RedrawRequested(_) | window::Event::Resized(_)) => {
                if state.track == Some(rect) {
                    return None;
                }
                state.track = Some(rect);
                return Some(Action::publish(Message::TrackLaidOut(track)));
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let input = self.press(PointerId::Mouse, cursor.position()?, rect)?;
                state.pressed = state.pressed.or(Some(PointerId::Mouse));
                (input, true)
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if !self.owns(state, PointerId::Mouse) {
                    return None;
                }
                let input = gesture::Message::Moved {
                    pointer: PointerId::Mouse,
                    x: position.x,
                };
                (input, true)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                release(state, PointerId::Mouse, false)
            }
            // The release may never arrive once the window loses focus.
            Event::Window(window::Event::Unfocused) => {
                let pointer = state.pressed.or(self.captured)?;
                release(state, pointer, true)
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                let pointer = PointerId::Finger(id.0);
                let input = self.press(pointer, *position, rect)?;
                state.pressed = state.pressed.or(Some(pointer));
                (input, true)
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                let pointer = PointerId::Finger(id.0);
                if !self.owns(state, pointer) {
                    return None;
                }
                (gesture::Message::Moved { pointer, x: position.x }, true)
            }
            Event::Touch(touch::Event::FingerLifted { id, .. }) => {
                release(state, PointerId::Finger(id.0), false)
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                release(state, PointerId::Finger(id.0), true)
            }
            _ => return None,
        };

        state.track = Some(rect);
        let action = Action::publish(Message::Gesture { input, track });
        // Captured so no other widget starts a selection or drag of its own.
        Some(if capture { action.and_capture() } else { action })
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let rect = self.track_rect(Rectangle::new(Point::ORIGIN, bounds.size()));
        let output = RevealOutput::at(self.percent, rect.width);

        frame.draw_image(rect, canvas::Image::new(self.before.clone()));

        // Upper layer, visible right of the divider only. Drawing inside a
        // clip region is relative to the region's origin.
        let clip_x = rect.x + output.clip_left;
        let revealed = Rectangle::new(
            Point::new(clip_x, rect.y),
            Size::new((rect.x + rect.width - clip_x).max(0.0), rect.height),
        );
        frame.with_clip(revealed, |frame| {
            frame.draw_image(
                Rectangle::new(Point::new(-output.clip_left, 0.0), rect.size()),
                canvas::Image::new(self.after.clone()),
            );
        });

        let handle_x = rect.x + output.handle_x;
        frame.fill_rectangle(
            Point::new(handle_x - self.style.line_width / 2.0, rect.y),
            Size::new(self.style.line_width, rect.height),
            palette::WHITE,
        );

        let knob = Path::circle(
            Point::new(handle_x, rect.y + rect.height / 2.0),
            self.style.knob_radius,
        );
        frame.fill(&knob, palette::WHITE);
        frame.stroke(
            &knob,
            Stroke::default()
                .with_width(sizing::HANDLE_OUTLINE)
                .with_color(palette::GRAY_700),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.captured.is_some() {
            return mouse::Interaction::Grabbing;
        }

        let Some(position) = cursor.position() else {
            return mouse::Interaction::default();
        };
        match hit_test(position, self.track_rect(bounds), self.percent, self.style) {
            HitTarget::Handle | HitTarget::Line => mouse::Interaction::ResizingHorizontally,
            HitTarget::Track => mouse::Interaction::Pointer,
            HitTarget::Outside => mouse::Interaction::default(),
        }
    }
}

/// Ends the locally tracked gesture and forwards the release.
///
/// Releases are always forwarded: the gesture machine ignores them while
/// idle, and dropping one would leave a pointer owned with no button held.
fn release(
    state: &mut CanvasState,
    pointer: PointerId,
    cancelled: bool,
) -> (gesture::Message, bool) {
    let owned = state.pressed.take().is_some();
    let input = if cancelled {
        gesture::Message::Cancelled { pointer }
    } else {
        gesture::Message::Released { pointer }
    };
    (input, owned)
}

/// Classifies a press against the track and the handle drawn at `percent`.
#[must_use]
pub fn hit_test(
    position: Point,
    track: Rectangle,
    percent: RevealPercent,
    style: HandleStyle,
) -> HitTarget {
    if !track.contains(position) {
        return HitTarget::Outside;
    }

    let divider_x = track.x + percent.offset_in(track.width);
    let knob_center = Point::new(divider_x, track.y + track.height / 2.0);
    if position.distance(knob_center) <= style.knob_radius + style.hit_slop {
        return HitTarget::Handle;
    }
    if (position.x - divider_x).abs() <= style.line_width / 2.0 + style.hit_slop {
        return HitTarget::Line;
    }
    HitTarget::Track
}

/// Largest rectangle with the image's aspect ratio centered in `bounds`.
#[must_use]
pub fn fit_contain(bounds: Rectangle, image_size: (u32, u32)) -> Rectangle {
    let (width, height) = image_size;
    if width == 0 || height == 0 || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return bounds;
    }

    let img_aspect = width as f32 / height as f32;
    let bounds_aspect = bounds.width / bounds.height;

    if img_aspect > bounds_aspect {
        // Image is wider - fit to width
        let display_height = bounds.width / img_aspect;
        Rectangle::new(
            Point::new(bounds.x, bounds.y + (bounds.height - display_height) / 2.0),
            Size::new(bounds.width, display_height),
        )
    } else {
        // Image is taller - fit to height
        let display_width = bounds.height * img_aspect;
        Rectangle::new(
            Point::new(bounds.x + (bounds.width - display_width) / 2.0, bounds.y),
            Size::new(display_width, bounds.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{self, ManualScheduler};
    use iced::event;
    use std::time::Instant;

    fn track() -> Rectangle {
        Rectangle::new(Point::new(100.0, 0.0), Size::new(400.0, 200.0))
    }

    #[test]
    fn press_on_knob_hits_handle() {
        let target = hit_test(
            Point::new(303.0, 100.0),
            track(),
            RevealPercent::default(),
            HandleStyle::default(),
        );
        assert_eq!(target, HitTarget::Handle);
    }

    #[test]
    fn press_on_divider_away_from_knob_hits_line() {
        let target = hit_test(
            Point::new(301.0, 10.0),
            track(),
            RevealPercent::default(),
            HandleStyle::default(),
        );
        assert_eq!(target, HitTarget::Line);
    }

    #[test]
    fn press_elsewhere_in_track_hits_track() {
        let target = hit_test(
            Point::new(150.0, 20.0),
            track(),
            RevealPercent::default(),
            HandleStyle::default(),
        );
        assert_eq!(target, HitTarget::Track);
    }

    #[test]
    fn press_outside_track_is_outside() {
        let target = hit_test(
            Point::new(50.0, 20.0),
            track(),
            RevealPercent::default(),
            HandleStyle::default(),
        );
        assert_eq!(target, HitTarget::Outside);
    }

    #[test]
    fn fit_contain_letterboxes_wide_image() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(400.0, 400.0));
        let fitted = fit_contain(bounds, (200, 100));
        assert_eq!(fitted, Rectangle::new(Point::new(0.0, 100.0), Size::new(400.0, 200.0)));
    }

    #[test]
    fn fit_contain_pillarboxes_tall_image() {
        let bounds = Rectangle::new(Point::new(10.0, 0.0), Size::new(400.0, 200.0));
        let fitted = fit_contain(bounds, (100, 200));
        assert_eq!(fitted, Rectangle::new(Point::new(160.0, 0.0), Size::new(100.0, 200.0)));
    }

    #[test]
    fn fit_contain_keeps_bounds_for_empty_image() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(300.0, 100.0));
        assert_eq!(fit_contain(bounds, (0, 10)), bounds);
    }

    // Letterboxed: the 2:1 image fills (0, 100)..(400, 300).
    fn widget_bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(400.0, 400.0))
    }

    type Engine = reveal::State<(), ManualScheduler>;

    fn engine() -> Engine {
        Engine::attach(Some(()), Some(())).unwrap()
    }

    fn canvas_for(engine: &Engine) -> CompareCanvas {
        let pixel = image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);
        CompareCanvas::new(
            pixel.clone(),
            pixel,
            (2, 1),
            engine.percent(),
            engine.captured(),
            HandleStyle::default(),
        )
    }

    /// Runs one event batch through the canvas, as iced does before the
    /// next `update`, and returns what was published.
    fn dispatch(
        canvas: &CompareCanvas,
        state: &mut CanvasState,
        events: &[(Event, Point)],
    ) -> Vec<(Message, event::Status)> {
        events
            .iter()
            .filter_map(|(event, cursor)| {
                canvas::Program::update(
                    canvas,
                    state,
                    event,
                    widget_bounds(),
                    mouse::Cursor::Available(*cursor),
                )
            })
            .filter_map(|action| {
                let (message, _, status) = action.into_inner();
                message.map(|m| (m, status))
            })
            .collect()
    }

    fn apply(engine: &mut Engine, published: Vec<(Message, event::Status)>) {
        for (message, _) in published {
            engine.handle(message);
        }
    }

    fn tick(engine: &mut Engine) {
        engine.handle(Message::FrameTick(Instant::now()));
    }

    fn left_press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn left_release() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn cursor_moved(position: Point) -> Event {
        Event::Mouse(mouse::Event::CursorMoved { position })
    }

    #[test]
    fn click_within_one_batch_releases_the_pointer() {
        let mut engine = engine();
        let mut state = CanvasState::default();
        let at = Point::new(100.0, 200.0);

        let published = dispatch(
            &canvas_for(&engine),
            &mut state,
            &[(left_press(), at), (left_release(), at)],
        );
        assert_eq!(published.len(), 2);
        apply(&mut engine, published);
        tick(&mut engine);

        assert!(!engine.is_dragging());
        assert_eq!(engine.percent().value(), 25.0);

        // Hovering afterwards, with no button held, must not drag.
        let hover = Point::new(390.0, 200.0);
        let published = dispatch(&canvas_for(&engine), &mut state, &[(cursor_moved(hover), hover)]);
        assert!(published.is_empty());
        apply(&mut engine, published);
        tick(&mut engine);
        assert_eq!(engine.percent().value(), 25.0);
    }

    #[test]
    fn moves_in_the_press_batch_are_forwarded() {
        let mut engine = engine();
        let mut state = CanvasState::default();
        let at = Point::new(100.0, 200.0);
        let to = Point::new(300.0, 200.0);

        let published = dispatch(
            &canvas_for(&engine),
            &mut state,
            &[(left_press(), at), (cursor_moved(to), to)],
        );
        assert!(published
            .iter()
            .all(|(_, status)| *status == event::Status::Captured));
        apply(&mut engine, published);
        tick(&mut engine);

        assert!(engine.is_dragging());
        assert_eq!(engine.percent().value(), 75.0);
    }

    #[test]
    fn press_outside_fitted_image_publishes_nothing() {
        let engine = engine();
        let mut state = CanvasState::default();
        let above_image = Point::new(200.0, 20.0);

        let action = canvas::Program::update(
            &canvas_for(&engine),
            &mut state,
            &left_press(),
            widget_bounds(),
            mouse::Cursor::Available(above_image),
        );

        assert!(action.is_none());
        assert_eq!(state.pressed, None);
    }

    #[test]
    fn touch_drag_follows_the_first_finger() {
        let mut engine = engine();
        let mut state = CanvasState::default();
        let finger = |id| touch::Finger(id);
        let nowhere = Point::ORIGIN;

        let published = dispatch(
            &canvas_for(&engine),
            &mut state,
            &[
                (
                    Event::Touch(touch::Event::FingerPressed {
                        id: finger(7),
                        position: Point::new(200.0, 200.0),
                    }),
                    nowhere,
                ),
                (
                    Event::Touch(touch::Event::FingerMoved {
                        id: finger(7),
                        position: Point::new(300.0, 150.0),
                    }),
                    nowhere,
                ),
                (
                    Event::Touch(touch::Event::FingerMoved {
                        id: finger(8),
                        position: Point::new(10.0, 150.0),
                    }),
                    nowhere,
                ),
                (
                    Event::Touch(touch::Event::FingerLifted {
                        id: finger(7),
                        position: Point::new(300.0, 150.0),
                    }),
                    nowhere,
                ),
            ],
        );
        assert_eq!(published.len(), 3);
        apply(&mut engine, published);
        tick(&mut engine);

        assert!(!engine.is_dragging());
        assert_eq!(engine.percent().value(), 75.0);
    }

    #[test]
    fn redraw_reports_layout_only_when_it_changes() {
        let engine = engine();
        let canvas = canvas_for(&engine);
        let mut state = CanvasState::default();
        let redraw = Event::Window(window::Event::RedrawRequested(Instant::now()));

        let first = dispatch(&canvas, &mut state, &[(redraw.clone(), Point::ORIGIN)]);
        assert!(matches!(
            first.as_slice(),
            [(Message::TrackLaidOut(track), _)] if *track == TrackBounds::new(0.0, 400.0)
        ));

        let again = dispatch(&canvas, &mut state, &[(redraw.clone(), Point::ORIGIN)]);
        assert!(again.is_empty());

        let moved = canvas::Program::update(
            &canvas,
            &mut state,
            &redraw,
            Rectangle::new(Point::new(50.0, 0.0), Size::new(400.0, 400.0)),
            mouse::Cursor::Unavailable,
        );
        assert!(moved.is_some());
    }

    #[test]
    fn leaving_the_window_keeps_the_drag_alive() {
        let mut engine = engine();
        let mut state = CanvasState::default();
        let at = Point::new(100.0, 200.0);
        let outside = Point::new(-60.0, 200.0);

        let published = dispatch(
            &canvas_for(&engine),
            &mut state,
            &[
                (left_press(), at),
                (Event::Mouse(mouse::Event::CursorLeft), at),
                (cursor_moved(outside), outside),
            ],
        );
        apply(&mut engine, published);
        tick(&mut engine);

        assert!(engine.is_dragging());
        assert_eq!(engine.percent(), RevealPercent::MIN);
    }

    #[test]
    fn focus_loss_cancels_the_drag() {
        let mut engine = engine();
        let mut state = CanvasState::default();
        let at = Point::new(100.0, 200.0);

        let published = dispatch(&canvas_for(&engine), &mut state, &[(left_press(), at)]);
        apply(&mut engine, published);

        let published = dispatch(
            &canvas_for(&engine),
            &mut CanvasState::default(),
            &[(Event::Window(window::Event::Unfocused), at)],
        );
        assert!(matches!(
            published.as_slice(),
            [(
                Message::Gesture {
                    input: gesture::Message::Cancelled { .. },
                    ..
                },
                _
            )]
        ));
        apply(&mut engine, published);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn stray_release_is_forwarded_without_capture() {
        let engine = engine();
        let mut state = CanvasState::default();
        let at = Point::new(100.0, 200.0);

        let published = dispatch(&canvas_for(&engine), &mut state, &[(left_release(), at)]);

        assert!(matches!(
            published.as_slice(),
            [(Message::Gesture { .. }, event::Status::Ignored)]
        ));
    }
}
