// SPDX-License-Identifier: MPL-2.0
//! Animated spinner drawn on a Canvas, used as the loading toast icon.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Full turns per second.
const TURNS_PER_SECOND: f32 = 1.0;

/// Rotation angle (radians) of a spinner that has been running for `elapsed`.
#[must_use]
pub fn rotation_at(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() * TURNS_PER_SECOND * TAU) % TAU
}

/// Spinner arc rotated by a fixed angle; re-created on every frame.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a new spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_MD,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self.cache.clear();
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let stroke_width = (self.size / 8.0).max(1.5);
                let radius = frame.width().min(frame.height()) / 2.0 - stroke_width;

                // Faint full ring behind the arc
                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(Color {
                            a: 0.25,
                            ..self.color
                        }),
                );

                // Half-turn arc starting at the top, offset by the rotation
                let start_angle = self.rotation - PI / 2.0;
                let end_angle = start_angle + PI;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));

                let segments = 30;
                #[allow(clippy::cast_precision_loss)]
                // segments=30, i∈[1,30] - well within f32 precision
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
