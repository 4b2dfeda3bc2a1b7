// SPDX-License-Identifier: MPL-2.0
//! Canvas-based activity spinner shown by the progress overlay.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

const STROKE_WIDTH: f32 = 3.0;
/// Fraction of the full circle covered by the moving arc.
const SWEEP: f32 = 0.4;
/// Trail segments behind the arc head, each fainter than the last.
const TRAIL_STEPS: usize = 4;
const ARC_SEGMENTS: usize = 24;

/// Indeterminate spinner whose rotation is driven externally by app ticks.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
        }
    }

    /// Wraps the spinner in a fixed-size canvas element.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::ICON_XL))
            .height(Length::Fixed(sizing::ICON_XL))
            .into()
    }

    fn arc(center: Point, radius: f32, from: f32, to: f32) -> Path {
        let mut builder = canvas::path::Builder::new();
        #[allow(clippy::cast_precision_loss)]
        for i in 0..=ARC_SEGMENTS {
            let angle = from + (to - from) * (i as f32 / ARC_SEGMENTS as f32);
            let point = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            if i == 0 {
                builder.move_to(point);
            } else {
                builder.line_to(point);
            }
        }
        builder.build()
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
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0;
                let head = self.rotation;
                let sweep = SWEEP * TAU;

                // Fading trail drawn back-to-front so the head sits on top.
                #[allow(clippy::cast_precision_loss)]
                for step in (0..TRAIL_STEPS).rev() {
                    let fade = 1.0 - step as f32 / TRAIL_STEPS as f32;
                    let to = head - sweep * (step as f32 / TRAIL_STEPS as f32);
                    let from = to - sweep / TRAIL_STEPS as f32;
                    let segment = Self::arc(center, radius, from, to);
                    frame.stroke(
                        &segment,
                        Stroke::default()
                            .with_width(STROKE_WIDTH)
                            .with_color(Color {
                                a: fade * self.color.a,
                                ..self.color
                            })
                            .with_line_cap(canvas::LineCap::Round),
                    );
                }
            });

        vec![geometry]
    }
}
