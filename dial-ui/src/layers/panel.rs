use dial_model::{Fraction, Layer, Ring, ARC_MARKERS};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::Drawable;
use log::debug;

use super::{Frame, LayerRenderer};
use crate::config as cfg;
use crate::scene::{Mark, Scene};

const HOUR_TICKS: usize = 24;
const MINUTE_TICKS: usize = 60;
pub const PANEL_MARKS: usize = 1 + 2 * ARC_MARKERS + HOUR_TICKS + MINUTE_TICKS;

/// Background, day/night arc, then the hour and minute rings.
#[derive(Copy, Clone, Debug, Default)]
pub struct PanelLayer;

impl PanelLayer {
    pub fn scene(&self, frame: &Frame<'_>) -> Scene<PANEL_MARKS> {
        let geometry = frame.geometry;
        let dot = |ring: Ring, fraction: Fraction, radius: u32, color: Rgb565| Mark::Dot {
            center: geometry.point(frame.trig, ring, fraction),
            radius,
            color,
        };

        let mut scene = Scene::new();
        scene.push(Mark::Fill {
            area: geometry.bounds(),
            color: cfg::COLOR_BACKGROUND,
        });

        if let Some(window) = frame.state.solar_window() {
            scene.extend(
                window
                    .day_markers()
                    .iter()
                    .map(|&f| dot(Ring::DayNight, f, cfg::ARC_DOT_RADIUS, cfg::COLOR_DAY)),
            );
            scene.extend(
                window
                    .night_markers()
                    .iter()
                    .map(|&f| dot(Ring::DayNight, f, cfg::ARC_DOT_RADIUS, cfg::COLOR_NIGHT)),
            );
        }

        for i in 0..HOUR_TICKS as i32 {
            scene.push(dot(
                Ring::HourTick,
                Fraction::of(i, HOUR_TICKS as i32),
                cfg::HOUR_TICK_RADIUS,
                cfg::COLOR_HOUR_TICK,
            ));
        }

        for i in 0..MINUTE_TICKS as i32 {
            let (radius, color) = if i % 5 == 0 {
                (cfg::FIVE_MINUTE_TICK_RADIUS, cfg::COLOR_FIVE_MINUTE_TICK)
            } else {
                (cfg::MINUTE_TICK_RADIUS, cfg::COLOR_MINUTE_TICK)
            };
            scene.push(dot(
                Ring::MinuteTick,
                Fraction::of(i, MINUTE_TICKS as i32),
                radius,
                color,
            ));
        }

        scene
    }
}

impl LayerRenderer for PanelLayer {
    fn layer(&self) -> Layer {
        Layer::Panel
    }

    fn render<D: DrawTarget<Color = Rgb565>>(
        &self,
        frame: &Frame<'_>,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let scene = self.scene(frame);
        debug!("panel: {} marks", scene.len());
        scene.draw(display)
    }
}

#[cfg(test)]
mod tests {
    use dial_model::{FaceGeometry, FaceState, FloatTrig};
    use embedded_graphics::geometry::{Point, Size};
    use embedded_graphics::primitives::Rectangle;

    use super::*;

    fn geometry() -> FaceGeometry {
        FaceGeometry::from_bounds(Rectangle::new(Point::zero(), Size::new(180, 180)))
    }

    fn synced(sunrise: i32, sunset: i32) -> FaceState {
        let mut state = FaceState::new();
        state.on_sync_message(0, sunrise).unwrap();
        state.on_sync_message(1, sunset).unwrap();
        state
    }

    fn scene(state: &FaceState) -> Scene<PANEL_MARKS> {
        let geometry = geometry();
        PanelLayer.scene(&Frame {
            state,
            geometry: &geometry,
            trig: &FloatTrig,
        })
    }

    fn count(scene: &Scene<PANEL_MARKS>, color: Rgb565) -> usize {
        scene.dots().filter(|d| d.2 == color).count()
    }

    fn distance(p: Point) -> f32 {
        let d = p - Point::new(90, 90);
        ((d.x * d.x + d.y * d.y) as f32).sqrt()
    }

    #[test]
    fn background_comes_first() {
        let scene = scene(&FaceState::new());
        assert_eq!(
            scene.marks()[0],
            Mark::Fill {
                area: geometry().bounds(),
                color: cfg::COLOR_BACKGROUND,
            }
        );
    }

    #[test]
    fn ticks_without_astronomical_data() {
        let scene = scene(&FaceState::new());
        assert_eq!(scene.len(), 1 + 24 + 60);
        assert_eq!(count(&scene, cfg::COLOR_DAY), 0);
        assert_eq!(count(&scene, cfg::COLOR_NIGHT), 0);
        assert_eq!(count(&scene, cfg::COLOR_HOUR_TICK), 24);
    }

    #[test]
    fn minute_ring_marks_every_fifth_dot() {
        let scene = scene(&FaceState::new());
        let minutes: heapless::Vec<_, 60> = scene.dots().skip(24).collect();
        assert_eq!(minutes.len(), 60);
        for (i, (center, radius, color)) in minutes.iter().enumerate() {
            assert!((distance(*center) - 65.0).abs() <= 1.0);
            if i % 5 == 0 {
                assert_eq!((*radius, *color), (3, cfg::COLOR_FIVE_MINUTE_TICK));
            } else {
                assert_eq!((*radius, *color), (2, cfg::COLOR_MINUTE_TICK));
            }
        }
        assert_eq!(minutes[0].0, Point::new(90, 25));
    }

    #[test]
    fn hour_ring_sits_inside_the_arc() {
        let scene = scene(&FaceState::new());
        let top = scene.dots().next().unwrap();
        assert_eq!(top, (Point::new(90, 15), 1, cfg::COLOR_HOUR_TICK));
        for (center, _, _) in scene.dots().take(24) {
            assert!((distance(center) - 75.0).abs() <= 1.0);
        }
    }

    #[test]
    fn arc_is_drawn_under_the_ticks() {
        let scene = scene(&synced(360, 1080));
        assert_eq!(scene.len(), PANEL_MARKS);
        assert_eq!(count(&scene, cfg::COLOR_DAY), 12);
        assert_eq!(count(&scene, cfg::COLOR_NIGHT), 12);

        let dots: heapless::Vec<_, PANEL_MARKS> = scene.dots().collect();
        assert!(dots[..12].iter().all(|d| d.2 == cfg::COLOR_DAY));
        assert!(dots[12..24].iter().all(|d| d.2 == cfg::COLOR_NIGHT));
        // sunrise at 06:00 sits at three o'clock on a 24 hour dial
        assert_eq!(dots[0].0, Point::new(174, 90));
        assert_eq!(dots[12].0, Point::new(6, 90));
    }

    #[test]
    fn degenerate_arc_stacks_on_one_point() {
        let scene = scene(&synced(600, 600));
        let dots: heapless::Vec<_, PANEL_MARKS> = scene.dots().collect();
        assert!(dots[..24].iter().all(|d| d.0 == dots[0].0));
    }

    #[test]
    fn scene_is_repeatable() {
        let state = synced(1380, 300);
        assert_eq!(scene(&state), scene(&state));
    }
}
