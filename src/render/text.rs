//! Character-grid renderer for terminals and logs.

use tracing::{trace, warn};

use super::{CarPatch, GoalMarker, SceneRenderer};
use crate::domain::{CarAction, CarState, RCCarConfig};

const EMPTY: char = '.';
const GOAL: char = 'o';
const CAR: char = '#';

/// Rasterizes the room, goal and car into an owned character grid.
///
/// The goal layer is drawn once, on the first call to
/// [`show_domain`](SceneRenderer::show_domain); the car layer is replaced on
/// every call.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    config: RCCarConfig,
    cols: usize,
    rows: usize,
    background: Option<Vec<Vec<char>>>,
    car: Option<CarPatch>,
    status: String,
    frames: u64,
}

impl TextRenderer {
    /// Creates a renderer with a `cols × rows` grid covering the room.
    pub fn new(config: &RCCarConfig, cols: usize, rows: usize) -> Self {
        Self {
            config: config.clone(),
            cols: cols.max(1),
            rows: rows.max(1),
            background: None,
            car: None,
            status: String::new(),
            frames: 0,
        }
    }

    /// Number of `show_domain` calls that produced a frame.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// World coordinates of the center of cell `(col, row)`; row 0 is the top wall.
    fn cell_center(&self, col: usize, row: usize) -> (f64, f64) {
        let c = &self.config;
        let w = c.room_width / self.cols as f64;
        let h = c.room_height / self.rows as f64;
        (
            c.x_min() + (col as f64 + 0.5) * w,
            c.y_max() - (row as f64 + 0.5) * h,
        )
    }

    fn draw_background(&self) -> Vec<Vec<char>> {
        let goal = GoalMarker::from_config(&self.config);
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        if goal.contains(self.cell_center(col, row)) {
                            GOAL
                        } else {
                            EMPTY
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Current picture, one line per grid row followed by a status line.
    /// Empty until the first frame is drawn.
    pub fn frame(&self) -> String {
        let Some(background) = &self.background else {
            return String::new();
        };

        let mut out = String::with_capacity((self.cols + 1) * (self.rows + 1));
        for (row, line) in background.iter().enumerate() {
            for (col, &ch) in line.iter().enumerate() {
                let on_car = self
                    .car
                    .map(|car| car.contains(self.cell_center(col, row)))
                    .unwrap_or(false);
                out.push(if on_car { CAR } else { ch });
            }
            out.push('\n');
        }
        out.push_str(&self.status);
        out
    }
}

impl SceneRenderer<CarState> for TextRenderer {
    fn show_domain(&mut self, state: &CarState, action: usize) {
        let finite = state.to_array().iter().all(|v| v.is_finite());
        if !finite {
            warn!(state = %state, "skipping frame for non-finite state");
            return;
        }

        if self.background.is_none() {
            self.background = Some(self.draw_background());
        }
        self.car = Some(CarPatch::from_state(state, &self.config));

        self.status = match CarAction::from_id(action) {
            Ok(a) => format!("step {} | {} | {}", self.frames, a, state),
            Err(e) => {
                warn!(error = %e, "rendering pose without action label");
                format!("step {} | ? | {}", self.frames, state)
            }
        };
        self.frames += 1;
        trace!(frame = self.frames, state = %state, "rendered rc_car frame");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(frame: &str) -> Vec<&str> {
        frame.lines().take_while(|l| !l.starts_with("step")).collect()
    }

    #[test]
    fn empty_before_first_call() {
        let r = TextRenderer::new(&RCCarConfig::default(), 30, 20);
        assert!(r.frame().is_empty());
        assert_eq!(r.frames(), 0);
    }

    #[test]
    fn draws_goal_and_car() {
        let config = RCCarConfig::default();
        let mut r = TextRenderer::new(&config, 60, 40);
        r.show_domain(&CarState::new(-1.0, -0.5, 0.0, 0.0), 4);
        let frame = r.frame();
        let rows = grid(&frame);
        assert_eq!(rows.len(), 40);
        assert!(rows.iter().all(|l| l.chars().count() == 60));
        assert!(rows.iter().any(|l| l.contains(GOAL)));
        assert!(rows.iter().any(|l| l.contains(CAR)));
        assert!(frame.contains("Coast/Straight"));
    }

    #[test]
    fn car_layer_is_replaced() {
        let config = RCCarConfig::default();
        let mut r = TextRenderer::new(&config, 60, 40);
        r.show_domain(&CarState::new(-1.0, -0.5, 0.0, 0.0), 4);
        let first = r.frame();
        r.show_domain(&CarState::new(1.0, 0.5, 0.0, 0.0), 4);
        let second = r.frame();
        assert_ne!(grid(&first), grid(&second));
        // The old pose is gone: the lower-left quadrant is clear again.
        let rows = grid(&second);
        assert!(rows[20..].iter().all(|l| !l[..30].contains(CAR)));
        assert_eq!(r.frames(), 2);
    }

    #[test]
    fn frame_ends_with_status_line() {
        let mut r = TextRenderer::new(&RCCarConfig::default(), 30, 20);
        let state = CarState::new(0.0, 0.0, 0.0, 0.0);
        r.show_domain(&state, 8);
        let frame = r.frame();
        let expected = format!("step 0 | Accelerate/Right | {state}");
        assert!(frame.ends_with(&format!("\n{expected}")));
        assert_eq!(frame.lines().count(), 21);
    }

    #[test]
    fn invalid_action_still_draws() {
        let mut r = TextRenderer::new(&RCCarConfig::default(), 30, 20);
        r.show_domain(&CarState::new(0.0, 0.0, 0.0, 0.0), 99);
        assert!(r.frame().contains("| ? |"));
        assert_eq!(r.frames(), 1);
    }

    #[test]
    fn non_finite_state_is_skipped() {
        let mut r = TextRenderer::new(&RCCarConfig::default(), 30, 20);
        r.show_domain(&CarState::new(f64::NAN, 0.0, 0.0, 0.0), 4);
        assert_eq!(r.frames(), 0);
        assert!(r.frame().is_empty());
    }
}
