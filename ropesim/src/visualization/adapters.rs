//! Seams between the physics core and its front ends
//!
//! A front end supplies an [`InputAdapter`] (pause toggle and quit, polled
//! once per frame boundary) and a [`RenderAdapter`] (draws the rope after all
//! substeps of a frame are done). The core knows nothing about windows or keys.

use tracing::{debug, info};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Control signals collected at a frame boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub toggle_pause: bool,
    pub quit: bool,
}

pub trait InputAdapter {
    fn poll(&mut self) -> FrameInput;
}

/// Draws a line between each consecutive pair of positions and a point at each
pub trait RenderAdapter {
    fn draw(&mut self, positions: &[NVec2]);
}

/// Totals of a driven run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frames: u64,
    pub substeps: u64,
}

/// Apply one frame's input to `scenario`; returns `false` once quit was requested
pub fn apply_input(scenario: &mut Scenario, input: FrameInput) -> bool {
    if input.quit {
        info!("quit requested");
        return false;
    }
    if input.toggle_pause {
        scenario.paused = !scenario.paused;
        info!(paused = scenario.paused, "pause toggled");
    }
    true
}

/// Run the configured substeps for one frame unless paused
pub fn advance_frame(scenario: &mut Scenario) -> usize {
    let paused = scenario.paused;
    scenario.simulation.frame(paused)
}

/// Drive frames until the input asks to quit or `max_frames` frames have run.
/// Each frame: poll input, advance the physics, then hand positions to the renderer
pub fn run_frames<I, R>(
    scenario: &mut Scenario,
    input: &mut I,
    render: &mut R,
    max_frames: Option<u64>,
) -> FrameReport
where
    I: InputAdapter,
    R: RenderAdapter,
{
    let mut report = FrameReport::default();
    let mut positions: Vec<NVec2> = Vec::with_capacity(scenario.simulation.state().len());

    while max_frames.map_or(true, |max| report.frames < max) {
        if !apply_input(scenario, input.poll()) {
            break;
        }

        report.substeps += advance_frame(scenario) as u64;
        report.frames += 1;

        positions.clear();
        positions.extend(scenario.simulation.positions());
        render.draw(&positions);
    }

    debug!(frames = report.frames, substeps = report.substeps, "frame loop finished");
    report
}
