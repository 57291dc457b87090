//! Window-less front end
//!
//! Drives a scenario for a fixed number of frames with scripted input and
//! a renderer that only records and logs positions. Used for batch runs and
//! for exercising the frame loop in tests.

use tracing::{debug, info};

use crate::simulation::diagnostics::{kinetic_energy, total_energy};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::visualization::adapters::{run_frames, FrameInput, FrameReport, InputAdapter, RenderAdapter};

/// Input that toggles pause on chosen frames and quits after a frame budget
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pub pause_toggles: Vec<u64>, // frame indices on which pause flips
    pub quit_after: Option<u64>, // quit at the boundary after this many frames
    frame: u64,
}

impl ScriptedInput {
    pub fn new(pause_toggles: Vec<u64>, quit_after: Option<u64>) -> Self {
        Self { pause_toggles, quit_after, frame: 0 }
    }
}

impl InputAdapter for ScriptedInput {
    fn poll(&mut self) -> FrameInput {
        let frame = self.frame;
        self.frame += 1;
        FrameInput {
            toggle_pause: self.pause_toggles.contains(&frame),
            quit: self.quit_after.is_some_and(|n| frame >= n),
        }
    }
}

/// Renderer that keeps the latest positions and logs the free end every `log_every` frames
#[derive(Debug, Clone, Default)]
pub struct TraceRenderer {
    pub log_every: u64,
    pub frames_drawn: u64,
    pub last_positions: Vec<NVec2>,
}

impl TraceRenderer {
    pub fn new(log_every: u64) -> Self {
        Self { log_every, ..Default::default() }
    }

    /// Position of the last particle in the most recent frame
    pub fn tip(&self) -> Option<NVec2> {
        self.last_positions.last().copied()
    }
}

impl RenderAdapter for TraceRenderer {
    fn draw(&mut self, positions: &[NVec2]) {
        self.last_positions.clear();
        self.last_positions.extend_from_slice(positions);

        if self.log_every > 0 && self.frames_drawn % self.log_every == 0 {
            if let Some(tip) = self.tip() {
                debug!(frame = self.frames_drawn, tip_x = tip.x, tip_y = tip.y, "rope tip");
            }
        }
        self.frames_drawn += 1;
    }
}

/// Run `frames` frames without a window and log energy before and after
pub fn run_headless(scenario: &mut Scenario, frames: u64) -> FrameReport {
    let constants = scenario.simulation.constants().clone();
    let e0 = total_energy(scenario.simulation.state(), &constants);
    info!(frames, energy = e0, "headless run starting");

    let mut input = ScriptedInput::new(Vec::new(), Some(frames));
    let mut render = TraceRenderer::new(60);
    let report = run_frames(scenario, &mut input, &mut render, None);

    let state = scenario.simulation.state();
    info!(
        frames = report.frames,
        substeps = report.substeps,
        t = scenario.simulation.time(),
        energy = total_energy(state, &constants),
        kinetic = kinetic_energy(state),
        "headless run finished"
    );
    if let Some(tip) = render.tip() {
        info!(tip_x = tip.x, tip_y = tip.y, "final rope tip");
    }
    report
}
