use bevy::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::visualization::adapters::{advance_frame, apply_input, FrameInput, InputAdapter, RenderAdapter};

#[derive(Component)]
pub struct ParticleIndex(pub usize);

const SEGMENT_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);
const PARTICLE_COLOR: Color = Color::srgb(0.2, 0.5, 1.0);

/// Map simulation coordinates (unit square, origin bottom-left) to a centred window of edge `size`
pub fn to_screen(p: NVec2, size: f32) -> Vec2 {
    Vec2::new((p.x as f32 - 0.5) * size, (p.y as f32 - 0.5) * size)
}

/// Space toggles pause, Escape quits
pub struct KeyboardControls<'a> {
    pub keys: &'a ButtonInput<KeyCode>,
}

impl InputAdapter for KeyboardControls<'_> {
    fn poll(&mut self) -> FrameInput {
        FrameInput {
            toggle_pause: self.keys.just_pressed(KeyCode::Space),
            quit: self.keys.just_pressed(KeyCode::Escape),
        }
    }
}

/// Segments as a gizmo line strip, particles as circle meshes moved into place
#[derive(SystemParam)]
pub struct RopePainter<'w, 's> {
    gizmos: Gizmos<'w, 's>,
    points: Query<'w, 's, (&'static ParticleIndex, &'static mut Transform)>,
    scenario: Res<'w, Scenario>,
}

impl RenderAdapter for RopePainter<'_, '_> {
    fn draw(&mut self, positions: &[NVec2]) {
        let size = self.scenario.window.size;
        self.gizmos
            .linestrip_2d(positions.iter().map(|p| to_screen(*p, size)), SEGMENT_COLOR);

        for (ParticleIndex(i), mut transform) in self.points.iter_mut() {
            if let Some(p) = positions.get(*i) {
                let s = to_screen(*p, size);
                transform.translation.x = s.x;
                transform.translation.y = s.y;
            }
        }
    }
}

pub fn run_2d(scenario: Scenario) {
    let window = Window {
        title: scenario.window.title.clone(),
        resolution: WindowResolution::new(scenario.window.size, scenario.window.size),
        ..default()
    };

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_systems(Startup, setup_rope_system)
        .add_systems(
            Update,
            (input_system, physics_step_system, draw_rope_system).chain(),
        )
        .run();
}

fn setup_rope_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    info!("starting Bevy 2D viewer with {} particles", scenario.simulation.state().len());

    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let (gizmo_config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    gizmo_config.line_width = scenario.window.line_width;

    let size = scenario.window.size;
    let mesh = Mesh2dHandle(meshes.add(Circle::new(scenario.window.point_radius)));
    let material = materials.add(ColorMaterial::from(PARTICLE_COLOR));

    for (i, p) in scenario.simulation.positions().enumerate() {
        let s = to_screen(p, size);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: mesh.clone(),
                material: material.clone(),
                // above the gizmo lines
                transform: Transform::from_xyz(s.x, s.y, 1.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut exit: EventWriter<AppExit>,
) {
    let input = KeyboardControls { keys: &keys }.poll();
    if !apply_input(&mut scenario, input) {
        exit.send(AppExit::Success);
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    advance_frame(&mut scenario);
}

fn draw_rope_system(mut painter: RopePainter) {
    let positions: Vec<NVec2> = painter.scenario.simulation.positions().collect();
    painter.draw(&positions);
}
