//! Skills galaxy: one sprite per skill on a slowly rotating sphere, plus the
//! landing particle field which shares the same spin loop.

use std::f64::consts::PI;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::time::{interval, MissedTickBehavior};

use crate::effects::{offer_frame, Patch, PatchSender, Viewport, FRAME};
use crate::models::Skill;

const SPHERE_RADIUS: f64 = 100.0;
const CAMERA_Z: f64 = 200.0;
const FOV_DEGREES: f64 = 75.0;
const SPRITE_SCALE: f64 = 4.0;
const MIN_PICK_RADIUS_PX: f64 = 6.0;
/// Radians per frame.
pub const SPIN_SPEED: f64 = 0.0005;
/// Share of the viewport height taken by the skills canvas.
const CANVAS_HEIGHT_RATIO: f64 = 0.6;
const HIGHLIGHT: u32 = 0xffffff;

pub fn category_color(category: &str) -> u32 {
    match category {
        "Data Science" => 0x00ffff,
        "Engineering" => 0x00ff00,
        "Leadership" => 0xffff00,
        _ => 0xffffff,
    }
}

/// Current rotation angle shared between a spin loop and its readers.
#[derive(Debug, Clone, Default)]
pub struct RotationClock(Arc<AtomicU64>);

impl RotationClock {
    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, angle: f64) {
        self.0.store(angle.to_bits(), Ordering::Relaxed);
    }
}

/// One rendered skill sprite, matched by `{name, category}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillNode {
    pub name: String,
    pub category: String,
    pub position: [f64; 3],
    pub opacity: f64,
    pub color: u32,
    pub visible: bool,
}

#[derive(Debug)]
pub struct SkillGalaxy {
    nodes: Vec<SkillNode>,
    clock: RotationClock,
    viewport: Viewport,
    hovered: Option<usize>,
}

/// Evenly spread point `i` of `n` on a sphere (golden-angle spiral).
fn sphere_point(i: usize, n: usize) -> [f64; 3] {
    let golden_angle = PI * (3.0 - 5f64.sqrt());
    let y = 1.0 - 2.0 * (i as f64 + 0.5) / n as f64;
    let r = (1.0 - y * y).sqrt();
    let theta = golden_angle * i as f64;
    [
        theta.cos() * r * SPHERE_RADIUS,
        y * SPHERE_RADIUS,
        theta.sin() * r * SPHERE_RADIUS,
    ]
}

impl SkillGalaxy {
    pub fn build(skills: &[Skill], viewport: Viewport) -> Self {
        let n = skills.len();
        let nodes = skills
            .iter()
            .enumerate()
            .map(|(i, skill)| SkillNode {
                name: skill.name.clone(),
                category: skill.category.clone(),
                position: sphere_point(i, n),
                opacity: 0.5 + skill.proficiency.clamp(0.0, 1.0) * 0.5,
                color: category_color(&skill.category),
                visible: true,
            })
            .collect();
        Self {
            nodes,
            clock: RotationClock::default(),
            viewport,
            hovered: None,
        }
    }

    pub fn nodes(&self) -> &[SkillNode] {
        &self.nodes
    }

    pub fn clock(&self) -> RotationClock {
        self.clock.clone()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn visible_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.visible).count()
    }

    /// Sets each node's visibility flag from `predicate`. A hovered node that
    /// becomes hidden loses its hover. Returns the number of visible nodes.
    pub fn set_visibility(&mut self, predicate: impl Fn(&SkillNode) -> bool) -> usize {
        for node in self.nodes.iter_mut() {
            node.visible = predicate(node);
        }
        if let Some(i) = self.hovered {
            if !self.nodes[i].visible {
                self.hovered = None;
            }
        }
        self.visible_count()
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&SkillNode> {
        self.hovered.map(|i| &self.nodes[i])
    }

    /// Color a node is drawn with right now.
    pub fn display_color(&self, index: usize) -> u32 {
        if self.hovered == Some(index) {
            HIGHLIGHT
        } else {
            self.nodes[index].color
        }
    }

    fn canvas_size(&self) -> (f64, f64) {
        (
            self.viewport.width as f64,
            self.viewport.height as f64 * CANVAS_HEIGHT_RATIO,
        )
    }

    /// Canvas-space position, pick radius, and depth of `node` at the current rotation.
    fn project(&self, node: &SkillNode) -> (f64, f64, f64, f64) {
        let angle = self.clock.get();
        let [x, y, z] = node.position;
        let xr = x * angle.cos() + z * angle.sin();
        let zr = -x * angle.sin() + z * angle.cos();

        let (w, h) = self.canvas_size();
        let focal = (h / 2.0) / (FOV_DEGREES.to_radians() / 2.0).tan();
        let scale = focal / (CAMERA_Z - zr);
        let radius = (SPRITE_SCALE / 2.0 * scale).max(MIN_PICK_RADIUS_PX);
        (w / 2.0 + xr * scale, h / 2.0 - y * scale, radius, zr)
    }

    /// Finds the visible node under canvas point (x, y), nearest the camera
    /// first, and makes it the hovered node.
    pub fn pick(&mut self, x: f64, y: f64) -> Option<&SkillNode> {
        let hit = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.visible)
            .filter_map(|(i, n)| {
                let (sx, sy, radius, depth) = self.project(n);
                let dist = ((sx - x).powi(2) + (sy - y).powi(2)).sqrt();
                (dist <= radius).then_some((i, depth))
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i);
        self.hovered = hit;
        self.hovered()
    }

    /// Canvas-space centre of the node at `index`, for tests and tooling.
    pub fn screen_position(&self, index: usize) -> (f64, f64) {
        let (sx, sy, _, _) = self.project(&self.nodes[index]);
        (sx, sy)
    }
}

/// Rotates a scene by `SPIN_SPEED` per frame, publishing the angle to `clock`
/// and as a style on `target`, until cancelled.
pub async fn run_spin(target: String, clock: RotationClock, tx: PatchSender) {
    let mut ticker = interval(FRAME);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        let angle = (clock.get() + SPIN_SPEED) % (2.0 * PI);
        clock.set(angle);
        let patch = Patch::Style {
            target: target.clone(),
            property: "--rotation",
            value: format!("{angle:.4}rad"),
        };
        if !offer_frame(&tx, patch) {
            return;
        }
    }
}
