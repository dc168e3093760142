use crate::domain::RigidBody;
use crate::systems::integrator;
use crate::systems::narrowphase::{self, Manifold};
use crate::systems::resolver;

use super::{PerfTimer, WorldCore, STATE_STRIDE};

/// One fixed step: integrate, collide, resolve, correct, publish state.
///
/// The pipeline order matters: velocities integrate before collision so
/// contacts see post-gravity velocities (semi-implicit Euler), and
/// positional correction runs after impulses so it works on the residual
/// overlap only.
pub(super) fn step(world: &mut WorldCore) {
    let dt = world.config.fixed_dt;
    // A zero step must be a perfect no-op, including the frame counter.
    if dt == 0.0 {
        return;
    }

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    if perf_on {
        let t0 = PerfTimer::start();
        integrate_bodies(world, dt);
        world.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        integrate_bodies(world, dt);
    }

    collide(world, perf_on);

    if perf_on {
        let t0 = PerfTimer::start();
        resolve_contacts(world);
        world.perf_stats.resolve_ms = t0.elapsed_ms();
        let t1 = PerfTimer::start();
        correct_positions(world);
        world.perf_stats.correction_ms = t1.elapsed_ms();
    } else {
        resolve_contacts(world);
        correct_positions(world);
    }

    for body in world.bodies.iter_mut() {
        body.clear_forces();
    }
    refresh_state(world);
    world.frame += 1;

    if let Some(start) = step_start {
        world.perf_stats.step_ms = start.elapsed_ms();
    }
}

fn integrate_bodies(world: &mut WorldCore, dt: f32) {
    let gravity = world.config.gravity;
    for body in world.bodies.iter_mut() {
        integrator::integrate(body, gravity, dt);
    }
}

/// Broad phase then narrow phase, filling the manifold scratch buffer.
fn collide(world: &mut WorldCore, perf_on: bool) {
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    let pairs = world
        .broadphase
        .collect_pairs(&world.bodies, world.config.cell_size);
    if let Some(t0) = t0 {
        world.perf_stats.broadphase_ms = t0.elapsed_ms();
        world.perf_stats.candidate_pairs = pairs.len() as u32;
    }

    let t1 = if perf_on { Some(PerfTimer::start()) } else { None };
    detect_manifolds(&world.bodies, pairs, &mut world.manifolds);
    if let Some(t1) = t1 {
        world.perf_stats.narrowphase_ms = t1.elapsed_ms();
        world.perf_stats.manifold_count = world.manifolds.len() as u32;
        world.perf_stats.occupied_cells = world.broadphase.occupied_cells() as u32;
    }
}

/// Narrow-phase tests over the candidate pairs. The parallel path keeps the
/// sequential pair order, so both paths produce identical manifold lists
/// and the simulation stays deterministic either way.
fn detect_manifolds(bodies: &[RigidBody], pairs: &[(usize, usize)], out: &mut Vec<Manifold>) {
    out.clear();
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        out.par_extend(
            pairs
                .par_iter()
                .filter_map(|&(a, b)| narrowphase::detect(bodies, a, b)),
        );
    }
    #[cfg(not(feature = "parallel"))]
    out.extend(
        pairs
            .iter()
            .filter_map(|&(a, b)| narrowphase::detect(bodies, a, b)),
    );
}

fn resolve_contacts(world: &mut WorldCore) {
    for manifold in &world.manifolds {
        resolver::resolve(&mut world.bodies, manifold);
    }
}

fn correct_positions(world: &mut WorldCore) {
    let percent = world.config.correction_percent;
    let slop = world.config.correction_slop;
    for manifold in &world.manifolds {
        resolver::positional_correction(&mut world.bodies, manifold, percent, slop);
    }
}

/// Repack all body state into the flat readback buffer.
pub(super) fn refresh_state(world: &mut WorldCore) {
    world.state.clear();
    world.state.reserve(world.bodies.len() * STATE_STRIDE);
    for body in &world.bodies {
        world.state.extend_from_slice(&[
            body.position.x,
            body.position.y,
            body.angle,
            body.velocity.x,
            body.velocity.y,
            body.angular_velocity,
        ]);
    }
}
