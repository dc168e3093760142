use super::{step, WorldCore};

/// Fixed-timestep driver: bank elapsed wall-clock time, run whole steps.
///
/// The simulation only ever advances in `fixed_dt` increments, so results do
/// not depend on the host's frame rate. `max_steps_per_tick` bounds catch-up
/// work after a stall; past the cap the backlog is dropped rather than
/// spiraling (each slow tick would otherwise owe more steps than the last).
pub(super) fn tick(world: &mut WorldCore, elapsed_s: f32) -> u32 {
    if !elapsed_s.is_finite() || elapsed_s <= 0.0 {
        return 0;
    }

    world.accumulator += elapsed_s;
    let dt = world.config.fixed_dt;
    let max_steps = world.config.max_steps_per_tick;

    let mut steps = 0u32;
    while world.accumulator >= dt && steps < max_steps {
        step::step(world);
        world.accumulator -= dt;
        steps += 1;
    }

    if world.accumulator >= dt {
        // Hit the cap with time still owed: drop the backlog, keep the
        // sub-step remainder.
        world.accumulator %= dt;
    }

    steps
}
