use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    world.config.gravity.x = x;
    world.config.gravity.y = y;
}

pub(super) fn set_fixed_dt(world: &mut WorldCore, dt: f32) -> Result<(), String> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(format!("fixed_dt must be > 0, got {}", dt));
    }
    world.config.fixed_dt = dt;
    Ok(())
}

pub(super) fn set_correction(world: &mut WorldCore, percent: f32, slop: f32) -> Result<(), String> {
    if !(0.0..=1.0).contains(&percent) {
        return Err(format!("correction_percent must be in [0, 1], got {}", percent));
    }
    if !slop.is_finite() || slop < 0.0 {
        return Err(format!("correction_slop must be >= 0, got {}", slop));
    }
    world.config.correction_percent = percent;
    world.config.correction_slop = slop;
    Ok(())
}

pub(super) fn set_cell_size(world: &mut WorldCore, cell_size: f32) -> Result<(), String> {
    if !cell_size.is_finite() || cell_size < 0.0 {
        return Err(format!("cell_size must be >= 0, got {}", cell_size));
    }
    world.config.cell_size = cell_size;
    Ok(())
}
