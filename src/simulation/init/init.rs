use crate::domain::WorldConfig;
use crate::systems::BroadPhase;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(config: WorldConfig) -> WorldCore {
    WorldCore {
        config,
        bodies: Vec::new(),
        broadphase: BroadPhase::new(),
        manifolds: Vec::new(),
        state: Vec::new(),
        accumulator: 0.0,
        // 0 is reserved so hosts can use it as "no body".
        next_id: 1,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
