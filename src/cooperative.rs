use scrypt::{Params, RoMix};

/// Mix every lane on the current task, in lane order, slicing the work into
/// chunks of `interrupt_step` iterations and yielding between chunks. Chunk
/// `k + 1` never starts before chunk `k` completes, so the result is the
/// same as running uninterrupted. A step of 0 means one chunk per lane.
pub async fn mix_lanes(b: &mut [u8], params: &Params, interrupt_step: usize) {
    let budget = if interrupt_step == 0 {
        usize::MAX
    } else {
        interrupt_step
    };
    let mut mix = RoMix::new(params.n(), params.r());
    for lane in b.chunks_mut(params.lane_len()) {
        mix.load(lane);
        while !mix.advance(budget) {
            tokio::task::yield_now().await;
        }
        mix.store(lane);
    }
}
