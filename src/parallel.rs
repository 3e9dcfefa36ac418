use scrypt::{ro_mix, Params};
use tokio::task::JoinSet;

/// Dispatch each lane to its own blocking worker together with `(n, r)` and
/// join all results. Each worker owns its lane's bytes and its own scratch
/// table for the duration of the computation; the count of outstanding
/// lanes is fixed here, at dispatch time. Joins arrive in any order, but
/// every result is written back at the lane's original index. A worker that
/// dies takes the whole derivation down with it.
pub async fn mix_lanes(b: &mut [u8], params: &Params) {
    let lane_len = params.lane_len();
    let (n, r) = (params.n(), params.r());
    let mut workers = JoinSet::new();
    for (index, lane) in b.chunks(lane_len).enumerate() {
        let mut lane = lane.to_vec();
        workers.spawn_blocking(move || {
            ro_mix(&mut lane, n, r);
            (index, lane)
        });
    }
    while let Some(joined) = workers.join_next().await {
        let (index, lane) = joined.expect("mixing worker terminated abnormally");
        b[index * lane_len..(index + 1) * lane_len].copy_from_slice(&lane);
    }
}
