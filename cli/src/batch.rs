use std::{sync::Arc, thread, time::Instant};

use engine::{SeededRandom, SessionConfig, SessionResult, Strategy, autoplay_many};
use models::Content;

use crate::OPTIMAL_THREAD_COUNT;

/// Splits `runs` across one worker per CPU and collects every result. With a
/// seed, worker `i` plays from `seed + i` so the batch is reproducible.
pub fn run(
    content: Arc<Content>,
    config: SessionConfig,
    strategy: Strategy,
    runs: usize,
) -> anyhow::Result<Vec<SessionResult>> {
    let (res_tx, res_rx) = std::sync::mpsc::channel();
    let base_chunk = runs / *OPTIMAL_THREAD_COUNT;
    let remainder = runs % *OPTIMAL_THREAD_COUNT;
    let t_start = Instant::now();

    let mut workers = Vec::with_capacity(*OPTIMAL_THREAD_COUNT);
    for i in 0..*OPTIMAL_THREAD_COUNT {
        let chunk = base_chunk + if i < remainder { 1 } else { 0 };
        if chunk == 0 {
            continue;
        }
        let worker_content = Arc::clone(&content);
        let worker_config = config.clone();
        let thread_res_tx = res_tx.clone();
        workers.push(thread::spawn(move || {
            let rng = match worker_config.seed {
                Some(seed) => SeededRandom::from_seed(seed.wrapping_add(i as u64)),
                None => SeededRandom::from_entropy(),
            };
            let results = autoplay_many(worker_content, &worker_config, strategy, chunk, rng)?;
            for result in results {
                if let Err(error) = thread_res_tx.send(result) {
                    tracing::error!(?error, "collector hung up");
                    break;
                }
            }
            anyhow::Ok(())
        }));
    }
    drop(res_tx);

    for worker in workers {
        match worker.join() {
            Ok(outcome) => outcome?,
            Err(..) => anyhow::bail!("autoplay worker panicked"),
        }
    }
    let results: Vec<SessionResult> = res_rx.try_iter().collect();
    tracing::info!(
        runs = results.len(),
        threads = *OPTIMAL_THREAD_COUNT,
        elapsed = ?(Instant::now() - t_start),
        "autoplay finished"
    );
    Ok(results)
}
