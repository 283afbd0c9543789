use std::collections::HashMap;

use tracing_subscriber::EnvFilter;

use lruk::buffer::LruKReplacer;
use lruk::common::{AccessType, FrameId, ReplacerConfig};

const POOL_SIZE: usize = 4;

fn main() -> lruk::Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("lruk - LRU-K frame replacement");
    println!("==============================\n");

    let config = ReplacerConfig::default().with_num_frames(POOL_SIZE);
    let mut replacer = LruKReplacer::from_config(&config)?;
    println!(
        "Created LRU-{} replacer for a pool of {} frames\n",
        replacer.k(),
        replacer.num_frames()
    );

    // A hot set of pages (1, 2) mixed with a one-off scan (10..14).
    let workload = [1, 2, 1, 2, 10, 11, 1, 12, 2, 13, 14, 1];

    let mut page_table: HashMap<u32, FrameId> = HashMap::new();
    let mut free_frames: Vec<FrameId> = (0..POOL_SIZE as u32).rev().map(FrameId::new).collect();
    let (mut hits, mut misses) = (0, 0);

    for page in workload {
        let access_type = if page >= 10 {
            AccessType::Scan
        } else {
            AccessType::Lookup
        };

        let frame_id = match page_table.get(&page).copied() {
            Some(frame_id) => {
                hits += 1;
                frame_id
            }
            None => {
                misses += 1;
                let frame_id = match free_frames.pop() {
                    Some(frame_id) => frame_id,
                    None => {
                        let Some(victim) = replacer.evict() else {
                            println!("page {:>2}: pool exhausted, request dropped", page);
                            continue;
                        };
                        page_table.retain(|_, frame| *frame != victim);
                        println!("page {:>2}: evicted {}", page, victim);
                        victim
                    }
                };
                page_table.insert(page, frame_id);
                frame_id
            }
        };

        // Pin for the duration of the access, then unpin.
        replacer.record_access(frame_id, access_type);
        replacer.set_evictable(frame_id, false);
        replacer.set_evictable(frame_id, true);
    }

    println!("\nHits: {}, misses: {}", hits, misses);

    let mut resident: Vec<_> = page_table.iter().collect();
    resident.sort();
    for (page, frame_id) in resident {
        println!(
            "  - page {:>2} in {} (k-distance {:?})",
            page,
            frame_id,
            replacer.k_distance(*frame_id)
        );
    }

    // Deleting a page goes through remove rather than evict.
    if let Some(frame_id) = page_table.remove(&1) {
        replacer.remove(frame_id)?;
        println!("\nDeleted page 1, {} frames still evictable", replacer.size());
    }

    Ok(())
}
