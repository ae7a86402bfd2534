use pipegraph::{get_handles, Endpoints, Point, Router};
use std::time::Instant;

// Simulates a drag: the target node sweeps across and above the source while
// the edge keeps a stored detour.
fn drag_frame(k: usize) -> (Endpoints, [Point; 4]) {
    let tx = (k % 400) as f64 - 200.0;
    let ty = ((k / 400) % 300) as f64 - 100.0;
    let stored = [
        Point::new(0.0, 40.0),
        Point::new(90.0, 40.0),
        Point::new(90.0, ty - 40.0),
        Point::new(tx, ty - 40.0),
    ];
    (Endpoints::new(0.0, 0.0, tx, ty), stored)
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut frames = 100_000usize;
    let mut assert_us: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--frames=") { if let Ok(v)=val.parse() { frames=v; } }
        else if let Some(val)=a.strip_prefix("--assert-us=") { if let Ok(v)=val.parse() { assert_us=Some(v); } }
    }

    let router = Router::default();
    let mut times_us: Vec<f64> = Vec::with_capacity(frames);
    let mut five = 0usize;
    let start_all = Instant::now();
    for k in 0..frames {
        let (ends, stored) = drag_frame(k);
        let t0 = Instant::now();
        let route = router.route(ends, Some(&stored[..]));
        let handles = get_handles(&route.points);
        times_us.push(t0.elapsed().as_secs_f64() * 1e6);
        if handles.len() == 3 { five += 1; }
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_us.sort_by(|a, b| a.total_cmp(b));
    let med = percentile(&times_us, 0.5);
    let p99 = percentile(&times_us, 0.99);
    println!("frames={} five_segment={} total_ms={:.3} median_us={:.3} p99_us={:.3}", frames, five, dur_all, med, p99);
    if let Some(th) = assert_us { if med > th { eprintln!("FAIL: median {:.3} us > threshold {:.3} us", med, th); std::process::exit(1); } }
}
