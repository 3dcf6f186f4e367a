// Demonstration: roll out random RC car episodes and draw the final pose.
//
// Build/run from this repo root:
//   RUST_LOG=rcdomain=debug cargo run --example rc_car_demo -- --episodes 5 --cap 2000 --seed 42

use std::env;

use rcdomain::domain::{run_episode, RandomActions};
use rcdomain::{Domain, RCCar, SceneRenderer, TextRenderer};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let cap: Option<u32> = arg_value(&args, "--cap").and_then(|s| s.parse().ok());
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let domain = RCCar::default();
    let mut renderer = TextRenderer::new(domain.config(), 60, 40);
    let mut selector = RandomActions::new(seed);

    let mut reached = 0usize;
    for episode in 0..episodes {
        let mut last_action = 0usize;
        let summary = match run_episode(
            &domain,
            |_, actions| {
                last_action = selector.select(actions);
                last_action
            },
            cap,
        ) {
            Ok(summary) => summary,
            Err(e) => {
                eprintln!("Episode {} failed: {}", episode, e);
                std::process::exit(1);
            }
        };

        if summary.terminal {
            reached += 1;
        }
        println!("{}", summary);
        renderer.show_domain(&summary.final_state, last_action);
    }

    println!("{}", renderer.frame());
    println!(
        "Reached goal in {}/{} episodes (gamma = {})",
        reached,
        episodes,
        domain.gamma()
    );
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
