use gravsim::{build_scenario, is_bound, total_energy, NVec3, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let mut sim = build_scenario(scenario_cfg)?;
    let g = sim.parameters.g;

    let e0 = total_energy(&sim.system, g);
    println!(
        "The total system energy is {:.3e}: {}",
        e0,
        if is_bound(&sim.system, g) { "bound" } else { "unbound" }
    );

    // Accumulate the position time series here; the core exposes
    // snapshots but keeps no history itself.
    let mut history: BTreeMap<u32, Vec<NVec3>> = BTreeMap::new();
    sim.run(|_step, system| {
        for (id, x) in system.positions() {
            history.entry(id).or_default().push(x);
        }
    })?;

    let e1 = total_energy(&sim.system, g);
    println!(
        "Final energy {:.3e} after {} steps, {} bodies remain:",
        e1,
        sim.parameters.timesteps,
        sim.system.len()
    );
    for p in sim.system.iter() {
        println!(
            "  #{:2}  m = {:.4e}  x = [{:+.4e} {:+.4e} {:+.4e}]  samples = {}",
            p.id(),
            p.mass(),
            p.position().x,
            p.position().y,
            p.position().z,
            history.get(&p.id()).map_or(0, Vec::len)
        );
    }

    Ok(())
}
