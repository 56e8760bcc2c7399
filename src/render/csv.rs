use std::error::Error;
use std::fs::{create_dir_all, write};
use std::path::Path;

use crate::sim::trajectory::Trajectory;

/// Dump the sampled series as `t,order,energy,messiness` rows.
pub fn write_csv(path: &Path, traj: &Trajectory) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            create_dir_all(dir)?;
        }
    }

    let mut csv = String::from("t,order,energy,messiness\n");
    for (i, (o, e, m)) in traj.points().enumerate() {
        let t = traj.time_at(i);
        csv.push_str(&format!("{t:.4},{o:.6},{e:.6},{m:.6}\n"));
    }
    write(path, csv)?;

    println!("Saved trajectory CSV to {}", path.display());
    Ok(())
}
