use anyhow::Result;

use mantle_diffusivity::catalog::KunlunProfiles;

/// Print the Kunlun diopside profile fits and their per-axis averages
pub fn run() -> Result<()> {
    let profiles = KunlunProfiles::published();

    println!("Kunlun diopside, bulk H (log10 D, m²/s)");
    println!("=======================================");
    println!("Whole block  x: {:.2}", profiles.dx_whole_block);
    println!("Whole block  y: {:.2}", profiles.dy_whole_block);
    println!("Whole block  z: {:.2}", profiles.dz_whole_block);
    println!("Slice FTIR   y: {:.2}", profiles.dy_slice_ftir);
    println!("Slice FTIR   z: {:.2}", profiles.dz_slice_ftir);
    println!("Slice SIMS   y: {:.2}", profiles.dy_slice_sims);
    println!("Slice SIMS   z: {:.2}", profiles.dz_slice_sims);
    println!();
    println!("Average      y: {:.2}", profiles.dy_average());
    println!("Average      z: {:.2}", profiles.dz_average());

    Ok(())
}
