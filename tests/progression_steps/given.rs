//! Given steps for skill tree progression BDD scenarios.

use super::world::{ProgressionWorld, chained_category};
use eyre::WrapErr;
use fundlaunch::progression::catalog::{
    Catalog,
    fund::{FundTrack, fund_launch_catalog},
};
use rstest_bdd_macros::given;

#[given(r#"a category "{key}" with {count:usize} chained tasks starting at id {base:u32}"#)]
fn fixed_category(
    world: &mut ProgressionWorld,
    key: String,
    count: usize,
    base: u32,
) -> Result<(), eyre::Report> {
    world.fixed.push(chained_category(&key, count, base)?);
    Ok(())
}

#[given(r#"a gating category "{key}" with {count:usize} chained tasks starting at id {base:u32}"#)]
fn gating_category(
    world: &mut ProgressionWorld,
    key: String,
    count: usize,
    base: u32,
) -> Result<(), eyre::Report> {
    world.gate = Some(chained_category(&key, count, base)?);
    Ok(())
}

#[given("the progression store is opened")]
fn store_opened(world: &mut ProgressionWorld) -> Result<(), eyre::Report> {
    let catalog = Catalog::new(world.gate.clone(), world.fixed.clone(), Vec::new())
        .wrap_err("build scenario catalog")?;
    world.open(catalog);
    Ok(())
}

#[given(r#"the fund launch store is opened for the "{track}" track"#)]
fn fund_store_opened(world: &mut ProgressionWorld, track: String) -> Result<(), eyre::Report> {
    let fund = FundTrack::try_from(track.as_str())?;
    world.open(fund_launch_catalog().wrap_err("build fund launch catalog")?);
    let key = fund.key()?;
    world.store_mut()?.initialize(Some(&key));
    Ok(())
}
