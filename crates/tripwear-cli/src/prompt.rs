use tripwear_core::{build_prompt, TripProfile};

pub(crate) fn run_prompt(profile: TripProfile) -> anyhow::Result<()> {
    profile.validate()?;
    tracing::debug!(
        city = %profile.city,
        days = profile.duration_days(),
        "building stylist prompt"
    );
    println!("{}", build_prompt(&profile));
    Ok(())
}
