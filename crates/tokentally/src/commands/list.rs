use tokentally_core::{Estimator, Strategy};

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&listing())?);
        return Ok(());
    }

    println!("Estimators");
    println!("==========");
    for estimator in Estimator::ALL {
        let marker = if estimator == Estimator::default() {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<20} {}{}",
            estimator.name(),
            estimator.display_name(),
            marker
        );
        println!("  {:<20} {}", "", estimator.description());
    }
    Ok(())
}

fn listing() -> serde_json::Value {
    let entries: Vec<serde_json::Value> = Estimator::ALL
        .iter()
        .map(|estimator| {
            let mut entry = serde_json::json!({
                "name": estimator.name(),
                "displayName": estimator.display_name(),
                "description": estimator.description(),
            });
            if let Strategy::Multiplier(spec) = estimator.strategy() {
                entry["multipliers"] = serde_json::json!({
                    "latinWord": spec.latin_word.as_f64(),
                    "cjkChar": spec.cjk_char.as_f64(),
                    "digitRun": spec.digit_run.as_f64(),
                    "symbol": spec.symbol.as_f64(),
                });
            }
            entry
        })
        .collect();
    serde_json::Value::Array(entries)
}
