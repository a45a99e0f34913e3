use tokentally_core::list_estimators;

fn banner() -> String {
    format!(
        "tokentally {}\nEstimators: {}",
        env!("CARGO_PKG_VERSION"),
        list_estimators().join(", ")
    )
}

pub fn run() -> anyhow::Result<()> {
    println!("{}", banner());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lists_estimators() {
        let banner = banner();
        let heading = format!("tokentally {}", env!("CARGO_PKG_VERSION"));
        assert!(banner.starts_with(&heading));
        assert!(banner.contains("gpt-3.5-turbo, gpt-4, claude"));
        assert!(banner.ends_with("simple-word-count"));
    }
}
