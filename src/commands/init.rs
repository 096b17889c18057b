use crate::config::DEFAULT_CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Engagemap Configuration

# Records shorter than this many seconds classify as shorts
short_threshold_seconds = 60

# How many top-ranked videos feed topic suggestion
top_n = 10

# Engagement scoring weights; must sum to 1.0
[weights]
like = 0.4
comment = 0.3
share = 0.2
watch_time = 0.1
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", DEFAULT_CONFIG_FILE);

    Ok(())
}
