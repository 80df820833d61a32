/// Simple example demonstrating how to use the pattern_extract library

use anyhow::Result;
use pattern_extract::extract;

fn main() -> Result<()> {
    // Create a sample file to extract from
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("servers.conf"),
        r#"host=web01 port=8080
host=web02 port=8081
host=db01 port=5432
"#,
    )?;

    let directory = dir.path().to_string_lossy().to_string();

    println!("Extracting host:port pairs from {}", directory);

    // Each named group becomes a replacement token in the template
    let lines = extract(
        &directory,
        "*.conf",
        r"host=(?<host>\w+) port=(?<port>\d+)",
        "{host} listens on {port}",
        false,
    )?;

    for line in lines {
        println!("  - {}", line);
    }

    Ok(())
}
